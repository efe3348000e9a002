mod inquiry;
mod listing;
mod trip;

pub use inquiry::*;
pub use listing::*;
pub use trip::*;
