pub mod inquiry;
pub mod listing;
pub mod prelude;
pub mod shared;
pub mod source;

pub use source::{Config, ListingConfig};
