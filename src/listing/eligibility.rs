use crate::listing::Trip;

/// Active trips, soonest first. Trips starting the same day keep their
/// order from the source list.
pub fn eligible(trips: &[Trip]) -> Vec<&Trip> {
    let mut eligible: Vec<&Trip> = trips.iter().filter(|trip| trip.is_active()).collect();
    // sort_by_key is stable
    eligible.sort_by_key(|trip| trip.start_date);
    eligible
}
