pub mod hourly;
pub mod snapshot;
