//! Domain types for the route finder.
//!
//! Station keys are normalized at construction time, so code that receives
//! a `StationKey` or `Route` can compare them directly.

mod route;
mod station;

pub use route::Route;
pub use station::StationKey;
