//! Web layer for the route finder.
//!
//! Provides HTTP endpoints for route search and station lookup.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
