//! Data Transfer Objects for request/response serialization.

pub mod banner;
pub mod health;
pub mod pagination;
pub mod placement;
pub mod stats;
