//! Application layer: business logic built on repository traits.

pub mod services;
