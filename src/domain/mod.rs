//! Domain layer: entities, repository traits and the stat event pipeline.

pub mod entities;
pub mod repositories;
pub mod stat_event;
pub mod stat_worker;
