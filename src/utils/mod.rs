//! Small shared helpers.

pub mod device;
pub mod slug;
