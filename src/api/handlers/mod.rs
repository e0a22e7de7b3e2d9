//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod banners;
pub mod click;
pub mod health;
pub mod placements;
pub mod serve;
pub mod stats;

pub use banners::{
    create_banner_handler, delete_banner_handler, get_banner_handler, list_banners_handler,
    update_banner_handler,
};
pub use click::click_handler;
pub use health::health_handler;
pub use placements::{
    create_placement_handler, delete_placement_handler, get_placement_handler,
    list_placements_handler, placement_banners_handler, set_placement_banners_handler,
    update_placement_handler,
};
pub use serve::serve_handler;
pub use stats::{banner_stats_handler, placement_stats_handler};
