//! Management API route configuration.

use crate::api::handlers::{
    banner_stats_handler, create_banner_handler, create_placement_handler, delete_banner_handler,
    delete_placement_handler, get_banner_handler, get_placement_handler, list_banners_handler,
    list_placements_handler, placement_banners_handler, placement_stats_handler,
    set_placement_banners_handler, update_banner_handler, update_placement_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, put},
};

/// All management API routes.
///
/// # Endpoints
///
/// - `GET    /banners`                    - List banners (paginated, filterable)
/// - `POST   /banners`                    - Create a banner
/// - `GET    /banners/{id}`               - Retrieve a banner
/// - `PATCH  /banners/{id}`               - Partially update a banner
/// - `DELETE /banners/{id}`               - Delete a banner
/// - `GET    /placements`                 - List placements (paginated)
/// - `POST   /placements`                 - Create a placement
/// - `GET    /placements/{id}`            - Retrieve a placement
/// - `PATCH  /placements/{id}`            - Partially update a placement
/// - `DELETE /placements/{id}`            - Delete a placement
/// - `GET    /placements/{id}/banners`    - List assigned banners with overrides
/// - `PUT    /placements/{id}/banners`    - Replace the assignment list
/// - `GET    /statistics/banners/{id}`    - Banner totals and daily breakdown
/// - `GET    /statistics/placements/{id}` - Placement totals and daily breakdown
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/banners",
            get(list_banners_handler).post(create_banner_handler),
        )
        .route(
            "/banners/{id}",
            get(get_banner_handler)
                .patch(update_banner_handler)
                .delete(delete_banner_handler),
        )
        .route(
            "/placements",
            get(list_placements_handler).post(create_placement_handler),
        )
        .route(
            "/placements/{id}",
            get(get_placement_handler)
                .patch(update_placement_handler)
                .delete(delete_placement_handler),
        )
        .route(
            "/placements/{id}/banners",
            put(set_placement_banners_handler).get(placement_banners_handler),
        )
        .route("/statistics/banners/{id}", get(banner_stats_handler))
        .route("/statistics/placements/{id}", get(placement_stats_handler))
}
