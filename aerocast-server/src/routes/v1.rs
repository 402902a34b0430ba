use axum::{
    Router,
    routing::{get, post, put},
};

use crate::{
    AppState,
    handlers::{overlay, teams},
};

/// Create all v1 API routes
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .merge(create_overlay_routes())
        .merge(create_team_routes())
}

fn create_overlay_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/overlay/state",
            get(overlay::get_overlay_state_handler).put(overlay::replace_overlay_state_handler),
        )
        .route("/overlay/show", post(overlay::show_overlay_handler))
        .route("/overlay/hide", post(overlay::hide_overlay_handler))
        .route("/overlay/toggle", post(overlay::toggle_overlay_handler))
}

fn create_team_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/teams",
            get(teams::list_teams_handler).post(teams::create_team_handler),
        )
        .route(
            "/teams/{id}",
            get(teams::get_team_handler)
                .put(teams::replace_team_handler)
                .delete(teams::delete_team_handler),
        )
        .route("/teams/{id}/results", post(teams::append_result_handler))
        .route("/teams/{id}/battery", put(teams::set_current_battery_handler))
}
