use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/state", get(handlers::get_state))
        .route(
            "/api/expenses",
            post(handlers::submit_expense).delete(handlers::reset),
        )
        .route("/api/expenses/:id", delete(handlers::remove_expense))
        .route("/api/expenses/:id/edit", post(handlers::begin_edit))
        .route("/api/editing", delete(handlers::cancel_edit))
        .route("/api/filters/date", put(handlers::set_date_filter))
        .route("/api/filters/category", put(handlers::set_category_filter))
        .route("/api/filters", delete(handlers::reset_filters))
        .with_state(state)
}
