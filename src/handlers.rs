use crate::errors::AppError;
use crate::models::{CategoryRequest, DateRange, DateRangeRequest, Expense, ExpenseDraft};
use crate::reducer::{
    add_expense, apply_category_filter, apply_date_range_filter, clear_filters, delete_expense,
    reset_expenses, start_editing, stop_editing, update_expense,
};
use crate::state::AppState;
use crate::stats::parse_date;
use crate::ui::render_index;
use crate::util::generate_id;
use crate::validation::validate;
use crate::view::TrackerView;
use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use tracing::{info, warn};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(&state.view().await))
}

pub async fn get_state(State(state): State<AppState>) -> Json<TrackerView> {
    Json(state.view().await)
}

/// Adds a new expense, or rewrites the one being edited. Either way the form
/// leaves editing mode.
pub async fn submit_expense(
    State(state): State<AppState>,
    Json(draft): Json<ExpenseDraft>,
) -> Result<Json<TrackerView>, AppError> {
    let patch = validate(&draft).inspect_err(|err| warn!("rejected expense submission: {err}"))?;

    let view = state
        .commit(move |current| {
            let next = match current.editing_id.as_deref() {
                Some(id) => {
                    info!(id = %id, "updating expense");
                    update_expense(current, &patch)
                }
                None => {
                    let expense = Expense::new(generate_id(), patch);
                    info!(id = %expense.id, category = %expense.category, "adding expense");
                    add_expense(current, expense)
                }
            };
            stop_editing(&next)
        })
        .await?;

    Ok(Json(view))
}

pub async fn remove_expense(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TrackerView>, AppError> {
    info!(id = %id, "deleting expense");
    let view = state.commit(|current| delete_expense(current, &id)).await?;
    Ok(Json(view))
}

pub async fn reset(State(state): State<AppState>) -> Result<Json<TrackerView>, AppError> {
    info!("resetting all expenses");
    Ok(Json(state.commit(reset_expenses).await?))
}

pub async fn begin_edit(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TrackerView>, AppError> {
    let view = state.commit(|current| start_editing(current, &id)).await?;
    Ok(Json(view))
}

pub async fn cancel_edit(State(state): State<AppState>) -> Result<Json<TrackerView>, AppError> {
    Ok(Json(state.commit(stop_editing).await?))
}

pub async fn set_date_filter(
    State(state): State<AppState>,
    Json(payload): Json<DateRangeRequest>,
) -> Result<Json<TrackerView>, AppError> {
    let (Some(start), Some(end)) = (payload.start_date, payload.end_date) else {
        return Err(AppError::bad_request("start_date and end_date are both required"));
    };
    let (Some(start), Some(end)) = (parse_date(&start), parse_date(&end)) else {
        return Err(AppError::bad_request("dates must use the YYYY-MM-DD format"));
    };

    let range = DateRange::new(start, end);
    let view = state
        .commit(|current| apply_date_range_filter(current, range))
        .await?;
    Ok(Json(view))
}

pub async fn set_category_filter(
    State(state): State<AppState>,
    Json(payload): Json<CategoryRequest>,
) -> Result<Json<TrackerView>, AppError> {
    let category = payload.category.unwrap_or_default();
    let category = category.trim();
    if category.is_empty() {
        return Err(AppError::bad_request("category must not be empty"));
    }

    let view = state
        .commit(|current| apply_category_filter(current, category))
        .await?;
    Ok(Json(view))
}

pub async fn reset_filters(State(state): State<AppState>) -> Result<Json<TrackerView>, AppError> {
    Ok(Json(state.commit(clear_filters).await?))
}
