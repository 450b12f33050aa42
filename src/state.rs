use crate::errors::AppError;
use crate::models::TrackerState;
use crate::storage::persist_expenses;
use crate::view::{build_view, TrackerView};
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;
use tracing::debug;

/// Handle shared by every handler. It owns the only writable reference to
/// the current snapshot.
#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub snapshot: Arc<Mutex<TrackerState>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, state: TrackerState) -> Self {
        Self {
            data_path,
            snapshot: Arc::new(Mutex::new(state)),
        }
    }

    pub async fn current(&self) -> TrackerState {
        self.snapshot.lock().await.clone()
    }

    pub async fn view(&self) -> TrackerView {
        build_view(&*self.snapshot.lock().await)
    }

    /// Runs `transition` on the current snapshot, saves the resulting expense
    /// list and only then swaps the new snapshot in. If saving fails the
    /// previous snapshot stays current.
    pub async fn commit<F>(&self, transition: F) -> Result<TrackerView, AppError>
    where
        F: FnOnce(&TrackerState) -> TrackerState,
    {
        let mut current = self.snapshot.lock().await;
        let next = transition(&*current);

        persist_expenses(&self.data_path, &next.expenses).await?;
        debug!(
            expenses = next.expenses.len(),
            editing = next.editing_id.is_some(),
            "committed snapshot"
        );

        *current = next;
        Ok(build_view(&*current))
    }
}
