use crate::errors::AppError;
use crate::models::Expense;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, error, warn};

/// Stored values that mean "nothing saved yet" rather than corruption.
const ABSENT_MARKERS: [&str; 3] = ["", "undefined", "null"];

/// Loads the saved expense list. Never fails: a missing or empty file gives
/// an empty list, and an unreadable one is removed so the next start is clean.
pub async fn load_expenses(path: &Path) -> Vec<Expense> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
        Err(err) => {
            error!("failed to read data file: {err}");
            return Vec::new();
        }
    };

    let text = String::from_utf8_lossy(&bytes);
    let trimmed = text.trim();
    if ABSENT_MARKERS.iter().any(|marker| *marker == trimmed) {
        return Vec::new();
    }

    match serde_json::from_str::<Vec<Expense>>(trimmed) {
        Ok(expenses) => {
            debug!(count = expenses.len(), "loaded expenses");
            expenses
        }
        Err(err) => {
            warn!("discarding unreadable data file {}: {err}", path.display());
            if let Err(err) = fs::remove_file(path).await {
                error!("failed to remove data file: {err}");
            }
            Vec::new()
        }
    }
}

pub async fn persist_expenses(path: &Path, expenses: &[Expense]) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    let payload = serde_json::to_vec_pretty(expenses)?;

    // A crash mid-write must not leave a truncated data file behind, so the
    // payload goes to a sibling first and replaces the original by rename.
    let staging = staging_path(path);
    fs::write(&staging, payload).await?;
    if let Err(err) = fs::rename(&staging, path).await {
        let _ = fs::remove_file(&staging).await;
        return Err(err.into());
    }
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
