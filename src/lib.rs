pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod reducer;
pub mod select;
pub mod state;
pub mod stats;
pub mod storage;
pub mod ui;
pub mod util;
pub mod validation;
pub mod view;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::load_expenses;
