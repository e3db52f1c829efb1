pub mod app;
pub mod errors;
pub mod grid;
pub mod handlers;
pub mod models;
pub mod storage;
pub mod store;
pub mod streaks;
pub mod sync;
pub mod ui;
pub mod window;
pub mod state;

pub use app::router;
pub use state::AppState;
pub use storage::{load_data, resolve_data_path};
