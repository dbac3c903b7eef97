use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Mutex;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub data_dir: PathBuf,
    pub page_size: usize,
    /// Held across every read-modify-write of the record store.
    pub write_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(data_dir: PathBuf, page_size: usize) -> Self {
        Self {
            data_dir,
            page_size,
            write_lock: Arc::new(Mutex::new(())),
        }
    }
}
