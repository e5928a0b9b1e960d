use crate::use_cases::StaticFiles;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct AppState {
    // None when static serving is disabled; every request then falls through to 404.
    pub static_files: Option<Arc<StaticFiles>>,
}

impl AppState {
    pub fn with_static_root(root: impl Into<PathBuf>) -> Self {
        Self {
            static_files: Some(Arc::new(StaticFiles::new(root))),
        }
    }
}
