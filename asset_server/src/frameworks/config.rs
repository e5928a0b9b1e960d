use std::{env, path::PathBuf};

// Runtime/server settings read from the environment.

pub const DEFAULT_STATIC_DIR: &str = "client/build";

pub fn http_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3001)
}

// Static files are only served in production builds.
pub fn serve_static() -> bool {
    matches!(env::var("NODE_ENV").as_deref(), Ok("production"))
}

pub fn static_dir() -> PathBuf {
    env::var("STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR))
}
