use crate::interface_adapters::handlers::{not_found, serve_asset};
use crate::interface_adapters::state::AppState;
use axum::Router;

pub fn app(state: AppState) -> Router {
    // No explicit routes: static files when enabled, otherwise everything is a JSON 404.
    let router = if state.static_files.is_some() {
        Router::new().fallback(serve_asset)
    } else {
        Router::new().fallback(not_found)
    };
    router.with_state(state)
}
