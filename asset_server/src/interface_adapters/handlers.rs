use crate::domain::AssetError;
use crate::interface_adapters::protocol::{ErrorResponse, NOT_FOUND_MESSAGE, NotFoundResponse};
use crate::interface_adapters::state::AppState;
use axum::{
    Json,
    body::Body,
    extract::State,
    http::{HeaderValue, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

// Catch-all for anything no other handler claimed.
pub async fn not_found() -> Response {
    not_found_response()
}

// Serves GET/HEAD from the static root; anything else is a 404.
#[tracing::instrument(
    name = "serve_asset",
    skip_all,
    fields(method = %method, path = %uri.path())
)]
pub async fn serve_asset(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    let Some(files) = state.static_files.as_ref() else {
        return not_found_response();
    };
    if method != Method::GET && method != Method::HEAD {
        return not_found_response();
    }

    let asset = match files.load(uri.path()).await {
        Ok(asset) => asset,
        Err(err) => return err.into_response(),
    };
    debug!(file = %asset.path.display(), bytes = asset.bytes.len(), "asset served");

    let headers = [
        (
            header::CONTENT_TYPE,
            HeaderValue::from_static(asset.content_type),
        ),
        (header::CONTENT_LENGTH, HeaderValue::from(asset.bytes.len())),
    ];
    let body = if method == Method::HEAD {
        Body::empty()
    } else {
        Body::from(asset.bytes)
    };
    (headers, body).into_response()
}

impl IntoResponse for AssetError {
    fn into_response(self) -> Response {
        let status = match &self {
            AssetError::NotFound => return not_found_response(),
            AssetError::Forbidden => StatusCode::FORBIDDEN,
            AssetError::Io(err) => {
                error!(error = %err, "failed to read asset");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

fn not_found_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundResponse {
            message: NOT_FOUND_MESSAGE.to_string(),
        }),
    )
        .into_response()
}
