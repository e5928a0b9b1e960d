use serde::Serialize;

pub const NOT_FOUND_MESSAGE: &str = "404 - Not Found";

#[derive(Serialize)]
pub struct NotFoundResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
