// Resolves request paths against the static root and loads the matching file.

use crate::domain::AssetError;
use percent_encoding::percent_decode_str;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const INDEX_FILE: &str = "index.html";

#[derive(Debug)]
pub struct StaticAsset {
    pub path: PathBuf,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct StaticFiles {
    root: PathBuf,
}

impl StaticFiles {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a URL path onto the static root.
    ///
    /// Segments are percent-decoded before they are checked. Empty and `.` segments are
    /// skipped. Any `..` segment, or a segment that decodes to a separator or NUL, is
    /// rejected rather than normalized.
    pub fn resolve(&self, request_path: &str) -> Result<PathBuf, AssetError> {
        let mut path = self.root.clone();
        for raw in request_path.split('/') {
            // Not valid UTF-8 once decoded, so no file under the root can match it.
            let segment = percent_decode_str(raw)
                .decode_utf8()
                .map_err(|_| AssetError::NotFound)?;

            match segment.as_ref() {
                "" | "." => continue,
                ".." => return Err(AssetError::Forbidden),
                s if s.contains(['/', '\\', '\0']) => return Err(AssetError::Forbidden),
                s => path.push(s),
            }
        }
        Ok(path)
    }

    /// Loads the file behind `request_path`; a directory yields its `index.html`.
    pub async fn load(&self, request_path: &str) -> Result<StaticAsset, AssetError> {
        let mut path = self.resolve(request_path)?;

        let metadata = tokio::fs::metadata(&path).await.map_err(lookup_error)?;
        if metadata.is_dir() {
            path.push(INDEX_FILE);
        }

        let bytes = tokio::fs::read(&path).await.map_err(lookup_error)?;
        Ok(StaticAsset {
            content_type: content_type_for(&path),
            path,
            bytes,
        })
    }
}

fn lookup_error(err: std::io::Error) -> AssetError {
    match err.kind() {
        ErrorKind::NotFound | ErrorKind::NotADirectory => AssetError::NotFound,
        _ => AssetError::Io(err),
    }
}

pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match ext.as_deref() {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("js" | "mjs") => "text/javascript; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("json" | "map") => "application/json",
        Some("txt") => "text/plain; charset=utf-8",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("wasm") => "application/wasm",
        Some("mp3") => "audio/mpeg",
        Some("ogg") => "audio/ogg",
        Some("wav") => "audio/wav",
        _ => "application/octet-stream",
    }
}
