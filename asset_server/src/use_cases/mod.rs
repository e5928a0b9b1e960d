pub mod static_files;

pub use static_files::{StaticAsset, StaticFiles};
