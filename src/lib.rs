/// Board Feed Service Library
///
/// Serves the read-only front page of the discussion board: the most recent
/// posts with author nickname, view count, comment count, and creation time,
/// plus a navigation menu that varies on whether the viewer is signed in.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers
/// - `models`: Feed row and identity data structures
/// - `services`: Feed assembly and output encoding
/// - `db`: Database access layer and the feed query
/// - `session`: Read-only view of the shared session store
/// - `render`: HTML page rendering
/// - `error`: Error types and handling
/// - `config`: Configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod render;
pub mod services;
pub mod session;

pub use config::Config;
pub use error::{AppError, Result};
