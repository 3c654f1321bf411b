//! Shared types for the Bistro application
//!
//! Domain models, the unified error system, and utility types used by the
//! store and the page controllers.

pub mod error;
pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};
