//! Error Handling Module
//!
//! - Core error type (`ChatError`) and its categories
//! - User-facing helpers used by the web form
//! - Conversions from the error types of the crates we depend on
//!
//! # Example
//!
//! ```rust,ignore
//! use bedrock_chat::error::{ChatError, ErrorCategory};
//!
//! let error = ChatError::AuthorizationError("AccessDeniedException".into());
//! assert_eq!(error.category(), ErrorCategory::Authorization);
//! ```

mod conversions;
pub mod helpers;
pub mod types;

pub use types::*;
