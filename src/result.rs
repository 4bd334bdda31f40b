//! Application level result type.
//!
//! Everything above the GitHub adapter reports failures through `color-eyre`,
//! which gives colorized reports with context when the binary exits with an
//! error. The adapter itself uses the typed
//! [`ApiError`](crate::error::ApiError) so the retry policy can tell rate
//! limits apart from fatal failures; those errors convert into this type
//! with `?`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use color_eyre::eyre::Context;
//! use crate::result::Result;
//!
//! fn read_list(path: &str) -> Result<String> {
//!     let content = std::fs::read_to_string(path)
//!         .wrap_err("failed to read repository list")?;
//!     Ok(content)
//! }
//! ```

use color_eyre::eyre::Result as EyreResult;

/// Standard result type used outside the API adapter.
pub type Result<T> = EyreResult<T>;
