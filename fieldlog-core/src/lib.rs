//! # fieldlog-core
//! Order-preserving field builder for structured log records.
//!
//! A [`FieldBuilder`] collects typed key/value pairs across the lifetime of a
//! request. Keys keep the position of their first insertion and setting a key
//! again replaces its value in place. [`FieldBuilder::build`] yields [`Fields`],
//! which any `log` backend can read as a [`log::kv::Source`].
//!
//! ```rust
//! use fieldlog_core::FieldBuilder;
//!
//! let request = FieldBuilder::new()
//!     .request_id("7f1c")
//!     .method("POST")
//!     .url("https://example.com/posts/123");
//!
//! let response = request.status(201).duration_ms(15).build();
//! assert_eq!(
//!     response.keys().collect::<Vec<_>>(),
//!     ["request-id", "method", "url", "status", "duration-ms"]
//! );
//! ```

mod builder;
mod field;
pub mod keys;
mod setters;

pub use builder::FieldBuilder;
pub use field::{Field, Fields, Value};
