//! # Host Boundary
//!
//! The collaborators the metadata engine talks to but does not own.
//!
//! ## Modules
//!
//! - **`comment_provider`**: where raw comment blocks come from. The engine
//!   never inspects handlers itself; it asks a provider for the text keyed by a
//!   handler id (in-memory map, or files on disk).
//! - **`sink`**: where rendered text goes. A terminal sink with colored
//!   headings, and a buffer sink that captures everything for later use.

pub mod comment_provider;
pub mod sink;
