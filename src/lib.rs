//! geolookup-rs
//! ============
//!
//! Workspace host for the `geolookup-core` city lookup library, its CLI and
//! its WebAssembly bindings. This crate re-exports the core API so the
//! bundled demos can use a single import path; for application use, depend
//! on `geolookup-core` directly.

pub use geolookup_core::*;

/// Bring the common types and traits into scope for demos.
pub mod prelude {
    pub use geolookup_core::prelude::*;
}
