//! geolookup-cli
//! =============
//!
//! Command-line interface for the `geolookup-core` city lookup library.
//!
//! This crate primarily provides a binary (`geolookup`). We include a small
//! library target so that docs.rs renders a documentation page and shows
//! this overview. See the README for full usage examples.
//!
//! Quick start
//! -----------
//!
//! Install the CLI from crates.io:
//!
//! ```text
//! cargo install geolookup-cli
//! ```
//!
//! Basic usage:
//!
//! ```text
//! geolookup --help
//! geolookup stats
//! geolookup lookup aus --limit 5
//! geolookup distance 30.27,-97.74 42.36,-71.06
//! ```
//!
//! For programmatic access to the lookup service and data structures, use
//! the [`geolookup-core`] crate directly.
//!
//! Links
//! -----
//! - Repository: <https://github.com/tapin-app/geolookup-rs>
//! - Core crate: <https://docs.rs/geolookup-core>
//!
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.
