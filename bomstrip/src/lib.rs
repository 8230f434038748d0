//! Recursive UTF-8 byte-order-mark stripper.
//!
//! Walks a directory tree, skipping `node_modules` and `.git`, and removes a
//! leading `EF BB BF` from text files with allowlisted extensions:
//!
//! - **[`core`]**: Pure logic (BOM detection, name filters, outcome types).
//! - **[`io`]**: Traversal, per-file rewrite, config loading.
//!
//! [`scan`] ties the two together and produces the line-oriented report.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod scan;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
