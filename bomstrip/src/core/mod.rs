//! Deterministic, pure logic shared by the scanner.
//!
//! Core modules must be free of I/O side effects. They operate on byte slices
//! and names and return deterministic outputs suitable for tests.

pub mod bom;
pub mod filter;
pub mod types;
