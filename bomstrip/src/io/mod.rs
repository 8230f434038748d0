//! I/O helpers for the scanner.

pub mod config;
pub mod fixer;
pub mod walk;
