//! Common types and utilities for the j2oc translator.
//!
//! This crate provides foundational pieces used across the j2oc crates:
//! - String interning (`Atom`, `Interner`)
//! - Centralized limits and thresholds

// String interning for name deduplication
pub mod interner;
pub use interner::{Atom, Interner};

// Centralized limits and thresholds
pub mod limits;
