//! Journal export/import formats.
//!
//! # Responsibility
//! - Convert between the in-memory journal and its portable JSON document.
//!
//! # Invariants
//! - Import never partially applies; callers merge only fully parsed input.

pub mod json;
