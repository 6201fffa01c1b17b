//! Journal domain model.
//!
//! # Responsibility
//! - Define the emotion catalog and its immutable rendering profiles.
//! - Define the per-day journal entry record and its validation.
//!
//! # Invariants
//! - Each calendar day holds at most one entry.
//! - Every emotion label resolves to a profile (default: Peaceful).

pub mod emotion;
pub mod entry;
