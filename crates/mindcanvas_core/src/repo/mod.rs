//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the journal storage contract.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository writes enforce `JournalEntry::validate()` before persistence.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod entry_repo;
