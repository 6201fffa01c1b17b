//! Trend and insight aggregation over a journal.
//!
//! # Responsibility
//! - Summarize entries (`summary`), build the mood chart (`chart`),
//!   derive recommendations (`recommend`) and gallery selections
//!   (`gallery`).
//!
//! # Invariants
//! - All functions read a caller-owned `EntryMap` and never mutate it.
//! - Empty input produces empty/zero results, not errors.

pub mod chart;
pub mod gallery;
pub mod recommend;
pub mod summary;
