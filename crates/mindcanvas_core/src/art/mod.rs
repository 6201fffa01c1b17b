//! Procedural emotion art.
//!
//! # Responsibility
//! - Synthesize seeded outlines per shape style (`shape`).
//! - Compose layered artworks from an emotion profile (`compose`).
//! - Serialize artworks to SVG (`artifact`).
//!
//! # Invariants
//! - Every function here is pure and reentrant; randomness comes from a
//!   generator built locally from the call's seed.

pub mod artifact;
pub mod color;
pub mod compose;
pub mod shape;
