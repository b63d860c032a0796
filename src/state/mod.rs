//! Client-side view state.
//!
//! DESIGN
//! ======
//! State is plain data with pure transitions so pages stay thin wrappers
//! that hold it in an `RwSignal` and feed it browser events and clock reads.

pub mod dashboard;
