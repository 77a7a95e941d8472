//! Service state.
//!
//! # States
//! - Uninitialized: no batch yet, request count 0
//! - Initialized: a non-empty batch is held
//!
//! # State Transitions
//! ```text
//! Uninitialized → Initialized: first /data request
//! Initialized → Initialized: every request; batch replaced when the
//!                            count is a multiple of regenerate_every
//! ```

pub mod data_state;

pub use data_state::{DataState, Snapshot, Stats};
