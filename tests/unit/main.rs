//! Unit test suite mirroring the src module tree

// Test code unwraps and indexes directly on fixture data
#![allow(
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::shadow_unrelated
)]

mod compose;
