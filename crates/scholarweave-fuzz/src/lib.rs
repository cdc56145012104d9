//! Fuzzing library for scholarweave.
//!
//! This crate provides fuzzing targets for the upstream decoding path and the
//! two text routines that see untrusted input: abstract reconstruction and
//! identifier normalization.
//!
//! # Usage
//!
//! ```bash
//! cd crates/scholarweave-fuzz
//! cargo +nightly fuzz run fuzz_work_parse -- -max_total_time=60
//! ```

pub use scholarweave::{abstract_text, identifier, models};
