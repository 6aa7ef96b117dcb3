#![warn(clippy::pedantic)]

//! Persistence for the progress state.
//!
//! The whole [`brogram_domain::ProgressState`] is serialized to JSON and
//! stored under a single key. [`local_storage::Progress`] keeps it in
//! browser local storage; [`in_memory::Progress`] backs a session whose
//! browser storage is unavailable and serves as the test double.

pub mod in_memory;
#[allow(clippy::module_name_repetitions)]
pub mod local_storage;
mod model;
