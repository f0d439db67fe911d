//! Domain models for the web crate.

pub mod session;
