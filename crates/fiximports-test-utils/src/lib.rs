//! Shared test utilities for the fiximports workspace.
//!
//! This crate provides standardised fixtures so crate test suites do not
//! each grow their own. It is a dev-dependency only and never published.
//!
//! # Modules
//!
//! - [`fakes`] — scripted stand-ins for module discovery, formatting and writing
//! - [`module`] — [`module::TestModule`] builder for a temporary Go module on disk

pub mod fakes;
pub mod module;

pub use fakes::{FakeDiscovery, FakeFormatter, FormatCall, RecordingSink};
pub use module::TestModule;
