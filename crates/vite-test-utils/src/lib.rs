//! Shared test utilities for the vite-config workspace.
//!
//! This crate provides project fixtures so that crate test suites do not each
//! hand-roll config files, lockfiles and `package.json`. It is a
//! dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`project`]: [`TestProject`] builder for a temporary frontend project
//! - [`cwd`]: lock shared by tests that change the working directory

pub mod cwd;
pub mod project;

pub use cwd::cwd_lock;
pub use project::TestProject;
