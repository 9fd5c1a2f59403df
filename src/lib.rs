//! Library interface for brewify
//!
//! The binary is a thin clap wrapper around these modules; they are exposed so
//! the workflows can be driven with scripted collaborators in tests.

pub mod api;
pub mod brew;
pub mod commands;
pub mod config;
pub mod error;
pub mod menu;
pub mod select;
pub mod setup;
pub mod term;

// Re-export commonly used types
pub use api::{BrewApi, Catalog};
pub use brew::{Brew, BrewCommand, CommandStatus, PackageManager};
pub use config::Config;
pub use error::{BrewifyError, Result};
pub use select::{Fzf, Selector, select_one};
