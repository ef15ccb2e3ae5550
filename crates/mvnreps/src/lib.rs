//! Command-line front end for searching Maven Central.

pub mod app;
pub mod cli;
pub mod logging;

// Re-export from mvnreps-core
pub use mvnreps_core::{MavenCentralRegistry, Registry, SearchConfig, SearchError};

pub use app::run;
pub use cli::{Cli, Settings};
