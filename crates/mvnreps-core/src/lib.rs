//! Maven Central search and dependency snippet rendering.
//!
//! This crate provides the pipeline behind the `mvnreps` CLI: building a Solr
//! query from command-line input, issuing a single search request against
//! Maven Central, and rendering the hits as coordinates, pom.xml blocks,
//! Gradle lines or a table.

pub mod error;
pub mod formatter;
pub mod query;
pub mod registry;
pub mod types;

pub use error::{Result, SearchError};
pub use formatter::{ResultFormatter, format_entry};
pub use query::{DEFAULT_ROWS, SearchConfig};
pub use registry::{MAVEN_SEARCH_BASE, MavenCentralRegistry, Registry, search_url};
pub use types::{Coordinate, Document, OutputFormat};
