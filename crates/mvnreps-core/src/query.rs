//! Turns the positional CLI arguments into a search configuration.
//!
//! The first argument is either a free-text query (`okhttp`) or a
//! `groupId:artifactId` coordinate, optionally followed by `,<rows>`.

use crate::error::{Result, SearchError};
use crate::types::{Coordinate, OutputFormat};

pub const DEFAULT_ROWS: usize = 5;

/// Immutable description of a single search invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Solr query sent as the `q` parameter.
    pub query: String,
    pub rows: usize,
    pub format: OutputFormat,
    /// Set for precise (version history) lookups.
    pub coordinate: Option<Coordinate>,
}

impl SearchConfig {
    /// Builds a configuration from the query argument and an optional format name.
    ///
    /// The `,<rows>` suffix is trimmed and only accepted as a non-negative
    /// count; negative or non-numeric values keep [`DEFAULT_ROWS`].
    ///
    /// # Examples
    ///
    /// ```
    /// use mvnreps_core::{OutputFormat, SearchConfig};
    ///
    /// let config = SearchConfig::parse("com.google.guava:guava,3", Some("gradle")).unwrap();
    /// assert!(config.is_precise());
    /// assert_eq!(config.query, r#"g:"com.google.guava" AND a:"guava""#);
    /// assert_eq!(config.rows, 3);
    /// assert_eq!(config.format, OutputFormat::Gradle);
    /// ```
    pub fn parse(spec: &str, format: Option<&str>) -> Result<Self> {
        let format = format
            .and_then(|f| f.parse::<OutputFormat>().ok())
            .unwrap_or_default();

        let mut parts = spec.split(',');
        let head = parts.next().unwrap_or_default();
        let rows = parts
            .next()
            .and_then(|r| r.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_ROWS);

        if head.contains(':') {
            let coordinate = parse_coordinate(head)?;
            let query = format!(
                r#"g:"{}" AND a:"{}""#,
                coordinate.group_id, coordinate.artifact_id
            );
            return Ok(Self {
                query,
                rows,
                format,
                coordinate: Some(coordinate),
            });
        }

        Ok(Self {
            query: head.trim().to_string(),
            rows,
            format,
            coordinate: None,
        })
    }

    pub fn is_precise(&self) -> bool {
        self.coordinate.is_some()
    }

    /// Text shown in the result header: the coordinate for precise lookups,
    /// the raw query otherwise.
    pub fn display_query(&self) -> String {
        match &self.coordinate {
            Some(coordinate) => coordinate.to_string(),
            None => self.query.clone(),
        }
    }
}

/// Splits `group:artifact[:version]`. Segments after the artifact are ignored.
fn parse_coordinate(text: &str) -> Result<Coordinate> {
    let mut segments = text.split(':').map(str::trim);
    let group_id = segments.next().unwrap_or_default();
    let artifact_id = segments.next().unwrap_or_default();

    if group_id.is_empty() || artifact_id.is_empty() {
        return Err(SearchError::InvalidCoordinate {
            coordinate: text.trim().to_string(),
        });
    }

    Ok(Coordinate {
        group_id: group_id.to_string(),
        artifact_id: artifact_id.to_string(),
    })
}
