//! Domain types for Maven Central search results.

use serde::Deserialize;

/// One search hit from the Solr index.
///
/// Fuzzy searches return one document per artifact with `latestVersion` set,
/// while `core=gav` lookups return one document per released version.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Document {
    #[serde(rename = "g", default)]
    pub group_id: String,
    #[serde(rename = "a", default)]
    pub artifact_id: String,
    #[serde(rename = "v", default)]
    pub version: String,
    #[serde(rename = "latestVersion", default)]
    pub latest_version: Option<String>,
}

impl Document {
    /// Version shown to the user.
    ///
    /// Version-history rows always show their own version. Library search
    /// rows prefer `latestVersion` and fall back to `v` when it is missing.
    pub fn display_version(&self, precise: bool) -> &str {
        if precise {
            return &self.version;
        }
        match self.latest_version.as_deref() {
            Some(latest) if !latest.is_empty() => latest,
            _ => &self.version,
        }
    }
}

/// "{groupId}:{artifactId}" pair used for precise lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate {
    pub group_id: String,
    pub artifact_id: String,
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `group:artifact:version`
    #[default]
    Default,
    Pom,
    Gradle,
    GradleKts,
    Table,
}

impl std::str::FromStr for OutputFormat {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "pom" => Self::Pom,
            "gradle" => Self::Gradle,
            "gradle.kts" => Self::GradleKts,
            "format" | "table" => Self::Table,
            _ => Self::Default,
        })
    }
}
