//! Query, fetch, render.

use mvnreps_core::{Registry, ResultFormatter, SearchConfig, SearchError};
use std::io::{self, Write};

/// Runs one search and writes the listing or a single diagnostic line to `out`.
///
/// Search failures never surface as `Err`; only a failed write to `out` does.
pub async fn run<W: Write>(
    registry: &dyn Registry,
    query: &str,
    format: Option<&str>,
    out: &mut W,
) -> io::Result<()> {
    let config = match SearchConfig::parse(query, format) {
        Ok(config) => config,
        Err(e) => return report(out, &e),
    };

    tracing::info!(
        "Searching '{}' (precise: {}, rows: {}, format: {:?})",
        config.query,
        config.is_precise(),
        config.rows,
        config.format
    );

    match registry.search(&config).await {
        Ok(docs) => ResultFormatter::new(&config).render(out, &docs),
        Err(e) => report(out, &e),
    }
}

pub fn report<W: Write>(out: &mut W, err: &SearchError) -> io::Result<()> {
    tracing::warn!("Search failed: {:?}", err);
    writeln!(out, "❌ {err}")
}
