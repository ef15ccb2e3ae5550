//! Rendering of search results for the terminal.

use crate::query::SearchConfig;
use crate::types::{Document, OutputFormat};
use std::io::{self, Write};

const TABLE_RULE_WIDTH: usize = 85;
const FOOTER_RULE_WIDTH: usize = 50;

/// Formats one dependency declaration in the requested style.
///
/// `Table` rows are padded to the column widths of [`table_header`].
pub fn format_entry(format: OutputFormat, group: &str, artifact: &str, version: &str) -> String {
    match format {
        OutputFormat::Pom => format!(
            "<dependency>\n  <groupId>{group}</groupId>\n  <artifactId>{artifact}</artifactId>\n  <version>{version}</version>\n</dependency>"
        ),
        OutputFormat::Gradle => format!("implementation '{group}:{artifact}:{version}'"),
        OutputFormat::GradleKts => format!("implementation(\"{group}:{artifact}:{version}\")"),
        OutputFormat::Table => table_row(group, artifact, version),
        OutputFormat::Default => format!("{group}:{artifact}:{version}"),
    }
}

pub fn table_header() -> String {
    table_row("GroupId", "ArtifactId", "Version")
}

fn table_row(group: &str, artifact: &str, version: &str) -> String {
    format!("{group:<40} | {artifact:<30} | {version}")
}

pub struct ResultFormatter<'a> {
    config: &'a SearchConfig,
}

impl<'a> ResultFormatter<'a> {
    pub fn new(config: &'a SearchConfig) -> Self {
        Self { config }
    }

    /// Writes the whole listing: header line, one entry per document, footer.
    ///
    /// An empty result set produces only the "no results" notice.
    pub fn render<W: Write>(&self, out: &mut W, docs: &[Document]) -> io::Result<()> {
        if docs.is_empty() {
            return writeln!(out, "\n⚠️ No matching results found.");
        }

        self.write_header(out)?;

        let format = self.config.format;
        let precise = self.config.is_precise();
        for (i, doc) in docs.iter().enumerate() {
            if i == 0 && format == OutputFormat::Table {
                writeln!(out, "{}", table_header())?;
                writeln!(out, "{}", "-".repeat(TABLE_RULE_WIDTH))?;
            }
            let line = format_entry(
                format,
                &doc.group_id,
                &doc.artifact_id,
                doc.display_version(precise),
            );
            writeln!(out, "{line}")?;
        }

        writeln!(out, "\n{}", "-".repeat(FOOTER_RULE_WIDTH))
    }

    fn write_header<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mode = if self.config.is_precise() {
            "Version history"
        } else {
            "Library search"
        };
        writeln!(
            out,
            "\n🔍 {mode} results (\"{}\", top {}):\n",
            self.config.display_query(),
            self.config.rows
        )
    }
}
