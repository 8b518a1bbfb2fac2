use crate::application::dto::{DependentsResponse, ShowResponse};
use crate::application::read_models::{ComponentView, ReportMetadata, VersionView};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for the dependents report
const DEPENDENTS_TABLE_HEADER: &str = "| Component | Dependents |\n";

/// Markdown table separator line for the dependents report
const DEPENDENTS_TABLE_SEPARATOR: &str = "|-----------|------------|\n";

/// Markdown table header for version listings
const VERSION_TABLE_HEADER: &str = "| Version | Dependencies | Dependents | Message |\n";

/// Markdown table separator line for version listings
const VERSION_TABLE_SEPARATOR: &str = "|---------|--------------|------------|---------|\n";

/// MarkdownFormatter adapter for human-readable reports
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn join_cell(items: &[String]) -> String {
        if items.is_empty() {
            "-".to_string()
        } else {
            items
                .iter()
                .map(|item| format!("`{}`", Self::escape_markdown_table_cell(item)))
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_metadata(&self, output: &mut String, metadata: &ReportMetadata) {
        output.push_str(&format!(
            "_Generated by {} {} at {} ({})_\n\n",
            metadata.tool_name, metadata.tool_version, metadata.timestamp, metadata.report_id
        ));
    }

    fn render_dependents(&self, output: &mut String, response: &DependentsResponse) {
        output.push_str("## Dependents\n\n");

        if !response.has_dependents() {
            output.push_str("No component in the scope depends on the queried identifiers.\n\n");
            return;
        }

        output.push_str(DEPENDENTS_TABLE_HEADER);
        output.push_str(DEPENDENTS_TABLE_SEPARATOR);
        for queried in &response.queried {
            let Some(dependents) = response.dependents.get(queried) else {
                continue;
            };
            output.push_str(&format!(
                "| `{}` | {} |\n",
                Self::escape_markdown_table_cell(queried),
                Self::join_cell(dependents)
            ));
        }
        output.push('\n');

        let unused: Vec<&String> = response
            .queried
            .iter()
            .filter(|queried| !response.dependents.contains_key(*queried))
            .collect();
        if !unused.is_empty() {
            output.push_str("### Without dependents\n\n");
            for queried in unused {
                output.push_str(&format!("- `{}`\n", queried));
            }
            output.push('\n');
        }
    }

    fn render_component(&self, output: &mut String, component: &ComponentView) {
        output.push_str(&format!("## Component `{}`\n\n", component.id));
        output.push_str(&format!(
            "- Declared versions: {}\n",
            Self::join_cell(&component.declared_versions)
        ));
        output.push_str(&format!(
            "- Loaded versions: {}\n",
            Self::join_cell(&component.loaded_versions)
        ));
        output.push_str(&format!(
            "- Latest: {}\n\n",
            component
                .latest
                .as_deref()
                .map(|latest| format!("`{}`", latest))
                .unwrap_or_else(|| "-".to_string())
        ));
    }

    fn render_versions(&self, output: &mut String, versions: &[VersionView]) {
        output.push_str("## Versions\n\n");
        if versions.is_empty() {
            output.push_str("No loaded version matches the query.\n\n");
            return;
        }

        output.push_str(VERSION_TABLE_HEADER);
        output.push_str(VERSION_TABLE_SEPARATOR);
        for version in versions {
            let mut dependencies = Self::join_cell(&version.dependencies);
            if !version.dev_dependencies.is_empty() {
                dependencies.push_str(&format!(
                    " (dev: {})",
                    Self::join_cell(&version.dev_dependencies)
                ));
            }
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&version.version),
                dependencies,
                Self::join_cell(&version.dependents),
                Self::escape_markdown_table_cell(version.message.as_deref().unwrap_or(""))
            ));
        }
        output.push('\n');
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format_dependents(&self, response: &DependentsResponse) -> Result<String> {
        let mut output = String::new();
        output.push_str("# Dependents Report\n\n");
        self.render_metadata(&mut output, &response.metadata);
        self.render_dependents(&mut output, response);
        Ok(output)
    }

    fn format_show(&self, response: &ShowResponse) -> Result<String> {
        let mut output = String::new();
        output.push_str(&format!("# Lookup: `{}`\n\n", response.query));
        self.render_metadata(&mut output, &response.metadata);

        match &response.component {
            Some(component) => {
                self.render_component(&mut output, component);
                self.render_versions(&mut output, &response.versions);
            }
            None => output.push_str("Component not found in scope.\n\n"),
        }

        Ok(output)
    }
}
