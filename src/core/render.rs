//! Renderer module
//!
//! Renders ResultSet to different output formats: raw, jsonl, json, md

use colored::Colorize;
use std::io::Write;

use crate::core::error::InputError;
use crate::core::model::{Kind, ResultItem, ResultSet};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Raw,
    Jsonl,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "raw" => Ok(OutputFormat::Raw),
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            _ => Err(InputError::UnknownFormat(s.to_string())),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
    pub color: bool,
}

impl RenderConfig {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
            color: false,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

/// Renderer for result sets
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    #[cfg(test)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            config: RenderConfig::new(format),
        }
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a result set to a string
    pub fn render(&self, result_set: &ResultSet) -> String {
        match self.config.format {
            OutputFormat::Raw => self.render_raw(result_set),
            OutputFormat::Jsonl => self.render_jsonl(result_set),
            OutputFormat::Json => self.render_json(result_set),
            OutputFormat::Markdown => self.render_markdown(result_set),
        }
    }

    /// Render to a writer, followed by a newline
    pub fn render_to<W: Write>(&self, result_set: &ResultSet, mut writer: W) -> std::io::Result<()> {
        let output = self.render(result_set);
        writeln!(writer, "{}", output)
    }

    /// Raw mode: winners as bare words, steps as aligned lines
    fn render_raw(&self, result_set: &ResultSet) -> String {
        result_set
            .items
            .iter()
            .map(|item| match item.kind {
                Kind::Winner => item.word.clone(),
                Kind::Step => self.render_step_line(item),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_step_line(&self, item: &ResultItem) -> String {
        let replaced = item.replaced.unwrap_or(false);
        let line = format!(
            "{:>3}  {:<20} {:>6}{}",
            item.position.unwrap_or(0),
            format!("{:?}", item.word),
            item.score,
            if replaced { "  *" } else { "" }
        );
        if self.config.color && replaced {
            line.green().bold().to_string()
        } else {
            line
        }
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl(&self, result_set: &ResultSet) -> String {
        result_set
            .items
            .iter()
            .filter_map(|item| {
                if self.config.pretty {
                    serde_json::to_string_pretty(item).ok()
                } else {
                    serde_json::to_string(item).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render as a single JSON array
    fn render_json(&self, result_set: &ResultSet) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        }
    }

    /// Render as Markdown
    fn render_markdown(&self, result_set: &ResultSet) -> String {
        let mut output = String::new();
        if result_set.is_empty() {
            return output;
        }

        let (steps, winners): (Vec<&ResultItem>, Vec<&ResultItem>) = result_set
            .items
            .iter()
            .partition(|item| item.kind == Kind::Step);

        if !steps.is_empty() {
            output.push_str("## Steps\n\n");
            output.push_str("| # | Word | Score | Replaced | Best |\n");
            output.push_str("|---|------|-------|----------|------|\n");
            for item in steps {
                let best = item
                    .best
                    .as_ref()
                    .map(|b| format!("`{}` ({})", b.word, b.score))
                    .unwrap_or_default();
                output.push_str(&format!(
                    "| {} | `{}` | {} | {} | {} |\n",
                    item.position.unwrap_or(0),
                    item.word,
                    item.score,
                    if item.replaced.unwrap_or(false) { "yes" } else { "no" },
                    best
                ));
            }
            output.push('\n');
        }

        if !winners.is_empty() {
            output.push_str("## Winner\n\n");
            for item in winners {
                output.push_str(&format!("- **`{}`** (score {})", item.word, item.score));
                if item.seed {
                    output.push_str(" - no word scored above the seed");
                }
                output.push('\n');
            }
            output.push('\n');
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score::{find_best, trace};

    fn explain_set(sentence: &str) -> ResultSet {
        let mut set: ResultSet = trace(sentence).iter().map(ResultItem::step).collect();
        set.push(ResultItem::winner(&find_best(sentence)));
        set
    }

    #[test]
    fn test_render_raw_winner() {
        let mut result_set = ResultSet::new();
        result_set.push(ResultItem::winner(&find_best("volcano climbing")));

        let output = Renderer::new(OutputFormat::Raw).render(&result_set);
        assert_eq!(output, "climbing");
    }

    #[test]
    fn test_render_raw_steps() {
        let output = Renderer::new(OutputFormat::Raw).render(&explain_set("volcano climbing"));
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("\"climbing\""));
        assert!(lines[0].ends_with('*'));
        assert!(lines[1].contains("\"volcano\""));
        assert!(!lines[1].ends_with('*'));
        assert_eq!(lines[2], "climbing");
    }

    #[test]
    fn test_render_jsonl() {
        let output = Renderer::new(OutputFormat::Jsonl).render(&explain_set("volcano climbing"));
        assert_eq!(output.lines().count(), 3);
        for line in output.lines() {
            serde_json::from_str::<serde_json::Value>(line).unwrap();
        }
    }

    #[test]
    fn test_render_jsonl_pretty() {
        let config = RenderConfig::new(OutputFormat::Jsonl).with_pretty(true);
        let output = Renderer::with_config(config).render(&explain_set("b"));
        assert!(output.contains("\n\n"));
        assert!(output.contains("  \"kind\""));
    }

    #[test]
    fn test_render_json() {
        let output = Renderer::new(OutputFormat::Json).render(&explain_set("b"));
        assert!(output.starts_with('['));
        assert!(output.ends_with(']'));

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_render_markdown() {
        let output = Renderer::new(OutputFormat::Markdown).render(&explain_set("volcano climbing"));
        assert!(output.contains("## Steps"));
        assert!(output.contains("| 1 | `climbing` | 837 | yes | `climbing` (837) |"));
        assert!(output.contains("## Winner"));
        assert!(output.contains("**`climbing`** (score 837)"));
    }

    #[test]
    fn test_render_markdown_seed() {
        let mut result_set = ResultSet::new();
        result_set.push(ResultItem::winner(&find_best("A")));
        let output = Renderer::new(OutputFormat::Markdown).render(&result_set);
        assert!(!output.contains("## Steps"));
        assert!(output.contains("no word scored above the seed"));
    }

    #[test]
    fn test_render_markdown_empty() {
        let output = Renderer::new(OutputFormat::Markdown).render(&ResultSet::new());
        assert!(output.is_empty());
    }

    #[test]
    fn test_render_to_writer() {
        let mut buf = Vec::new();
        Renderer::new(OutputFormat::Raw)
            .render_to(&explain_set("b"), &mut buf)
            .unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert!(s.ends_with("b\n"));
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("raw".parse::<OutputFormat>().unwrap(), OutputFormat::Raw);
        assert_eq!("jsonl".parse::<OutputFormat>().unwrap(), OutputFormat::Jsonl);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("MARKDOWN".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
    }

    #[test]
    fn test_output_format_parse_invalid() {
        let err = "xml".parse::<OutputFormat>().unwrap_err();
        assert!(matches!(err, InputError::UnknownFormat(ref s) if s == "xml"));
    }

    #[test]
    fn test_render_config_default() {
        let config = RenderConfig::default();
        assert_eq!(config.format, OutputFormat::Raw);
        assert!(!config.pretty);
        assert!(!config.color);
    }
}
