use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
}

impl OutputFormat {
    pub fn formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter),
            OutputFormat::Markdown => Box::new(MarkdownFormatter),
        }
    }
}

/// JSON layout used when writing artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputStyle {
    #[default]
    Pretty,
    Compact,
}

pub trait OutputFormatter {
    fn format_pair(&self, key: &str, value: &str) -> String;

    fn format_list(&self, items: &[String]) -> String;

    fn format_section(&self, title: &str) -> String;

    /// A verbatim block, such as raw JSON.
    fn format_block(&self, body: &str, language: &str) -> String;

    fn format_flag(&self, flag: &str) -> String;
}

pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn format_pair(&self, key: &str, value: &str) -> String {
        format!("{}: {}", key, value)
    }

    fn format_list(&self, items: &[String]) -> String {
        items
            .iter()
            .map(|item| format!("  - {}", item))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_section(&self, title: &str) -> String {
        format!("\n=== {} ===\n", title)
    }

    fn format_block(&self, body: &str, _language: &str) -> String {
        body.lines()
            .map(|line| format!("    {}", line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_flag(&self, flag: &str) -> String {
        format!("[{}]", flag)
    }
}

pub struct MarkdownFormatter;

impl OutputFormatter for MarkdownFormatter {
    fn format_pair(&self, key: &str, value: &str) -> String {
        format!("**{}**: {}", key, value)
    }

    fn format_list(&self, items: &[String]) -> String {
        items
            .iter()
            .map(|item| format!("- {}", item))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_section(&self, title: &str) -> String {
        format!("\n## {}\n", title)
    }

    fn format_block(&self, body: &str, language: &str) -> String {
        format!("```{}\n{}\n```", language, body)
    }

    fn format_flag(&self, flag: &str) -> String {
        format!("`{}`", flag)
    }
}
