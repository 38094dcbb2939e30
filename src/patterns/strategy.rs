//! Strategy: swap text formatting at runtime.

/// Formats a piece of text for publishing.
pub trait TextFormatter {
    fn format(&self, text: &str) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextFormatter;

impl TextFormatter for PlainTextFormatter {
    fn format(&self, text: &str) -> String {
        format!("Plain: {text}")
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownFormatter;

impl TextFormatter for MarkdownFormatter {
    fn format(&self, text: &str) -> String {
        format!("Markdown: **{text}**")
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlFormatter;

impl TextFormatter for HtmlFormatter {
    fn format(&self, text: &str) -> String {
        format!("HTML: <b>{text}</b>")
    }
}

/// Publishes text through whichever formatter is currently selected.
///
/// # Example
///
/// ```rust
/// use remote_patterns::patterns::strategy::{HtmlFormatter, PlainTextFormatter, TextEditor};
///
/// let mut editor = TextEditor::new(Box::new(PlainTextFormatter));
/// assert_eq!(editor.publish_text("hi"), "Plain: hi");
///
/// editor.set_formatter(Box::new(HtmlFormatter));
/// assert_eq!(editor.publish_text("hi"), "HTML: <b>hi</b>");
/// ```
pub struct TextEditor {
    formatter: Box<dyn TextFormatter>,
}

impl TextEditor {
    pub fn new(formatter: Box<dyn TextFormatter>) -> Self {
        Self { formatter }
    }

    pub fn set_formatter(&mut self, formatter: Box<dyn TextFormatter>) {
        self.formatter = formatter;
    }

    pub fn publish_text(&self, text: &str) -> String {
        self.formatter.format(text)
    }
}
