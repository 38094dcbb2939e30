//! Strategy: Text Formatters
//!
//! This example demonstrates swapping an algorithm at runtime.
//!
//! Key concepts:
//! - One editor, several interchangeable formatters
//! - The editor only knows the `TextFormatter` trait
//!
//! Run with: cargo run --example strategy

use remote_patterns::patterns::strategy::{
    HtmlFormatter, MarkdownFormatter, PlainTextFormatter, TextEditor,
};

fn main() {
    let message = "Hello, world!";

    let mut editor = TextEditor::new(Box::new(PlainTextFormatter));
    println!("{}", editor.publish_text(message));

    editor.set_formatter(Box::new(MarkdownFormatter));
    println!("{}", editor.publish_text(message));

    editor.set_formatter(Box::new(HtmlFormatter));
    println!("{}", editor.publish_text(message));
}
