//! Decorator: Text Formatting
//!
//! This example demonstrates stacking behaviour by wrapping.
//!
//! Key concepts:
//! - Each decorator is itself a `Text`
//! - Wrapping order decides tag nesting
//!
//! Run with: cargo run --example decorator

use remote_patterns::patterns::decorator::{
    BoldDecorator, ItalicDecorator, PlainText, Text, UnderlineDecorator,
};

fn main() {
    let text = PlainText::new("Hello, world!");

    let formatted = BoldDecorator::new(Box::new(ItalicDecorator::new(Box::new(
        UnderlineDecorator::new(Box::new(text)),
    ))));
    println!("{}", formatted.render());
}
