//! The stateless patterns of the collection.
//!
//! Each submodule is self-contained and returns the lines it would display
//! instead of printing them:
//! - `strategy`: interchangeable text formatters behind one editor
//! - `factory`: widget families selected by platform
//! - `bridge`: shapes drawn through a swappable drawing API
//! - `decorator`: text wrapped in nested formatting tags

pub mod bridge;
pub mod decorator;
pub mod factory;
pub mod strategy;
