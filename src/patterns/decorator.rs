//! Decorator: wrap text in formatting tags, layer by layer.
//!
//! Each decorator renders whatever it wraps first, then adds its own tags,
//! so the innermost decorator produces the innermost tag.

pub trait Text {
    fn render(&self) -> String;
}

#[derive(Debug, Clone)]
pub struct PlainText {
    content: String,
}

impl PlainText {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl Text for PlainText {
    fn render(&self) -> String {
        self.content.clone()
    }
}

macro_rules! tag_decorator {
    ($(#[$meta:meta])* $name:ident, $tag:literal) => {
        $(#[$meta])*
        pub struct $name {
            wrapped: Box<dyn Text>,
        }

        impl $name {
            pub fn new(wrapped: Box<dyn Text>) -> Self {
                Self { wrapped }
            }
        }

        impl Text for $name {
            fn render(&self) -> String {
                format!(concat!("<", $tag, ">{}</", $tag, ">"), self.wrapped.render())
            }
        }
    };
}

tag_decorator!(
    /// Wraps in `<b>` tags.
    ///
    /// ```rust
    /// use remote_patterns::patterns::decorator::{BoldDecorator, ItalicDecorator, PlainText, Text};
    ///
    /// let text = BoldDecorator::new(Box::new(ItalicDecorator::new(Box::new(PlainText::new("hi")))));
    /// assert_eq!(text.render(), "<b><i>hi</i></b>");
    /// ```
    BoldDecorator,
    "b"
);
tag_decorator!(
    /// Wraps in `<i>` tags.
    ItalicDecorator,
    "i"
);
tag_decorator!(
    /// Wraps in `<u>` tags.
    UnderlineDecorator,
    "u"
);
