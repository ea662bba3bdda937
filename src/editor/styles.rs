//! Style-format tree for the editor's format menu.

use serde::Serialize;

/// A single entry in the format menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleFormat {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub format: String,
}

impl StyleFormat {
    pub fn new(title: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: None,
            format: format.into(),
        }
    }

    /// Attach a toolbar icon name to the entry.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// A titled group of format entries, one submenu in the format dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleGroup {
    pub title: String,
    pub items: Vec<StyleFormat>,
}

impl StyleGroup {
    pub fn new(title: impl Into<String>, items: Vec<StyleFormat>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }
}

/// The stock format menu: headers, inline styles, alignment, and blocks.
pub fn default_style_formats() -> Vec<StyleGroup> {
    vec![
        StyleGroup::new(
            "Headers",
            vec![
                StyleFormat::new("Header 2", "h2"),
                StyleFormat::new("Header 3", "h3"),
                StyleFormat::new("Header 4", "h4"),
                StyleFormat::new("Header 5", "h5"),
                StyleFormat::new("Header 6", "h6"),
            ],
        ),
        StyleGroup::new(
            "Inline",
            vec![
                StyleFormat::new("Strikethrough", "strikethrough").with_icon("strikethrough"),
                StyleFormat::new("Superscript", "superscript").with_icon("superscript"),
                StyleFormat::new("Subscript", "subscript").with_icon("subscript"),
            ],
        ),
        StyleGroup::new(
            "Alignment",
            vec![
                StyleFormat::new("Left", "alignleft").with_icon("alignleft"),
                StyleFormat::new("Center", "aligncenter").with_icon("aligncenter"),
                StyleFormat::new("Right", "alignright").with_icon("alignright"),
                StyleFormat::new("Justify", "alignjustify").with_icon("alignjustify"),
            ],
        ),
        StyleGroup::new(
            "Blocks",
            vec![
                StyleFormat::new("Paragraph", "p"),
                StyleFormat::new("Div", "div"),
            ],
        ),
    ]
}
