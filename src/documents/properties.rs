//! Page and property types mirroring the document service's wire format.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Map of property name to typed value, as stored on a page.
pub type PropertyMap = BTreeMap<String, PropertyValue>;

/// One fragment of a rich-text property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextFragment {
    pub plain_text: String,
}

impl RichTextFragment {
    pub fn new(plain_text: impl Into<String>) -> Self {
        Self {
            plain_text: plain_text.into(),
        }
    }
}

/// A typed property value on a page.
///
/// Serializes in the service's tagged format, e.g.
/// `{"type": "rich_text", "rich_text": [{"plain_text": "a"}]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    RichText { rich_text: Vec<RichTextFragment> },
    Title { title: Vec<RichTextFragment> },
    Checkbox { checkbox: bool },
    Number { number: f64 },
    Select { select: String },
}

impl PropertyValue {
    /// Build a rich-text value from plain-text fragments.
    pub fn rich_text<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::RichText {
            rich_text: fragments.into_iter().map(RichTextFragment::new).collect(),
        }
    }

    /// Build a title value from plain-text fragments.
    pub fn title<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Title {
            title: fragments.into_iter().map(RichTextFragment::new).collect(),
        }
    }

    pub fn checkbox(value: bool) -> Self {
        Self::Checkbox { checkbox: value }
    }

    /// Extract the plain-text content of a text-like property.
    ///
    /// Concatenates the fragments of a rich-text or title value. Returns
    /// `None` for non-text property types.
    pub fn plain_text(&self) -> Option<String> {
        let fragments = match self {
            Self::RichText { rich_text } => rich_text,
            Self::Title { title } => title,
            _ => return None,
        };

        Some(
            fragments
                .iter()
                .map(|f| f.plain_text.as_str())
                .collect::<String>(),
        )
    }
}

/// The property values of a page, as delivered in automation events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageData {
    #[serde(default)]
    pub properties: PropertyMap,
}

impl PageData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, builder style.
    pub fn with_property(mut self, name: impl Into<String>, value: PropertyValue) -> Self {
        self.properties.insert(name.into(), value);
        self
    }

    /// Look up a property by name.
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }
}

/// A page as returned by the document service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    #[serde(flatten)]
    pub data: PageData,
}
