//! The generic output node.
//!
//! A [`Tag`] is a named element with classes, inline styles, attributes,
//! optional literal text and ordered children. Renderers build tags with the
//! consuming builder methods and adjust already-built tags with the `&mut`
//! setters:
//!
//! ```rust
//! use cardtag_render::{StyleKey, Tag};
//!
//! let mut tag = Tag::new("div")
//!     .class("ac-container")
//!     .style(StyleKey::Display, "flex")
//!     .child(Tag::new("span").text("hi"));
//!
//! tag.set_style(StyleKey::Display, "block");
//! assert_eq!(tag.style_value(StyleKey::Display), Some("block"));
//! assert_eq!(tag.children().len(), 1);
//! ```
//!
//! Style properties are a closed [`StyleKey`] enum; each key knows its CSS
//! property name. Tags serialize with `serde` so a downstream writer can turn
//! them into markup or push them to a live document.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};

macro_rules! style_keys {
    ($($variant:ident => $css:literal,)+) => {
        /// An inline style property.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum StyleKey {
            $($variant,)+
        }

        impl StyleKey {
            /// All known style properties, in key order.
            pub const ALL: &'static [StyleKey] = &[$(StyleKey::$variant,)+];

            /// The CSS property name, e.g. `max-width`.
            pub fn css_name(self) -> &'static str {
                match self {
                    $(StyleKey::$variant => $css,)+
                }
            }
        }
    };
}

style_keys! {
    AlignItems => "align-items",
    BackgroundColor => "background-color",
    BackgroundImage => "background-image",
    BackgroundPosition => "background-position",
    BackgroundRepeat => "background-repeat",
    BackgroundSize => "background-size",
    BorderLeftColor => "border-left-color",
    BorderLeftStyle => "border-left-style",
    BorderLeftWidth => "border-left-width",
    BorderRadius => "border-radius",
    BorderTopColor => "border-top-color",
    BorderTopStyle => "border-top-style",
    BorderTopWidth => "border-top-width",
    BoxSizing => "box-sizing",
    Color => "color",
    Display => "display",
    Flex => "flex",
    FlexDirection => "flex-direction",
    FontFamily => "font-family",
    FontSize => "font-size",
    FontWeight => "font-weight",
    Height => "height",
    JustifyContent => "justify-content",
    LineHeight => "line-height",
    Margin => "margin",
    MarginBottom => "margin-bottom",
    MarginLeft => "margin-left",
    MarginRight => "margin-right",
    MarginTop => "margin-top",
    MaxHeight => "max-height",
    MaxWidth => "max-width",
    Overflow => "overflow",
    Padding => "padding",
    PaddingLeft => "padding-left",
    PaddingTop => "padding-top",
    TextAlign => "text-align",
    TextOverflow => "text-overflow",
    VerticalAlign => "vertical-align",
    WhiteSpace => "white-space",
    Width => "width",
    WordWrap => "word-wrap",
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

impl Serialize for StyleKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.css_name())
    }
}

/// Formats a pixel length, e.g. `px(8)` is `"8px"`.
pub fn px(value: impl fmt::Display) -> String {
    format!("{}px", value)
}

/// A node of the rendered output tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tag {
    name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    classes: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    styles: BTreeMap<StyleKey, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    attributes: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Tag>,
}

impl Tag {
    /// Creates an empty tag with the given element name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    // Builder methods

    /// Adds a class (ignored if already present).
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    /// Sets a style property, replacing any previous value.
    pub fn style(mut self, key: StyleKey, value: impl Into<String>) -> Self {
        self.set_style(key, value);
        self
    }

    /// Sets an attribute, replacing any previous value.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Sets the literal text content.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    /// Appends a child.
    pub fn child(mut self, child: Tag) -> Self {
        self.push_child(child);
        self
    }

    /// Appends every child from an iterator.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Tag>) -> Self {
        self.children.extend(children);
        self
    }

    // In-place setters

    /// Adds a class unless it is already present.
    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !class.is_empty() && !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    /// Sets a style property; the last write wins.
    pub fn set_style(&mut self, key: StyleKey, value: impl Into<String>) {
        self.styles.insert(key, value.into());
    }

    /// Removes a style property, returning its previous value.
    pub fn remove_style(&mut self, key: StyleKey) -> Option<String> {
        self.styles.remove(&key)
    }

    /// Sets an attribute; the last write wins.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Sets the literal text content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Appends a child.
    pub fn push_child(&mut self, child: Tag) {
        self.children.push(child);
    }

    // Accessors

    /// The element name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Classes in insertion order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Returns true if the tag carries `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Inline styles keyed by property.
    pub fn styles(&self) -> &BTreeMap<StyleKey, String> {
        &self.styles
    }

    /// Looks up one style property.
    pub fn style_value(&self, key: StyleKey) -> Option<&str> {
        self.styles.get(&key).map(String::as_str)
    }

    /// Attributes keyed by name.
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    /// Looks up one attribute.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// The literal text content, if any.
    pub fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Direct children.
    pub fn children(&self) -> &[Tag] {
        &self.children
    }

    /// Mutable access to the direct children.
    pub fn children_mut(&mut self) -> &mut Vec<Tag> {
        &mut self.children
    }

    /// Depth-first, pre-order iterator over all descendants (excluding `self`).
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }

    /// First descendant carrying `class`.
    pub fn find_by_class(&self, class: &str) -> Option<&Tag> {
        self.descendants().find(|tag| tag.has_class(class))
    }

    /// All descendants with the given element name.
    pub fn find_all_by_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Tag> + 'a {
        self.descendants().filter(move |tag| tag.name == name)
    }
}

/// Iterator returned by [`Tag::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a Tag>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Tag;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.stack.pop()?;
        self.stack.extend(tag.children.iter().rev());
        Some(tag)
    }
}
