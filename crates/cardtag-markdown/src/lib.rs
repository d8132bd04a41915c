//! Markdown to fragment-tree conversion for card text.
//!
//! Card text blocks carry a small markdown dialect (bold, italic, links,
//! lists). This crate parses that markdown with `pulldown-cmark` and returns
//! an ordered sequence of [`Fragment`] trees instead of an HTML string, so the
//! renderer can restyle the result before it is ever serialized.
//!
//! # Example
//!
//! ```rust
//! use cardtag_markdown::{convert, Fragment};
//!
//! let fragments = convert("Hello **world**");
//! assert_eq!(fragments.len(), 1);
//!
//! let paragraph = fragments[0].as_element().unwrap();
//! assert_eq!(paragraph.name, "p");
//! assert_eq!(paragraph.text_content(), "Hello world");
//! ```
//!
//! # Output grammar
//!
//! Block fragments: `p`, `h1`..`h6`, `blockquote`, `pre`, `ul`, `ol`, `li`, `hr`.
//! Inline fragments: `strong`, `em`, `del`, `code`, `a`, `img`, `br`, and
//! [`Fragment::Text`] runs. Nothing else is produced.
//!
//! # Sanitization
//!
//! - Raw HTML in the input never becomes an element. It is emitted as a
//!   literal [`Fragment::Text`] run, which any serializer escapes.
//! - Link and image destinations are kept only when [`is_safe_url`] accepts
//!   them (`http`, `https`, `mailto`, or relative).
//! - Trees are never deeper than [`MAX_NESTING`] elements, however deeply
//!   the input nests quotes or lists.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag};

/// URL schemes allowed in `href` and `src` attributes.
pub const SAFE_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Deepest element nesting produced. Elements opened below this depth are
/// dropped and their content goes to the innermost open element.
pub const MAX_NESTING: usize = 32;

/// One node of converted markdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// A structural or inline element such as `p`, `strong` or `a`.
    Element(ElementFragment),
    /// A run of literal text.
    Text(String),
}

impl Fragment {
    /// Returns the element if this fragment is one.
    pub fn as_element(&self) -> Option<&ElementFragment> {
        match self {
            Fragment::Element(element) => Some(element),
            Fragment::Text(_) => None,
        }
    }

    /// Concatenated text of this fragment and all its descendants.
    pub fn text_content(&self) -> String {
        match self {
            Fragment::Element(element) => element.text_content(),
            Fragment::Text(text) => text.clone(),
        }
    }
}

/// An element fragment with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementFragment {
    /// Lower-case tag name.
    pub name: String,
    /// Attributes in the order they were produced.
    pub attributes: Vec<(String, String)>,
    /// Child fragments in document order.
    pub children: Vec<Fragment>,
}

impl ElementFragment {
    /// Creates an empty element.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Looks up an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Concatenated text of all descendants.
    pub fn text_content(&self) -> String {
        self.children.iter().map(Fragment::text_content).collect()
    }

    fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.push((name.to_string(), value.into()));
        self
    }
}

/// A configurable markdown converter.
///
/// The default converter recognizes CommonMark plus `~~strikethrough~~`.
#[derive(Debug, Clone, Copy)]
pub struct MarkdownConverter {
    options: Options,
}

impl Default for MarkdownConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownConverter {
    /// Creates a converter with strikethrough enabled.
    pub fn new() -> Self {
        Self {
            options: Options::ENABLE_STRIKETHROUGH,
        }
    }

    /// Enables or disables `~~strikethrough~~` parsing.
    pub fn strikethrough(mut self, enabled: bool) -> Self {
        self.options.set(Options::ENABLE_STRIKETHROUGH, enabled);
        self
    }

    /// Converts markdown into an ordered sequence of fragment trees.
    ///
    /// Conversion is deterministic and never fails: input that is not valid
    /// markdown is treated as literal text, as CommonMark prescribes.
    pub fn convert(&self, input: &str) -> Vec<Fragment> {
        let mut tree = TreeBuilder::default();

        for event in Parser::new_ext(input, self.options) {
            match event {
                Event::Start(tag) => tree.open(open_element(tag)),
                Event::End(_) => tree.close(),
                Event::Text(text) => tree.text(&text),
                // Raw markup is never trusted; keep it visible as text.
                Event::Html(raw) | Event::InlineHtml(raw) => tree.text(&raw),
                Event::Code(code) => {
                    let mut element = ElementFragment::new("code");
                    element.children.push(Fragment::Text(code.to_string()));
                    tree.leaf(element);
                }
                Event::SoftBreak => tree.text("\n"),
                Event::HardBreak => tree.leaf(ElementFragment::new("br")),
                Event::Rule => tree.leaf(ElementFragment::new("hr")),
                Event::TaskListMarker(checked) => tree.text(if checked { "[x] " } else { "[ ] " }),
                _ => {}
            }
        }

        tree.finish()
    }
}

/// Converts markdown with the default [`MarkdownConverter`].
pub fn convert(input: &str) -> Vec<Fragment> {
    MarkdownConverter::new().convert(input)
}

/// Returns true when a link destination may be emitted as an attribute.
///
/// Relative URLs (no scheme) are accepted; absolute URLs must use one of
/// [`SAFE_SCHEMES`]. Destinations containing control characters are
/// rejected outright since browsers strip them before reading the scheme.
///
/// ```rust
/// use cardtag_markdown::is_safe_url;
///
/// assert!(is_safe_url("https://example.com"));
/// assert!(is_safe_url("/relative/path"));
/// assert!(!is_safe_url("javascript:alert(1)"));
/// ```
pub fn is_safe_url(url: &str) -> bool {
    let url = url.trim();
    if url.chars().any(char::is_control) {
        return false;
    }

    match url.find([':', '/', '?', '#']) {
        Some(index) if url[index..].starts_with(':') => {
            let scheme = url[..index].to_ascii_lowercase();
            SAFE_SCHEMES.contains(&scheme.as_str())
        }
        _ => true,
    }
}

fn open_element(tag: Tag<'_>) -> ElementFragment {
    match tag {
        Tag::Paragraph | Tag::HtmlBlock => ElementFragment::new("p"),
        Tag::Heading { level, .. } => ElementFragment::new(heading_name(level)),
        Tag::BlockQuote(_) => ElementFragment::new("blockquote"),
        Tag::CodeBlock(kind) => {
            let pre = ElementFragment::new("pre");
            match kind {
                CodeBlockKind::Fenced(info) => match info.split_whitespace().next() {
                    Some(language) => pre.with_attribute("class", format!("language-{language}")),
                    None => pre,
                },
                CodeBlockKind::Indented => pre,
            }
        }
        Tag::List(Some(start)) if start != 1 => {
            ElementFragment::new("ol").with_attribute("start", start.to_string())
        }
        Tag::List(Some(_)) => ElementFragment::new("ol"),
        Tag::List(None) => ElementFragment::new("ul"),
        Tag::Item => ElementFragment::new("li"),
        Tag::Emphasis => ElementFragment::new("em"),
        Tag::Strong => ElementFragment::new("strong"),
        Tag::Strikethrough => ElementFragment::new("del"),
        Tag::Link {
            dest_url, title, ..
        } => {
            let mut link = ElementFragment::new("a");
            if is_safe_url(&dest_url) {
                link = link.with_attribute("href", dest_url.to_string());
            }
            if !title.is_empty() {
                link = link.with_attribute("title", title.to_string());
            }
            link
        }
        Tag::Image {
            dest_url, title, ..
        } => {
            let mut image = ElementFragment::new("img");
            if is_safe_url(&dest_url) {
                image = image.with_attribute("src", dest_url.to_string());
            }
            if !title.is_empty() {
                image = image.with_attribute("title", title.to_string());
            }
            image
        }
        _ => ElementFragment::new("span"),
    }
}

fn heading_name(level: HeadingLevel) -> &'static str {
    match level {
        HeadingLevel::H1 => "h1",
        HeadingLevel::H2 => "h2",
        HeadingLevel::H3 => "h3",
        HeadingLevel::H4 => "h4",
        HeadingLevel::H5 => "h5",
        HeadingLevel::H6 => "h6",
    }
}

/// Assembles fragments from the flat start/end event stream.
#[derive(Default)]
struct TreeBuilder {
    roots: Vec<Fragment>,
    open: Vec<ElementFragment>,
    // Start events dropped past MAX_NESTING whose end is still pending.
    flattened: usize,
}

impl TreeBuilder {
    fn open(&mut self, element: ElementFragment) {
        if self.open.len() >= MAX_NESTING {
            self.flattened += 1;
            return;
        }
        self.open.push(element);
    }

    // pulldown-cmark always balances start and end events, so the end tag
    // itself carries no information we need.
    fn close(&mut self) {
        if self.flattened > 0 {
            self.flattened -= 1;
            return;
        }
        if let Some(mut element) = self.open.pop() {
            if element.name == "img" {
                let alt = element.text_content();
                element.children.clear();
                element.attributes.push(("alt".to_string(), alt));
            }
            self.append(Fragment::Element(element));
        }
    }

    fn leaf(&mut self, element: ElementFragment) {
        self.append(Fragment::Element(element));
    }

    fn text(&mut self, text: &str) {
        if !text.is_empty() {
            self.append(Fragment::Text(text.to_string()));
        }
    }

    fn append(&mut self, fragment: Fragment) {
        let siblings = match self.open.last_mut() {
            Some(parent) => &mut parent.children,
            None => &mut self.roots,
        };

        // The parser splits text at every potential delimiter; merge the runs back.
        if let (Some(Fragment::Text(previous)), Fragment::Text(next)) = (siblings.last_mut(), &fragment) {
            previous.push_str(next);
            return;
        }
        siblings.push(fragment);
    }

    fn finish(mut self) -> Vec<Fragment> {
        while !self.open.is_empty() {
            self.close();
        }
        self.roots
    }
}
