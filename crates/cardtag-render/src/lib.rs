//! # Cardtag Render - Adaptive Cards as Styled Tag Trees
//!
//! `cardtag-render` turns an Adaptive Card document into a tree of generic
//! [`Tag`]s (element name, classes, inline styles, attributes, text and
//! children), laid out under a host-supplied [`HostConfig`]. The tree is
//! independent of any output format; serialize it, walk it, or hand it to an
//! HTML writer.
//!
//! ## Core Concepts
//!
//! - [`document`]: the card model, deserialized from Adaptive Card JSON
//! - [`HostConfig`]: spacing, colors, font sizes and action layout of the host
//! - [`CardRenderer`]: renders a card in one pass and collects warnings
//! - [`RendererRegistry`] / [`ActionTransformers`]: per-type rendering rules,
//!   replaceable by the host
//! - [`RenderContext`]: per-pass state handed to every renderer
//!
//! ## Quick Start
//!
//! ```rust
//! use cardtag_render::{CardRenderer, HostConfig, SequentialIds};
//! use cardtag_render::document::AdaptiveCard;
//!
//! let card = AdaptiveCard::from_json(r#"{
//!     "type": "AdaptiveCard",
//!     "version": "1.0",
//!     "body": [{ "type": "TextBlock", "text": "Hello **world**" }],
//!     "actions": [{ "type": "Action.OpenUrl", "title": "Docs", "url": "https://example.com/docs" }]
//! }"#).unwrap();
//!
//! let renderer = CardRenderer::new(HostConfig::default()).with_id_source(SequentialIds::new());
//! let rendered = renderer.render_card(&card).unwrap();
//!
//! let button = rendered.tag.find_by_class("ac-pushButton").unwrap();
//! assert_eq!(button.attribute("data-ac-url"), Some("https://example.com/docs"));
//! ```
//!
//! ## Custom Renderers
//!
//! Every node type is rendered by a function registered under its kind.
//! Hosts override or remove entries before rendering:
//!
//! ```rust
//! use cardtag_render::{CardRenderer, Tag};
//! use cardtag_render::document::{AdaptiveCard, Element, Image, TextBlock};
//!
//! let mut renderer = CardRenderer::default();
//! renderer
//!     .renderers_mut()
//!     .set::<TextBlock, _>(|block, _ctx| Ok(Some(Tag::new("p").text(block.text.clone()))))
//!     .remove::<Image>();
//!
//! let card = AdaptiveCard::new().element(Element::TextBlock(TextBlock::new("plain")));
//! let rendered = renderer.render_card(&card).unwrap();
//! assert_eq!(rendered.tag.children()[0].name(), "p");
//! ```
//!
//! Removed or unknown types are skipped and reported as warnings rather than
//! failing the card.

pub mod config;
mod context;
pub mod document;
mod error;
mod id;
mod layout;
mod markdown;
pub mod prelude;
mod registry;
mod renderer;
mod renderers;
mod tag;
pub mod text_functions;

// Output tree
pub use tag::{px, Descendants, StyleKey, Tag};

// Configuration
pub use config::{css_color, HostConfig};

// Rendering
pub use context::{RenderContext, DEFAULT_MAX_DEPTH};
pub use registry::{ActionTransformers, RenderResult, RendererRegistry};
pub use renderer::{CardRenderer, ParseVersionError, RenderedCard, SchemaVersion};

// Building blocks for custom renderers
pub use layout::{
    add_container_elements, add_separator, build_action_strip, column_denominator, column_flex,
    column_separator_tag, separator_tag,
};
pub use markdown::markdown_to_tags;
pub use renderers::{add_action_attributes, add_select_action};

// Ids
pub use id::{IdSource, RandomIds, SequentialIds};

// Errors and warnings
pub use error::{CardRenderError, ConfigError, RenderError, RenderWarning, WarningKind};
