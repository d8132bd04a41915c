//! Common imports for rendering cards and writing custom renderers.
//!
//! ```rust
//! use cardtag_render::prelude::*;
//!
//! let mut renderer = CardRenderer::new(HostConfig::default());
//! renderer
//!     .renderers_mut()
//!     .set::<Image, _>(|image, _ctx| {
//!         Ok(Some(Tag::new("img").attr("src", image.url.as_str())))
//!     });
//!
//! let card = AdaptiveCard::new().element(Element::Image(Image {
//!     url: "https://example.com/a.png".into(),
//!     ..Image::default()
//! }));
//! let rendered = renderer.render_card(&card).unwrap();
//! assert_eq!(rendered.tag.children()[0].attribute("src"), Some("https://example.com/a.png"));
//! ```

// Rendering
pub use crate::{CardRenderer, RenderContext, RenderResult, RenderedCard};

// Output tree
pub use crate::{px, StyleKey, Tag};

// Configuration
pub use crate::HostConfig;

// Document model
pub use crate::document::{
    Action, AdaptiveCard, ChoiceSetInput, Column, ColumnSet, Container, DateInput, Element,
    FactSet, Image, ImageSet, NumberInput, OpenUrlAction, ShowCardAction, SubmitAction,
    TextBlock, TextInput, TimeInput, ToggleInput,
};

// Errors
pub use crate::{CardRenderError, RenderError, RenderWarning, WarningKind};
