//! The top-level card renderer.
//!
//! [`CardRenderer`] owns a host configuration, both registries and an id
//! source. Each call to [`CardRenderer::render_card`] runs one independent
//! pass with a fresh [`RenderContext`]; the renderer itself is never mutated
//! while rendering, so one instance can serve many threads.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::config::HostConfig;
use crate::context::{RenderContext, DEFAULT_MAX_DEPTH};
use crate::document::AdaptiveCard;
use crate::error::{CardRenderError, RenderError, RenderWarning, WarningKind};
use crate::id::{IdSource, RandomIds};
use crate::registry::{ActionTransformers, RendererRegistry};
use crate::tag::Tag;

/// A `major.minor` schema version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SchemaVersion {
    pub major: u32,
    pub minor: u32,
}

impl SchemaVersion {
    /// The newest schema this renderer understands.
    pub const SUPPORTED: SchemaVersion = SchemaVersion { major: 1, minor: 0 };

    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl PartialOrd for SchemaVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SchemaVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor).cmp(&(other.major, other.minor))
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// A version string that is not `major` or `major.minor`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid schema version {0:?}")]
pub struct ParseVersionError(pub String);

impl FromStr for SchemaVersion {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseVersionError(s.to_string());
        let trimmed = s.trim();
        let (major, minor) = match trimmed.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (trimmed, "0"),
        };
        let major = major.parse().map_err(|_| invalid())?;
        let minor = minor.parse().map_err(|_| invalid())?;
        Ok(SchemaVersion { major, minor })
    }
}

/// The result of a successful render.
#[derive(Debug, Clone)]
pub struct RenderedCard<'c> {
    /// Root of the produced tree.
    pub tag: Tag,
    /// Warnings collected during the pass, in the order they occurred.
    pub warnings: Vec<RenderWarning>,
    /// The card that was rendered.
    pub card: &'c AdaptiveCard,
}

/// Renders cards under a host configuration.
///
/// ```rust
/// use cardtag_render::{CardRenderer, HostConfig, SequentialIds};
/// use cardtag_render::document::AdaptiveCard;
///
/// let card = AdaptiveCard::from_json(r#"{
///     "type": "AdaptiveCard",
///     "body": [{ "type": "TextBlock", "text": "Hello" }]
/// }"#).unwrap();
///
/// let renderer = CardRenderer::new(HostConfig::default()).with_id_source(SequentialIds::new());
/// let rendered = renderer.render_card(&card).unwrap();
/// assert!(rendered.tag.has_class("ac-adaptivecard"));
/// assert!(rendered.warnings.is_empty());
/// ```
pub struct CardRenderer {
    config: HostConfig,
    renderers: RendererRegistry,
    transformers: ActionTransformers,
    ids: Arc<dyn IdSource>,
    max_depth: usize,
}

impl CardRenderer {
    /// Creates a renderer with the built-in renderers and transformers.
    pub fn new(config: HostConfig) -> Self {
        Self {
            config,
            renderers: RendererRegistry::with_defaults(),
            transformers: ActionTransformers::with_defaults(),
            ids: Arc::new(RandomIds),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Replaces the id source.
    pub fn with_id_source(mut self, ids: impl IdSource + 'static) -> Self {
        self.ids = Arc::new(ids);
        self
    }

    /// Sets the nesting limit applied to every pass.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// The renderer registry, for overriding or removing renderers.
    pub fn renderers_mut(&mut self) -> &mut RendererRegistry {
        &mut self.renderers
    }

    /// The action transformers, for overriding or removing transformers.
    pub fn transformers_mut(&mut self) -> &mut ActionTransformers {
        &mut self.transformers
    }

    /// Renders `card` into a tag tree.
    ///
    /// A `minVersion` newer than [`SchemaVersion::SUPPORTED`] fails before
    /// anything is rendered; one that does not parse is recorded as a
    /// warning. Any error raised during the pass discards the partial tree;
    /// the error carries the card's fallback text.
    ///
    /// # Panics
    ///
    /// Panics are not part of the error contract. A custom renderer or
    /// transformer that panics unwinds through this call unchanged.
    pub fn render_card<'c>(&self, card: &'c AdaptiveCard) -> Result<RenderedCard<'c>, CardRenderError> {
        let min_version = card.min_version.as_deref().map(|required| {
            (required, required.parse::<SchemaVersion>())
        });
        if let Some((required, Ok(version))) = &min_version {
            if *version > SchemaVersion::SUPPORTED {
                return Err(CardRenderError::UnsupportedSchema {
                    required: required.to_string(),
                    supported: SchemaVersion::SUPPORTED.to_string(),
                    fallback_text: card.fallback_text.clone(),
                });
            }
        }

        tracing::debug!(nodes = card.node_count(), "rendering card");

        let mut ctx = RenderContext::new(
            &self.config,
            &self.renderers,
            &self.transformers,
            self.ids.as_ref(),
        )
        .with_max_depth(self.max_depth);
        if let Some((_, Err(err))) = min_version {
            ctx.warn(WarningKind::SchemaVersion, format!("minVersion: {}", err));
        }
        check_version(card, &mut ctx);

        let failed = |source: RenderError| CardRenderError::Failed {
            source,
            fallback_text: card.fallback_text.clone(),
        };
        let tag = ctx
            .render(card)
            .map_err(failed)?
            .ok_or_else(|| failed(RenderError::custom("no renderer produced the card root")))?;

        let warnings = ctx.into_warnings();
        tracing::debug!(warnings = warnings.len(), "rendered card");

        Ok(RenderedCard { tag, warnings, card })
    }
}

impl Default for CardRenderer {
    fn default() -> Self {
        Self::new(HostConfig::default())
    }
}

impl fmt::Debug for CardRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardRenderer")
            .field("renderers", &self.renderers)
            .field("max_depth", &self.max_depth)
            .finish_non_exhaustive()
    }
}

fn check_version(card: &AdaptiveCard, ctx: &mut RenderContext<'_>) {
    let Some(version) = card.version.as_deref() else {
        return;
    };
    match version.parse::<SchemaVersion>() {
        Ok(parsed) if parsed > SchemaVersion::SUPPORTED => ctx.warn(
            WarningKind::SchemaVersion,
            format!(
                "card version {} is newer than supported version {}",
                parsed,
                SchemaVersion::SUPPORTED
            ),
        ),
        Ok(_) => {}
        Err(err) => ctx.warn(WarningKind::SchemaVersion, err.to_string()),
    }
}
