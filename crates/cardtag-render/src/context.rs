//! Per-pass render state.
//!
//! A [`RenderContext`] is created for every top-level render and discarded
//! afterwards. It is a read view over the host configuration and the
//! registries, plus the three pieces of state a pass accumulates:
//!
//! - the warning list (append-only)
//! - the ids issued so far, so generated ids never repeat within a pass
//! - the current nesting depth, bounded by a configurable maximum
//!
//! Renderers recurse through [`RenderContext::render`], which dispatches on
//! the node's kind:
//!
//! ```rust
//! use cardtag_render::{
//!     ActionTransformers, HostConfig, RandomIds, RenderContext, RendererRegistry,
//! };
//! use cardtag_render::document::TextBlock;
//!
//! let config = HostConfig::default();
//! let renderers = RendererRegistry::with_defaults();
//! let transformers = ActionTransformers::with_defaults();
//! let mut ctx = RenderContext::new(&config, &renderers, &transformers, &RandomIds);
//!
//! let tag = ctx.render(&TextBlock::new("Hello")).unwrap().unwrap();
//! assert!(tag.has_class("ac-textblock"));
//! ```

use std::collections::HashSet;

use crate::config::{css_color, HostConfig};
use crate::document::{Node, TextColor};
use crate::error::{RenderError, RenderWarning, WarningKind};
use crate::id::IdSource;
use crate::registry::{ActionTransformers, RenderResult, RendererRegistry};
use crate::tag::Tag;

/// Default limit on nested renders.
pub const DEFAULT_MAX_DEPTH: usize = 64;

// Fresh candidates requested from the id source before falling back to
// suffixing the last one.
const ID_ATTEMPTS: usize = 8;

/// State and configuration for one render pass.
pub struct RenderContext<'r> {
    config: &'r HostConfig,
    renderers: &'r RendererRegistry,
    transformers: &'r ActionTransformers,
    ids: &'r dyn IdSource,
    max_depth: usize,
    depth: usize,
    warnings: Vec<RenderWarning>,
    issued_ids: HashSet<String>,
    id_requests: u64,
}

impl<'r> RenderContext<'r> {
    /// Creates a context with the default depth limit.
    pub fn new(
        config: &'r HostConfig,
        renderers: &'r RendererRegistry,
        transformers: &'r ActionTransformers,
        ids: &'r dyn IdSource,
    ) -> Self {
        Self {
            config,
            renderers,
            transformers,
            ids,
            max_depth: DEFAULT_MAX_DEPTH,
            depth: 0,
            warnings: Vec::new(),
            issued_ids: HashSet::new(),
            id_requests: 0,
        }
    }

    /// Sets the maximum nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The host configuration for this pass.
    pub fn config(&self) -> &'r HostConfig {
        self.config
    }

    /// Renders a node through the registry.
    ///
    /// A kind with no registered renderer records an unsupported-type warning
    /// and yields `Ok(None)`. Nesting beyond the depth limit is an error.
    pub fn render<'n>(&mut self, node: impl Into<Node<'n>>) -> RenderResult {
        let node = node.into();
        let kind = node.kind();

        let renderers = self.renderers;
        let Some(renderer) = renderers.get(kind) else {
            self.warn(
                WarningKind::UnsupportedType,
                format!("no renderer registered for element type {:?}", node.type_name()),
            );
            return Ok(None);
        };

        if self.depth >= self.max_depth {
            return Err(RenderError::MaxDepthExceeded(self.max_depth));
        }

        tracing::trace!(kind = %kind, depth = self.depth, "rendering node");
        self.depth += 1;
        let result = renderer(node, self);
        self.depth -= 1;
        result
    }

    /// Runs the registered action transformer for `node`, if any.
    pub fn transform_action<'n>(
        &mut self,
        node: impl Into<Node<'n>>,
        tag: &mut Tag,
    ) -> Result<(), RenderError> {
        let node = node.into();
        let transformers = self.transformers;
        match transformers.get(node.kind()) {
            Some(transformer) => transformer(node, tag, self),
            None => Ok(()),
        }
    }

    /// Returns an element id not yet issued in this pass.
    pub fn generate_id(&mut self) -> String {
        let mut candidate = self.next_candidate();
        for _ in 0..ID_ATTEMPTS {
            if self.issued_ids.insert(candidate.clone()) {
                return candidate;
            }
            candidate = self.next_candidate();
        }

        let mut suffix = 2;
        loop {
            let suffixed = format!("{}-{}", candidate, suffix);
            if self.issued_ids.insert(suffixed.clone()) {
                return suffixed;
            }
            suffix += 1;
        }
    }

    fn next_candidate(&mut self) -> String {
        self.id_requests += 1;
        self.ids.next_id(self.id_requests)
    }

    /// Records an externally assigned id so generated ids never collide with it.
    pub fn reserve_id(&mut self, id: impl Into<String>) -> bool {
        self.issued_ids.insert(id.into())
    }

    /// CSS color for a semantic text color.
    pub fn color(&self, color: TextColor, subtle: bool) -> String {
        css_color(self.config.foreground_color(color, subtle))
    }

    /// Records a warning.
    pub fn warn(&mut self, kind: WarningKind, message: impl Into<String>) {
        let warning = RenderWarning::new(kind, message);
        tracing::warn!(kind = ?warning.kind, "{}", warning.message);
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[RenderWarning] {
        &self.warnings
    }

    /// Consumes the context, returning the collected warnings.
    pub fn into_warnings(self) -> Vec<RenderWarning> {
        self.warnings
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }
}
