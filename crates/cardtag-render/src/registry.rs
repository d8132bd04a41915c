//! Renderer and action-transformer registries.
//!
//! Both registries map a [`NodeKind`] to a function. Registration is typed:
//! the function receives the concrete node (`&TextBlock`, `&OpenUrlAction`,
//! ...) and the registry stores an erased wrapper that downcasts the
//! [`Node`] view before calling it.
//!
//! ```rust
//! use cardtag_render::{RendererRegistry, Tag};
//! use cardtag_render::document::TextBlock;
//!
//! let mut renderers = RendererRegistry::with_defaults();
//! renderers.set::<TextBlock, _>(|block, _ctx| {
//!     Ok(Some(Tag::new("p").text(block.text.clone())))
//! });
//! ```
//!
//! Registries are plain values owned by a [`CardRenderer`](crate::CardRenderer)
//! and lent read-only to each render pass.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::context::RenderContext;
use crate::document::{CardNode, Node, NodeKind};
use crate::error::RenderError;
use crate::renderers;
use crate::tag::Tag;

/// Result of rendering one node. `Ok(None)` means the node produces no output.
pub type RenderResult = Result<Option<Tag>, RenderError>;

type ErasedRenderer = Arc<dyn Fn(Node<'_>, &mut RenderContext<'_>) -> RenderResult + Send + Sync>;

type ErasedTransformer =
    Arc<dyn Fn(Node<'_>, &mut Tag, &mut RenderContext<'_>) -> Result<(), RenderError> + Send + Sync>;

/// Maps node kinds to renderers.
#[derive(Clone, Default)]
pub struct RendererRegistry {
    renderers: HashMap<NodeKind, ErasedRenderer>,
}

impl RendererRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the built-in renderer for every node kind.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        renderers::register_defaults(&mut registry);
        registry
    }

    /// Registers (or replaces) the renderer for `T`.
    pub fn set<T, F>(&mut self, renderer: F) -> &mut Self
    where
        T: CardNode,
        F: Fn(&T, &mut RenderContext<'_>) -> RenderResult + Send + Sync + 'static,
    {
        self.renderers.insert(T::KIND, erase_renderer(renderer));
        self
    }

    /// Removes the renderer for `T`; nodes of that kind are then skipped
    /// with an unsupported-type warning.
    pub fn remove<T: CardNode>(&mut self) -> &mut Self {
        self.renderers.remove(&T::KIND);
        self
    }

    /// Returns true if a renderer is registered for `kind`.
    pub fn contains(&self, kind: NodeKind) -> bool {
        self.renderers.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }

    pub(crate) fn get(&self, kind: NodeKind) -> Option<&ErasedRenderer> {
        self.renderers.get(&kind)
    }
}

impl fmt::Debug for RendererRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self.renderers.keys().collect();
        kinds.sort();
        f.debug_struct("RendererRegistry").field("kinds", &kinds).finish()
    }
}

fn erase_renderer<T, F>(renderer: F) -> ErasedRenderer
where
    T: CardNode,
    F: Fn(&T, &mut RenderContext<'_>) -> RenderResult + Send + Sync + 'static,
{
    Arc::new(move |node: Node<'_>, ctx: &mut RenderContext<'_>| {
        let typed = T::downcast(node).ok_or(RenderError::KindMismatch {
            expected: T::KIND,
            found: node.kind(),
        })?;
        renderer(typed, ctx)
    })
}

/// Maps action kinds to functions that stamp kind-specific data attributes
/// onto an already-built interactive tag.
#[derive(Clone, Default)]
pub struct ActionTransformers {
    transformers: HashMap<NodeKind, ErasedTransformer>,
}

impl ActionTransformers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the built-in transformers for open-url, submit and show-card.
    pub fn with_defaults() -> Self {
        let mut transformers = Self::new();
        renderers::register_default_transformers(&mut transformers);
        transformers
    }

    /// Registers (or replaces) the transformer for `T`.
    pub fn register<T, F>(&mut self, transformer: F) -> &mut Self
    where
        T: CardNode,
        F: Fn(&T, &mut Tag, &mut RenderContext<'_>) -> Result<(), RenderError>
            + Send
            + Sync
            + 'static,
    {
        let erased: ErasedTransformer = Arc::new(
            move |node: Node<'_>, tag: &mut Tag, ctx: &mut RenderContext<'_>| {
                let typed = T::downcast(node).ok_or(RenderError::KindMismatch {
                    expected: T::KIND,
                    found: node.kind(),
                })?;
                transformer(typed, tag, ctx)
            },
        );
        self.transformers.insert(T::KIND, erased);
        self
    }

    pub fn remove<T: CardNode>(&mut self) -> &mut Self {
        self.transformers.remove(&T::KIND);
        self
    }

    pub fn contains(&self, kind: NodeKind) -> bool {
        self.transformers.contains_key(&kind)
    }

    pub(crate) fn get(&self, kind: NodeKind) -> Option<&ErasedTransformer> {
        self.transformers.get(&kind)
    }
}

impl fmt::Debug for ActionTransformers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self.transformers.keys().collect();
        kinds.sort();
        f.debug_struct("ActionTransformers").field("kinds", &kinds).finish()
    }
}
