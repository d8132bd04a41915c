//! Error and warning types.
//!
//! Rendering has two tiers of problems:
//!
//! - [`RenderWarning`]s are collected during a pass and returned with the
//!   result. They never stop rendering.
//! - [`RenderError`]s abort the pass. At the top level they are wrapped in a
//!   [`CardRenderError`] that carries the card's fallback text, so the host
//!   can still show something.
//!
//! [`ConfigError`] covers loading a host configuration.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::document::NodeKind;

/// A fatal problem inside a render pass.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A renderer was handed a node of the wrong kind.
    #[error("renderer for {expected} received a node of kind {found}")]
    KindMismatch { expected: NodeKind, found: NodeKind },

    /// An open-url action whose URL is not an absolute URL.
    #[error("invalid action url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A submit action whose data could not be encoded.
    #[error("failed to encode submit data: {0}")]
    SubmitData(#[from] serde_json::Error),

    /// The document nests deeper than the configured limit.
    #[error("maximum nesting depth of {0} exceeded")]
    MaxDepthExceeded(usize),

    /// Raised by user-supplied renderers and transformers.
    #[error("{0}")]
    Custom(String),
}

impl RenderError {
    /// Creates a custom error.
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }
}

/// The single fatal error returned by a top-level render.
#[derive(Debug, thiserror::Error)]
pub enum CardRenderError {
    /// Rendering failed; no partial tree is produced.
    #[error("card rendering failed: {source}")]
    Failed {
        #[source]
        source: RenderError,
        fallback_text: Option<String>,
    },

    /// The card requires a newer schema than this renderer supports.
    #[error("card requires schema {required}, renderer supports {supported}")]
    UnsupportedSchema {
        required: String,
        supported: String,
        fallback_text: Option<String>,
    },
}

impl CardRenderError {
    /// The card's fallback text, if it declared one.
    pub fn fallback_text(&self) -> Option<&str> {
        match self {
            CardRenderError::Failed { fallback_text, .. }
            | CardRenderError::UnsupportedSchema { fallback_text, .. } => fallback_text.as_deref(),
        }
    }
}

/// Errors loading a [`HostConfig`](crate::HostConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON host config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML host config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The file extension is not `.json`, `.yaml` or `.yml`.
    #[error("unsupported host config format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// The category of a [`RenderWarning`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum WarningKind {
    /// No renderer is registered for a node type; the node was skipped.
    UnsupportedType,
    /// The card's `version` is newer than supported or unparseable.
    SchemaVersion,
    /// Actions beyond `maxActions` were dropped.
    MaxActionsExceeded,
}

/// A non-fatal problem found during rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderWarning {
    pub kind: WarningKind,
    pub message: String,
}

impl RenderWarning {
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for RenderWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_text_accessor() {
        let err = CardRenderError::Failed {
            source: RenderError::MaxDepthExceeded(4),
            fallback_text: Some("plain".into()),
        };
        assert_eq!(err.fallback_text(), Some("plain"));
        assert_eq!(
            err.to_string(),
            "card rendering failed: maximum nesting depth of 4 exceeded"
        );

        let err = CardRenderError::UnsupportedSchema {
            required: "2.0".into(),
            supported: "1.0".into(),
            fallback_text: None,
        };
        assert_eq!(err.fallback_text(), None);
    }

    #[test]
    fn test_kind_mismatch_message() {
        let err = RenderError::KindMismatch {
            expected: NodeKind::TextBlock,
            found: NodeKind::Image,
        };
        assert_eq!(err.to_string(), "renderer for TextBlock received a node of kind Image");
    }

    #[test]
    fn test_warning_serializes() {
        let warning = RenderWarning::new(WarningKind::UnsupportedType, "skipped Media");
        let json = serde_json::to_value(&warning).unwrap();
        assert_eq!(json["kind"], "unsupportedType");
        assert_eq!(json["message"], "skipped Media");
        assert_eq!(warning.to_string(), "skipped Media");
    }
}
