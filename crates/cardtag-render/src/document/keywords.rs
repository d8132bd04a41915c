//! Keyword enums shared by the document model and the host configuration.
//!
//! Card JSON is loose about keyword casing (`"extraLarge"`, `"ExtraLarge"`,
//! `"extralarge"` all occur in the wild), so every keyword parses
//! case-insensitively. Unknown keywords deserialize to the enum's default
//! instead of failing the whole document.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A keyword string that names no variant of the target enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} keyword: {value:?}")]
pub struct ParseKeywordError {
    /// The keyword family, e.g. `Spacing`.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $name:ident (default $default:ident) {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// The canonical keyword spelling.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl FromStr for $name {
            type Err = ParseKeywordError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                $(if s.eq_ignore_ascii_case($text) {
                    return Ok($name::$variant);
                })+
                Err(ParseKeywordError {
                    kind: stringify!($name),
                    value: s.to_string(),
                })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Ok(raw.parse().unwrap_or_default())
            }
        }
    };
}

keyword_enum! {
    /// Vertical gap requested before an element.
    Spacing (default Default) {
        None => "none",
        Small => "small",
        Default => "default",
        Medium => "medium",
        Large => "large",
        ExtraLarge => "extraLarge",
        Padding => "padding",
    }
}

keyword_enum! {
    /// Horizontal alignment of text, images and action strips.
    HorizontalAlignment (default Left) {
        Left => "left",
        Center => "center",
        Right => "right",
        Stretch => "stretch",
    }
}

keyword_enum! {
    TextSize (default Default) {
        Small => "small",
        Default => "default",
        Medium => "medium",
        Large => "large",
        ExtraLarge => "extraLarge",
    }
}

keyword_enum! {
    TextWeight (default Default) {
        Lighter => "lighter",
        Default => "default",
        Bolder => "bolder",
    }
}

keyword_enum! {
    /// Semantic text color, resolved through the host palette.
    TextColor (default Default) {
        Default => "default",
        Dark => "dark",
        Light => "light",
        Accent => "accent",
        Good => "good",
        Warning => "warning",
        Attention => "attention",
    }
}

keyword_enum! {
    ImageSize (default Auto) {
        Auto => "auto",
        Stretch => "stretch",
        Small => "small",
        Medium => "medium",
        Large => "large",
    }
}

keyword_enum! {
    ImageStyle (default Default) {
        Default => "default",
        /// Cropped to a circle.
        Person => "person",
    }
}

keyword_enum! {
    /// Presentation of a single-select choice set.
    ChoiceInputStyle (default Compact) {
        /// A dropdown.
        Compact => "compact",
        /// One radio control per choice.
        Expanded => "expanded",
    }
}

keyword_enum! {
    ActionsOrientation (default Horizontal) {
        Horizontal => "horizontal",
        Vertical => "vertical",
    }
}
