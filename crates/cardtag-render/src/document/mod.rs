//! The card document model.
//!
//! Cards deserialize from Adaptive Card JSON (or anything `serde` reads):
//! elements and actions are selected by their `type` field, fields are
//! camelCase and every field has a default. Element and action types the
//! model does not know become [`Element::Unknown`] / [`Action::Unknown`]
//! instead of failing the document; the renderer skips them with a warning.

mod actions;
mod card;
mod elements;
mod inputs;
mod keywords;
mod node;

pub use actions::{Action, OpenUrlAction, ShowCardAction, SubmitAction};
pub use card::AdaptiveCard;
pub use elements::{
    Column, ColumnSet, Container, Element, Fact, FactSet, Image, ImageSet, TextBlock, UnknownNode,
};
pub use inputs::{
    Choice, ChoiceSetInput, DateInput, NumberInput, TextInput, TimeInput, ToggleInput,
};
pub use keywords::{
    ActionsOrientation, ChoiceInputStyle, HorizontalAlignment, ImageSize, ImageStyle,
    ParseKeywordError, Spacing, TextColor, TextSize, TextWeight,
};
pub use node::{CardNode, Node, NodeKind};

fn type_tag(value: &serde_json::Value) -> String {
    value
        .get("type")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn from_value<T, E>(value: serde_json::Value) -> Result<T, E>
where
    T: serde::de::DeserializeOwned,
    E: serde::de::Error,
{
    serde_json::from_value(value).map_err(E::custom)
}
