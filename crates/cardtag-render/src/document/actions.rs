//! Actions: buttons rendered in a card's action strip or attached to an
//! element as its select action.

use serde::{Deserialize, Deserializer};

use super::card::AdaptiveCard;
use super::elements::UnknownNode;

/// Gathers input values and submits them along with `data`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmitAction {
    pub title: Option<String>,
    pub data: Option<serde_json::Value>,
}

/// Opens a URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OpenUrlAction {
    pub title: Option<String>,
    pub url: String,
}

/// Reveals a nested card.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShowCardAction {
    pub title: Option<String>,
    pub card: AdaptiveCard,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Submit(SubmitAction),
    OpenUrl(OpenUrlAction),
    ShowCard(ShowCardAction),
    Unknown(UnknownNode),
}

impl Action {
    /// The button title, empty when absent.
    pub fn title(&self) -> &str {
        let title = match self {
            Action::Submit(a) => a.title.as_deref(),
            Action::OpenUrl(a) => a.title.as_deref(),
            Action::ShowCard(a) => a.title.as_deref(),
            Action::Unknown(_) => None,
        };
        title.unwrap_or("")
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let type_name = super::type_tag(&value);

        Ok(match type_name.as_str() {
            "Action.Submit" => Action::Submit(super::from_value(value)?),
            "Action.OpenUrl" => Action::OpenUrl(super::from_value(value)?),
            "Action.ShowCard" => Action::ShowCard(super::from_value(value)?),
            _ => Action::Unknown(UnknownNode { type_name }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_each_kind() {
        let actions: Vec<Action> = serde_json::from_str(
            r#"[
                {"type": "Action.Submit", "title": "Send", "data": {"x": 1}},
                {"type": "Action.OpenUrl", "title": "Go", "url": "https://example.com"},
                {"type": "Action.ShowCard", "title": "More", "card": {"type": "AdaptiveCard", "body": []}},
                {"type": "Action.Execute"}
            ]"#,
        )
        .unwrap();

        assert!(matches!(&actions[0], Action::Submit(a) if a.data == Some(serde_json::json!({"x": 1}))));
        assert!(matches!(&actions[1], Action::OpenUrl(a) if a.url == "https://example.com"));
        assert!(matches!(&actions[2], Action::ShowCard(_)));
        assert!(matches!(&actions[3], Action::Unknown(u) if u.type_name == "Action.Execute"));
    }

    #[test]
    fn test_title_defaults_to_empty() {
        assert_eq!(Action::Submit(SubmitAction::default()).title(), "");
        let open = Action::OpenUrl(OpenUrlAction {
            title: Some("Go".into()),
            url: String::new(),
        });
        assert_eq!(open.title(), "Go");
    }
}
