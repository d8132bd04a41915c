use serde::Deserialize;

use super::actions::Action;
use super::elements::Element;

/// The root of a card document.
///
/// ```rust
/// use cardtag_render::document::{AdaptiveCard, Element};
///
/// let card = AdaptiveCard::from_json(r#"{
///     "type": "AdaptiveCard",
///     "version": "1.0",
///     "body": [{"type": "TextBlock", "text": "Hello"}]
/// }"#).unwrap();
///
/// assert!(matches!(card.body[0], Element::TextBlock(_)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdaptiveCard {
    pub version: Option<String>,
    pub min_version: Option<String>,
    /// Plain text shown by hosts that cannot render the card.
    pub fallback_text: Option<String>,
    pub background_image: Option<String>,
    pub body: Vec<Element>,
    pub actions: Vec<Action>,
}

impl AdaptiveCard {
    /// Creates an empty card.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a card from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Appends a body element.
    pub fn element(mut self, element: Element) -> Self {
        self.body.push(element);
        self
    }

    /// Appends an action.
    pub fn action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Number of elements and actions in the whole tree, including nested
    /// containers, columns and show-card sub-cards.
    pub fn node_count(&self) -> usize {
        fn elements(items: &[Element]) -> usize {
            items.iter().map(element).sum()
        }

        fn element(item: &Element) -> usize {
            1 + match item {
                Element::Container(c) => elements(&c.items) + select(c.select_action.as_deref()),
                Element::ColumnSet(set) => set
                    .columns
                    .iter()
                    .map(|col| 1 + elements(&col.items) + select(col.select_action.as_deref()))
                    .sum::<usize>()
                    + select(set.select_action.as_deref()),
                Element::ImageSet(set) => set.images.len(),
                Element::Image(image) => select(image.select_action.as_deref()),
                _ => 0,
            }
        }

        fn select(action: Option<&Action>) -> usize {
            action.map(actions_in).unwrap_or(0)
        }

        fn actions_in(action: &Action) -> usize {
            1 + match action {
                Action::ShowCard(show) => show.card.node_count(),
                _ => 0,
            }
        }

        elements(&self.body) + self.actions.iter().map(actions_in).sum::<usize>()
    }
}
