//! Borrowed node views used for dispatch.
//!
//! The document model is a set of owned structs. Rendering walks it through
//! [`Node`], a `Copy` view with one variant per [`NodeKind`], so the registry
//! can dispatch on a single type without cloning the tree.

use std::fmt;

use super::actions::{Action, OpenUrlAction, ShowCardAction, SubmitAction};
use super::card::AdaptiveCard;
use super::elements::{
    Column, ColumnSet, Container, Element, FactSet, Image, ImageSet, TextBlock, UnknownNode,
};
use super::inputs::{
    ChoiceSetInput, DateInput, NumberInput, TextInput, TimeInput, ToggleInput,
};

macro_rules! node_kinds {
    ($($variant:ident($ty:ty) => $type_name:literal,)+) => {
        /// The type of a document node.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum NodeKind {
            $($variant,)+
            /// A node whose type is not part of the model.
            Unknown,
        }

        impl NodeKind {
            /// Every renderable kind.
            pub const ALL: &'static [NodeKind] = &[$(NodeKind::$variant,)+];

            /// The card JSON `type` value, e.g. `Input.Text`.
            pub fn type_name(self) -> &'static str {
                match self {
                    $(NodeKind::$variant => $type_name,)+
                    NodeKind::Unknown => "Unknown",
                }
            }
        }

        /// A borrowed view of any document node.
        #[derive(Debug, Clone, Copy)]
        pub enum Node<'a> {
            $($variant(&'a $ty),)+
            Unknown(&'a UnknownNode),
        }

        impl<'a> Node<'a> {
            pub fn kind(&self) -> NodeKind {
                match self {
                    $(Node::$variant(_) => NodeKind::$variant,)+
                    Node::Unknown(_) => NodeKind::Unknown,
                }
            }
        }

        $(
            impl CardNode for $ty {
                const KIND: NodeKind = NodeKind::$variant;

                fn downcast<'a>(node: Node<'a>) -> Option<&'a Self> {
                    match node {
                        Node::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }

            impl<'a> From<&'a $ty> for Node<'a> {
                fn from(node: &'a $ty) -> Self {
                    Node::$variant(node)
                }
            }
        )+
    };
}

node_kinds! {
    Card(AdaptiveCard) => "AdaptiveCard",
    Container(Container) => "Container",
    Column(Column) => "Column",
    ColumnSet(ColumnSet) => "ColumnSet",
    FactSet(FactSet) => "FactSet",
    Image(Image) => "Image",
    ImageSet(ImageSet) => "ImageSet",
    TextBlock(TextBlock) => "TextBlock",
    ChoiceSetInput(ChoiceSetInput) => "Input.ChoiceSet",
    TextInput(TextInput) => "Input.Text",
    NumberInput(NumberInput) => "Input.Number",
    DateInput(DateInput) => "Input.Date",
    TimeInput(TimeInput) => "Input.Time",
    ToggleInput(ToggleInput) => "Input.Toggle",
    SubmitAction(SubmitAction) => "Action.Submit",
    OpenUrlAction(OpenUrlAction) => "Action.OpenUrl",
    ShowCardAction(ShowCardAction) => "Action.ShowCard",
}

/// A concrete node type that renderers can be registered for.
pub trait CardNode: 'static {
    const KIND: NodeKind;

    /// Returns the typed node if `node` is of this kind.
    fn downcast<'a>(node: Node<'a>) -> Option<&'a Self>;
}

impl NodeKind {
    /// The element class, `ac-` plus the lower-cased type name without dots
    /// (`TextBlock` is `ac-textblock`).
    pub fn css_class(self) -> String {
        let name: String = self
            .type_name()
            .chars()
            .filter(|c| *c != '.')
            .flat_map(char::to_lowercase)
            .collect();
        format!("ac-{}", name)
    }

    /// The interactive class, `ac-action-` plus the type name after its last
    /// dot with the first letter lower-cased (`Action.OpenUrl` is
    /// `ac-action-openUrl`).
    pub fn action_css_class(self) -> String {
        let type_name = self.type_name();
        let suffix = type_name.rsplit('.').next().unwrap_or(type_name);
        let mut chars = suffix.chars();
        let suffix: String = match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => String::new(),
        };
        format!("ac-action-{}", suffix)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

impl<'a> Node<'a> {
    /// The `type` name, including the original name of unknown nodes.
    pub fn type_name(&self) -> &'a str {
        match *self {
            Node::Unknown(unknown) => unknown.type_name.as_str(),
            other => other.kind().type_name(),
        }
    }
}

impl<'a> From<&'a Element> for Node<'a> {
    fn from(element: &'a Element) -> Self {
        match element {
            Element::TextBlock(e) => Node::TextBlock(e),
            Element::Image(e) => Node::Image(e),
            Element::ImageSet(e) => Node::ImageSet(e),
            Element::Container(e) => Node::Container(e),
            Element::ColumnSet(e) => Node::ColumnSet(e),
            Element::FactSet(e) => Node::FactSet(e),
            Element::TextInput(e) => Node::TextInput(e),
            Element::NumberInput(e) => Node::NumberInput(e),
            Element::DateInput(e) => Node::DateInput(e),
            Element::TimeInput(e) => Node::TimeInput(e),
            Element::ToggleInput(e) => Node::ToggleInput(e),
            Element::ChoiceSetInput(e) => Node::ChoiceSetInput(e),
            Element::Unknown(e) => Node::Unknown(e),
        }
    }
}

impl<'a> From<&'a Action> for Node<'a> {
    fn from(action: &'a Action) -> Self {
        match action {
            Action::Submit(a) => Node::SubmitAction(a),
            Action::OpenUrl(a) => Node::OpenUrlAction(a),
            Action::ShowCard(a) => Node::ShowCardAction(a),
            Action::Unknown(a) => Node::Unknown(a),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_kinds_are_distinct() {
        assert_eq!(NodeKind::ALL.len(), 17);
        let mut kinds = NodeKind::ALL.to_vec();
        kinds.dedup();
        assert_eq!(kinds.len(), 17);
    }

    #[test]
    fn test_css_class() {
        assert_eq!(NodeKind::TextBlock.css_class(), "ac-textblock");
        assert_eq!(NodeKind::Card.css_class(), "ac-adaptivecard");
        assert_eq!(NodeKind::TextInput.css_class(), "ac-inputtext");
    }

    #[test]
    fn test_action_css_class() {
        assert_eq!(NodeKind::OpenUrlAction.action_css_class(), "ac-action-openUrl");
        assert_eq!(NodeKind::ShowCardAction.action_css_class(), "ac-action-showCard");
        assert_eq!(NodeKind::Image.action_css_class(), "ac-action-image");
    }

    #[test]
    fn test_downcast() {
        let block = TextBlock::new("hi");
        let node = Node::from(&block);
        assert_eq!(node.kind(), NodeKind::TextBlock);
        assert!(TextBlock::downcast(node).is_some());
        assert!(Image::downcast(node).is_none());
    }

    #[test]
    fn test_unknown_type_name() {
        let element = Element::Unknown(UnknownNode {
            type_name: "Media".into(),
        });
        let node = Node::from(&element);
        assert_eq!(node.kind(), NodeKind::Unknown);
        assert_eq!(node.type_name(), "Media");
    }
}
