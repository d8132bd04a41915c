//! Markdown fragments to tags.

use cardtag_markdown::{ElementFragment, Fragment};

use crate::tag::Tag;

/// Converts markdown text into tags.
///
/// Text runs become `span` tags; a `class` attribute on a fragment is split
/// into the tag's class list.
pub fn markdown_to_tags(text: &str) -> Vec<Tag> {
    cardtag_markdown::convert(text)
        .iter()
        .map(fragment_to_tag)
        .collect()
}

fn fragment_to_tag(fragment: &Fragment) -> Tag {
    match fragment {
        Fragment::Text(text) => Tag::new("span").text(text.clone()),
        Fragment::Element(element) => element_to_tag(element),
    }
}

fn element_to_tag(element: &ElementFragment) -> Tag {
    let mut tag = Tag::new(element.name.clone());
    for (name, value) in &element.attributes {
        if name == "class" {
            for class in value.split_whitespace() {
                tag.add_class(class);
            }
        } else {
            tag.set_attr(name.clone(), value.clone());
        }
    }
    tag.with_children(element.children.iter().map(fragment_to_tag))
}
