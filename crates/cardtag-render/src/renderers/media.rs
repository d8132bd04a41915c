use crate::context::RenderContext;
use crate::document::{CardNode, HorizontalAlignment, Image, ImageSize, ImageStyle};
use crate::registry::RenderResult;
use crate::tag::{px, StyleKey, Tag};

use super::actions::add_select_action;

const DEFAULT_ALT_TEXT: &str = "card image";

pub(super) fn render_image(image: &Image, ctx: &mut RenderContext<'_>) -> RenderResult {
    let config = ctx.config();

    let mut wrapper = Tag::new("div")
        .class(Image::KIND.css_class())
        .style(StyleKey::Display, "block")
        .style(StyleKey::BoxSizing, "border-box");

    match image.size {
        ImageSize::Auto => wrapper.set_style(StyleKey::MaxWidth, "100%"),
        ImageSize::Stretch => wrapper.set_style(StyleKey::Width, "100%"),
        size => {
            if let Some(pixels) = config.image_sizes.get(size) {
                wrapper.set_style(StyleKey::MaxWidth, px(pixels));
            }
        }
    }

    let alt = image
        .alt_text
        .as_deref()
        .filter(|alt| !alt.is_empty())
        .unwrap_or(DEFAULT_ALT_TEXT);
    let mut img = Tag::new("img")
        .style(StyleKey::Width, "100%")
        .attr("alt", alt)
        .attr("src", image.url.as_str());
    if image.style == ImageStyle::Person {
        img.set_style(StyleKey::BackgroundPosition, "50% 50%");
        img.set_style(StyleKey::BorderRadius, "50%");
        img.set_style(StyleKey::BackgroundRepeat, "no-repeat");
    }

    match image.horizontal_alignment {
        HorizontalAlignment::Left => {
            wrapper.set_style(StyleKey::Overflow, "hidden");
        }
        HorizontalAlignment::Center => {
            wrapper.set_style(StyleKey::Overflow, "hidden");
            wrapper.set_style(StyleKey::MarginLeft, "auto");
            wrapper.set_style(StyleKey::MarginRight, "auto");
        }
        HorizontalAlignment::Right => {
            wrapper.set_style(StyleKey::Overflow, "hidden");
            wrapper.set_style(StyleKey::MarginLeft, "auto");
        }
        HorizontalAlignment::Stretch => {}
    }

    wrapper.push_child(img);
    add_select_action(&mut wrapper, image.select_action.as_deref(), ctx)?;
    Ok(Some(wrapper))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Action, SubmitAction};
    use crate::id::SequentialIds;
    use crate::{ActionTransformers, HostConfig, RendererRegistry};

    fn render(image: &Image) -> Tag {
        let config = HostConfig::default();
        let renderers = RendererRegistry::with_defaults();
        let transformers = ActionTransformers::with_defaults();
        let ids = SequentialIds::new();
        let mut ctx = RenderContext::new(&config, &renderers, &transformers, &ids);
        ctx.render(image).unwrap().unwrap()
    }

    fn image(url: &str) -> Image {
        Image {
            url: url.into(),
            ..Image::default()
        }
    }

    #[test]
    fn test_auto_image() {
        let tag = render(&image("https://example.com/cat.png"));
        assert!(tag.has_class("ac-image"));
        assert_eq!(tag.style_value(StyleKey::MaxWidth), Some("100%"));
        assert_eq!(tag.style_value(StyleKey::Overflow), Some("hidden"));

        let img = &tag.children()[0];
        assert_eq!(img.name(), "img");
        assert_eq!(img.attribute("src"), Some("https://example.com/cat.png"));
        assert_eq!(img.attribute("alt"), Some("card image"));
        assert_eq!(img.style_value(StyleKey::BorderRadius), None);
    }

    #[test]
    fn test_sizes() {
        let sized = |size| {
            render(&Image {
                size,
                ..image("a.png")
            })
        };
        assert_eq!(sized(ImageSize::Small).style_value(StyleKey::MaxWidth), Some("40px"));
        assert_eq!(sized(ImageSize::Medium).style_value(StyleKey::MaxWidth), Some("80px"));
        assert_eq!(sized(ImageSize::Large).style_value(StyleKey::MaxWidth), Some("160px"));

        let stretched = sized(ImageSize::Stretch);
        assert_eq!(stretched.style_value(StyleKey::Width), Some("100%"));
        assert_eq!(stretched.style_value(StyleKey::MaxWidth), None);
    }

    #[test]
    fn test_person_style_and_alt_text() {
        let tag = render(&Image {
            style: ImageStyle::Person,
            alt_text: Some("Portrait".into()),
            ..image("me.png")
        });
        let img = &tag.children()[0];
        assert_eq!(img.attribute("alt"), Some("Portrait"));
        assert_eq!(img.style_value(StyleKey::BorderRadius), Some("50%"));
        assert_eq!(img.style_value(StyleKey::BackgroundPosition), Some("50% 50%"));
    }

    #[test]
    fn test_empty_alt_text_uses_default() {
        let tag = render(&Image {
            alt_text: Some(String::new()),
            ..image("a.png")
        });
        assert_eq!(tag.children()[0].attribute("alt"), Some("card image"));
    }

    #[test]
    fn test_alignment() {
        let aligned = |horizontal_alignment| {
            render(&Image {
                horizontal_alignment,
                ..image("a.png")
            })
        };

        let center = aligned(HorizontalAlignment::Center);
        assert_eq!(center.style_value(StyleKey::MarginLeft), Some("auto"));
        assert_eq!(center.style_value(StyleKey::MarginRight), Some("auto"));

        let right = aligned(HorizontalAlignment::Right);
        assert_eq!(right.style_value(StyleKey::MarginLeft), Some("auto"));
        assert_eq!(right.style_value(StyleKey::MarginRight), None);

        let stretch = aligned(HorizontalAlignment::Stretch);
        assert_eq!(stretch.style_value(StyleKey::Overflow), None);
    }

    #[test]
    fn test_select_action() {
        let tag = render(&Image {
            select_action: Some(Box::new(Action::Submit(SubmitAction::default()))),
            ..image("a.png")
        });
        assert!(tag.has_class("ac-selectable"));
        assert!(tag.has_class("ac-action-submit"));
        assert_eq!(tag.attribute("data-ac-submitData"), Some("null"));
    }
}
