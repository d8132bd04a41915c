use crate::context::RenderContext;
use crate::document::{CardNode, HorizontalAlignment, TextBlock, TextWeight};
use crate::markdown::markdown_to_tags;
use crate::registry::RenderResult;
use crate::tag::{px, StyleKey, Tag};
use crate::text_functions;

const LINE_HEIGHT_FACTOR: f64 = 1.33;

pub(super) fn render_text_block(block: &TextBlock, ctx: &mut RenderContext<'_>) -> RenderResult {
    let font_size = ctx.config().font_size_for(block.size);
    let line_height = f64::from(font_size) * LINE_HEIGHT_FACTOR;

    let weight = match block.weight {
        TextWeight::Lighter => "200",
        TextWeight::Bolder => "600",
        TextWeight::Default => "400",
    };
    let text_align = match block.horizontal_alignment {
        HorizontalAlignment::Left => "left",
        HorizontalAlignment::Center => "center",
        HorizontalAlignment::Right => "right",
        HorizontalAlignment::Stretch => "justify",
    };

    let mut tag = Tag::new("div")
        .class(TextBlock::KIND.css_class())
        .style(StyleKey::BoxSizing, "border-box")
        .style(StyleKey::TextAlign, text_align)
        .style(StyleKey::Color, ctx.color(block.color, block.is_subtle))
        .style(StyleKey::LineHeight, format!("{:.2}px", line_height))
        .style(StyleKey::FontSize, px(font_size))
        .style(StyleKey::FontWeight, weight)
        .style(StyleKey::Height, "100%");

    if block.max_lines > 0 {
        let max_height = line_height * f64::from(block.max_lines);
        tag.set_style(StyleKey::MaxHeight, format!("{:.2}px", max_height));
        tag.set_style(StyleKey::Overflow, "hidden");
    }

    let single_line = !block.wrap;
    if single_line {
        tag.set_style(StyleKey::WhiteSpace, "nowrap");
    } else {
        tag.set_style(StyleKey::WordWrap, "break-word");
    }

    let text = text_functions::expand(&block.text);
    tag = tag.with_children(markdown_to_tags(&text));
    restyle_paragraphs(&mut tag, single_line);

    Ok(Some(tag))
}

/// Flattens paragraph margins anywhere below `root`.
fn restyle_paragraphs(root: &mut Tag, single_line: bool) {
    let mut pending: Vec<&mut Tag> = root.children_mut().iter_mut().collect();

    while let Some(tag) = pending.pop() {
        if tag.name() == "p" {
            tag.set_style(StyleKey::MarginTop, "0px");
            tag.set_style(StyleKey::MarginBottom, "0px");
            tag.set_style(StyleKey::Width, "100%");
            if single_line {
                tag.set_style(StyleKey::TextOverflow, "ellipsis");
                tag.set_style(StyleKey::Overflow, "hidden");
            }
        }
        pending.extend(tag.children_mut().iter_mut());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{TextColor, TextSize};
    use crate::id::SequentialIds;
    use crate::{ActionTransformers, HostConfig, RendererRegistry};

    fn render(block: &TextBlock) -> Tag {
        let config = HostConfig::default();
        let renderers = RendererRegistry::with_defaults();
        let transformers = ActionTransformers::with_defaults();
        let ids = SequentialIds::new();
        let mut ctx = RenderContext::new(&config, &renderers, &transformers, &ids);
        ctx.render(block).unwrap().unwrap()
    }

    #[test]
    fn test_default_text_block() {
        let tag = render(&TextBlock::new("Hello"));
        assert_eq!(tag.name(), "div");
        assert!(tag.has_class("ac-textblock"));
        assert_eq!(tag.style_value(StyleKey::FontSize), Some("12px"));
        assert_eq!(tag.style_value(StyleKey::LineHeight), Some("15.96px"));
        assert_eq!(tag.style_value(StyleKey::FontWeight), Some("400"));
        assert_eq!(tag.style_value(StyleKey::TextAlign), Some("left"));
        assert_eq!(tag.style_value(StyleKey::Color), Some("rgba(0, 0, 0, 1.00)"));
        assert_eq!(tag.style_value(StyleKey::WhiteSpace), Some("nowrap"));
        assert_eq!(tag.style_value(StyleKey::MaxHeight), None);

        let paragraph = &tag.children()[0];
        assert_eq!(paragraph.name(), "p");
        assert_eq!(paragraph.style_value(StyleKey::MarginTop), Some("0px"));
        assert_eq!(paragraph.style_value(StyleKey::Width), Some("100%"));
    }

    #[test]
    fn test_wrapping_text_breaks_words() {
        let block = TextBlock {
            text: "Long text".into(),
            wrap: true,
            ..TextBlock::default()
        };
        let tag = render(&block);
        assert_eq!(tag.style_value(StyleKey::WordWrap), Some("break-word"));
        assert_eq!(tag.style_value(StyleKey::WhiteSpace), None);
        assert_eq!(tag.children()[0].style_value(StyleKey::TextOverflow), None);
    }

    #[test]
    fn test_styles_from_keywords() {
        let block = TextBlock {
            text: "Big".into(),
            size: TextSize::ExtraLarge,
            weight: TextWeight::Bolder,
            color: TextColor::Good,
            is_subtle: true,
            horizontal_alignment: HorizontalAlignment::Stretch,
            ..TextBlock::default()
        };
        let tag = render(&block);
        assert_eq!(tag.style_value(StyleKey::FontSize), Some("20px"));
        assert_eq!(tag.style_value(StyleKey::LineHeight), Some("26.60px"));
        assert_eq!(tag.style_value(StyleKey::FontWeight), Some("600"));
        assert_eq!(tag.style_value(StyleKey::TextAlign), Some("justify"));
        assert_eq!(tag.style_value(StyleKey::Color), Some("rgba(0, 128, 0, 0.70)"));
    }

    #[test]
    fn test_max_lines_limits_height() {
        let block = TextBlock {
            text: "Clipped".into(),
            max_lines: 2,
            ..TextBlock::default()
        };
        let tag = render(&block);
        assert_eq!(tag.style_value(StyleKey::MaxHeight), Some("31.92px"));
        assert_eq!(tag.style_value(StyleKey::Overflow), Some("hidden"));
    }

    #[test]
    fn test_single_line_paragraphs_are_ellipsized() {
        let block = TextBlock {
            text: "> quoted\n\nplain".into(),
            wrap: false,
            ..TextBlock::default()
        };
        let tag = render(&block);
        assert_eq!(tag.style_value(StyleKey::WhiteSpace), Some("nowrap"));

        let paragraphs: Vec<&Tag> = tag.find_all_by_name("p").collect();
        assert_eq!(paragraphs.len(), 2);
        for paragraph in paragraphs {
            assert_eq!(paragraph.style_value(StyleKey::MarginBottom), Some("0px"));
            assert_eq!(paragraph.style_value(StyleKey::TextOverflow), Some("ellipsis"));
            assert_eq!(paragraph.style_value(StyleKey::Overflow), Some("hidden"));
        }
    }

    #[test]
    fn test_text_functions_expand_before_markdown() {
        let tag = render(&TextBlock::new("**{{DATE(2017-02-14T06:08:39Z, SHORT)}}**"));
        let strong = tag.find_all_by_name("strong").next().unwrap();
        assert_eq!(strong.children()[0].text_content(), Some("Tue, Feb 14, 2017"));
    }

    #[test]
    fn test_raw_html_stays_text() {
        let tag = render(&TextBlock::new("<b>bold</b>"));
        assert_eq!(tag.find_all_by_name("b").count(), 0);
    }
}
