use std::borrow::Cow;

use crate::config::css_color;
use crate::context::RenderContext;
use crate::document::{
    AdaptiveCard, CardNode, Column, ColumnSet, Container, FactSet, Image, ImageSet, ImageSize,
    TextBlock,
};
use crate::layout::{add_container_elements, column_denominator, column_flex, column_separator_tag};
use crate::registry::RenderResult;
use crate::tag::{px, StyleKey, Tag};

use super::actions::add_select_action;

pub(super) fn render_card(card: &AdaptiveCard, ctx: &mut RenderContext<'_>) -> RenderResult {
    let config = ctx.config();

    let mut tag = Tag::new("div")
        .class(AdaptiveCard::KIND.css_class())
        .style(StyleKey::Width, "100%")
        .style(
            StyleKey::BackgroundColor,
            css_color(&config.container_styles.default.background_color),
        )
        .style(StyleKey::Padding, px(config.spacing.padding))
        .style(StyleKey::BoxSizing, "border-box");

    if !config.font_family.is_empty() {
        tag.set_style(StyleKey::FontFamily, config.font_family.clone());
    }

    if let Some(image) = card.background_image.as_deref().filter(|url| !url.is_empty()) {
        tag.set_style(StyleKey::BackgroundImage, format!("url('{}')", image));
        tag.set_style(StyleKey::BackgroundRepeat, "no-repeat");
        tag.set_style(StyleKey::BackgroundSize, "cover");
    }

    add_container_elements(&mut tag, &card.body, &card.actions, ctx)?;
    Ok(Some(tag))
}

pub(super) fn render_container(container: &Container, ctx: &mut RenderContext<'_>) -> RenderResult {
    let mut tag = Tag::new("div").class(Container::KIND.css_class());
    add_container_elements(&mut tag, &container.items, &[], ctx)?;
    add_select_action(&mut tag, container.select_action.as_deref(), ctx)?;
    Ok(Some(tag))
}

pub(super) fn render_column(column: &Column, ctx: &mut RenderContext<'_>) -> RenderResult {
    let mut tag = Tag::new("div").class(Column::KIND.css_class());
    add_container_elements(&mut tag, &column.items, &[], ctx)?;
    add_select_action(&mut tag, column.select_action.as_deref(), ctx)?;
    Ok(Some(tag))
}

/// Columns laid out with flexbox, sized proportionally to their weights.
pub(super) fn render_column_set(set: &ColumnSet, ctx: &mut RenderContext<'_>) -> RenderResult {
    let config = ctx.config();
    let denominator = column_denominator(&set.columns);

    let mut tag = Tag::new("div")
        .class(ColumnSet::KIND.css_class())
        .style(StyleKey::Display, "flex")
        .style(StyleKey::Overflow, "hidden");

    for column in &set.columns {
        let Some(mut rendered) = ctx.render(column)? else {
            continue;
        };

        if !tag.children().is_empty() {
            if let Some(separator) = column_separator_tag(column.spacing, column.separator, config) {
                tag.push_child(separator);
            }
        }

        rendered.set_style(StyleKey::Flex, column_flex(column, denominator));
        tag.push_child(rendered);
    }

    add_select_action(&mut tag, set.select_action.as_deref(), ctx)?;
    Ok(Some(tag))
}

/// One `li` row per fact, title and value rendered as text blocks styled
/// from the host's fact set configuration.
pub(super) fn render_fact_set(set: &FactSet, ctx: &mut RenderContext<'_>) -> RenderResult {
    let config = &ctx.config().fact_set;

    let mut tag = Tag::new("ul")
        .class(FactSet::KIND.css_class())
        .style(StyleKey::Overflow, "hidden");

    for fact in &set.facts {
        let title_block = TextBlock {
            text: fact.title.clone(),
            size: config.title.size,
            weight: config.title.weight,
            color: config.title.color,
            is_subtle: config.title.is_subtle,
            wrap: config.title.wrap,
            ..TextBlock::default()
        };
        let value_block = TextBlock {
            text: fact.value.clone(),
            size: config.value.size,
            weight: config.value.weight,
            color: config.value.color,
            is_subtle: config.value.is_subtle,
            wrap: config.value.wrap,
            ..TextBlock::default()
        };

        let mut title_cell = Tag::new("h3")
            .class("ac-factset-titlecell")
            .style(StyleKey::Height, "inherit");
        if config.title.max_width > 0 {
            title_cell.set_style(StyleKey::MaxWidth, px(config.title.max_width));
        }
        if let Some(title) = ctx.render(&title_block)? {
            title_cell.push_child(
                title
                    .class("ac-facttitle")
                    .style(StyleKey::MarginRight, px(config.spacing)),
            );
        }

        let mut value_cell = Tag::new("span")
            .class("ac-factset-valuecell")
            .style(StyleKey::Height, "inherit");
        if let Some(value) = ctx.render(&value_block)? {
            value_cell.push_child(value.class("ac-factvalue"));
        }

        tag.push_child(
            Tag::new("li")
                .style(StyleKey::Height, "1px")
                .child(title_cell)
                .child(value_cell),
        );
    }

    Ok(Some(tag))
}

pub(super) fn render_image_set(set: &ImageSet, ctx: &mut RenderContext<'_>) -> RenderResult {
    let mut tag = Tag::new("ul").class(ImageSet::KIND.css_class());

    for image in &set.images {
        let image: Cow<'_, Image> = if set.image_size == ImageSize::Auto {
            Cow::Borrowed(image)
        } else {
            Cow::Owned(Image {
                size: set.image_size,
                ..image.clone()
            })
        };

        if let Some(rendered) = ctx.render(image.as_ref())? {
            tag.push_child(
                rendered
                    .style(StyleKey::Display, "inline-block")
                    .style(StyleKey::MarginRight, "10px"),
            );
        }
    }

    Ok(Some(tag))
}
