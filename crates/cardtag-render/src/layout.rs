//! Layout shared by the container renderers: child composition, separator
//! policy, proportional column sizing and the action strip.

use crate::config::{css_color, HostConfig};
use crate::context::RenderContext;
use crate::document::{
    Action, ActionsOrientation, Column, Element, HorizontalAlignment, Spacing,
};
use crate::error::{RenderError, WarningKind};
use crate::tag::{px, StyleKey, Tag};

/// Renders `elements` into `container`, separating consecutive children, then
/// appends the action strip and any show-card sub-cards.
pub fn add_container_elements(
    container: &mut Tag,
    elements: &[Element],
    actions: &[Action],
    ctx: &mut RenderContext<'_>,
) -> Result<(), RenderError> {
    let config = ctx.config();

    for element in elements {
        let Some(rendered) = ctx.render(element)? else {
            continue;
        };
        if !container.children().is_empty() {
            add_separator(container, element.spacing(), element.separator(), config);
        }
        container.push_child(rendered);
    }

    if config.supports_interactivity && !actions.is_empty() {
        let (strip, show_cards) = build_action_strip(actions, ctx)?;
        if !strip.children().is_empty() {
            add_separator(container, config.actions.spacing, false, config);
            container.push_child(strip);
            for card in show_cards {
                container.push_child(card);
            }
        }
    }

    Ok(())
}

/// The separator placed before an element, if any.
///
/// - no rule and no spacing: nothing
/// - a rule: `hr.ac-separator`, half the spacing above and below the line
/// - otherwise: an invisible `div.ac-separator` spacer of the full spacing
pub fn separator_tag(spacing: Spacing, separator: bool, config: &HostConfig) -> Option<Tag> {
    if !separator && spacing == Spacing::None {
        return None;
    }

    let pixels = config.spacing_for(spacing);
    let tag = if separator {
        let half = px(pixels / 2);
        Tag::new("hr")
            .class("ac-separator")
            .style(StyleKey::PaddingTop, half.clone())
            .style(StyleKey::MarginTop, half)
            .style(StyleKey::BorderTopColor, css_color(&config.separator.line_color))
            .style(StyleKey::BorderTopWidth, px(config.separator.line_thickness))
            .style(StyleKey::BorderTopStyle, "solid")
    } else {
        Tag::new("div")
            .class("ac-separator")
            .style(StyleKey::Height, px(pixels))
    };
    Some(tag)
}

/// Appends the separator for `spacing`/`separator` to `container`.
pub fn add_separator(container: &mut Tag, spacing: Spacing, separator: bool, config: &HostConfig) {
    if let Some(tag) = separator_tag(spacing, separator, config) {
        container.push_child(tag);
    }
}

/// The vertical separator placed between two columns, if any.
pub fn column_separator_tag(spacing: Spacing, separator: bool, config: &HostConfig) -> Option<Tag> {
    if !separator && spacing == Spacing::None {
        return None;
    }

    let half = px(config.spacing_for(spacing) / 2);
    let line_width = if separator {
        config.separator.line_thickness
    } else {
        0
    };
    Some(
        Tag::new("div")
            .class("ac-columnseparator")
            .style(StyleKey::Flex, "0 0 auto")
            .style(StyleKey::PaddingLeft, half.clone())
            .style(StyleKey::MarginLeft, half)
            .style(StyleKey::BorderLeftColor, css_color(&config.separator.line_color))
            .style(StyleKey::BorderLeftWidth, px(line_width))
            .style(StyleKey::BorderLeftStyle, "solid"),
    )
}

/// Sum of the column weights, never less than 1.
pub fn column_denominator(columns: &[Column]) -> f64 {
    columns.iter().map(Column::weight).sum::<f64>().max(1.0)
}

/// The `flex` value for a column, given the set's denominator.
pub fn column_flex(column: &Column, denominator: f64) -> String {
    let keyword = column.width_keyword();

    if keyword.is_empty() || keyword.eq_ignore_ascii_case("stretch") {
        return "1 1 auto".to_string();
    }
    if keyword.eq_ignore_ascii_case("auto") {
        return "0 1 auto".to_string();
    }
    match keyword.parse::<f64>() {
        Ok(weight) if weight.is_finite() => {
            let percent = (100.0 * weight / denominator).round();
            format!("1 1 {:.0}%", percent)
        }
        _ => "0 0 auto".to_string(),
    }
}

/// Builds the action strip for `actions`.
///
/// Returns the strip and the show-card sub-cards, which the caller appends
/// after the strip as siblings.
pub fn build_action_strip(
    actions: &[Action],
    ctx: &mut RenderContext<'_>,
) -> Result<(Tag, Vec<Tag>), RenderError> {
    let config = &ctx.config().actions;

    let mut strip = Tag::new("div")
        .class("ac-actionset")
        .style(StyleKey::Display, "flex");
    match config.actions_orientation {
        ActionsOrientation::Horizontal => {
            let justify = match config.action_alignment {
                HorizontalAlignment::Center => "center",
                HorizontalAlignment::Right => "flex-end",
                _ => "flex-start",
            };
            strip.set_style(StyleKey::FlexDirection, "row");
            strip.set_style(StyleKey::JustifyContent, justify);
        }
        ActionsOrientation::Vertical => {
            let align = match config.action_alignment {
                HorizontalAlignment::Center => "center",
                HorizontalAlignment::Right => "flex-end",
                HorizontalAlignment::Stretch => "stretch",
                HorizontalAlignment::Left => "flex-start",
            };
            strip.set_style(StyleKey::FlexDirection, "column");
            strip.set_style(StyleKey::AlignItems, align);
        }
    }

    let max_actions = config.max_actions.min(actions.len());
    if actions.len() > max_actions {
        ctx.warn(
            WarningKind::MaxActionsExceeded,
            format!(
                "{} actions exceed the maximum of {}; {} dropped",
                actions.len(),
                config.max_actions,
                actions.len() - max_actions
            ),
        );
    }

    let mut show_cards = Vec::new();
    for action in &actions[..max_actions] {
        let Some(mut button) = ctx.render(action)? else {
            continue;
        };

        if let Action::ShowCard(show) = action {
            let id = match button.attribute("data-ac-showCardId") {
                Some(id) => id.to_string(),
                None => {
                    let id = ctx.generate_id();
                    button.set_attr("data-ac-showCardId", id.clone());
                    id
                }
            };
            if let Some(mut card) = ctx.render(&show.card)? {
                card.set_attr("id", id);
                card.add_class("ac-showCard");
                card.set_style(StyleKey::Padding, "0");
                card.set_style(StyleKey::Display, "none");
                card.set_style(StyleKey::MarginTop, px(config.show_card.inline_top_margin));
                show_cards.push(card);
            }
        }

        if !strip.children().is_empty() && config.button_spacing > 0 {
            strip.push_child(button_spacer(config.actions_orientation, config.button_spacing));
        }
        strip.push_child(button);
    }

    Ok((strip, show_cards))
}

fn button_spacer(orientation: ActionsOrientation, spacing: u32) -> Tag {
    match orientation {
        ActionsOrientation::Horizontal => Tag::new("div")
            .style(StyleKey::Flex, "0 0 auto")
            .style(StyleKey::Width, px(spacing)),
        ActionsOrientation::Vertical => Tag::new("div").style(StyleKey::Height, px(spacing)),
    }
}
