use crate::context::RenderContext;
use crate::document::{
    Action, HorizontalAlignment, Node, OpenUrlAction, ShowCardAction, SubmitAction,
};
use crate::error::RenderError;
use crate::registry::RenderResult;
use crate::tag::{StyleKey, Tag};

use super::interactive;

pub(super) fn render_submit(action: &SubmitAction, ctx: &mut RenderContext<'_>) -> RenderResult {
    render_button(action.into(), action.title.as_deref(), ctx)
}

pub(super) fn render_open_url(action: &OpenUrlAction, ctx: &mut RenderContext<'_>) -> RenderResult {
    render_button(action.into(), action.title.as_deref(), ctx)
}

pub(super) fn render_show_card(action: &ShowCardAction, ctx: &mut RenderContext<'_>) -> RenderResult {
    render_button(action.into(), action.title.as_deref(), ctx)
}

/// An action button: an `a` tag styled to fit the action strip.
fn render_button(node: Node<'_>, title: Option<&str>, ctx: &mut RenderContext<'_>) -> RenderResult {
    if !interactive(ctx) {
        return Ok(None);
    }

    let flex = match ctx.config().actions.action_alignment {
        HorizontalAlignment::Stretch => "0 1 100%",
        _ => "0 1 auto",
    };
    let mut button = Tag::new("a")
        .text(title.unwrap_or(""))
        .style(StyleKey::Overflow, "hidden")
        .style(StyleKey::WhiteSpace, "nowrap")
        .style(StyleKey::TextOverflow, "ellipsis")
        .style(StyleKey::Flex, flex)
        .class("ac-pushButton");

    add_action_attributes(node, title, &mut button, ctx)?;
    Ok(Some(button))
}

/// Decorates an interactive tag for `node`: the action class, `role`,
/// `aria-label`, then the kind's transformer.
pub fn add_action_attributes<'n>(
    node: impl Into<Node<'n>>,
    title: Option<&str>,
    tag: &mut Tag,
    ctx: &mut RenderContext<'_>,
) -> Result<(), RenderError> {
    let node = node.into();
    tag.add_class(node.kind().action_css_class());
    tag.set_attr("role", "button");
    tag.set_attr("aria-label", title.unwrap_or(""));
    ctx.transform_action(node, tag)
}

/// Makes `tag` selectable when the element has a select action and the host
/// is interactive.
pub fn add_select_action(
    tag: &mut Tag,
    action: Option<&Action>,
    ctx: &mut RenderContext<'_>,
) -> Result<(), RenderError> {
    let Some(action) = action else {
        return Ok(());
    };
    if !interactive(ctx) || matches!(action, Action::Unknown(_)) {
        return Ok(());
    }

    tag.add_class("ac-selectable");
    add_action_attributes(action, Some(action.title()), tag, ctx)
}

pub(super) fn transform_open_url(
    action: &OpenUrlAction,
    tag: &mut Tag,
    _ctx: &mut RenderContext<'_>,
) -> Result<(), RenderError> {
    let url = url::Url::parse(&action.url).map_err(|source| RenderError::InvalidUrl {
        url: action.url.clone(),
        source,
    })?;
    tag.set_attr("data-ac-url", url.as_str());
    Ok(())
}

pub(super) fn transform_submit(
    action: &SubmitAction,
    tag: &mut Tag,
    _ctx: &mut RenderContext<'_>,
) -> Result<(), RenderError> {
    let data = match &action.data {
        Some(data) => serde_json::to_string(data)?,
        None => "null".to_string(),
    };
    tag.set_attr("data-ac-submitData", data);
    Ok(())
}

pub(super) fn transform_show_card(
    _action: &ShowCardAction,
    tag: &mut Tag,
    ctx: &mut RenderContext<'_>,
) -> Result<(), RenderError> {
    tag.set_attr("data-ac-showCardId", ctx.generate_id());
    Ok(())
}
