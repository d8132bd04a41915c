use crate::context::RenderContext;
use crate::document::{
    ChoiceInputStyle, ChoiceSetInput, DateInput, NumberInput, TextColor, TextInput, TimeInput,
    ToggleInput,
};
use crate::registry::RenderResult;
use crate::tag::{px, StyleKey, Tag};

pub(super) fn render_choice_set(input: &ChoiceSetInput, ctx: &mut RenderContext<'_>) -> RenderResult {
    let tag = match (input.is_multi_select, input.style) {
        (false, ChoiceInputStyle::Compact) => compact_choice_set(input),
        (false, ChoiceInputStyle::Expanded) => expanded_choice_set(input, "radio", ctx),
        (true, _) => expanded_choice_set(input, "checkbox", ctx),
    };
    Ok(Some(tag))
}

/// A drop-down `select` with the current value preselected.
fn compact_choice_set(input: &ChoiceSetInput) -> Tag {
    let mut select = Tag::new("select")
        .attr("name", input.id.as_str())
        .class("ac-input")
        .class("ac-multichoiceInput")
        .style(StyleKey::Width, "100%");

    for choice in &input.choices {
        let mut option = Tag::new("option")
            .attr("value", choice.value.as_str())
            .text(choice.title.as_str());
        if choice.value == input.value {
            option.set_attr("selected", "");
        }
        select.push_child(option);
    }
    select
}

/// One labelled radio button or checkbox per choice.
fn expanded_choice_set(input: &ChoiceSetInput, input_type: &str, ctx: &mut RenderContext<'_>) -> Tag {
    let defaults = input.default_values();

    let mut wrapper = Tag::new("div")
        .class("ac-input")
        .class("ac-choiceSetInput")
        .style(StyleKey::Width, "100%");

    for choice in &input.choices {
        let id = ctx.generate_id();
        let mut control = Tag::new("input")
            .attr("id", id.as_str())
            .attr("type", input_type)
            .attr("name", input.id.as_str())
            .attr("value", choice.value.as_str())
            .style(StyleKey::Margin, "0px")
            .style(StyleKey::Display, "inline-block")
            .style(StyleKey::VerticalAlign, "middle");
        if defaults.contains(&choice.value.as_str()) {
            control.set_attr("checked", "");
        }

        let caption = label(&id, &choice.title, ctx);
        wrapper.push_child(Tag::new("div").child(control).child(caption));
    }
    wrapper
}

/// A `label` for the control `for_id`, in the host's default text style.
fn label(for_id: &str, text: &str, ctx: &RenderContext<'_>) -> Tag {
    Tag::new("label")
        .text(text)
        .attr("for", for_id)
        .style(StyleKey::Color, ctx.color(TextColor::Default, false))
        .style(StyleKey::FontSize, px(ctx.config().font_sizes.default))
        .style(StyleKey::Display, "inline-block")
        .style(StyleKey::MarginLeft, "6px")
        .style(StyleKey::VerticalAlign, "middle")
}

pub(super) fn render_text_input(input: &TextInput, _ctx: &mut RenderContext<'_>) -> RenderResult {
    let mut tag = if input.is_multiline {
        let mut textarea = Tag::new("textarea");
        if !input.value.is_empty() {
            textarea.set_text(input.value.as_str());
        }
        textarea
    } else {
        let mut field = Tag::new("input").attr("type", "text");
        if !input.value.is_empty() {
            field.set_attr("value", input.value.as_str());
        }
        field
    };

    tag.set_attr("name", input.id.as_str());
    tag.add_class("ac-textinput");
    tag.add_class("ac-input");
    tag.set_style(StyleKey::Width, "100%");
    if !input.placeholder.is_empty() {
        tag.set_attr("placeholder", input.placeholder.as_str());
    }
    if input.max_length > 0 {
        tag.set_attr("maxLength", input.max_length.to_string());
    }
    Ok(Some(tag))
}

pub(super) fn render_number_input(input: &NumberInput, _ctx: &mut RenderContext<'_>) -> RenderResult {
    let mut tag = Tag::new("input")
        .attr("name", input.id.as_str())
        .class("ac-input")
        .class("ac-numberInput")
        .attr("type", "number")
        .style(StyleKey::Width, "100%");

    let bounds = [("min", input.min), ("max", input.max), ("value", input.value)];
    for (name, number) in bounds {
        if let Some(number) = number.filter(|n| !n.is_nan()) {
            tag.set_attr(name, number.to_string());
        }
    }
    if !input.placeholder.is_empty() {
        tag.set_attr("placeholder", input.placeholder.as_str());
    }
    Ok(Some(tag))
}

pub(super) fn render_date_input(input: &DateInput, _ctx: &mut RenderContext<'_>) -> RenderResult {
    Ok(Some(temporal_input(
        "date",
        "ac-dateInput",
        &input.id,
        [("value", &*input.value), ("min", &*input.min), ("max", &*input.max)],
    )))
}

pub(super) fn render_time_input(input: &TimeInput, _ctx: &mut RenderContext<'_>) -> RenderResult {
    Ok(Some(temporal_input(
        "time",
        "ac-timeInput",
        &input.id,
        [("value", &*input.value), ("min", &*input.min), ("max", &*input.max)],
    )))
}

fn temporal_input(input_type: &str, class: &str, name: &str, values: [(&str, &str); 3]) -> Tag {
    let mut tag = Tag::new("input")
        .attr("name", name)
        .attr("type", input_type)
        .class("ac-input")
        .class(class)
        .style(StyleKey::Width, "100%");
    for (attr, value) in values {
        if !value.is_empty() {
            tag.set_attr(attr, value);
        }
    }
    tag
}

pub(super) fn render_toggle_input(input: &ToggleInput, ctx: &mut RenderContext<'_>) -> RenderResult {
    let id = ctx.generate_id();
    let value_on = input.effective_value_on();

    let mut checkbox = Tag::new("input")
        .attr("id", id.as_str())
        .attr("type", "checkbox")
        .attr("name", input.id.as_str())
        .attr("data-ac-valueOn", value_on)
        .attr("data-ac-valueOff", input.effective_value_off())
        .style(StyleKey::Display, "inline-block")
        .style(StyleKey::VerticalAlign, "middle")
        .style(StyleKey::Margin, "0px");
    if input.value == value_on {
        checkbox.set_attr("checked", "");
    }

    let tag = Tag::new("div")
        .class("ac-input")
        .style(StyleKey::Width, "100%")
        .child(checkbox)
        .child(label(&id, &input.title, ctx));
    Ok(Some(tag))
}
