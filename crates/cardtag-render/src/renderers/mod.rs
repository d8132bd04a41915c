//! Built-in renderers, one per node kind, and the default action
//! transformers.
//!
//! Every renderer has the same shape, `(node, context) -> RenderResult`, and
//! is registered under its node type by [`register_defaults`]. Custom
//! renderers replace these through
//! [`RendererRegistry::set`](crate::RendererRegistry::set).

mod actions;
mod containers;
mod inputs;
mod media;
mod text;

use crate::context::RenderContext;
use crate::document::{
    AdaptiveCard, ChoiceSetInput, Column, ColumnSet, Container, DateInput, FactSet, Image,
    ImageSet, NumberInput, OpenUrlAction, ShowCardAction, SubmitAction, TextBlock, TextInput,
    TimeInput, ToggleInput,
};
use crate::registry::{ActionTransformers, RendererRegistry};

pub use actions::{add_action_attributes, add_select_action};

/// Registers the built-in renderer for every node kind.
pub fn register_defaults(registry: &mut RendererRegistry) {
    registry
        .set::<AdaptiveCard, _>(containers::render_card)
        .set::<Container, _>(containers::render_container)
        .set::<Column, _>(containers::render_column)
        .set::<ColumnSet, _>(containers::render_column_set)
        .set::<FactSet, _>(containers::render_fact_set)
        .set::<ImageSet, _>(containers::render_image_set)
        .set::<Image, _>(media::render_image)
        .set::<TextBlock, _>(text::render_text_block)
        .set::<ChoiceSetInput, _>(inputs::render_choice_set)
        .set::<TextInput, _>(inputs::render_text_input)
        .set::<NumberInput, _>(inputs::render_number_input)
        .set::<DateInput, _>(inputs::render_date_input)
        .set::<TimeInput, _>(inputs::render_time_input)
        .set::<ToggleInput, _>(inputs::render_toggle_input)
        .set::<SubmitAction, _>(actions::render_submit)
        .set::<OpenUrlAction, _>(actions::render_open_url)
        .set::<ShowCardAction, _>(actions::render_show_card);
}

/// Registers the built-in transformers for the three action kinds.
pub fn register_default_transformers(transformers: &mut ActionTransformers) {
    transformers
        .register::<OpenUrlAction, _>(actions::transform_open_url)
        .register::<SubmitAction, _>(actions::transform_submit)
        .register::<ShowCardAction, _>(actions::transform_show_card);
}

/// Shorthand used by the renderers for the host's interactivity switch.
fn interactive(ctx: &RenderContext<'_>) -> bool {
    ctx.config().supports_interactivity
}
