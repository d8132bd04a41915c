//! Property-based tests for the layout rules using proptest.

use proptest::prelude::*;

use cardtag_render::document::{
    Action, AdaptiveCard, Choice, ChoiceInputStyle, ChoiceSetInput, Column, Element, Spacing,
    SubmitAction,
};
use cardtag_render::{
    column_denominator, separator_tag, ActionTransformers, CardRenderer, HostConfig,
    RenderContext, RendererRegistry, SequentialIds, Tag,
};

// ============================================================================
// Strategies
// ============================================================================

fn spacing_strategy() -> impl Strategy<Value = Spacing> {
    prop_oneof![
        Just(Spacing::None),
        Just(Spacing::Small),
        Just(Spacing::Default),
        Just(Spacing::Medium),
        Just(Spacing::Large),
        Just(Spacing::ExtraLarge),
        Just(Spacing::Padding),
    ]
}

fn width_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("auto".to_string())),
        Just(Some("stretch".to_string())),
        Just(Some("120px".to_string())),
        (0u32..50).prop_map(|n| Some(n.to_string())),
        (0.0f64..5.0).prop_map(|n| Some(format!("{:.2}", n))),
    ]
}

fn column_strategy() -> impl Strategy<Value = Column> {
    (width_strategy(), width_strategy()).prop_map(|(width, size)| Column {
        width,
        size,
        ..Column::default()
    })
}

fn submit(n: usize) -> Action {
    Action::Submit(SubmitAction {
        title: Some(format!("Action {}", n)),
        data: None,
    })
}

fn is_spacer(tag: &Tag) -> bool {
    tag.name() == "div"
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// The column denominator never drops below one.
    #[test]
    fn denominator_is_at_least_one(columns in prop::collection::vec(column_strategy(), 0..8)) {
        prop_assert!(column_denominator(&columns) >= 1.0);
    }

    /// Only the (no rule, no spacing) combination yields no separator.
    #[test]
    fn separator_policy(spacing in spacing_strategy(), separator in any::<bool>()) {
        let config = HostConfig::default();
        let tag = separator_tag(spacing, separator, &config);
        if !separator && spacing == Spacing::None {
            prop_assert!(tag.is_none());
        } else {
            let tag = tag.unwrap();
            prop_assert!(tag.has_class("ac-separator"));
            prop_assert_eq!(tag.name(), if separator { "hr" } else { "div" });
        }
    }

    /// At most `maxActions` buttons render, separated by spacers, with no
    /// spacer after the last button.
    #[test]
    fn action_strip_truncates_and_spaces(max_actions in 0usize..8, count in 1usize..12) {
        let mut config = HostConfig::default();
        config.actions.max_actions = max_actions;
        let renderers = RendererRegistry::with_defaults();
        let transformers = ActionTransformers::with_defaults();
        let ids = SequentialIds::new();
        let mut ctx = RenderContext::new(&config, &renderers, &transformers, &ids);

        let actions: Vec<Action> = (0..count).map(submit).collect();
        let (strip, show_cards) = cardtag_render::build_action_strip(&actions, &mut ctx).unwrap();
        prop_assert!(show_cards.is_empty());

        let buttons = strip.children().iter().filter(|tag| tag.name() == "a").count();
        let spacers = strip.children().iter().filter(|tag| is_spacer(tag)).count();
        prop_assert_eq!(buttons, max_actions.min(count));
        prop_assert_eq!(spacers, buttons.saturating_sub(1));
        if let Some(last) = strip.children().last() {
            prop_assert_eq!(last.name(), "a");
        }
        prop_assert_eq!(ctx.warnings().len(), usize::from(count > max_actions));
    }

    /// Expanded choice sets check exactly the listed defaults.
    #[test]
    fn choice_defaults_are_checked(
        values in prop::collection::btree_set("[a-e]", 1..5),
        picked in prop::collection::vec(any::<bool>(), 5),
        multi in any::<bool>(),
    ) {
        let values: Vec<String> = values.into_iter().collect();
        let defaults: Vec<&str> = values
            .iter()
            .zip(&picked)
            .filter(|(_, pick)| **pick)
            .map(|(value, _)| value.as_str())
            .collect();

        let input = ChoiceSetInput {
            id: "choice".into(),
            choices: values.iter().map(|v| Choice::new(v.to_uppercase(), v.clone())).collect(),
            value: defaults.join(" , "),
            style: ChoiceInputStyle::Expanded,
            is_multi_select: multi,
            ..ChoiceSetInput::default()
        };
        let card = AdaptiveCard::new().element(Element::ChoiceSetInput(input));
        let rendered = CardRenderer::default()
            .with_id_source(SequentialIds::new())
            .render_card(&card)
            .unwrap();

        let checked: Vec<&str> = rendered
            .tag
            .find_all_by_name("input")
            .filter(|input| input.attribute("checked").is_some())
            .filter_map(|input| input.attribute("value"))
            .collect();
        prop_assert_eq!(checked, defaults);
    }

    /// A compact choice set selects the single matching option.
    #[test]
    fn compact_choice_selects_one(values in prop::collection::btree_set("[a-z]{1,3}", 1..6), index in any::<prop::sample::Index>()) {
        let values: Vec<String> = values.into_iter().collect();
        let current = values[index.index(values.len())].clone();

        let input = ChoiceSetInput {
            id: "choice".into(),
            choices: values.iter().map(|v| Choice::new(v.clone(), v.clone())).collect(),
            value: current.clone(),
            ..ChoiceSetInput::default()
        };
        let card = AdaptiveCard::new().element(Element::ChoiceSetInput(input));
        let rendered = CardRenderer::default().render_card(&card).unwrap();

        let selected: Vec<&Tag> = rendered
            .tag
            .find_all_by_name("option")
            .filter(|option| option.attribute("selected").is_some())
            .collect();
        prop_assert_eq!(selected.len(), 1);
        prop_assert_eq!(selected[0].attribute("value"), Some(current.as_str()));
    }
}
