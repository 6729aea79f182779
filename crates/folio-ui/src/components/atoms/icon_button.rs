use yew::prelude::*;

/// Props for icon-only buttons.
#[derive(Properties, PartialEq)]
pub(crate) struct IconButtonProps {
    /// Accessible label for the button.
    pub aria_label: AttrValue,
    /// Reflects a toggled state to assistive technology.
    #[prop_or_default]
    pub expanded: Option<bool>,
    /// Additional CSS classes.
    #[prop_or_default]
    pub class: Classes,
    /// Click handler.
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    /// Icon content.
    #[prop_or_default]
    pub children: Children,
}

#[function_component(IconButton)]
pub(crate) fn icon_button(props: &IconButtonProps) -> Html {
    let classes = classes!("btn", "btn-circle", "btn-ghost", props.class.clone());
    let expanded = props
        .expanded
        .map(|value| AttrValue::from(if value { "true" } else { "false" }));
    html! {
        <button
            class={classes}
            type="button"
            aria-label={props.aria_label.clone()}
            aria-expanded={expanded}
            onclick={props.onclick.clone()}
        >
            {for props.children.iter()}
        </button>
    }
}
