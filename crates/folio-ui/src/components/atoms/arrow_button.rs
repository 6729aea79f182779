use yew::prelude::*;

use super::IconButton;
use super::icons::{ArrowDirection, ArrowIcon};

/// Props for the panel toggle.
#[derive(Properties, PartialEq)]
pub(crate) struct ArrowButtonProps {
    /// Whether the controlled panel is expanded.
    pub open: bool,
    /// Label announced while the panel is closed.
    pub open_label: AttrValue,
    /// Label announced while the panel is open.
    pub close_label: AttrValue,
    /// Click handler.
    pub onclick: Callback<MouseEvent>,
}

#[function_component(ArrowButton)]
pub(crate) fn arrow_button(props: &ArrowButtonProps) -> Html {
    let (label, direction) = if props.open {
        (props.close_label.clone(), ArrowDirection::Left)
    } else {
        (props.open_label.clone(), ArrowDirection::Right)
    };
    html! {
        <IconButton
            aria_label={label}
            expanded={props.open}
            class={classes!("arrow-toggle", "btn-primary", props.open.then_some("arrow-toggle-open"))}
            onclick={props.onclick.clone()}
        >
            <ArrowIcon direction={direction} />
        </IconButton>
    }
}
