//! Arrow icon rendering helpers.

use yew::prelude::*;

/// Horizontal arrow orientations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ArrowDirection {
    /// Points toward the panel edge (collapse).
    Left,
    /// Points away from the panel edge (expand).
    Right,
}

/// Props for the directional arrow icon.
#[derive(Properties, PartialEq)]
pub(crate) struct ArrowIconProps {
    /// Arrow direction.
    pub direction: ArrowDirection,
    /// Icon size in pixels.
    #[prop_or(24)]
    pub size: u32,
    /// Additional CSS classes for the SVG.
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ArrowIcon)]
pub(crate) fn arrow_icon(props: &ArrowIconProps) -> Html {
    let size = props.size.to_string();
    let path = match props.direction {
        ArrowDirection::Left => "M15 6l-6 6l6 6",
        ArrowDirection::Right => "M9 6l6 6l-6 6",
    };

    html! {
        <svg
            class={props.class.clone()}
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d={path} />
        </svg>
    }
}
