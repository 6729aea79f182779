use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DividerProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Divider)]
pub fn divider(props: &DividerProps) -> Html {
    html! { <div role="separator" class={classes!("divider", props.class.clone())}></div> }
}
