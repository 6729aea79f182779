use crate::components::daisy::foundations::DaisySize;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SelectProps {
    pub name: AttrValue,
    /// Caption rendered above the control.
    pub title: AttrValue,
    #[prop_or_default]
    pub options: Vec<(AttrValue, AttrValue)>,
    pub value: AttrValue,
    #[prop_or(DaisySize::Md)]
    pub size: DaisySize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onchange: Callback<AttrValue>,
}

#[function_component(Select)]
pub fn select(props: &SelectProps) -> Html {
    let size = props.size.with_prefix("select");
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                onchange.emit(target.value().into());
            }
        })
    };

    html! {
        <label class="form-control w-full">
            <span class="label-text uppercase font-semibold">{props.title.clone()}</span>
            <select
                name={props.name.clone()}
                class={classes!("select", "select-bordered", size, props.class.clone())}
                value={props.value.clone()}
                onchange={onchange}
            >
                {for props.options.iter().map(|(value, label)| {
                    let selected = *value == props.value;
                    html! { <option value={value.clone()} selected={selected}>{label.clone()}</option> }
                })}
            </select>
        </label>
    }
}
