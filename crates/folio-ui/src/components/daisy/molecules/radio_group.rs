use crate::components::daisy::atoms::Radio;
use crate::components::daisy::foundations::DaisySize;
use crate::components::daisy::molecules::Fieldset;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RadioGroupProps {
    pub name: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub options: Vec<(AttrValue, AttrValue)>,
    pub selected: AttrValue,
    #[prop_or_default]
    pub onchange: Callback<AttrValue>,
}

#[function_component(RadioGroup)]
pub fn radio_group(props: &RadioGroupProps) -> Html {
    html! {
        <Fieldset legend={props.title.clone()}>
            <div class="flex flex-wrap gap-4" role="radiogroup">
                {for props.options.iter().map(|(value, label)| html! {
                    <Radio
                        name={props.name.clone()}
                        value={value.clone()}
                        label={label.clone()}
                        checked={*value == props.selected}
                        size={DaisySize::Sm}
                        onchange={props.onchange.clone()}
                    />
                })}
            </div>
        </Fieldset>
    }
}
