//! Article parameters panel view.
//!
//! # Design
//! - Seed the draft from the committed selection once per mount.
//! - Emit commits through the host callback only on submit and reset.
//! - Scope the document `mousedown` listener to the open state.

use std::rc::Rc;

use crate::components::atoms::ArrowButton;
use crate::components::daisy::{
    Button, DaisyColor, DaisyVariant, Divider, Fieldset, RadioGroup, Select,
};
use crate::core::article::{ArticleParams, ParamChange, ParamField};
use crate::core::listener::ListenerGuard;
use crate::features::article_params::actions::PanelAction;
use crate::features::article_params::logic::option_labels;
use crate::features::article_params::state::ParamsPanelState;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use gloo::console;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::Node;
use yew::prelude::*;

impl Reducible for ParamsPanelState {
    type Action = PanelAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        next.apply(action);
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ArticleParamsFormProps {
    /// Committed selection owned by the host.
    pub params: ArticleParams,
    /// Replaces the committed selection.
    pub on_commit: Callback<ArticleParams>,
}

#[function_component(ArticleParamsForm)]
pub(crate) fn article_params_form(props: &ArticleParamsFormProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str, default: &str| AttrValue::from(bundle.text(key, default));
    let committed = props.params;
    let state = use_reducer(move || ParamsPanelState::new(committed));
    let panel_ref = use_node_ref();

    {
        let dispatcher = state.dispatcher();
        let panel_ref = panel_ref.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let mut guard = ListenerGuard::attach_while(*open, move || {
                    EventListener::new(&gloo::utils::document(), "mousedown", move |event| {
                        let target = event
                            .target()
                            .and_then(|target| target.dyn_into::<Node>().ok());
                        let inside = panel_ref
                            .get()
                            .map(|panel| panel.contains(target.as_ref()));
                        dispatcher.dispatch(PanelAction::PointerDown { inside });
                    })
                });
                move || guard.release()
            },
            state.open,
        );
    }

    let run = {
        let state = state.clone();
        let on_commit = props.on_commit.clone();
        Callback::from(move |action: PanelAction| {
            if let Some(next) = action.commit_request(&state.draft) {
                on_commit.emit(next);
            }
            state.dispatch(action);
        })
    };

    let on_toggle = {
        let run = run.clone();
        Callback::from(move |_: MouseEvent| run.emit(PanelAction::Toggle))
    };
    let on_submit = {
        let run = run.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            run.emit(PanelAction::Submit);
        })
    };
    let on_reset = {
        let run = run.clone();
        Callback::from(move |event: Event| {
            event.prevent_default();
            run.emit(PanelAction::Reset);
        })
    };
    let on_field = |field: ParamField| {
        let run = run.clone();
        Callback::from(move |raw: AttrValue| match ParamChange::parse(field, &raw) {
            Ok(change) => run.emit(PanelAction::Change(change)),
            Err(err) => console::error!("rejected control value", err.to_string()),
        })
    };
    let options = |field: ParamField| -> Vec<(AttrValue, AttrValue)> {
        option_labels(field, &bundle)
            .into_iter()
            .map(|(value, label)| (AttrValue::from(value), AttrValue::from(label)))
            .collect()
    };
    let select = |field: ParamField, fallback_title: &str| {
        html! {
            <Select
                name={field.key()}
                title={t(field.title_key(), fallback_title)}
                options={options(field)}
                value={state.draft.value_of(field)}
                onchange={on_field(field)}
            />
        }
    };

    let open = state.open;
    let panel_class = classes!("params-panel", open.then_some("params-panel-open"));

    html! {
        <div ref={panel_ref} class="params-root">
            <ArrowButton
                open={open}
                open_label={t("panel.open", "Open article settings")}
                close_label={t("panel.close", "Close article settings")}
                onclick={on_toggle}
            />
            <aside class={panel_class} aria-hidden={(!open).to_string()}>
                <form class="params-form" onsubmit={on_submit} onreset={on_reset}>
                    <h2 class="text-3xl font-extrabold uppercase">
                        {t("panel.title", "Set parameters")}
                    </h2>
                    <Fieldset>
                        {select(ParamField::FontFamily, "Font")}
                        <RadioGroup
                            name={ParamField::FontSize.key()}
                            title={t(ParamField::FontSize.title_key(), "Font size")}
                            options={options(ParamField::FontSize)}
                            selected={state.draft.value_of(ParamField::FontSize)}
                            onchange={on_field(ParamField::FontSize)}
                        />
                        {select(ParamField::FontColor, "Font color")}
                    </Fieldset>
                    <Divider />
                    <Fieldset>
                        {select(ParamField::BackgroundColor, "Background color")}
                        {select(ParamField::ContentWidth, "Content width")}
                    </Fieldset>
                    <div class="params-actions">
                        <Button
                            r#type="reset"
                            variant={DaisyVariant::Outline}
                            tone={DaisyColor::Neutral}
                        >
                            {t("panel.reset", "Reset")}
                        </Button>
                        <Button r#type="submit" tone={DaisyColor::Primary}>
                            {t("panel.apply", "Apply")}
                        </Button>
                    </div>
                </form>
            </aside>
        </div>
    }
}
