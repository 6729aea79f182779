use crate::app::article::Article;
use crate::core::article::ArticleParams;
use crate::features::article_params::view::ArticleParamsForm;
use crate::i18n::TranslationBundle;
use gloo::utils::document;
use preferences::{load_launch_options, resolve_locale};
use yew::prelude::*;

mod article;
mod preferences;

#[function_component(FolioApp)]
pub fn folio_app() -> Html {
    let launch = use_memo(|_| load_launch_options(), ());
    let params = use_state(|| launch.params);
    let bundle = {
        let requested = launch.locale;
        use_memo(move |_| TranslationBundle::new(resolve_locale(requested)), ())
    };
    {
        let locale = bundle.locale;
        use_effect_with_deps(
            move |_| {
                if let Some(root) = document().document_element() {
                    root.set_attribute("lang", locale.code()).ok();
                }
                || ()
            },
            locale,
        );
    }

    let on_commit = {
        let params = params.clone();
        Callback::from(move |next: ArticleParams| params.set(next))
    };

    html! {
        <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
            <ArticleParamsForm params={*params} on_commit={on_commit} />
            <Article params={*params} bundle={(*bundle).clone()} />
        </ContextProvider<TranslationBundle>>
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = document().get_element_by_id("root") {
        yew::Renderer::<FolioApp>::with_root(root).render();
    } else {
        yew::Renderer::<FolioApp>::new().render();
    }
}
