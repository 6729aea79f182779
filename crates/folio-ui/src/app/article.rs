//! Article body styled from the committed selection.

use crate::core::article::ArticleParams;
use crate::core::style::style_attribute;
use crate::i18n::TranslationBundle;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ArticleProps {
    pub params: ArticleParams,
    pub bundle: TranslationBundle,
}

#[function_component(Article)]
pub(crate) fn article(props: &ArticleProps) -> Html {
    let t = |key: &str| props.bundle.text(key, "");
    html! {
        <main class="article-root" style={style_attribute(&props.params)}>
            <article class="article">
                <h1 class="article-title">{t("article.title")}</h1>
                <p class="article-lead">{t("article.lead")}</p>
                <p class="article-text">{t("article.body")}</p>
            </article>
        </main>
    }
}
