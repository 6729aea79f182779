//! CSS custom properties derived from committed article parameters.

use crate::core::article::ArticleParams;

/// Custom property names and values applied to the article root.
#[must_use]
pub const fn css_variables(params: &ArticleParams) -> [(&'static str, &'static str); 5] {
    [
        ("--font-family", params.font_family.as_value()),
        ("--font-size", params.font_size.as_value()),
        ("--font-color", params.font_color.as_value()),
        ("--container-width", params.content_width.as_value()),
        ("--bg-color", params.background_color.as_value()),
    ]
}

/// Inline `style` attribute carrying [`css_variables`].
#[must_use]
pub fn style_attribute(params: &ArticleParams) -> String {
    css_variables(params)
        .iter()
        .map(|(name, value)| format!("{name}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::article::{ContentWidth, ParamChange};

    #[test]
    fn default_style_lists_all_properties() {
        assert_eq!(
            style_attribute(&ArticleParams::default()),
            "--font-family: Open Sans; --font-size: 18px; --font-color: #000000; \
             --container-width: 1394px; --bg-color: #FFFFFF;"
        );
    }

    #[test]
    fn width_change_only_moves_container_width() {
        let base = css_variables(&ArticleParams::default());
        let narrow = css_variables(
            &ArticleParams::default().with_change(ParamChange::ContentWidth(ContentWidth::Narrow)),
        );
        let differing: Vec<_> = base
            .iter()
            .zip(narrow.iter())
            .filter(|(left, right)| left != right)
            .map(|(left, _)| left.0)
            .collect();
        assert_eq!(differing, vec!["--container-width"]);
    }
}
