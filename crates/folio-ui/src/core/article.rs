//! Article typography parameters and their option catalogs.
//!
//! # Design
//! - Every field is a closed enum so a selection can never hold an unknown value.
//! - Option identity is the value string; labels resolve through translation keys.
//! - String parsing happens only at the control and launch-query boundaries.

use crate::core::error::ParamsError;

/// Font family choices offered by the panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// Open Sans.
    #[default]
    OpenSans,
    /// Ubuntu.
    Ubuntu,
    /// Cormorant Garamond.
    CormorantGaramond,
    /// Days One.
    DaysOne,
    /// Merriweather.
    Merriweather,
}

impl FontFamily {
    /// All families in display order.
    pub const ALL: [Self; 5] = [
        Self::OpenSans,
        Self::Ubuntu,
        Self::CormorantGaramond,
        Self::DaysOne,
        Self::Merriweather,
    ];

    /// Value used by controls and the `--font-family` property.
    #[must_use]
    pub const fn as_value(self) -> &'static str {
        match self {
            Self::OpenSans => "Open Sans",
            Self::Ubuntu => "Ubuntu",
            Self::CormorantGaramond => "Cormorant Garamond",
            Self::DaysOne => "Days One",
            Self::Merriweather => "Merriweather",
        }
    }

    /// Translation key for the option label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::OpenSans => "options.font_family.open_sans",
            Self::Ubuntu => "options.font_family.ubuntu",
            Self::CormorantGaramond => "options.font_family.cormorant_garamond",
            Self::DaysOne => "options.font_family.days_one",
            Self::Merriweather => "options.font_family.merriweather",
        }
    }

    /// Parse a control value.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.as_value() == value)
    }
}

/// Font size choices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontSize {
    /// 18px body text.
    #[default]
    Px18,
    /// 25px body text.
    Px25,
    /// 38px body text.
    Px38,
}

impl FontSize {
    /// All sizes in display order.
    pub const ALL: [Self; 3] = [Self::Px18, Self::Px25, Self::Px38];

    /// CSS length used by controls and the `--font-size` property.
    #[must_use]
    pub const fn as_value(self) -> &'static str {
        match self {
            Self::Px18 => "18px",
            Self::Px25 => "25px",
            Self::Px38 => "38px",
        }
    }

    /// Translation key for the option label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Px18 => "options.font_size.px18",
            Self::Px25 => "options.font_size.px25",
            Self::Px38 => "options.font_size.px38",
        }
    }

    /// Parse a control value.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.as_value() == value)
    }
}

/// Color palette shared by the font color and background color fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Swatch {
    /// `#000000`.
    Black,
    /// `#FFFFFF`.
    White,
    /// `#C4C4C4`.
    Gray,
    /// `#FEAFE8`.
    Pink,
    /// `#FD24AF`.
    Fuchsia,
    /// `#FFC802`.
    Yellow,
    /// `#80D994`.
    Green,
    /// `#6FC1FD`.
    Blue,
    /// `#5F2EB9`.
    Purple,
}

impl Swatch {
    /// Display order for the font color control.
    pub const FONT_COLORS: [Self; 9] = [
        Self::Black,
        Self::White,
        Self::Gray,
        Self::Pink,
        Self::Fuchsia,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Purple,
    ];

    /// Display order for the background color control.
    pub const BACKGROUND_COLORS: [Self; 9] = [
        Self::White,
        Self::Black,
        Self::Gray,
        Self::Pink,
        Self::Fuchsia,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Purple,
    ];

    /// Hex color used by controls and CSS properties.
    #[must_use]
    pub const fn as_value(self) -> &'static str {
        match self {
            Self::Black => "#000000",
            Self::White => "#FFFFFF",
            Self::Gray => "#C4C4C4",
            Self::Pink => "#FEAFE8",
            Self::Fuchsia => "#FD24AF",
            Self::Yellow => "#FFC802",
            Self::Green => "#80D994",
            Self::Blue => "#6FC1FD",
            Self::Purple => "#5F2EB9",
        }
    }

    /// Translation key for the option label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Black => "options.color.black",
            Self::White => "options.color.white",
            Self::Gray => "options.color.gray",
            Self::Pink => "options.color.pink",
            Self::Fuchsia => "options.color.fuchsia",
            Self::Yellow => "options.color.yellow",
            Self::Green => "options.color.green",
            Self::Blue => "options.color.blue",
            Self::Purple => "options.color.purple",
        }
    }

    /// Parse a hex value, ignoring ASCII case.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::FONT_COLORS
            .into_iter()
            .find(|option| option.as_value().eq_ignore_ascii_case(value))
    }
}

/// Article column width choices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ContentWidth {
    /// 1394px column.
    #[default]
    Wide,
    /// 948px column.
    Narrow,
}

impl ContentWidth {
    /// All widths in display order.
    pub const ALL: [Self; 2] = [Self::Wide, Self::Narrow];

    /// CSS length used by controls and the `--container-width` property.
    #[must_use]
    pub const fn as_value(self) -> &'static str {
        match self {
            Self::Wide => "1394px",
            Self::Narrow => "948px",
        }
    }

    /// Translation key for the option label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Wide => "options.width.wide",
            Self::Narrow => "options.width.narrow",
        }
    }

    /// Parse a control value.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.as_value() == value)
    }
}

/// Names of the five article parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamField {
    /// Font family.
    FontFamily,
    /// Font size.
    FontSize,
    /// Text color.
    FontColor,
    /// Page background color.
    BackgroundColor,
    /// Article column width.
    ContentWidth,
}

/// One selectable option of a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParamOption {
    /// Control value (option identity).
    pub value: &'static str,
    /// Translation key for the label.
    pub label_key: &'static str,
}

impl ParamField {
    /// All fields in panel order.
    pub const ALL: [Self; 5] = [
        Self::FontFamily,
        Self::FontSize,
        Self::FontColor,
        Self::BackgroundColor,
        Self::ContentWidth,
    ];

    /// Stable identifier used in query strings and form control names.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::FontFamily => "font",
            Self::FontSize => "size",
            Self::FontColor => "color",
            Self::BackgroundColor => "background",
            Self::ContentWidth => "width",
        }
    }

    /// Translation key for the control title.
    #[must_use]
    pub const fn title_key(self) -> &'static str {
        match self {
            Self::FontFamily => "panel.font_family",
            Self::FontSize => "panel.font_size",
            Self::FontColor => "panel.font_color",
            Self::BackgroundColor => "panel.background_color",
            Self::ContentWidth => "panel.content_width",
        }
    }

    /// Map a query/control key back to its field.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    /// Options offered for the field, in display order.
    #[must_use]
    pub fn options(self) -> Vec<ParamOption> {
        fn collect<T: Copy>(
            items: &[T],
            value: fn(T) -> &'static str,
            label_key: fn(T) -> &'static str,
        ) -> Vec<ParamOption> {
            items
                .iter()
                .map(|item| ParamOption {
                    value: value(*item),
                    label_key: label_key(*item),
                })
                .collect()
        }

        match self {
            Self::FontFamily => collect(
                &FontFamily::ALL,
                FontFamily::as_value,
                FontFamily::label_key,
            ),
            Self::FontSize => collect(&FontSize::ALL, FontSize::as_value, FontSize::label_key),
            Self::FontColor => collect(&Swatch::FONT_COLORS, Swatch::as_value, Swatch::label_key),
            Self::BackgroundColor => collect(
                &Swatch::BACKGROUND_COLORS,
                Swatch::as_value,
                Swatch::label_key,
            ),
            Self::ContentWidth => collect(
                &ContentWidth::ALL,
                ContentWidth::as_value,
                ContentWidth::label_key,
            ),
        }
    }
}

/// Replacement of exactly one article parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamChange {
    /// New font family.
    FontFamily(FontFamily),
    /// New font size.
    FontSize(FontSize),
    /// New text color.
    FontColor(Swatch),
    /// New background color.
    BackgroundColor(Swatch),
    /// New column width.
    ContentWidth(ContentWidth),
}

impl ParamChange {
    /// Parse a raw control value for `field`.
    ///
    /// # Errors
    /// Returns [`ParamsError::UnknownOption`] when the value is not in the field's catalog.
    pub fn parse(field: ParamField, raw: &str) -> Result<Self, ParamsError> {
        let change = match field {
            ParamField::FontFamily => FontFamily::from_value(raw).map(Self::FontFamily),
            ParamField::FontSize => FontSize::from_value(raw).map(Self::FontSize),
            ParamField::FontColor => Swatch::from_value(raw).map(Self::FontColor),
            ParamField::BackgroundColor => Swatch::from_value(raw).map(Self::BackgroundColor),
            ParamField::ContentWidth => ContentWidth::from_value(raw).map(Self::ContentWidth),
        };
        change.ok_or_else(|| ParamsError::UnknownOption {
            field,
            value: raw.to_string(),
        })
    }

    /// Field this change targets.
    #[must_use]
    pub const fn field(self) -> ParamField {
        match self {
            Self::FontFamily(_) => ParamField::FontFamily,
            Self::FontSize(_) => ParamField::FontSize,
            Self::FontColor(_) => ParamField::FontColor,
            Self::BackgroundColor(_) => ParamField::BackgroundColor,
            Self::ContentWidth(_) => ParamField::ContentWidth,
        }
    }
}

/// Full typography selection applied to an article.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ArticleParams {
    /// Font family.
    pub font_family: FontFamily,
    /// Font size.
    pub font_size: FontSize,
    /// Text color.
    pub font_color: Swatch,
    /// Page background color.
    pub background_color: Swatch,
    /// Article column width.
    pub content_width: ContentWidth,
}

/// Configuration restored by the reset action.
pub const DEFAULT_ARTICLE_PARAMS: ArticleParams = ArticleParams {
    font_family: FontFamily::OpenSans,
    font_size: FontSize::Px18,
    font_color: Swatch::Black,
    background_color: Swatch::White,
    content_width: ContentWidth::Wide,
};

impl Default for ArticleParams {
    fn default() -> Self {
        DEFAULT_ARTICLE_PARAMS
    }
}

impl ArticleParams {
    /// Copy of `self` with exactly one field replaced.
    #[must_use]
    pub const fn with_change(mut self, change: ParamChange) -> Self {
        match change {
            ParamChange::FontFamily(value) => self.font_family = value,
            ParamChange::FontSize(value) => self.font_size = value,
            ParamChange::FontColor(value) => self.font_color = value,
            ParamChange::BackgroundColor(value) => self.background_color = value,
            ParamChange::ContentWidth(value) => self.content_width = value,
        }
        self
    }

    /// Parse `raw` for `field` and replace that field.
    ///
    /// # Errors
    /// Returns [`ParamsError::UnknownOption`] when the value is not in the field's catalog.
    pub fn with_value(self, field: ParamField, raw: &str) -> Result<Self, ParamsError> {
        ParamChange::parse(field, raw).map(|change| self.with_change(change))
    }

    /// Current value string of `field`.
    #[must_use]
    pub const fn value_of(&self, field: ParamField) -> &'static str {
        match field {
            ParamField::FontFamily => self.font_family.as_value(),
            ParamField::FontSize => self.font_size.as_value(),
            ParamField::FontColor => self.font_color.as_value(),
            ParamField::BackgroundColor => self.background_color.as_value(),
            ParamField::ContentWidth => self.content_width.as_value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_first_catalog_entries() {
        let params = ArticleParams::default();
        assert_eq!(params.font_family, FontFamily::ALL[0]);
        assert_eq!(params.font_size, FontSize::ALL[0]);
        assert_eq!(params.font_color, Swatch::FONT_COLORS[0]);
        assert_eq!(params.background_color, Swatch::BACKGROUND_COLORS[0]);
        assert_eq!(params.content_width, ContentWidth::ALL[0]);
    }

    #[test]
    fn every_option_round_trips_through_its_value() {
        for field in ParamField::ALL {
            for option in field.options() {
                let params = ArticleParams::default()
                    .with_value(field, option.value)
                    .expect("catalog value parses");
                assert_eq!(params.value_of(field), option.value);
            }
        }
    }

    #[test]
    fn with_change_touches_only_its_field() {
        let base = ArticleParams::default();
        let changed = base.with_change(ParamChange::ContentWidth(ContentWidth::Narrow));
        assert_eq!(changed.content_width, ContentWidth::Narrow);
        for field in ParamField::ALL {
            if field != ParamField::ContentWidth {
                assert_eq!(changed.value_of(field), base.value_of(field));
            }
        }
    }

    #[test]
    fn parsed_changes_target_their_field() {
        for field in ParamField::ALL {
            for option in field.options() {
                let change = ParamChange::parse(field, option.value).expect("catalog value parses");
                assert_eq!(change.field(), field);
            }
        }
    }

    #[test]
    fn unknown_values_are_rejected() {
        let err = ArticleParams::default()
            .with_value(ParamField::FontSize, "19px")
            .expect_err("not in catalog");
        assert_eq!(
            err,
            ParamsError::UnknownOption {
                field: ParamField::FontSize,
                value: "19px".to_string(),
            }
        );
    }

    #[test]
    fn swatches_parse_case_insensitively() {
        assert_eq!(Swatch::from_value("#ffffff"), Some(Swatch::White));
        assert_eq!(Swatch::from_value("#123456"), None);
    }

    #[test]
    fn color_fields_share_palette_with_distinct_order() {
        let fonts = ParamField::FontColor.options();
        let backgrounds = ParamField::BackgroundColor.options();
        assert_eq!(fonts.len(), backgrounds.len());
        assert_eq!(fonts[0].value, "#000000");
        assert_eq!(backgrounds[0].value, "#FFFFFF");
    }

    #[test]
    fn field_keys_round_trip() {
        for field in ParamField::ALL {
            assert_eq!(ParamField::from_key(field.key()), Some(field));
        }
        assert_eq!(ParamField::from_key("locale"), None);
    }
}
