/// Shared DaisyUI color tokens used by the panel controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DaisyColor {
    Primary,
    Neutral,
}

impl DaisyColor {
    /// Returns the class suffix (e.g. `"primary"`) for the color.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Neutral => "neutral",
        }
    }
}

/// Common sizing tokens used by DaisyUI controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DaisySize {
    Sm,
    #[default]
    Md,
}

impl DaisySize {
    /// Returns the suffix used by DaisyUI for the selected size.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }

    /// Adds a prefix (e.g. `btn`) to the size suffix for class composition.
    #[must_use]
    pub fn with_prefix(self, prefix: &str) -> String {
        format!("{prefix}-{}", self.suffix())
    }
}

/// Variants used across button-like elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DaisyVariant {
    #[default]
    Solid,
    Outline,
}

impl DaisyVariant {
    /// Maps the variant to the DaisyUI class name.
    #[must_use]
    pub const fn as_class(self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::Outline => Some("btn-outline"),
        }
    }
}

/// Convenience helper for composing class lists with an optional tone.
#[must_use]
pub fn tone_class(prefix: &str, tone: Option<DaisyColor>) -> Option<String> {
    tone.map(|color| format!("{prefix}-{}", color.as_str()))
}
