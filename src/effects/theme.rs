pub const THEME_KEY: &str = "theme";
pub const LIGHT_THEME_CLASS: &str = "light-theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Anything other than an exact `"light"` (including nothing stored) is dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    pub fn from_light_class(has_light_class: bool) -> Self {
        if has_light_class {
            Self::Light
        } else {
            Self::Dark
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_light(self) -> bool {
        matches!(self, Self::Light)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_preference_defaults_to_dark() {
        assert_eq!(Theme::from_stored(None), Theme::Dark);
    }

    #[test]
    fn only_exact_light_selects_light() {
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("Light")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("solarized")), Theme::Dark);
    }

    #[test]
    fn toggling_twice_restores_original() {
        for stored in [Some("light"), Some("dark"), None] {
            let original = Theme::from_stored(stored);
            assert_eq!(original.toggled().toggled(), original);
        }
    }

    #[test]
    fn persisted_values_are_light_or_dark() {
        let mut theme = Theme::from_stored(Some("garbage"));
        for _ in 0..4 {
            theme = theme.toggled();
            assert!(matches!(theme.as_str(), "light" | "dark"));
            assert_eq!(Theme::from_stored(Some(theme.as_str())), theme);
        }
    }

    #[test]
    fn class_presence_maps_to_theme() {
        assert!(Theme::from_light_class(true).is_light());
        assert!(!Theme::from_light_class(false).is_light());
    }
}
