//! Light/dark theme selection. The theme is a presentation flag carried in
//! the request URL: no persistence, no validation, no failure mode.
//! Unknown values fall back to light silently.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The class added to the page container. Light mode adds nothing;
    /// the stylesheet treats the absence of `dark` as light.
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark",
        }
    }

    pub fn toggle(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Parses a query value. Anything that is not exactly `dark` or
    /// `light` is treated as light.
    pub fn parse_or_default(value: &str) -> Theme {
        match value {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_original_state() {
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
    }

    #[test]
    fn test_default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_unknown_values_fall_back_to_light() {
        assert_eq!(Theme::parse_or_default("dark"), Theme::Dark);
        assert_eq!(Theme::parse_or_default("light"), Theme::Light);
        assert_eq!(Theme::parse_or_default("solarized"), Theme::Light);
        assert_eq!(Theme::parse_or_default(""), Theme::Light);
        assert_eq!(Theme::parse_or_default("DARK"), Theme::Light);
    }

    #[test]
    fn test_only_dark_adds_a_container_class() {
        assert_eq!(Theme::Dark.css_class(), "dark");
        assert_eq!(Theme::Light.css_class(), "");
    }
}
