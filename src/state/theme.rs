use std::fmt;
use std::str::FromStr;

use leptos::*;

const STORAGE_KEY: &str = "finity-theme";

/// Color mode applied to the whole document
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Flip between light and dark
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value written to the `data-theme` attribute and to storage
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(()),
        }
    }
}

/// Theme context containing the current theme and toggle function
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: ReadSignal<Theme>,
    pub set_theme: WriteSignal<Theme>,
}

impl ThemeContext {
    /// Toggle between light and dark theme
    pub fn toggle(&self) {
        self.set_theme.update(|t| *t = t.toggled());
    }
}

/// Resolve the initial theme: stored value, then system preference, then light
fn get_initial_theme() -> Theme {
    if let Some(storage) = web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
    {
        if let Ok(Some(saved)) = storage.get_item(STORAGE_KEY) {
            if let Ok(theme) = saved.parse() {
                return theme;
            }
        }
    }

    if let Some(window) = web_sys::window() {
        if let Ok(Some(media_query)) = window.match_media("(prefers-color-scheme: dark)") {
            if media_query.matches() {
                return Theme::Dark;
            }
        }
    }

    Theme::Light
}

/// Save theme to localStorage
fn save_theme(theme: Theme) {
    if let Some(storage) = web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
    {
        let _ = storage.set_item(STORAGE_KEY, theme.as_str());
    }
}

/// Apply theme to the document root element; every styled component picks its
/// color tokens from the matching CSS custom-property set
fn apply_theme(theme: Theme) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    }
}

/// Provide theme context to the application.
/// Call this once at the root of the component tree.
pub fn provide_theme_context() {
    let initial_theme = get_initial_theme();

    apply_theme(initial_theme);

    let (theme, set_theme) = create_signal(initial_theme);

    // Apply and persist every change
    create_effect(move |_| {
        let current_theme = theme.get();
        apply_theme(current_theme);
        save_theme(current_theme);
    });

    provide_context(ThemeContext { theme, set_theme });
}

/// Hook to access theme context
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext must be provided by a parent component")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_returns_to_start() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn parses_storage_form() {
        assert_eq!("light".parse(), Ok(Theme::Light));
        assert_eq!("dark".parse(), Ok(Theme::Dark));
        assert!(Theme::from_str("solarized").is_err());
    }

    #[test]
    fn display_matches_attribute_value() {
        assert_eq!(Theme::Dark.to_string(), "dark");
        assert_eq!(Theme::Light.as_str(), "light");
    }
}
