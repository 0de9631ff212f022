use super::super::Model;
use super::super::Msg;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use yew::html::Scope;
use yew::prelude::*;

const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Restores the persisted theme and applies it to the document body.
pub fn load_theme() -> Theme {
    let theme = LocalStorage::get(THEME_KEY).unwrap_or(Theme::Light);
    apply_theme(theme);
    theme
}

/// Flips the body class and persists the choice across sessions.
pub fn apply_theme(theme: Theme) {
    let body = web_sys::window().unwrap().document().unwrap().body().unwrap();

    match theme {
        Theme::Dark => body.class_list().add_1("dark-mode").unwrap(),
        Theme::Light => body.class_list().remove_1("dark-mode").unwrap(),
    }

    let _ = LocalStorage::set(THEME_KEY, theme);
}

pub fn render_theme_toggle(theme: Theme, link: &Scope<Model>) -> Html {
    html! {
        <button
            id="theme-toggle"
            class="theme-toggle"
            onclick={link.callback(|_| Msg::ToggleTheme)}
            title={ if theme == Theme::Light { "Switch to Dark Mode" } else { "Switch to Light Mode" } }
        >
            { if theme == Theme::Light {
                html! { <img src="https://cdnjs.cloudflare.com/ajax/libs/twemoji/14.0.2/svg/2600.svg" alt="Sun Icon" class="toggle-icon" /> }
            } else {
                html! { <img src="https://cdnjs.cloudflare.com/ajax/libs/twemoji/14.0.2/svg/1f319.svg" alt="Moon Icon" class="toggle-icon" /> }
            }}
        </button>
    }
}
