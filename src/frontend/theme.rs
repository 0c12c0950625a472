use gloo::events::EventListener;
use log::{debug, warn};
use web_sys::{Document, HtmlElement, Storage, Window};

use super::dom::{add_class, html_by_id};
use super::Mounted;
use crate::effects::theme::{Theme, LIGHT_THEME_CLASS, THEME_KEY};
use crate::error::SiteError;

const TOGGLE_ID: &str = "theme-toggle";

pub struct ThemeToggle {
    _listener: EventListener,
}

impl ThemeToggle {
    /// Applies the stored theme to `<body>` and wires the toggle button.
    pub fn install(window: &Window, document: &Document) -> Result<Option<Self>, SiteError> {
        let Some(body) = document.body() else {
            return Ok(None);
        };

        let stored = read_stored_theme(window);
        if stored.is_light() {
            add_class(&body, LIGHT_THEME_CLASS)?;
        }
        debug!("theme on load: {}", stored.as_str());

        let Some(toggle) = html_by_id(document, TOGGLE_ID) else {
            return Ok(None);
        };

        let window = window.clone();
        let listener = EventListener::new(&toggle, "click", move |_| {
            let next = toggle_body_theme(&body);
            persist_theme(&window, next);
            debug!("theme switched to {}", next.as_str());
        });

        Ok(Some(Self {
            _listener: listener,
        }))
    }
}

impl Mounted for ThemeToggle {
    fn name(&self) -> &'static str {
        "theme"
    }
}

fn local_storage(window: &Window) -> Option<Storage> {
    window.local_storage().ok().flatten()
}

fn read_stored_theme(window: &Window) -> Theme {
    let value = local_storage(window).and_then(|storage| storage.get_item(THEME_KEY).ok().flatten());
    Theme::from_stored(value.as_deref())
}

fn toggle_body_theme(body: &HtmlElement) -> Theme {
    let class_list = body.class_list();
    let has_light_class = class_list
        .toggle(LIGHT_THEME_CLASS)
        .unwrap_or_else(|_| class_list.contains(LIGHT_THEME_CLASS));
    Theme::from_light_class(has_light_class)
}

fn persist_theme(window: &Window, theme: Theme) {
    let Some(storage) = local_storage(window) else {
        warn!("local storage unavailable, theme not saved");
        return;
    };

    if storage.set_item(THEME_KEY, theme.as_str()).is_err() {
        warn!("failed to save theme preference");
    }
}
