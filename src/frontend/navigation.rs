use gloo::events::EventListener;
use log::debug;
use web_sys::{Document, Element, Window};

use super::dom::{add_class, js_error, query, query_all, remove_class, scroll_y, ACTIVE_CLASS};
use super::Mounted;
use crate::config::MotionConfig;
use crate::effects::navigation::{current_page, is_active_link, navbar_scrolled};
use crate::error::SiteError;

const NAVBAR_SELECTOR: &str = ".navbar";
const SCROLLED_CLASS: &str = "scrolled";
const NAV_MENU_SELECTOR: &str = ".nav-links";
const NAV_LINK_SELECTOR: &str = ".nav-links a";
const HAMBURGER_SELECTOR: &str = ".hamburger";

pub struct NavbarState {
    _listener: EventListener,
}

impl NavbarState {
    pub fn install(
        window: &Window,
        document: &Document,
        config: &MotionConfig,
    ) -> Result<Option<Self>, SiteError> {
        let Some(navbar) = query(document, NAVBAR_SELECTOR)? else {
            return Ok(None);
        };

        let threshold = config.navbar_threshold_px;
        sync_scrolled(&navbar, window, threshold);

        let scroll_window = window.clone();
        let listener = EventListener::new(window, "scroll", move |_| {
            sync_scrolled(&navbar, &scroll_window, threshold);
        });

        Ok(Some(Self {
            _listener: listener,
        }))
    }
}

impl Mounted for NavbarState {
    fn name(&self) -> &'static str {
        "navbar"
    }
}

fn sync_scrolled(navbar: &Element, window: &Window, threshold: f64) {
    let class_list = navbar.class_list();
    let _ = if navbar_scrolled(scroll_y(window), threshold) {
        class_list.add_1(SCROLLED_CLASS)
    } else {
        class_list.remove_1(SCROLLED_CLASS)
    };
}

/// Marks the link for the current page and closes the mobile menu when any
/// link is followed.
pub struct NavigationLinks {
    _listeners: Vec<EventListener>,
}

impl NavigationLinks {
    pub fn install(window: &Window, document: &Document) -> Result<Option<Self>, SiteError> {
        let links = query_all(document, NAV_LINK_SELECTOR)?;
        if links.is_empty() {
            return Ok(None);
        }

        let pathname = window
            .location()
            .pathname()
            .map_err(js_error("location.pathname"))?;
        let page = current_page(&pathname);

        let mut listeners = Vec::with_capacity(links.len());
        for link in &links {
            remove_class(link, ACTIVE_CLASS)?;
            if is_active_link(link.get_attribute("href").as_deref(), page) {
                add_class(link, ACTIVE_CLASS)?;
                debug!("active nav link: {page}");
            }

            let document = document.clone();
            listeners.push(EventListener::new(link, "click", move |_| {
                close_mobile_menu(&document);
            }));
        }

        Ok(Some(Self {
            _listeners: listeners,
        }))
    }
}

impl Mounted for NavigationLinks {
    fn name(&self) -> &'static str {
        "navigation"
    }
}

fn close_mobile_menu(document: &Document) {
    for selector in [NAV_MENU_SELECTOR, HAMBURGER_SELECTOR] {
        if let Ok(Some(element)) = query(document, selector) {
            let _ = remove_class(&element, ACTIVE_CLASS);
        }
    }
}

pub struct MobileMenu {
    _listener: EventListener,
}

impl MobileMenu {
    pub fn install(document: &Document) -> Result<Option<Self>, SiteError> {
        let Some(hamburger) = query(document, HAMBURGER_SELECTOR)? else {
            return Ok(None);
        };
        let menu = query(document, NAV_MENU_SELECTOR)?;

        let toggle_target = hamburger.clone();
        let listener = EventListener::new(&hamburger, "click", move |_| {
            let _ = toggle_target.class_list().toggle(ACTIVE_CLASS);
            if let Some(menu) = menu.as_ref() {
                let _ = menu.class_list().toggle(ACTIVE_CLASS);
            }
        });

        Ok(Some(Self {
            _listener: listener,
        }))
    }
}

impl Mounted for MobileMenu {
    fn name(&self) -> &'static str {
        "mobile-menu"
    }
}
