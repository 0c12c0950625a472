//! Browser wiring for the page behaviors.
//!
//! Each component is installed independently against the static markup. A
//! component whose elements are missing stays inert, and a component that
//! fails to install is logged and skipped. Installed components live in a
//! thread-local [`Site`] for the lifetime of the page; dropping it cancels
//! their listeners, timers, observers and frame loops.

mod counters;
mod dom;
mod kinetic;
mod lightbox;
mod navigation;
mod preloader;
mod reveal;
mod theme;

use std::cell::RefCell;

use gloo::events::EventListener;
use log::{debug, info, warn, LevelFilter};
use web_sys::{window, Document, Window};

use crate::config::{MotionConfig, CONFIG_ELEMENT_ID};
use crate::error::SiteError;

use counters::CounterAnimator;
use kinetic::KineticScroller;
use lightbox::Lightbox;
use navigation::{MobileMenu, NavbarState, NavigationLinks};
use preloader::Preloader;
use reveal::RevealAnimator;
use theme::ThemeToggle;

trait Mounted {
    fn name(&self) -> &'static str;
}

#[derive(Default)]
struct Site {
    components: Vec<Box<dyn Mounted>>,
}

impl Site {
    fn install<T: Mounted + 'static>(&mut self, label: &str, result: Result<Option<T>, SiteError>) {
        match result {
            Ok(Some(component)) => self.components.push(Box::new(component)),
            Ok(None) => debug!("{label}: no matching markup, skipped"),
            Err(error) => warn!("{label}: not installed: {error}"),
        }
    }

    fn names(&self) -> Vec<&'static str> {
        self.components.iter().map(|component| component.name()).collect()
    }
}

thread_local! {
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
}

fn load_config(document: &Document) -> (MotionConfig, Option<SiteError>) {
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return (MotionConfig::default(), None);
    };

    match MotionConfig::from_json(&raw) {
        Ok(config) => (config, None),
        Err(error) => (MotionConfig::default(), Some(error)),
    }
}

fn init_logging(level: LevelFilter) {
    match level.to_level() {
        Some(level) => {
            let _ = console_log::init_with_level(level);
        }
        None => log::set_max_level(LevelFilter::Off),
    }
}

fn mount(window: &Window, document: &Document) {
    let (config, config_error) = load_config(document);
    init_logging(config.log_level);
    if let Some(error) = config_error {
        warn!("{error}; using defaults");
    }

    let mut site = Site::default();
    site.install("preloader", Preloader::install(document, &config));
    site.install("reveal", RevealAnimator::install(document, &config));
    site.install("navbar", NavbarState::install(window, document, &config));
    site.install("navigation", NavigationLinks::install(window, document));
    site.install("mobile-menu", MobileMenu::install(document));
    site.install("counters", CounterAnimator::install(window, document, &config));
    site.install("theme", ThemeToggle::install(window, document));
    site.install("lightbox", Lightbox::install(document));
    site.install("kinetic-scroll", KineticScroller::install(window, document, &config));

    info!("site behaviors mounted: {}", site.names().join(", "));
    SITE.with(|slot| *slot.borrow_mut() = Some(site));
}

pub fn run() {
    console_error_panic_hook::set_once();

    let Some(window) = window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    if document.ready_state() == "loading" {
        let target = document.clone();
        EventListener::once(&target, "DOMContentLoaded", move |_| mount(&window, &document))
            .forget();
    } else {
        mount(&window, &document);
    }
}
