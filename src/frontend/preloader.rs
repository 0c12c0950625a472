use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use gloo::timers::callback::Timeout;
use log::{debug, warn};
use web_sys::{Document, HtmlElement};

use super::dom::{add_class, html_by_id, query_all, set_style, VISIBLE_CLASS};
use super::Mounted;
use crate::config::MotionConfig;
use crate::error::SiteError;

const PRELOADER_ID: &str = "preloader";
const HERO_SELECTOR: &str = ".hero-content .fade-in-up";

/// Holds the loading overlay until its delay elapses, then fades it out and
/// reveals the hero.
pub struct Preloader {
    _inner: Rc<PreloaderInner>,
}

struct PreloaderInner {
    document: Document,
    element: HtmlElement,
    fade_ms: u32,
    pending: RefCell<Option<Timeout>>,
}

impl Preloader {
    pub fn install(document: &Document, config: &MotionConfig) -> Result<Option<Self>, SiteError> {
        let Some(element) = html_by_id(document, PRELOADER_ID) else {
            reveal_hero(document)?;
            return Ok(None);
        };

        let inner = Rc::new(PreloaderInner {
            document: document.clone(),
            element,
            fade_ms: config.preloader_fade_ms,
            pending: RefCell::new(None),
        });

        let view = Rc::downgrade(&inner);
        let timeout = Timeout::new(config.preloader_delay_ms, move || {
            if let Some(view) = view.upgrade() {
                view.fade_out();
            }
        });
        *inner.pending.borrow_mut() = Some(timeout);

        Ok(Some(Self { _inner: inner }))
    }
}

impl Mounted for Preloader {
    fn name(&self) -> &'static str {
        "preloader"
    }
}

impl PreloaderInner {
    fn fade_out(self: &Rc<Self>) {
        if let Err(error) = set_style(&self.element, "opacity", "0") {
            warn!("preloader fade failed: {error}");
        }

        let view: Weak<Self> = Rc::downgrade(self);
        let timeout = Timeout::new(self.fade_ms, move || {
            if let Some(view) = view.upgrade() {
                view.hide();
            }
        });
        let _elapsed = self.pending.borrow_mut().replace(timeout);
    }

    fn hide(&self) {
        if let Err(error) = set_style(&self.element, "display", "none") {
            warn!("preloader hide failed: {error}");
        }

        if let Err(error) = reveal_hero(&self.document) {
            warn!("hero reveal failed: {error}");
        }
    }
}

fn reveal_hero(document: &Document) -> Result<(), SiteError> {
    let hero = query_all(document, HERO_SELECTOR)?;
    for element in &hero {
        add_class(element, VISIBLE_CLASS)?;
    }

    debug!("hero revealed ({} elements)", hero.len());
    Ok(())
}
