use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use gloo::events::EventListener;
use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, EventTarget, HtmlElement, HtmlImageElement, KeyboardEvent,
};

use super::dom::{clear_style, html_by_id, query, query_all, set_style};
use super::Mounted;
use crate::effects::lightbox::{is_backdrop_click, LightboxImage, LightboxState};
use crate::error::SiteError;

const LIGHTBOX_ID: &str = "gallery-lightbox";
const LIGHTBOX_IMAGE_ID: &str = "lightbox-img";
const CLOSE_SELECTOR: &str = ".lightbox-close";
const GALLERY_ITEM_SELECTOR: &str = ".gallery-item";

/// Enlarged-image overlay for gallery items.
pub struct Lightbox {
    _inner: Rc<LightboxInner>,
}

struct LightboxInner {
    overlay: HtmlElement,
    display: HtmlImageElement,
    body: Option<HtmlElement>,
    state: RefCell<LightboxState>,
    listeners: RefCell<Vec<EventListener>>,
}

impl Lightbox {
    pub fn install(document: &Document) -> Result<Option<Self>, SiteError> {
        let Some(overlay) = html_by_id(document, LIGHTBOX_ID) else {
            return Ok(None);
        };
        let Some(display) = document
            .get_element_by_id(LIGHTBOX_IMAGE_ID)
            .and_then(|element| element.dyn_into::<HtmlImageElement>().ok())
        else {
            warn!("#{LIGHTBOX_ID} has no #{LIGHTBOX_IMAGE_ID}, lightbox disabled");
            return Ok(None);
        };

        let inner = Rc::new(LightboxInner {
            overlay,
            display,
            body: document.body(),
            state: RefCell::new(LightboxState::default()),
            listeners: RefCell::new(Vec::new()),
        });

        let mut listeners = Vec::new();
        for item in query_all(document, GALLERY_ITEM_SELECTOR)? {
            let view = Rc::downgrade(&inner);
            let source = item.clone();
            listeners.push(EventListener::new(&item, "click", move |_| {
                if let Some(view) = view.upgrade() {
                    view.open_from(&source);
                }
            }));
        }

        match query(document, CLOSE_SELECTOR)? {
            Some(close_button) => {
                let view = Rc::downgrade(&inner);
                listeners.push(EventListener::new(&close_button, "click", move |_| {
                    with_view(&view, |view| view.close("button"));
                }));
            }
            None => debug!("lightbox has no close button"),
        }

        let view = Rc::downgrade(&inner);
        listeners.push(EventListener::new(&inner.overlay, "click", move |event| {
            with_view(&view, |view| {
                let overlay: &EventTarget = view.overlay.as_ref();
                if is_backdrop_click(event.target().as_ref(), overlay) {
                    view.close("backdrop");
                }
            });
        }));

        let view = Rc::downgrade(&inner);
        listeners.push(EventListener::new(document, "keydown", move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            with_view(&view, |view| {
                if view.state.borrow().should_close_on_key(&event.key()) {
                    view.close("escape");
                }
            });
        }));

        *inner.listeners.borrow_mut() = listeners;
        Ok(Some(Self { _inner: inner }))
    }
}

impl Mounted for Lightbox {
    fn name(&self) -> &'static str {
        "lightbox"
    }
}

fn with_view(view: &Weak<LightboxInner>, action: impl FnOnce(&LightboxInner)) {
    if let Some(view) = view.upgrade() {
        action(&view);
    }
}

impl LightboxInner {
    fn open_from(&self, item: &Element) {
        let Some(image) = item
            .query_selector("img")
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlImageElement>().ok())
        else {
            return;
        };

        let image = LightboxImage {
            src: image.src(),
            alt: image.alt(),
        };

        if let Err(error) = self.show(&image) {
            warn!("lightbox open failed: {error}");
            return;
        }

        debug!("lightbox opened: {}", image.src);
        self.state.borrow_mut().open(image);
    }

    fn show(&self, image: &LightboxImage) -> Result<(), SiteError> {
        set_style(&self.overlay, "display", "flex")?;
        self.display.set_src(&image.src);
        self.display.set_alt(&image.alt);
        if let Some(body) = self.body.as_ref() {
            set_style(body, "overflow", "hidden")?;
        }
        Ok(())
    }

    fn close(&self, trigger: &str) {
        let closed = self.state.borrow_mut().close();

        let result = set_style(&self.overlay, "display", "none").and_then(|()| match self.body.as_ref() {
            Some(body) => clear_style(body, "overflow"),
            None => Ok(()),
        });

        match (result, closed) {
            (Ok(()), Some(image)) => debug!("lightbox closed via {trigger}: {}", image.src),
            (Ok(()), None) => {}
            (Err(error), _) => warn!("lightbox close failed: {error}"),
        }
    }
}
