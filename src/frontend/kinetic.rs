use std::{cell::RefCell, rc::Rc};

use gloo::render::{request_animation_frame, AnimationFrame};
use log::info;
use web_sys::{Document, HtmlElement, Window};

use super::dom::{query_html, scroll_y, viewport_height};
use super::Mounted;
use crate::config::MotionConfig;
use crate::effects::kinetic::{KineticParams, KineticScroll, SectionGeometry};
use crate::error::SiteError;

const SECTION_SELECTOR: &str = ".kinetic-scroll-section";
const LEFT_TRACK_SELECTOR: &str = ".track-left";
const RIGHT_TRACK_SELECTOR: &str = ".track-right";

/// Per-frame parallax for the two kinetic tracks. The loop reschedules
/// itself until the scroller is dropped.
pub struct KineticScroller {
    _inner: Rc<KineticInner>,
}

struct KineticInner {
    window: Window,
    section: HtmlElement,
    left: Option<HtmlElement>,
    right: Option<HtmlElement>,
    physics: RefCell<KineticScroll>,
    frame: RefCell<Option<AnimationFrame>>,
}

impl KineticScroller {
    pub fn install(
        window: &Window,
        document: &Document,
        config: &MotionConfig,
    ) -> Result<Option<Self>, SiteError> {
        let Some(section) = query_html(document, SECTION_SELECTOR)? else {
            return Ok(None);
        };
        let left = query_html(document, LEFT_TRACK_SELECTOR)?;
        let right = query_html(document, RIGHT_TRACK_SELECTOR)?;

        info!(
            "kinetic scroll tracking (left: {}, right: {})",
            left.is_some(),
            right.is_some()
        );

        let inner = Rc::new(KineticInner {
            window: window.clone(),
            section,
            left,
            right,
            physics: RefCell::new(KineticScroll::new(
                KineticParams::from(config),
                scroll_y(window),
            )),
            frame: RefCell::new(None),
        });
        inner.schedule();

        Ok(Some(Self { _inner: inner }))
    }
}

impl Mounted for KineticScroller {
    fn name(&self) -> &'static str {
        "kinetic-scroll"
    }
}

impl KineticInner {
    fn schedule(self: &Rc<Self>) {
        let view = Rc::downgrade(self);
        let handle = request_animation_frame(move |_timestamp| {
            if let Some(view) = view.upgrade() {
                view.render();
                view.schedule();
            }
        });
        let _previous = self.frame.borrow_mut().replace(handle);
    }

    fn render(&self) {
        let geometry = SectionGeometry {
            offset_top: f64::from(self.section.offset_top()),
            offset_height: f64::from(self.section.offset_height()),
            viewport_height: viewport_height(&self.window),
        };
        let frame = self
            .physics
            .borrow_mut()
            .step(scroll_y(&self.window), geometry);

        if let Some(left) = self.left.as_ref() {
            let _ = left.style().set_property("transform", &frame.left_transform());
        }
        if let Some(right) = self.right.as_ref() {
            let _ = right.style().set_property("transform", &frame.right_transform());
        }
    }
}
