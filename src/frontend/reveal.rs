use std::{cell::RefCell, rc::Rc};

use js_sys::Array;
use log::{debug, info};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use super::dom::{add_class, children, js_error, query_all, remove_class, set_style, VISIBLE_CLASS};
use super::Mounted;
use crate::config::MotionConfig;
use crate::effects::reveal::{
    classify, parse_reveal_id, stagger_delay, RevealRegistry, REVEAL_ID_ATTRIBUTE,
};
use crate::error::SiteError;

const FADE_SELECTOR: &str = ".fade-in-up";
const FADE_CLASS: &str = "fade-in-up";
const GRID_SELECTOR: &str = ".gallery-grid, .team-grid, .sponsor-grid, .stats-grid";
const GRID_MARKER_CLASS: &str = "stagger-grid";
const GRID_ITEM_CLASS: &str = "stagger-item";

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Fades elements in as they scroll into view, and staggers grid children.
pub struct RevealAnimator {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl RevealAnimator {
    pub fn install(document: &Document, config: &MotionConfig) -> Result<Option<Self>, SiteError> {
        let grids = query_all(document, GRID_SELECTOR)?;
        for grid in &grids {
            prepare_grid(grid)?;
        }

        // Grid children lost their fade class above, so they are not picked up here.
        let fades = query_all(document, FADE_SELECTOR)?;
        if fades.is_empty() && grids.is_empty() {
            return Ok(None);
        }

        let registry = Rc::new(RefCell::new(RevealRegistry::default()));
        let callback: EntriesCallback = {
            let registry = Rc::clone(&registry);
            let step_ms = config.stagger_step_ms;
            Closure::new(move |entries: Array, observer: IntersectionObserver| {
                handle_entries(&registry, step_ms, &entries, &observer);
            })
        };

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
        options.set_root_margin(&config.reveal_root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(js_error("new IntersectionObserver"))?;

        for (element, kind) in classify(&fades, &grids) {
            let id = registry.borrow_mut().register(kind);
            element
                .set_attribute(REVEAL_ID_ATTRIBUTE, &id.to_string())
                .map_err(js_error("setAttribute"))?;
            observer.observe(&element);
        }

        info!(
            "reveal observing {} elements ({} fade, {} grids)",
            registry.borrow().len(),
            fades.len(),
            grids.len()
        );

        Ok(Some(Self {
            observer,
            _callback: callback,
        }))
    }
}

impl Mounted for RevealAnimator {
    fn name(&self) -> &'static str {
        "reveal"
    }
}

impl Drop for RevealAnimator {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn prepare_grid(grid: &Element) -> Result<(), SiteError> {
    add_class(grid, GRID_MARKER_CLASS)?;
    for child in children(grid) {
        add_class(&child, GRID_ITEM_CLASS)?;
        remove_class(&child, FADE_CLASS)?;
    }
    Ok(())
}

fn handle_entries(
    registry: &RefCell<RevealRegistry>,
    step_ms: u32,
    entries: &Array,
    observer: &IntersectionObserver,
) {
    for entry in entries.iter() {
        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
            continue;
        };

        let target = entry.target();
        let Some(id) = parse_reveal_id(target.get_attribute(REVEAL_ID_ATTRIBUTE).as_deref()) else {
            continue;
        };

        let action = registry.borrow_mut().on_intersection(id, entry.is_intersecting());
        let Some(kind) = action else {
            continue;
        };

        if kind.fade {
            let _ = add_class(&target, VISIBLE_CLASS);
        }
        if kind.stagger {
            stagger_children(&target, step_ms);
        }

        observer.unobserve(&target);
        debug!("revealed #{id} ({kind:?}), {} pending", registry.borrow().pending());
    }
}

fn stagger_children(grid: &Element, step_ms: u32) {
    for (index, child) in children(grid).into_iter().enumerate() {
        if let Some(child) = child.dyn_ref::<HtmlElement>() {
            let _ = set_style(child, "transition-delay", &stagger_delay(index, step_ms));
        }
        let _ = add_class(&child, VISIBLE_CLASS);
    }
}
