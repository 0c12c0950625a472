use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use gloo::render::{request_animation_frame, AnimationFrame};
use js_sys::Array;
use log::{debug, info, warn};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    Window,
};

use super::dom::{js_error, query, query_all};
use super::Mounted;
use crate::config::MotionConfig;
use crate::effects::counter::CounterSpec;
use crate::error::SiteError;

const STATS_SELECTOR: &str = ".stats-grid, .modern-stats-grid";
const COUNTER_SELECTOR: &str = ".count, .stat-number";

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Counts every stat up from its start value the first time the stats
/// section is sufficiently visible.
pub struct CounterAnimator {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
    _state: Rc<CounterState>,
}

struct CounterState {
    window: Window,
    document: Document,
    default_duration_ms: f64,
    counted: Cell<bool>,
    runs: RefCell<Vec<Rc<CounterRun>>>,
}

struct CounterRun {
    element: Element,
    spec: CounterSpec,
    started_at: Cell<Option<f64>>,
    frame: RefCell<Option<AnimationFrame>>,
}

impl CounterAnimator {
    pub fn install(
        window: &Window,
        document: &Document,
        config: &MotionConfig,
    ) -> Result<Option<Self>, SiteError> {
        let Some(section) = query(document, STATS_SELECTOR)? else {
            return Ok(None);
        };

        let state = Rc::new(CounterState {
            window: window.clone(),
            document: document.clone(),
            default_duration_ms: config.counter_duration_ms,
            counted: Cell::new(false),
            runs: RefCell::new(Vec::new()),
        });

        let callback: EntriesCallback = {
            let state = Rc::clone(&state);
            Closure::new(move |entries: Array, _observer: IntersectionObserver| {
                let intersecting = entries
                    .get(0)
                    .dyn_into::<IntersectionObserverEntry>()
                    .map(|entry| entry.is_intersecting())
                    .unwrap_or(false);

                if intersecting && !state.counted.replace(true) {
                    if let Err(error) = state.start_all() {
                        warn!("counter start failed: {error}");
                    }
                }
            })
        };

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.stats_threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(js_error("new IntersectionObserver"))?;
        observer.observe(&section);

        Ok(Some(Self {
            observer,
            _callback: callback,
            _state: state,
        }))
    }
}

impl Mounted for CounterAnimator {
    fn name(&self) -> &'static str {
        "counters"
    }
}

impl Drop for CounterAnimator {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl CounterState {
    fn start_all(&self) -> Result<(), SiteError> {
        let started_at = self.window.performance().map(|performance| performance.now());
        let counters = query_all(&self.document, COUNTER_SELECTOR)?;

        let mut runs = self.runs.borrow_mut();
        for element in counters {
            let spec = CounterSpec::from_attributes(
                element.get_attribute("data-target").as_deref(),
                element.get_attribute("data-start").as_deref(),
                element.get_attribute("data-duration").as_deref(),
                self.default_duration_ms,
            );

            let run = Rc::new(CounterRun {
                element,
                spec,
                started_at: Cell::new(started_at),
                frame: RefCell::new(None),
            });
            run.schedule();
            runs.push(run);
        }

        info!("counting {} stats", runs.len());
        Ok(())
    }
}

impl CounterRun {
    fn schedule(self: &Rc<Self>) {
        let run = Rc::downgrade(self);
        let handle = request_animation_frame(move |timestamp| {
            if let Some(run) = run.upgrade() {
                run.tick(timestamp);
            }
        });
        let _previous = self.frame.borrow_mut().replace(handle);
    }

    fn tick(self: &Rc<Self>, timestamp: f64) {
        let started_at = match self.started_at.get() {
            Some(started_at) => started_at,
            None => {
                self.started_at.set(Some(timestamp));
                timestamp
            }
        };

        let frame = self.spec.frame(timestamp - started_at);
        self.element.set_text_content(Some(&frame.text()));

        if frame.is_finished() {
            debug!("counter settled at {}", frame.text());
            let _finished = self.frame.borrow_mut().take();
        } else {
            self.schedule();
        }
    }
}
