//! WASM bindings: DOM wiring and the JS entry point

mod dom;

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::{Interval, Timeout};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, TouchEvent, WheelEvent, Window};

pub use dom::DomPageSurface;

use crate::bubbles::{BubbleField, JsRandom};
use crate::config::EffectConfig;
use crate::error::Result;
use crate::pagination::{InputSource, Pager, PaginationController};

type SharedController = Rc<RefCell<PaginationController<DomPageSurface>>>;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Mount the page effects; failures are logged and yield `undefined`
#[wasm_bindgen(js_name = mountPageEffects)]
pub fn mount_page_effects(config_json: Option<String>) -> Option<PageEffects> {
    let result = match config_json {
        Some(json) => EffectConfig::from_json(&json).and_then(mount),
        None => mount(EffectConfig::default()),
    };
    match result {
        Ok(effects) => Some(effects),
        Err(err) => {
            gloo::console::error!("page effects failed to mount:", err.to_string());
            None
        }
    }
}

/// Mount with the input path chosen from the device's capabilities.
pub fn mount(config: EffectConfig) -> Result<PageEffects> {
    let window = dom::window()?;
    let caps = dom::capabilities(&window);
    let input_source = InputSource::select(&caps, config.desktop_min_width);
    mount_with_input(config, input_source)
}

/// Mount with an explicit input path.
///
/// Preconditions (config, window, pages, first gradient paint) are checked
/// before anything is wired; once wiring starts no step can fail. The page
/// number display and the bubble container are looked up leniently, so a
/// missing one only degrades the events that need it.
pub fn mount_with_input(config: EffectConfig, input_source: InputSource) -> Result<PageEffects> {
    config.validate()?;
    let window = dom::window()?;
    let document = dom::document(&window)?;

    let pages = dom::query_all(&document, &config.page_selector)?;
    let pager = Pager::new(pages.len())?;
    dom::paint_gradient(&window, &document, &config.gradient_start, &config.gradient_end)?;

    let mut listeners = vec![gradient_listener(&window, &document, &config)];

    let page_number = dom::find_one(&document, &config.page_number_selector);
    if page_number.is_none() {
        gloo::console::warn!("no page number element:", config.page_number_selector.clone());
    }
    let controller: SharedController = Rc::new(RefCell::new(PaginationController::new(
        pager,
        DomPageSurface::new(pages, page_number),
    )));

    match input_source {
        InputSource::Touch => listeners.extend(touch_listeners(&document, &controller)),
        InputSource::Wheel => listeners.push(wheel_listener(&document, &controller)),
        InputSource::None => {}
    }

    let field = Rc::new(RefCell::new(BubbleField::from_config(&config)));
    let spawner = bubble_spawner(
        document,
        config.bubble_container_selector.clone(),
        Rc::clone(&field),
        config.bubble_interval_ms,
    );

    gloo::console::log!(
        "page effects mounted:",
        controller.borrow().page_count(),
        "pages, input",
        input_source.as_str()
    );

    Ok(PageEffects {
        controller,
        field,
        input_source,
        _listeners: listeners,
        _spawner: spawner,
    })
}

fn gradient_listener(window: &Window, document: &Document, config: &EffectConfig) -> EventListener {
    let window_for_scroll = window.clone();
    let document = document.clone();
    let start = config.gradient_start.clone();
    let end = config.gradient_end.clone();
    EventListener::new(window, "scroll", move |_event: &Event| {
        if let Err(err) = dom::paint_gradient(&window_for_scroll, &document, &start, &end) {
            gloo::console::warn!("gradient update failed:", err.to_string());
        }
    })
}

fn first_touch_y(event: &Event) -> Option<f64> {
    let event = event.dyn_ref::<TouchEvent>()?;
    let touch = event.touches().get(0)?;
    Some(touch.client_y() as f64)
}

fn touch_listeners(document: &Document, controller: &SharedController) -> Vec<EventListener> {
    let ctl = Rc::clone(controller);
    let start = EventListener::new(document, "touchstart", move |event: &Event| {
        if let Some(y) = first_touch_y(event) {
            ctl.borrow_mut().touch_start(y);
        }
    });

    let ctl = Rc::clone(controller);
    let moved = EventListener::new(document, "touchmove", move |event: &Event| {
        if let Some(y) = first_touch_y(event) {
            ctl.borrow_mut().touch_move(y);
        }
    });

    let ctl = Rc::clone(controller);
    let end = EventListener::new(document, "touchend", move |_event: &Event| {
        ctl.borrow_mut().touch_end();
    });

    vec![start, moved, end]
}

fn wheel_listener(document: &Document, controller: &SharedController) -> EventListener {
    let ctl = Rc::clone(controller);
    EventListener::new(document, "wheel", move |event: &Event| {
        let Some(event) = event.dyn_ref::<WheelEvent>() else {
            return;
        };
        ctl.borrow_mut().wheel(event.delta_y());
    })
}

fn bubble_spawner(
    document: Document,
    container_selector: String,
    field: Rc<RefCell<BubbleField>>,
    interval_ms: u32,
) -> Interval {
    let mut rng = JsRandom;
    let mut container: Option<Element> = None;
    Interval::new(interval_ms, move || {
        // Resolved on first use, so a late or missing container only fails ticks
        if container.is_none() {
            match dom::query_one(&document, &container_selector) {
                Ok(found) => container = Some(found),
                Err(err) => {
                    gloo::console::warn!("bubble spawn skipped:", err.to_string());
                    return;
                }
            }
        }
        let Some(target) = container.clone() else {
            return;
        };

        let now = js_sys::Date::now();
        let spawned = field.borrow_mut().spawn(now, &mut rng);
        let Some(bubble) = spawned else {
            return;
        };

        let element = match dom::render_bubble(&document, &target, &bubble) {
            Ok(element) => element,
            Err(err) => {
                field.borrow_mut().retire(bubble.id);
                gloo::console::warn!("bubble spawn failed:", err.to_string());
                return;
            }
        };
        field.borrow_mut().mark_animating(bubble.id);

        let field = Rc::clone(&field);
        Timeout::new(bubble.removal_delay_ms(), move || {
            element.remove();
            field.borrow_mut().retire(bubble.id);
        })
        .forget();
    })
}

/// Handle to the mounted effects; freeing it detaches every listener and
/// stops spawning.
#[wasm_bindgen]
pub struct PageEffects {
    controller: SharedController,
    field: Rc<RefCell<BubbleField>>,
    input_source: InputSource,
    _listeners: Vec<EventListener>,
    _spawner: Interval,
}

#[wasm_bindgen]
impl PageEffects {
    /// Current 1-based page number
    #[wasm_bindgen(getter, js_name = currentPage)]
    pub fn current_page(&self) -> usize {
        self.controller.borrow().page_number()
    }

    #[wasm_bindgen(getter, js_name = pageCount)]
    pub fn page_count(&self) -> usize {
        self.controller.borrow().page_count()
    }

    /// `"touch"`, `"wheel"` or `"none"`
    #[wasm_bindgen(getter, js_name = inputSource)]
    pub fn input_source(&self) -> String {
        self.input_source.as_str().to_string()
    }

    #[wasm_bindgen(getter, js_name = liveBubbles)]
    pub fn live_bubbles(&self) -> usize {
        self.field.borrow().live_count()
    }
}
