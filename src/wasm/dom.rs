//! DOM side of the effects: lookups, metrics and element rendering

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, Window,
};

use crate::bubbles::{Bubble, BubbleStyle, FLOAT_KEYFRAMES};
use crate::error::{EffectError, Result};
use crate::gradient::{Gradient, ScrollMetrics};
use crate::pagination::{DeviceCapabilities, PageSurface};

pub(crate) fn window() -> Result<Window> {
    web_sys::window().ok_or(EffectError::NoWindow)
}

pub(crate) fn document(window: &Window) -> Result<Document> {
    window.document().ok_or(EffectError::NoDocument)
}

pub(crate) fn body(document: &Document) -> Result<HtmlElement> {
    document.body().ok_or(EffectError::NoBody)
}

/// First element matching `selector`
pub(crate) fn query_one(document: &Document, selector: &str) -> Result<Element> {
    document
        .query_selector(selector)?
        .ok_or_else(|| EffectError::MissingElement(selector.to_string()))
}

/// First element matching `selector`, or `None` when absent or the selector
/// is invalid
pub(crate) fn find_one(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// All elements matching `selector`, in document order
pub(crate) fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let nodes = document.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(element) = nodes.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            elements.push(element);
        }
    }
    Ok(elements)
}

pub(crate) fn capabilities(window: &Window) -> DeviceCapabilities {
    let touch_events = Reflect::has(window, &JsValue::from_str("ontouchstart")).unwrap_or(false);
    DeviceCapabilities {
        touch_events,
        max_touch_points: window.navigator().max_touch_points().max(0) as u32,
        viewport_width: window
            .inner_width()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0),
    }
}

pub(crate) fn scroll_metrics(window: &Window, document: &Document) -> Result<ScrollMetrics> {
    let scroll_height = document
        .document_element()
        .map(|root| root.scroll_height() as f64)
        .ok_or_else(|| EffectError::Dom("document has no root element".to_string()))?;
    Ok(ScrollMetrics {
        scroll_y: window.scroll_y()?,
        viewport_height: window.inner_height()?.as_f64().unwrap_or(0.0),
        scroll_height,
    })
}

/// Repaint the body background for the current scroll position
pub(crate) fn paint_gradient(
    window: &Window,
    document: &Document,
    start_color: &str,
    end_color: &str,
) -> Result<()> {
    let metrics = scroll_metrics(window, document)?;
    let gradient = Gradient::for_scroll(start_color, end_color, &metrics);
    body(document)?
        .style()
        .set_property("background", &gradient.css())?;
    Ok(())
}

/// Page containers plus the page number display
pub struct DomPageSurface {
    pages: Vec<Element>,
    page_number: Option<Element>,
}

impl DomPageSurface {
    pub fn new(pages: Vec<Element>, page_number: Option<Element>) -> Self {
        Self { pages, page_number }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

impl PageSurface for DomPageSurface {
    fn show_page_number(&mut self, number: usize) {
        let Some(display) = &self.page_number else {
            gloo::console::warn!("page number display missing; page", number);
            return;
        };
        display.set_text_content(Some(&number.to_string()));
    }

    fn scroll_to_page(&mut self, index: usize) {
        let Some(page) = self.pages.get(index) else {
            gloo::console::warn!("no page at index", index);
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        page.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

fn keyframes() -> Result<Array> {
    let frames = Array::new();
    for frame in FLOAT_KEYFRAMES.iter() {
        let object = Object::new();
        Reflect::set(&object, &"transform".into(), &frame.transform.into())?;
        Reflect::set(&object, &"opacity".into(), &frame.opacity.into())?;
        frames.push(&object);
    }
    Ok(frames)
}

/// Create the bubble element, attach it and start its float animation
pub(crate) fn render_bubble(
    document: &Document,
    container: &Element,
    bubble: &Bubble,
) -> Result<Element> {
    let element: HtmlElement = document
        .create_element("div")?
        .dyn_into()
        .map_err(|_| EffectError::Dom("created div is not an HtmlElement".to_string()))?;

    let style = BubbleStyle::for_bubble(bubble);
    element.set_class_name(style.class_name);
    let css = element.style();
    for (property, value) in &style.declarations {
        css.set_property(property, value)?;
    }

    container.append_child(&element)?;
    let frames = keyframes()?;
    element.animate_with_f64(Some(&*frames), bubble.duration_ms);
    Ok(element.into())
}
