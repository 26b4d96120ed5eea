//! Registrations against browser event sources. Every `watch_*` call hands
//! back a guard; dropping the guard unregisters the callback.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Function, Object, Reflect};
use web_sys::{
    AddEventListenerOptions, Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, PerformanceObserver, PerformanceObserverEntryList, Window,
};

use crate::error::BrowserError;

pub fn window() -> Result<Window, BrowserError> {
    web_sys::window().ok_or(BrowserError::Unsupported("window"))
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Keeps an `IntersectionObserver` alive on one element.
pub struct ViewportWatch {
    observer: IntersectionObserver,
    element: Element,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for ViewportWatch {
    fn drop(&mut self) {
        self.observer.unobserve(&self.element);
        self.observer.disconnect();
    }
}

/// One element per observer; a batch holds its changes in order, so the last one is current.
fn latest_intersection(states: &[bool]) -> Option<bool> {
    states.last().copied()
}

/// Calls `on_change(is_intersecting)` for every intersection change of `element`.
pub fn watch_viewport(
    element: Element,
    threshold: f64,
    root_margin: &str,
    mut on_change: impl FnMut(bool) + 'static,
) -> Result<ViewportWatch, BrowserError> {
    let window = window()?;
    if !Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false) {
        return Err(BrowserError::Unsupported("IntersectionObserver"));
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            let states: Vec<bool> = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| entry.is_intersecting())
                .collect();
            if let Some(intersecting) = latest_intersection(&states) {
                on_change(intersecting);
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    init.set_root_margin(root_margin);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(&element);

    Ok(ViewportWatch { observer, element, _callback: callback })
}

/// A passive `scroll` listener on the window.
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}

pub fn watch_scroll(on_scroll: impl FnMut() + 'static) -> Result<ScrollListener, BrowserError> {
    let window = window()?;
    let callback = Closure::<dyn FnMut()>::new(on_scroll);

    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        callback.as_ref().unchecked_ref(),
        &options,
    )?;

    Ok(ScrollListener { window, callback })
}

/// Keeps a `PerformanceObserver` subscribed to one entry type.
pub struct PerformanceWatch {
    observer: PerformanceObserver,
    _callback: Closure<dyn FnMut(PerformanceObserverEntryList, PerformanceObserver)>,
}

impl Drop for PerformanceWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Subscribes to buffered entries of `entry_type`; the callback gets each
/// batch as `toJSON()` objects.
pub fn watch_performance(
    entry_type: &str,
    mut on_entries: impl FnMut(Vec<JsValue>) + 'static,
) -> Result<PerformanceWatch, BrowserError> {
    let window = window()?;
    if !Reflect::has(&window, &JsValue::from_str("PerformanceObserver")).unwrap_or(false) {
        return Err(BrowserError::Unsupported("PerformanceObserver"));
    }

    let callback = Closure::<dyn FnMut(PerformanceObserverEntryList, PerformanceObserver)>::new(
        move |list: PerformanceObserverEntryList, _observer: PerformanceObserver| {
            let entries = list.get_entries().iter().map(|entry| to_json(&entry)).collect();
            on_entries(entries);
        },
    );

    let observer = PerformanceObserver::new(callback.as_ref().unchecked_ref())?;

    // Built by hand: the init dictionary's shape differs across web-sys releases.
    let init = Object::new();
    Reflect::set(&init, &JsValue::from_str("type"), &JsValue::from_str(entry_type))?;
    Reflect::set(&init, &JsValue::from_str("buffered"), &JsValue::TRUE)?;
    let observe: Function = Reflect::get(observer.as_ref(), &JsValue::from_str("observe"))?.dyn_into()?;
    observe.call1(observer.as_ref(), &init)?;

    Ok(PerformanceWatch { observer, _callback: callback })
}

fn to_json(entry: &JsValue) -> JsValue {
    Reflect::get(entry, &JsValue::from_str("toJSON"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
        .and_then(|f| f.call0(entry).ok())
        .unwrap_or_else(|| entry.clone())
}
