//! WASM-specific implementation using wasm-bindgen.
//!
//! This module provides the browser `Dom` implementation and the JavaScript
//! facing API.

use std::cell::RefCell;
use std::rc::Rc;

use portfolio_page_core::{
    Binding, Controller, Dom, PageConfig, PageError, PageResult, StyleProp, Target, now_local,
};
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlTextAreaElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
    console,
};

use crate::{InstallSummary, js_error_message};
#[cfg(feature = "auto-install")]
use crate::is_still_loading;

fn to_js(err: &PageError) -> JsValue {
    JsValue::from_str(&js_error_message(err))
}

// ──────────────────────────────────────────────────────────────────────────────
// Initialization
// ──────────────────────────────────────────────────────────────────────────────

/// Initialize the WASM module.
///
/// With `auto-install`, wires the default page once the document is parsed.
#[wasm_bindgen(start)]
pub fn wasm_init() -> Result<(), JsValue> {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console-panic")]
    console_error_panic_hook::set_once();

    console::log_1(&"Portfolio page WASM initialized".into());

    #[cfg(feature = "auto-install")]
    {
        let controller = Controller::new(PageConfig::default()).map_err(|e| to_js(&e))?;
        when_dom_ready(move || {
            if let Err(err) = install(controller) {
                console::error_1(&err);
            }
        })?;
    }

    Ok(())
}

/// Run `f` once the document structure is available.
#[cfg(feature = "auto-install")]
fn when_dom_ready(f: impl FnOnce() + 'static) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document")?;
    if is_still_loading(&document.ready_state()) {
        let callback = Closure::once_into_js(f);
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            callback.unchecked_ref::<js_sys::Function>(),
        )?;
    } else {
        f();
    }
    Ok(())
}

// ──────────────────────────────────────────────────────────────────────────────
// Browser document
// ──────────────────────────────────────────────────────────────────────────────

/// [`Dom`] over the live `web_sys::Document`.
pub struct WebDom {
    window: Window,
    document: Document,
}

impl WebDom {
    pub fn new() -> PageResult<Self> {
        let window = web_sys::window().ok_or_else(|| PageError::Dom("No window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| PageError::Dom("No document".to_string()))?;
        Ok(Self { window, document })
    }

    fn element(&self, target: Target<'_>) -> Option<Element> {
        match target {
            Target::Body => self.document.body().map(Element::from),
            Target::Id(id) => self.document.get_element_by_id(id),
        }
    }

    fn html_element(&self, target: Target<'_>) -> Option<HtmlElement> {
        self.element(target)?.dyn_into::<HtmlElement>().ok()
    }
}

impl Dom for WebDom {
    fn contains(&self, target: Target<'_>) -> bool {
        self.element(target).is_some()
    }

    fn text(&self, target: Target<'_>) -> Option<String> {
        self.element(target)?.text_content()
    }

    fn set_text(&mut self, target: Target<'_>, text: &str) {
        if let Some(el) = self.element(target) {
            el.set_text_content(Some(text));
        }
    }

    fn value(&self, target: Target<'_>) -> Option<String> {
        let el = self.element(target)?;
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        el.dyn_ref::<HtmlTextAreaElement>().map(HtmlTextAreaElement::value)
    }

    fn has_class(&self, target: Target<'_>, class: &str) -> bool {
        self.element(target)
            .is_some_and(|el| el.class_list().contains(class))
    }

    fn toggle_class(&mut self, target: Target<'_>, class: &str) -> bool {
        self.element(target)
            .and_then(|el| el.class_list().toggle(class).ok())
            .unwrap_or(false)
    }

    fn add_class(&mut self, target: Target<'_>, class: &str) {
        if let Some(el) = self.element(target) {
            let _ = el.class_list().add_1(class);
        }
    }

    fn remove_class(&mut self, target: Target<'_>, class: &str) {
        if let Some(el) = self.element(target) {
            let _ = el.class_list().remove_1(class);
        }
    }

    fn set_class_name(&mut self, target: Target<'_>, class_name: &str) {
        if let Some(el) = self.element(target) {
            el.set_class_name(class_name);
        }
    }

    fn set_style(&mut self, target: Target<'_>, prop: StyleProp, value: &str) {
        if let Some(el) = self.html_element(target) {
            let _ = el.style().set_property(prop.css_name(), value);
        }
    }

    fn remove_style(&mut self, target: Target<'_>, prop: StyleProp) {
        if let Some(el) = self.html_element(target) {
            let _ = el.style().remove_property(prop.css_name());
        }
    }

    fn alert(&mut self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }

    fn reset_form(&mut self, form: Target<'_>) {
        if let Some(form) = self
            .element(form)
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
        {
            form.reset();
        }
    }

    fn scroll_into_view(&mut self, target: Target<'_>) {
        if let Some(el) = self.element(target) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Nearest);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Listener wiring
// ──────────────────────────────────────────────────────────────────────────────

struct Page {
    controller: Controller,
    dom: WebDom,
}

type SharedPage = Rc<RefCell<Page>>;

/// Paint the first frame, register every binding, and start the clock.
fn install(controller: Controller) -> Result<InstallSummary, JsValue> {
    let mut dom = WebDom::new().map_err(|e| to_js(&e))?;
    let report = controller.init(&mut dom, &now_local());
    let interval_ms = controller.config().clock.interval_ms;
    let page: SharedPage = Rc::new(RefCell::new(Page { controller, dom }));

    for binding in &report.bindings {
        attach(&page, binding)?;
    }
    if report.clock_active {
        start_clock(&page, interval_ms)?;
    }

    console::log_1(
        &format!(
            "Portfolio page installed: {} bindings, clock {}",
            report.bindings.len(),
            if report.clock_active { "on" } else { "off" }
        )
        .into(),
    );
    Ok(InstallSummary::from_report(&report))
}

fn attach(page: &SharedPage, binding: &Binding) -> Result<(), JsValue> {
    let element = page
        .borrow()
        .dom
        .document
        .get_element_by_id(&binding.element_id)
        .ok_or_else(|| JsValue::from_str(&format!("Element vanished: {}", binding.element_id)))?;

    let action = binding.action;
    let shared = Rc::clone(page);
    let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if action.prevents_default() {
            event.prevent_default();
        }
        let Ok(mut guard) = shared.try_borrow_mut() else {
            console::warn_1(&format!("Re-entrant {action:?} ignored").into());
            return;
        };
        let Page { controller, dom } = &mut *guard;
        controller.dispatch(dom, action);
    });
    element.add_event_listener_with_callback(
        binding.event.dom_event(),
        handler.as_ref().unchecked_ref(),
    )?;
    // Listeners live as long as the page.
    handler.forget();
    Ok(())
}

fn start_clock(page: &SharedPage, interval_ms: u32) -> Result<(), JsValue> {
    let shared = Rc::clone(page);
    let tick = Closure::<dyn FnMut()>::new(move || {
        if let Ok(mut guard) = shared.try_borrow_mut() {
            let Page { controller, dom } = &mut *guard;
            controller.render_clock(dom, &now_local());
        }
    });
    let window = page.borrow().dom.window.clone();
    let timeout = i32::try_from(interval_ms).unwrap_or(i32::MAX);
    window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        timeout,
    )?;
    tick.forget();
    Ok(())
}

// ──────────────────────────────────────────────────────────────────────────────
// Main Application
// ──────────────────────────────────────────────────────────────────────────────

/// Portfolio page controller for the browser.
///
/// # Example
///
/// ```javascript
/// const page = PortfolioPage.fromConfig(configJson);
/// page.install();
/// console.log(page.bindingCount);
/// ```
#[wasm_bindgen]
pub struct PortfolioPage {
    controller: Option<Controller>,
    summary: Option<InstallSummary>,
}

#[wasm_bindgen]
impl PortfolioPage {
    /// Create a page controller with the default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<PortfolioPage, JsValue> {
        let controller = Controller::new(PageConfig::default()).map_err(|e| to_js(&e))?;
        Ok(Self {
            controller: Some(controller),
            summary: None,
        })
    }

    /// Create with a (partial) JSON configuration.
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(config_json: &str) -> Result<PortfolioPage, JsValue> {
        let controller = PageConfig::from_json(config_json)
            .and_then(Controller::new)
            .map_err(|e| to_js(&e))?;
        Ok(Self {
            controller: Some(controller),
            summary: None,
        })
    }

    /// Wire the controller to the current document. Call once, after the DOM
    /// is ready.
    #[wasm_bindgen]
    pub fn install(&mut self) -> Result<(), JsValue> {
        let controller = self.controller.take().ok_or("Already installed")?;
        self.summary = Some(install(controller)?);
        Ok(())
    }

    /// Number of listeners registered by `install`.
    #[wasm_bindgen(getter, js_name = bindingCount)]
    pub fn binding_count(&self) -> usize {
        self.summary.as_ref().map_or(0, |s| s.bindings.len())
    }

    /// Whether `install` started the clock.
    #[wasm_bindgen(getter, js_name = clockActive)]
    pub fn clock_active(&self) -> bool {
        self.summary.as_ref().is_some_and(|s| s.clock_active)
    }

    /// The installed binding table serialized as a JSON string.
    #[wasm_bindgen(js_name = summaryJson)]
    pub fn summary_json(&self) -> Result<String, JsValue> {
        let summary = self.summary.as_ref().ok_or("Not installed")?;
        summary.to_json().map_err(|e| to_js(&e))
    }

    /// The installed binding table as a JS object.
    #[wasm_bindgen]
    pub fn summary(&self) -> Result<JsValue, JsValue> {
        let summary = self.summary.as_ref().ok_or("Not installed")?;
        serde_wasm_bindgen::to_value(summary)
            .map_err(|e| JsValue::from_str(&format!("Conversion error: {e}")))
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Utility exports
// ──────────────────────────────────────────────────────────────────────────────

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
