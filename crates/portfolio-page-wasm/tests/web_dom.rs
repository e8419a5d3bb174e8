#![cfg(target_arch = "wasm32")]
#![forbid(unsafe_code)]

use portfolio_page_core::{Dom, StyleProp, Target};
use portfolio_page_wasm::WebDom;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn mount(tag: &str, id: &str) -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let el: HtmlElement = document.create_element(tag).unwrap().dyn_into().unwrap();
    el.set_id(id);
    document.body().unwrap().append_child(&el).unwrap();
    el
}

#[wasm_bindgen_test]
fn absent_element_is_tolerated() {
    let mut dom = WebDom::new().unwrap();
    assert!(!dom.contains(Target::Id("does-not-exist")));
    dom.set_text(Target::Id("does-not-exist"), "ignored");
    assert_eq!(dom.text(Target::Id("does-not-exist")), None);
}

#[wasm_bindgen_test]
fn text_and_classes_round_through_the_document() {
    let _el = mount("div", "web-dom-section");
    let mut dom = WebDom::new().unwrap();
    let target = Target::Id("web-dom-section");

    dom.set_text(target, "hello");
    assert_eq!(dom.text(target).as_deref(), Some("hello"));

    assert!(dom.toggle_class(target, "visible"));
    assert!(dom.has_class(target, "visible"));
    assert!(!dom.toggle_class(target, "visible"));

    dom.set_class_name(target, "form-alert hidden");
    dom.remove_class(target, "hidden");
    dom.add_class(target, "success");
    assert!(dom.has_class(target, "form-alert"));
    assert!(dom.has_class(target, "success"));
    assert!(!dom.has_class(target, "hidden"));
}

#[wasm_bindgen_test]
fn inline_style_is_set_and_cleared() {
    let el = mount("p", "web-dom-text");
    let mut dom = WebDom::new().unwrap();
    let target = Target::Id("web-dom-text");

    dom.set_style(target, StyleProp::BorderColor, "rgb(0, 255, 136)");
    assert_eq!(
        el.style().get_property_value("border-color").unwrap(),
        "rgb(0, 255, 136)"
    );
    dom.remove_style(target, StyleProp::BorderColor);
    assert_eq!(el.style().get_property_value("border-color").unwrap(), "");
}

#[wasm_bindgen_test]
fn input_values_are_read() {
    let document = web_sys::window().unwrap().document().unwrap();
    let input: web_sys::HtmlInputElement =
        document.create_element("input").unwrap().dyn_into().unwrap();
    input.set_id("web-dom-email");
    input.set_value("jane@example.com");
    document.body().unwrap().append_child(&input).unwrap();

    let dom = WebDom::new().unwrap();
    assert_eq!(
        dom.value(Target::Id("web-dom-email")).as_deref(),
        Some("jane@example.com")
    );
}
