//! In-memory document for driving the controller without a browser.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::dom::{Dom, StyleProp, Target};

/// One element's mutable state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryElement {
    pub text: String,
    pub value: String,
    pub classes: BTreeSet<String>,
    pub styles: BTreeMap<&'static str, String>,
}

impl MemoryElement {
    fn class_name(&self) -> String {
        self.classes.iter().map(String::as_str).collect::<Vec<_>>().join(" ")
    }
}

/// A document of id-addressed elements plus `<body>`.
#[derive(Debug, Clone, Default)]
pub struct MemoryDom {
    body: MemoryElement,
    elements: HashMap<String, MemoryElement>,
    forms: HashMap<String, Vec<String>>,
    alerts: Vec<String>,
    scrolls: Vec<String>,
}

impl MemoryDom {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty element.
    #[must_use]
    pub fn with_element(mut self, id: &str) -> Self {
        self.elements.entry(id.to_string()).or_default();
        self
    }

    /// Add an element with initial text.
    #[must_use]
    pub fn with_text(mut self, id: &str, text: &str) -> Self {
        self.elements.entry(id.to_string()).or_default().text = text.to_string();
        self
    }

    /// Add a form whose reset clears the given controls.
    #[must_use]
    pub fn with_form(mut self, id: &str, controls: &[&str]) -> Self {
        self.elements.entry(id.to_string()).or_default();
        for control in controls {
            self.elements.entry((*control).to_string()).or_default();
        }
        self.forms.insert(
            id.to_string(),
            controls.iter().map(|c| (*c).to_string()).collect(),
        );
        self
    }

    #[must_use]
    pub fn with_body_class(mut self, class: &str) -> Self {
        self.body.classes.insert(class.to_string());
        self
    }

    /// Simulate typing: replace an input's value.
    pub fn set_value(&mut self, id: &str, value: &str) {
        if let Some(el) = self.elements.get_mut(id) {
            el.value = value.to_string();
        }
    }

    #[must_use]
    pub fn element(&self, target: Target<'_>) -> Option<&MemoryElement> {
        match target {
            Target::Body => Some(&self.body),
            Target::Id(id) => self.elements.get(id),
        }
    }

    /// Space-joined class list, sorted.
    #[must_use]
    pub fn class_name(&self, target: Target<'_>) -> Option<String> {
        self.element(target).map(MemoryElement::class_name)
    }

    #[must_use]
    pub fn style(&self, target: Target<'_>, prop: StyleProp) -> Option<&str> {
        self.element(target)
            .and_then(|el| el.styles.get(prop.css_name()))
            .map(String::as_str)
    }

    /// Messages passed to `alert`, oldest first.
    #[must_use]
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Ids scrolled into view, oldest first.
    #[must_use]
    pub fn scrolls(&self) -> &[String] {
        &self.scrolls
    }

    fn element_mut(&mut self, target: Target<'_>) -> Option<&mut MemoryElement> {
        match target {
            Target::Body => Some(&mut self.body),
            Target::Id(id) => self.elements.get_mut(id),
        }
    }
}

impl Dom for MemoryDom {
    fn contains(&self, target: Target<'_>) -> bool {
        self.element(target).is_some()
    }

    fn text(&self, target: Target<'_>) -> Option<String> {
        self.element(target).map(|el| el.text.clone())
    }

    fn set_text(&mut self, target: Target<'_>, text: &str) {
        if let Some(el) = self.element_mut(target) {
            el.text = text.to_string();
        }
    }

    fn value(&self, target: Target<'_>) -> Option<String> {
        self.element(target).map(|el| el.value.clone())
    }

    fn has_class(&self, target: Target<'_>, class: &str) -> bool {
        self.element(target)
            .is_some_and(|el| el.classes.contains(class))
    }

    fn toggle_class(&mut self, target: Target<'_>, class: &str) -> bool {
        let Some(el) = self.element_mut(target) else {
            return false;
        };
        if el.classes.remove(class) {
            false
        } else {
            el.classes.insert(class.to_string());
            true
        }
    }

    fn add_class(&mut self, target: Target<'_>, class: &str) {
        if let Some(el) = self.element_mut(target) {
            el.classes.insert(class.to_string());
        }
    }

    fn remove_class(&mut self, target: Target<'_>, class: &str) {
        if let Some(el) = self.element_mut(target) {
            el.classes.remove(class);
        }
    }

    fn set_class_name(&mut self, target: Target<'_>, class_name: &str) {
        if let Some(el) = self.element_mut(target) {
            el.classes = class_name.split_whitespace().map(str::to_string).collect();
        }
    }

    fn set_style(&mut self, target: Target<'_>, prop: StyleProp, value: &str) {
        if let Some(el) = self.element_mut(target) {
            el.styles.insert(prop.css_name(), value.to_string());
        }
    }

    fn remove_style(&mut self, target: Target<'_>, prop: StyleProp) {
        if let Some(el) = self.element_mut(target) {
            el.styles.remove(prop.css_name());
        }
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn reset_form(&mut self, form: Target<'_>) {
        let Target::Id(form_id) = form else {
            return;
        };
        let Some(controls) = self.forms.get(form_id).cloned() else {
            return;
        };
        for control in controls {
            self.set_value(&control, "");
        }
    }

    fn scroll_into_view(&mut self, target: Target<'_>) {
        if let Target::Id(id) = target
            && self.elements.contains_key(id)
        {
            self.scrolls.push(id.to_string());
        }
    }
}
