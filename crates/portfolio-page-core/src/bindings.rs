//! Declarative event wiring.
//!
//! [`binding_table`] lists every (element, event, action) triple the page
//! should register, skipping features whose elements are absent. The wasm
//! crate attaches one listener per entry; tests enumerate it directly.

use serde::Serialize;

use crate::config::PageConfig;
use crate::dom::{Dom, Target};
use crate::validation::FieldId;

/// DOM event a binding listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Click,
    Submit,
    Input,
}

impl EventKind {
    /// Name passed to `addEventListener`.
    #[must_use]
    pub const fn dom_event(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Submit => "submit",
            Self::Input => "input",
        }
    }
}

/// Handler run by [`crate::Controller::dispatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case", tag = "action", content = "field")]
pub enum Action {
    ToggleTheme,
    ShowAlert,
    ToggleText,
    CycleColor,
    ToggleSection,
    SubmitForm,
    /// Clear one field's error once its live check passes.
    LiveValidate(FieldId),
}

impl Action {
    /// Whether the browser's default behavior must be suppressed first.
    #[must_use]
    pub const fn prevents_default(self) -> bool {
        matches!(self, Self::SubmitForm)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Binding {
    pub element_id: String,
    pub event: EventKind,
    pub action: Action,
}

impl Binding {
    fn new(element_id: &str, event: EventKind, action: Action) -> Self {
        Self {
            element_id: element_id.to_string(),
            event,
            action,
        }
    }
}

/// Bindings for every feature present in `dom`, in registration order.
#[must_use]
pub fn binding_table<D: Dom + ?Sized>(config: &PageConfig, dom: &D) -> Vec<Binding> {
    let ids = &config.ids;
    let present = |id: &str| dom.contains(Target::Id(id));
    let mut table = Vec::new();

    if present(&ids.theme_button) {
        table.push(Binding::new(&ids.theme_button, EventKind::Click, Action::ToggleTheme));
    }
    if present(&ids.alert_button) {
        table.push(Binding::new(&ids.alert_button, EventKind::Click, Action::ShowAlert));
    }
    if present(&ids.text_button) && present(&ids.text_target) {
        table.push(Binding::new(&ids.text_button, EventKind::Click, Action::ToggleText));
    }
    if present(&ids.color_button) {
        table.push(Binding::new(&ids.color_button, EventKind::Click, Action::CycleColor));
    }
    if present(&ids.section_button) && present(&ids.section) {
        table.push(Binding::new(&ids.section_button, EventKind::Click, Action::ToggleSection));
    }
    if present(&ids.form) {
        table.push(Binding::new(&ids.form, EventKind::Submit, Action::SubmitForm));
        for (field, id) in [
            (FieldId::FullName, &ids.full_name),
            (FieldId::Email, &ids.email),
            (FieldId::Message, &ids.message),
        ] {
            if present(id) {
                table.push(Binding::new(id, EventKind::Input, Action::LiveValidate(field)));
            }
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryDom;

    #[test]
    fn empty_document_binds_nothing() {
        assert!(binding_table(&PageConfig::default(), &MemoryDom::new()).is_empty());
    }

    #[test]
    fn paired_features_need_both_elements() {
        let dom = MemoryDom::new().with_element("textBtn").with_element("hiddenSection");
        assert!(binding_table(&PageConfig::default(), &dom).is_empty());
    }

    #[test]
    fn live_listeners_need_the_form() {
        let dom = MemoryDom::new().with_element("email");
        assert!(binding_table(&PageConfig::default(), &dom).is_empty());

        let dom = dom.with_element("contactForm");
        let actions: Vec<Action> = binding_table(&PageConfig::default(), &dom)
            .into_iter()
            .map(|b| b.action)
            .collect();
        assert_eq!(
            actions,
            vec![Action::SubmitForm, Action::LiveValidate(FieldId::Email)]
        );
    }

    #[test]
    fn only_submit_prevents_default() {
        assert!(Action::SubmitForm.prevents_default());
        assert!(!Action::ToggleTheme.prevents_default());
        assert!(!Action::LiveValidate(FieldId::Message).prevents_default());
    }

    #[test]
    fn event_names() {
        assert_eq!(EventKind::Click.dom_event(), "click");
        assert_eq!(EventKind::Submit.dom_event(), "submit");
        assert_eq!(EventKind::Input.dom_event(), "input");
    }

    #[test]
    fn binding_serializes_for_inspection() {
        let binding = Binding::new("email", EventKind::Input, Action::LiveValidate(FieldId::Email));
        let json = serde_json::to_string(&binding).unwrap();
        assert_eq!(
            json,
            r#"{"element_id":"email","event":"input","action":{"action":"live_validate","field":"email"}}"#
        );
    }
}
