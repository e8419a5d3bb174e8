//! The page interaction controller.
//!
//! Owns the only mutable page state (text-toggle flag, color cursor) and runs
//! handlers against any [`Dom`]. All handlers are side-effect only.

use std::fmt::Display;

use chrono::{DateTime, TimeZone};

use crate::bindings::{Action, Binding, binding_table};
use crate::clock::format_clock;
use crate::config::PageConfig;
use crate::dom::{Dom, StyleProp, Target};
use crate::error::Result;
use crate::toggles::{ColorCycle, TextToggle, section_label, theme_label};
use crate::validation::{ContactForm, FieldId, SubmitOutcome, live_check};

/// What [`Controller::init`] found in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub bindings: Vec<Binding>,
    /// Whether the clock element exists and should be refreshed periodically.
    pub clock_active: bool,
}

#[derive(Debug, Clone)]
pub struct Controller {
    config: PageConfig,
    text: TextToggle,
    colors: ColorCycle,
}

impl Controller {
    /// Build a controller, rejecting an invalid configuration.
    pub fn new(config: PageConfig) -> Result<Self> {
        config.validate()?;
        let colors = ColorCycle::new(config.palette.len());
        Ok(Self {
            config,
            text: TextToggle::default(),
            colors,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &PageConfig {
        &self.config
    }

    #[must_use]
    pub const fn is_text_toggled(&self) -> bool {
        self.text.is_toggled()
    }

    #[must_use]
    pub const fn color_index(&self) -> usize {
        self.colors.index()
    }

    /// Run once the document structure is ready: paint the first clock frame,
    /// sync the theme label, and return the bindings to register.
    pub fn init<D, Tz>(&self, dom: &mut D, now: &DateTime<Tz>) -> InitReport
    where
        D: Dom + ?Sized,
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let clock_active = self.render_clock(dom, now);

        let theme_button = Target::Id(&self.config.ids.theme_button);
        if dom.contains(theme_button)
            && dom.has_class(Target::Body, &self.config.classes.light_mode)
        {
            dom.set_text(theme_button, &self.config.theme.to_dark);
        }

        let bindings = binding_table(&self.config, dom);
        for binding in &bindings {
            tracing::debug!(
                element = %binding.element_id,
                event = binding.event.dom_event(),
                action = ?binding.action,
                "binding registered"
            );
        }
        tracing::info!(
            bindings = bindings.len(),
            clock_active,
            "page controller initialized"
        );

        InitReport {
            bindings,
            clock_active,
        }
    }

    /// Write the clock text. Returns `false` when the clock element is absent.
    pub fn render_clock<D, Tz>(&self, dom: &mut D, now: &DateTime<Tz>) -> bool
    where
        D: Dom + ?Sized,
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let clock = Target::Id(&self.config.ids.clock);
        if !dom.contains(clock) {
            return false;
        }
        let text = format_clock(now, &self.config.clock);
        tracing::trace!(%text, "clock tick");
        dom.set_text(clock, &text);
        true
    }

    /// Run the handler for `action`.
    pub fn dispatch<D: Dom + ?Sized>(&mut self, dom: &mut D, action: Action) {
        tracing::debug!(?action, "dispatch");
        match action {
            Action::ToggleTheme => self.toggle_theme(dom),
            Action::ShowAlert => dom.alert(&self.config.alert_message),
            Action::ToggleText => self.toggle_text(dom),
            Action::CycleColor => self.cycle_color(dom),
            Action::ToggleSection => self.toggle_section(dom),
            Action::SubmitForm => {
                self.submit(dom);
            }
            Action::LiveValidate(field) => self.live_validate(dom, field),
        }
    }

    fn toggle_theme<D: Dom + ?Sized>(&self, dom: &mut D) {
        let light = dom.toggle_class(Target::Body, &self.config.classes.light_mode);
        dom.set_text(
            Target::Id(&self.config.ids.theme_button),
            theme_label(&self.config.theme, light),
        );
    }

    fn toggle_text<D: Dom + ?Sized>(&mut self, dom: &mut D) {
        let shown = self.text.flip(&self.config.text_toggle);
        let target = Target::Id(&self.config.ids.text_target);
        dom.set_text(target, shown.text);
        match shown.highlight {
            Some(color) => {
                dom.set_style(target, StyleProp::Color, color);
                dom.set_style(target, StyleProp::BorderColor, color);
            }
            None => {
                dom.remove_style(target, StyleProp::Color);
                dom.remove_style(target, StyleProp::BorderColor);
            }
        }
        dom.set_text(Target::Id(&self.config.ids.text_button), shown.button_label);
    }

    fn cycle_color<D: Dom + ?Sized>(&mut self, dom: &mut D) {
        self.colors.advance();
        let Some(swatch) = self.colors.current(&self.config.palette) else {
            return;
        };
        dom.set_style(Target::Body, StyleProp::BackgroundColor, &swatch.background);
        dom.set_text(Target::Id(&self.config.ids.color_button), &swatch.label);
    }

    fn toggle_section<D: Dom + ?Sized>(&self, dom: &mut D) {
        let visible = dom.toggle_class(
            Target::Id(&self.config.ids.section),
            &self.config.classes.visible,
        );
        dom.set_text(
            Target::Id(&self.config.ids.section_button),
            section_label(&self.config.section, visible),
        );
    }

    /// Validate the contact form and render the result. The caller has
    /// already suppressed the browser's default submit.
    pub fn submit<D: Dom + ?Sized>(&self, dom: &mut D) -> SubmitOutcome {
        let ids = &self.config.ids;
        let classes = &self.config.classes;
        let messages = &self.config.form_messages;
        let read = |id: &str| dom.value(Target::Id(id)).unwrap_or_default();
        let form = ContactForm::from_raw(
            &read(&ids.full_name),
            &read(&ids.email),
            &read(&ids.message),
        );

        for field in FieldId::ALL {
            dom.set_text(Target::Id(self.error_slot(field)), "");
        }
        let summary = Target::Id(&ids.form_alert);
        dom.set_class_name(summary, &classes.cleared_alert());
        dom.set_text(summary, "");

        let outcome = SubmitOutcome::evaluate(&form);
        match &outcome {
            SubmitOutcome::Success { name } => {
                dom.set_text(summary, &messages.success_for(name));
                dom.remove_class(summary, &classes.hidden);
                dom.add_class(summary, &classes.success);
                dom.reset_form(Target::Id(&ids.form));
                tracing::debug!("contact form accepted");
            }
            SubmitOutcome::Failure { report } => {
                for error in report.errors() {
                    dom.set_text(
                        Target::Id(self.error_slot(error.field())),
                        error.message(messages),
                    );
                }
                dom.set_text(summary, &messages.failure_summary);
                dom.remove_class(summary, &classes.hidden);
                dom.add_class(summary, &classes.error);
                tracing::debug!(
                    fields = ?report.failing_fields().map(FieldId::as_str).collect::<Vec<_>>(),
                    "contact form rejected"
                );
            }
        }

        dom.scroll_into_view(summary);
        outcome
    }

    fn live_validate<D: Dom + ?Sized>(&self, dom: &mut D, field: FieldId) {
        let input = Target::Id(self.input_id(field));
        let Some(raw) = dom.value(input) else {
            return;
        };
        if live_check(field, &raw) {
            dom.set_text(Target::Id(self.error_slot(field)), "");
        }
    }

    fn input_id(&self, field: FieldId) -> &str {
        let ids = &self.config.ids;
        match field {
            FieldId::FullName => &ids.full_name,
            FieldId::Email => &ids.email,
            FieldId::Message => &ids.message,
        }
    }

    fn error_slot(&self, field: FieldId) -> &str {
        let ids = &self.config.ids;
        match field {
            FieldId::FullName => &ids.name_error,
            FieldId::Email => &ids.email_error,
            FieldId::Message => &ids.message_error,
        }
    }
}
