//! Configuration for the portfolio page controller
//!
//! `PageConfig::default()` reproduces the shipped page exactly: its element
//! identifiers, CSS class names, button labels and messages. A host page may
//! override any subset through [`PageConfig::from_json`]; absent keys keep
//! their defaults.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Placeholder replaced with the submitted name in the success summary.
pub const NAME_PLACEHOLDER: &str = "{name}";

/// Element identifiers the controller looks up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub clock: String,
    pub theme_button: String,
    pub alert_button: String,
    pub text_button: String,
    pub text_target: String,
    pub color_button: String,
    pub section_button: String,
    pub section: String,
    pub form: String,
    pub full_name: String,
    pub email: String,
    pub message: String,
    pub name_error: String,
    pub email_error: String,
    pub message_error: String,
    pub form_alert: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            clock: "datetime".to_string(),
            theme_button: "themeToggle".to_string(),
            alert_button: "alertBtn".to_string(),
            text_button: "textBtn".to_string(),
            text_target: "changeText".to_string(),
            color_button: "colorBtn".to_string(),
            section_button: "toggleSection".to_string(),
            section: "hiddenSection".to_string(),
            form: "contactForm".to_string(),
            full_name: "fullName".to_string(),
            email: "email".to_string(),
            message: "message".to_string(),
            name_error: "nameError".to_string(),
            email_error: "emailError".to_string(),
            message_error: "messageError".to_string(),
            form_alert: "formAlert".to_string(),
        }
    }
}

impl ElementIds {
    fn all(&self) -> [(&'static str, &str); 16] {
        [
            ("clock", &self.clock),
            ("theme_button", &self.theme_button),
            ("alert_button", &self.alert_button),
            ("text_button", &self.text_button),
            ("text_target", &self.text_target),
            ("color_button", &self.color_button),
            ("section_button", &self.section_button),
            ("section", &self.section),
            ("form", &self.form),
            ("full_name", &self.full_name),
            ("email", &self.email),
            ("message", &self.message),
            ("name_error", &self.name_error),
            ("email_error", &self.email_error),
            ("message_error", &self.message_error),
            ("form_alert", &self.form_alert),
        ]
    }
}

/// CSS classes forming the visual contract with the stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CssClasses {
    /// Present on `<body>` while the light theme is active.
    pub light_mode: String,
    /// Present on the toggled section while it is shown.
    pub visible: String,
    /// Base class of the summary alert.
    pub form_alert: String,
    pub hidden: String,
    pub success: String,
    pub error: String,
}

impl Default for CssClasses {
    fn default() -> Self {
        Self {
            light_mode: "light-mode".to_string(),
            visible: "visible".to_string(),
            form_alert: "form-alert".to_string(),
            hidden: "hidden".to_string(),
            success: "success".to_string(),
            error: "error".to_string(),
        }
    }
}

impl CssClasses {
    /// Class attribute of the summary alert in its cleared state.
    #[must_use]
    pub fn cleared_alert(&self) -> String {
        format!("{} {}", self.form_alert, self.hidden)
    }
}

/// Live clock settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    pub prefix: String,
    /// Refresh cadence in milliseconds.
    pub interval_ms: u32,
    /// Render `03:04:05 PM` instead of `15:04:05`.
    pub hour12: bool,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            prefix: "🕐 ".to_string(),
            interval_ms: 1000,
            hour12: true,
        }
    }
}

/// Theme button labels. Each names the action the next click performs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeLabels {
    /// Shown while light mode is active.
    pub to_dark: String,
    /// Shown while dark mode is active.
    pub to_light: String,
}

impl Default for ThemeLabels {
    fn default() -> Self {
        Self {
            to_dark: "🌙 Dark Mode".to_string(),
            to_light: "☀️ Light Mode".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextToggleConfig {
    pub changed_text: String,
    pub original_text: String,
    /// Applied to both `color` and `border-color` while changed.
    pub highlight: String,
    pub changed_label: String,
    pub original_label: String,
}

impl Default for TextToggleConfig {
    fn default() -> Self {
        Self {
            changed_text: "🚀 Text changed! Web development is the future — and I am building \
                           mine right here in Rwanda!"
                .to_string(),
            original_text: "This text will change when you click the button above!".to_string(),
            highlight: "#00ff88".to_string(),
            changed_label: "Reset Text 🔄".to_string(),
            original_label: "Change This Text ✏️".to_string(),
        }
    }
}

/// One entry of the background palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swatch {
    pub background: String,
    pub label: String,
}

impl Swatch {
    fn new(background: &str, label: &str) -> Self {
        Self {
            background: background.to_string(),
            label: label.to_string(),
        }
    }
}

fn default_palette() -> Vec<Swatch> {
    vec![
        Swatch::new("#0d0d0d", "Change Color ✨"),
        Swatch::new("#0a1628", "Ocean Dark 🌊"),
        Swatch::new("#1a0a28", "Purple Night 🌌"),
        Swatch::new("#0a2818", "Forest Dark 🌿"),
        Swatch::new("#28100a", "Ember Dark 🔥"),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionLabels {
    /// Shown while the section is visible.
    pub hide: String,
    /// Shown while the section is hidden.
    pub show: String,
}

impl Default for SectionLabels {
    fn default() -> Self {
        Self {
            hide: "Hide Info 🙈".to_string(),
            show: "Show/Hide Info 👁️".to_string(),
        }
    }
}

/// Texts written by contact form validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormMessages {
    pub name_required: String,
    pub email_required: String,
    pub email_missing_at: String,
    pub email_missing_domain: String,
    pub message_required: String,
    pub message_too_short: String,
    /// Must contain [`NAME_PLACEHOLDER`].
    pub success_template: String,
    pub failure_summary: String,
}

impl Default for FormMessages {
    fn default() -> Self {
        Self {
            name_required: "⚠️ Full name is required.".to_string(),
            email_required: "⚠️ Email address is required.".to_string(),
            email_missing_at: "⚠️ Please enter a valid email address (must contain @)."
                .to_string(),
            email_missing_domain: "⚠️ Email address appears invalid (missing domain)."
                .to_string(),
            message_required: "⚠️ Message cannot be empty.".to_string(),
            message_too_short: "⚠️ Message is too short (minimum 10 characters).".to_string(),
            success_template:
                "✅ Message sent successfully! Thank you, {name}. I will get back to you soon!"
                    .to_string(),
            failure_summary: "❌ Please fix the errors above and try again.".to_string(),
        }
    }
}

impl FormMessages {
    /// Success summary for a submitter.
    #[must_use]
    pub fn success_for(&self, name: &str) -> String {
        self.success_template.replace(NAME_PLACEHOLDER, name)
    }
}

/// Main configuration struct for the portfolio page controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub ids: ElementIds,
    pub classes: CssClasses,
    pub clock: ClockConfig,
    pub theme: ThemeLabels,
    pub alert_message: String,
    pub text_toggle: TextToggleConfig,
    pub palette: Vec<Swatch>,
    pub section: SectionLabels,
    pub form_messages: FormMessages,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            classes: CssClasses::default(),
            clock: ClockConfig::default(),
            theme: ThemeLabels::default(),
            alert_message: "👋 Hello! I am NTWALI Gideon, an aspiring web developer from Rwanda. \
                            Thanks for visiting my practical project!"
                .to_string(),
            text_toggle: TextToggleConfig::default(),
            palette: default_palette(),
            section: SectionLabels::default(),
            form_messages: FormMessages::default(),
        }
    }
}

impl PageConfig {
    /// Parse a (possibly partial) JSON document and validate the result.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the controller relies on.
    pub fn validate(&self) -> Result<()> {
        if self.palette.is_empty() {
            return Err(Error::InvalidConfig(
                "palette must contain at least one swatch".to_string(),
            ));
        }
        if self.clock.interval_ms == 0 {
            return Err(Error::InvalidConfig(
                "clock.interval_ms must be positive".to_string(),
            ));
        }
        if let Some((key, _)) = self.ids.all().into_iter().find(|(_, id)| id.trim().is_empty()) {
            return Err(Error::InvalidConfig(format!("ids.{key} must not be blank")));
        }
        if !self.form_messages.success_template.contains(NAME_PLACEHOLDER) {
            return Err(Error::InvalidConfig(format!(
                "form_messages.success_template must contain {NAME_PLACEHOLDER}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        PageConfig::default().validate().unwrap();
    }

    #[test]
    fn default_palette_has_five_swatches_starting_with_page_background() {
        let config = PageConfig::default();
        assert_eq!(config.palette.len(), 5);
        assert_eq!(config.palette[0].background, "#0d0d0d");
        assert_eq!(config.palette[0].label, "Change Color ✨");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            PageConfig::from_json(r#"{"ids": {"clock": "now"}, "clock": {"hour12": false}}"#)
                .unwrap();
        assert_eq!(config.ids.clock, "now");
        assert_eq!(config.ids.theme_button, "themeToggle");
        assert!(!config.clock.hour12);
        assert_eq!(config.clock.interval_ms, 1000);
        assert_eq!(config.palette, default_palette());
    }

    #[test]
    fn empty_palette_rejected() {
        let err = PageConfig::from_json(r#"{"palette": []}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)), "got {err}");
    }

    #[test]
    fn zero_interval_rejected() {
        let err = PageConfig::from_json(r#"{"clock": {"interval_ms": 0}}"#).unwrap_err();
        assert!(err.to_string().contains("interval_ms"));
    }

    #[test]
    fn blank_id_rejected_with_key_name() {
        let err = PageConfig::from_json(r#"{"ids": {"email": "  "}}"#).unwrap_err();
        assert!(err.to_string().contains("ids.email"), "got {err}");
    }

    #[test]
    fn success_template_requires_placeholder() {
        let err =
            PageConfig::from_json(r#"{"form_messages": {"success_template": "Thanks!"}}"#)
                .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn malformed_json_is_serialization_error() {
        let err = PageConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn success_message_interpolates_name() {
        let messages = FormMessages::default();
        let text = messages.success_for("Jane Doe");
        assert!(text.contains("Thank you, Jane Doe."));
        assert!(!text.contains(NAME_PLACEHOLDER));
    }

    #[test]
    fn cleared_alert_class() {
        assert_eq!(CssClasses::default().cleared_alert(), "form-alert hidden");
    }
}
