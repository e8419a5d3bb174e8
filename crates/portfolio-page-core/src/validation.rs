//! Contact form validation rules.
//!
//! Pure functions over field values; nothing here touches the DOM. The
//! controller reads the inputs, calls [`validate`], and renders the report.

use serde::Serialize;

use crate::config::FormMessages;

/// Minimum trimmed message length, in UTF-16 code units.
pub const MIN_MESSAGE_LEN: usize = 10;

/// Strip leading and trailing whitespace as the browser's `trim()` does,
/// which includes U+FEFF.
fn trim_input(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Input length as the page measures it: UTF-16 code units, so a
/// non-BMP character such as an emoji counts twice.
fn input_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// The three validated fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    FullName,
    Email,
    Message,
}

impl FieldId {
    pub const ALL: [Self; 3] = [Self::FullName, Self::Email, Self::Message];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldError {
    NameRequired,
    EmailRequired,
    EmailMissingAt,
    EmailMissingDomain,
    MessageRequired,
    MessageTooShort,
}

impl FieldError {
    #[must_use]
    pub const fn field(self) -> FieldId {
        match self {
            Self::NameRequired => FieldId::FullName,
            Self::EmailRequired | Self::EmailMissingAt | Self::EmailMissingDomain => FieldId::Email,
            Self::MessageRequired | Self::MessageTooShort => FieldId::Message,
        }
    }

    /// Display text shown under the failing field.
    #[must_use]
    pub fn message(self, messages: &FormMessages) -> &str {
        match self {
            Self::NameRequired => &messages.name_required,
            Self::EmailRequired => &messages.email_required,
            Self::EmailMissingAt => &messages.email_missing_at,
            Self::EmailMissingDomain => &messages.email_missing_domain,
            Self::MessageRequired => &messages.message_required,
            Self::MessageTooShort => &messages.message_too_short,
        }
    }
}

/// Trimmed contact form values as read at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub full_name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Build from raw input values, trimming each.
    #[must_use]
    pub fn from_raw(full_name: &str, email: &str, message: &str) -> Self {
        Self {
            full_name: trim_input(full_name).to_string(),
            email: trim_input(email).to_string(),
            message: trim_input(message).to_string(),
        }
    }
}

#[must_use]
pub fn validate_full_name(full_name: &str) -> Option<FieldError> {
    full_name.is_empty().then_some(FieldError::NameRequired)
}

/// Deliberately loose: any value holding both `@` and `.` passes, in any order.
#[must_use]
pub fn validate_email(email: &str) -> Option<FieldError> {
    if email.is_empty() {
        Some(FieldError::EmailRequired)
    } else if !email.contains('@') {
        Some(FieldError::EmailMissingAt)
    } else if !email.contains('.') {
        Some(FieldError::EmailMissingDomain)
    } else {
        None
    }
}

#[must_use]
pub fn validate_message(message: &str) -> Option<FieldError> {
    if message.is_empty() {
        Some(FieldError::MessageRequired)
    } else if input_len(message) < MIN_MESSAGE_LEN {
        Some(FieldError::MessageTooShort)
    } else {
        None
    }
}

/// Per-field result of one submit attempt. Every field is checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub full_name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub message: Option<FieldError>,
}

impl ValidationReport {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.full_name.is_none() && self.email.is_none() && self.message.is_none()
    }

    #[must_use]
    pub const fn get(&self, field: FieldId) -> Option<FieldError> {
        match field {
            FieldId::FullName => self.full_name,
            FieldId::Email => self.email,
            FieldId::Message => self.message,
        }
    }

    pub fn errors(&self) -> impl Iterator<Item = FieldError> + '_ {
        FieldId::ALL.into_iter().filter_map(|field| self.get(field))
    }

    pub fn failing_fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.errors().map(FieldError::field)
    }
}

/// Validate every field of a (trimmed) form.
#[must_use]
pub fn validate(form: &ContactForm) -> ValidationReport {
    ValidationReport {
        full_name: validate_full_name(&form.full_name),
        email: validate_email(&form.email),
        message: validate_message(&form.message),
    }
}

/// Whether the live `input` listener may clear this field's error.
///
/// Looser than [`validate`]: the email check only wants an `@` and looks at
/// the untrimmed value.
#[must_use]
pub fn live_check(field: FieldId, raw: &str) -> bool {
    match field {
        FieldId::FullName => !trim_input(raw).is_empty(),
        FieldId::Email => raw.contains('@'),
        FieldId::Message => input_len(trim_input(raw)) >= MIN_MESSAGE_LEN,
    }
}

/// Overall result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Success { name: String },
    Failure { report: ValidationReport },
}

impl SubmitOutcome {
    #[must_use]
    pub fn evaluate(form: &ContactForm) -> Self {
        let report = validate(form);
        if report.is_valid() {
            Self::Success {
                name: form.full_name.clone(),
            }
        } else {
            Self::Failure { report }
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn valid_form_succeeds_with_name() {
        let form = ContactForm::from_raw(
            "  Jane Doe ",
            "jane@example.com",
            "Hello, this is a test message.",
        );
        assert_eq!(
            SubmitOutcome::evaluate(&form),
            SubmitOutcome::Success {
                name: "Jane Doe".to_string()
            }
        );
    }

    #[test]
    fn empty_form_fails_every_field() {
        let report = validate(&ContactForm::default());
        assert_eq!(report.full_name, Some(FieldError::NameRequired));
        assert_eq!(report.email, Some(FieldError::EmailRequired));
        assert_eq!(report.message, Some(FieldError::MessageRequired));
        assert_eq!(report.failing_fields().count(), 3);
        assert!(!report.is_valid());
    }

    #[test]
    fn email_checks_are_ordered() {
        assert_eq!(validate_email(""), Some(FieldError::EmailRequired));
        assert_eq!(validate_email("jane.example.com"), Some(FieldError::EmailMissingAt));
        assert_eq!(validate_email("jane@example"), Some(FieldError::EmailMissingDomain));
        assert_eq!(validate_email("jane@example.com"), None);
    }

    #[test]
    fn loose_email_accepts_dot_before_at() {
        assert_eq!(validate_email(".@"), None);
    }

    #[test]
    fn message_boundary_at_ten_chars() {
        assert_eq!(validate_message("123456789"), Some(FieldError::MessageTooShort));
        assert_eq!(validate_message("1234567890"), None);
    }

    #[test]
    fn message_length_counts_utf16_units_not_bytes() {
        // 9 units, 18 bytes
        assert_eq!(validate_message("ééééééééé"), Some(FieldError::MessageTooShort));
    }

    #[test]
    fn emoji_count_as_two_units() {
        assert_eq!(validate_message("😀😀😀😀😀"), None);
        assert_eq!(validate_message("😀😀😀😀a"), Some(FieldError::MessageTooShort));
        assert!(live_check(FieldId::Message, " 😀😀😀😀😀 "));
        assert!(!live_check(FieldId::Message, "😀😀😀😀a"));
    }

    #[test]
    fn byte_order_mark_is_trimmed() {
        let form = ContactForm::from_raw("\u{FEFF}", "\u{FEFF}a@b.c\u{FEFF}", "0123456789\u{FEFF}");
        assert_eq!(form.email, "a@b.c");
        let report = validate(&form);
        assert_eq!(report.full_name, Some(FieldError::NameRequired));
        assert_eq!(report.email, None);
        assert_eq!(report.message, None);
        assert!(!live_check(FieldId::FullName, " \u{FEFF} "));
    }

    #[test]
    fn field_errors_map_to_their_field() {
        assert_eq!(FieldError::NameRequired.field(), FieldId::FullName);
        assert_eq!(FieldError::EmailMissingDomain.field(), FieldId::Email);
        assert_eq!(FieldError::MessageTooShort.field(), FieldId::Message);
    }

    #[test]
    fn field_error_text_comes_from_messages() {
        let messages = FormMessages::default();
        assert_eq!(
            FieldError::EmailMissingAt.message(&messages),
            "⚠️ Please enter a valid email address (must contain @)."
        );
    }

    #[test]
    fn live_check_email_ignores_domain() {
        assert!(live_check(FieldId::Email, "@"));
        assert!(!live_check(FieldId::Email, "jane"));
    }

    #[test]
    fn live_check_trims_name_and_message() {
        assert!(!live_check(FieldId::FullName, "   "));
        assert!(live_check(FieldId::FullName, " J "));
        assert!(!live_check(FieldId::Message, "   short    "));
        assert!(live_check(FieldId::Message, "  long enough  "));
    }

    #[test]
    fn report_serializes_snake_case() {
        let report = validate(&ContactForm::from_raw("", "a@b.c", "0123456789"));
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"full_name\":\"name_required\""), "{json}");
    }

    proptest! {
        /// Blank names always fail and make the whole form invalid.
        #[test]
        fn proptest_blank_name_rejected(name in "[ \t\n]{0,8}") {
            let form = ContactForm::from_raw(&name, "a@b.c", "0123456789");
            let report = validate(&form);
            prop_assert_eq!(report.full_name, Some(FieldError::NameRequired));
            prop_assert!(!report.is_valid());
        }

        /// Emails without `@` get the missing-@ error.
        #[test]
        fn proptest_email_without_at(email in "[a-z.]{1,20}") {
            prop_assert_eq!(validate_email(&email), Some(FieldError::EmailMissingAt));
        }

        /// Emails with `@` but no `.` get the missing-domain error.
        #[test]
        fn proptest_email_without_dot(local in "[a-z]{0,10}", domain in "[a-z]{0,10}") {
            let email = format!("{local}@{domain}");
            prop_assert_eq!(validate_email(&email), Some(FieldError::EmailMissingDomain));
        }

        /// Emails with both `@` and `.` pass.
        #[test]
        fn proptest_email_with_at_and_dot(
            local in "[a-z.]{0,10}",
            domain in "[a-z]{0,10}",
            tld in "[a-z]{0,4}",
        ) {
            let email = format!("{local}@{domain}.{tld}");
            prop_assert_eq!(validate_email(&email), None);
        }

        /// Short messages fail, distinguishing empty from too short.
        #[test]
        fn proptest_short_message_rejected(message in "[a-zA-Z0-9 ]{0,9}") {
            let form = ContactForm::from_raw("n", "a@b.c", &message);
            let expected = if form.message.is_empty() {
                FieldError::MessageRequired
            } else {
                FieldError::MessageTooShort
            };
            prop_assert_eq!(validate(&form).message, Some(expected));
        }

        /// Messages of ten or more non-blank characters pass.
        #[test]
        fn proptest_long_message_accepted(message in "[a-zA-Z0-9]{10,60}") {
            prop_assert_eq!(validate_message(&message), None);
        }

        /// The live check never clears a field that full validation would
        /// still reject for name and message.
        #[test]
        fn proptest_live_check_agrees_for_name_and_message(raw in "[ a-z]{0,15}") {
            prop_assert_eq!(
                live_check(FieldId::FullName, &raw),
                validate_full_name(trim_input(&raw)).is_none()
            );
            prop_assert_eq!(
                live_check(FieldId::Message, &raw),
                validate_message(trim_input(&raw)).is_none()
            );
        }
    }
}
