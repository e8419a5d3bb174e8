//! The seam between page logic and a document.
//!
//! Every operation tolerates an absent element: reads return `None`/`false`
//! and writes do nothing. The browser implementation lives in the wasm crate;
//! [`crate::memory::MemoryDom`] backs native tests.

/// An element the controller addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target<'a> {
    /// `document.body`
    Body,
    /// `document.getElementById(id)`
    Id(&'a str),
}

/// Inline style properties the controller writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProp {
    Color,
    BorderColor,
    BackgroundColor,
}

impl StyleProp {
    /// CSS property name.
    #[must_use]
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::BorderColor => "border-color",
            Self::BackgroundColor => "background-color",
        }
    }
}

/// Document operations used by the controller.
pub trait Dom {
    /// Whether the target exists in the document.
    fn contains(&self, target: Target<'_>) -> bool;

    fn text(&self, target: Target<'_>) -> Option<String>;

    fn set_text(&mut self, target: Target<'_>, text: &str);

    /// Current value of an `<input>` or `<textarea>`.
    fn value(&self, target: Target<'_>) -> Option<String>;

    fn has_class(&self, target: Target<'_>, class: &str) -> bool;

    /// Flip `class`, returning whether it is now present.
    fn toggle_class(&mut self, target: Target<'_>, class: &str) -> bool;

    fn add_class(&mut self, target: Target<'_>, class: &str);

    fn remove_class(&mut self, target: Target<'_>, class: &str);

    /// Replace the whole `class` attribute.
    fn set_class_name(&mut self, target: Target<'_>, class_name: &str);

    fn set_style(&mut self, target: Target<'_>, prop: StyleProp, value: &str);

    /// Drop an inline style so the stylesheet applies again.
    fn remove_style(&mut self, target: Target<'_>, prop: StyleProp);

    /// Modal acknowledgment message.
    fn alert(&mut self, message: &str);

    /// Restore a form's controls to their default (empty) values.
    fn reset_form(&mut self, form: Target<'_>);

    /// Smooth scroll to the nearest edge that shows the target.
    fn scroll_into_view(&mut self, target: Target<'_>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_names() {
        assert_eq!(StyleProp::Color.css_name(), "color");
        assert_eq!(StyleProp::BorderColor.css_name(), "border-color");
        assert_eq!(StyleProp::BackgroundColor.css_name(), "background-color");
    }
}
