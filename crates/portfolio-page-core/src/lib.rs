//! Core logic for the portfolio page controller
//!
//! This crate provides:
//! - Configuration (`PageConfig`) with defaults matching the shipped page
//! - Contact form validation rules, independent of any document
//! - Toggle and color-cycle state
//! - The declarative binding table and the `Controller` that runs handlers
//! - The `Dom` seam, plus `MemoryDom` for driving the controller natively

#![forbid(unsafe_code)]

pub mod bindings;
pub mod clock;
pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod memory;
pub mod toggles;
pub mod validation;

// Re-export key types for convenience
pub use bindings::{Action, Binding, EventKind, binding_table};
pub use clock::{format_clock, now_local};
pub use config::{
    ClockConfig, CssClasses, ElementIds, FormMessages, PageConfig, SectionLabels, Swatch,
    TextToggleConfig, ThemeLabels,
};
pub use controller::{Controller, InitReport};
pub use dom::{Dom, StyleProp, Target};
pub use error::{Error as PageError, Result as PageResult};
pub use memory::{MemoryDom, MemoryElement};
pub use validation::{
    ContactForm, FieldError, FieldId, SubmitOutcome, ValidationReport, live_check, validate,
};
