//! WASM entry point for the portfolio page.
//!
//! Wires [`portfolio_page_core::Controller`] to the live document: one DOM
//! listener per binding, plus a `setInterval` clock.
//!
//! # Building
//!
//! ```bash
//! # Using wasm-pack (recommended)
//! wasm-pack build crates/portfolio-page-wasm --target web
//!
//! # Using cargo directly
//! cargo build --target wasm32-unknown-unknown -p portfolio-page-wasm --release
//! ```
//!
//! # Usage
//!
//! With the default `auto-install` feature the page wires itself once the DOM
//! is ready:
//!
//! ```javascript
//! import init from './portfolio_page_wasm.js';
//! await init();
//! ```
//!
//! Without it, install explicitly with a custom config:
//!
//! ```javascript
//! import init, { PortfolioPage } from './portfolio_page_wasm.js';
//!
//! await init();
//! const page = PortfolioPage.fromConfig('{"ids": {"clock": "now"}}');
//! page.install();
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;

// ──────────────────────────────────────────────────────────────────────────────
// Shared types (WASM-compatible)
// ──────────────────────────────────────────────────────────────────────────────

use portfolio_page_core::{Binding, InitReport, PageError, PageResult};
use serde::Serialize;

/// What an install wired up, handed back to JS for inspection.
#[derive(Debug, Clone, Serialize)]
pub struct InstallSummary {
    pub version: &'static str,
    pub clock_active: bool,
    pub bindings: Vec<Binding>,
}

impl InstallSummary {
    #[must_use]
    pub fn from_report(report: &InitReport) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            clock_active: report.clock_active,
            bindings: report.bindings.clone(),
        }
    }

    pub fn to_json(&self) -> PageResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Whether `document.readyState` says the parser is still running, so
/// initialization must wait for `DOMContentLoaded`.
#[must_use]
pub fn is_still_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Message thrown across the JS boundary for a controller fault.
#[must_use]
pub fn js_error_message(err: &PageError) -> String {
    format!("{}: {err}", err.error_type())
}

// ──────────────────────────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────────────────────────
