//! Server-side render entry points.
//!
//! Uses Leptos 0.8's `RenderHtml::to_html`; no reactive runtime or
//! hydration is involved, so output is identical on every call.

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::ui::app::{App, Page};
use crate::ui::home::HomePage;

/// Shared stylesheet, embedded so the binary serves it from any working directory.
pub const GLOBAL_CSS: &str = include_str!("../static/globals.css");

/// Render the home page body on its own, without the document shell.
pub fn render_home_page() -> String {
    view! { <HomePage /> }.to_html()
}

/// Render a complete HTML document for `page`, including the doctype.
pub fn render_document(page: Page) -> String {
    let html = view! { <App page=page /> }.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{html}")
}
