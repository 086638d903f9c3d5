//! Pill-shaped label for the environment status panel.

use leptos::prelude::*;

const BADGE_CLASSES: &str =
    "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-medium \
     bg-green-100 text-green-800";

/// Green status label.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Badge>"FastAPI Backend"</Badge>
/// }
/// ```
#[component]
pub fn Badge(children: Children) -> impl IntoView {
    view! {
        <span class=BADGE_CLASSES>
            {children()}
        </span>
    }
}
