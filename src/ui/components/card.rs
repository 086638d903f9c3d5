//! Titled card used for the landing page feature grid.

use leptos::prelude::*;

/// Bordered white panel with an icon, a heading and a body.
///
/// The icon sits left of the heading; `children` become the body text.
///
/// ```rust,ignore
/// view! {
///     <Card title="Secure Sharing" icon=view! { <ShieldIcon /> }.into_any()>
///         "Share documents with end-to-end encryption."
///     </Card>
/// }
/// ```
#[component]
pub fn Card(
    /// Heading shown next to the icon.
    title: &'static str,
    /// Icon shown before the heading.
    icon: AnyView,
    /// Body content.
    children: Children,
) -> impl IntoView {
    view! {
        <article class="h-full rounded-xl border border-gray-200 bg-white text-gray-900 shadow-sm">
            <header class="flex items-center gap-3 p-6 pb-3">
                {icon}
                <h3 class="text-lg font-semibold">{title}</h3>
            </header>
            <div class="px-6 pb-6 text-sm text-gray-600">{children()}</div>
        </article>
    }
}
