//! Link styled as a button.

use leptos::prelude::*;

const BUTTON_CLASSES: &str =
    "inline-flex items-center justify-center rounded-lg h-10 px-4 text-sm font-medium \
     transition-colors bg-blue-600 text-white hover:bg-blue-700";

/// Navigation link rendered with the brand button styling.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <ButtonLink href="/">"Go Home"</ButtonLink>
/// }
/// ```
#[component]
pub fn ButtonLink(
    /// Link target.
    href: &'static str,
    /// Link content.
    children: Children,
) -> impl IntoView {
    view! {
        <a href=href class=BUTTON_CLASSES>
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use leptos::tachys::view::RenderHtml;

    use super::*;

    #[test]
    fn renders_anchor_with_brand_colours() {
        let html = view! { <ButtonLink href="/">"Go Home"</ButtonLink> }.to_html();
        assert!(html.contains("href=\"/\""));
        assert!(html.contains("bg-blue-600"));
        assert!(html.contains("Go Home"));
    }
}
