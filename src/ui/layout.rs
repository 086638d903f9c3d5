//! Root layout: the document shell wrapped around every page.

use leptos::prelude::*;

use crate::ui::metadata::{HeadTags, PageMetadata, SITE_METADATA};

/// Body class that applies the Inter font family (see `globals.css`).
pub const FONT_CLASS: &str = "font-inter";

/// Full-viewport wrapper classes.
pub const SHELL_CLASS: &str = "min-h-screen bg-gray-50";

/// Renders `<html>` with the shared head tags and a styled body wrapper.
///
/// Does not emit the doctype; see [`crate::render::render_document`].
#[component]
pub fn RootLayout(
    /// Head metadata for the page.
    #[prop(default = &SITE_METADATA)]
    metadata: &'static PageMetadata,
    /// Page content.
    children: Children,
) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <HeadTags metadata=metadata />
            </head>
            <body class=FONT_CLASS>
                <div class=SHELL_CLASS>
                    {children()}
                </div>
            </body>
        </html>
    }
}
