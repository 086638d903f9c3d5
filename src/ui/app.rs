//! Page selection and the Not Found page.

use leptos::prelude::*;

use crate::ui::components::ButtonLink;
use crate::ui::home::HomePage;
use crate::ui::layout::RootLayout;

/// Every page the site can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    NotFound,
}

impl Page {
    /// HTTP status code the page is served with.
    pub fn status(self) -> u16 {
        match self {
            Self::Home => 200,
            Self::NotFound => 404,
        }
    }

    /// File name used by the static export.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Home => "index.html",
            Self::NotFound => "404.html",
        }
    }
}

/// Main application component: the selected page inside the root layout.
#[component]
pub fn App(page: Page) -> impl IntoView {
    let content = match page {
        Page::Home => view! { <HomePage /> }.into_any(),
        Page::NotFound => view! { <NotFoundPage /> }.into_any(),
    };

    view! {
        <RootLayout>
            {content}
        </RootLayout>
    }
}

/// 404 Not Found page.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="flex flex-col items-center justify-center py-20">
            <h1 class="text-4xl font-bold mb-4">"404"</h1>
            <p class="text-gray-600 mb-6">"Page not found"</p>
            <ButtonLink href="/">
                "Go Home"
            </ButtonLink>
        </main>
    }
}
