//! Landing page: hero, environment status and feature overview.

use leptos::prelude::*;

use crate::ui::components::{Badge, Card, CheckCircleIcon, ShieldIcon, SparklesIcon, ZapIcon};

/// Product name shown in the hero heading.
pub const PRODUCT_NAME: &str = "Docqet";

/// Tagline under the hero heading.
pub const TAGLINE: &str = "Secure Document Sharing with AI";

/// Heading of the environment status panel.
pub const STATUS_HEADING: &str = "Development Environment Ready";

/// Technologies listed in the status panel.
pub const STACK_LABELS: &[&str] = &["Next.js 14 with TypeScript", "FastAPI Backend"];

/// Icon shown on a feature card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureIcon {
    Shield,
    Sparkles,
    Zap,
}

/// One advertised product capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: FeatureIcon,
}

/// Feature cards, in display order.
pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Secure Sharing",
        description: "Share documents with end-to-end encryption and fine-grained access controls.",
        icon: FeatureIcon::Shield,
    },
    Feature {
        title: "AI-Powered Insights",
        description: "Get summaries, key points and answers from your documents in seconds.",
        icon: FeatureIcon::Sparkles,
    },
    Feature {
        title: "Lightning Fast",
        description: "Upload, preview and share files instantly from any device.",
        icon: FeatureIcon::Zap,
    },
];

/// The home page.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="container mx-auto max-w-5xl px-4 py-16">
            <section class="text-center mb-12">
                <h1 class="text-4xl font-bold text-gray-900 mb-4">
                    "Welcome to "
                    <span class="text-blue-600">{PRODUCT_NAME}</span>
                </h1>
                <p class="text-xl text-gray-600">{TAGLINE}</p>
            </section>

            <StatusPanel />

            <section class="grid gap-6 md:grid-cols-3">
                {FEATURES
                    .iter()
                    .map(|feature| view! { <FeatureCard feature={*feature} /> })
                    .collect_view()}
            </section>
        </main>
    }
}

/// Informational banner describing the environment state.
#[component]
fn StatusPanel() -> impl IntoView {
    view! {
        <section class="mb-12 rounded-xl border border-green-200 bg-green-50 p-6" role="status">
            <div class="flex items-center gap-2 mb-3">
                <CheckCircleIcon class="h-5 w-5 text-green-600" />
                <h2 class="text-lg font-semibold text-green-900">{STATUS_HEADING}</h2>
            </div>
            <ul class="flex flex-wrap gap-2">
                {STACK_LABELS
                    .iter()
                    .map(|label| {
                        view! {
                            <li>
                                <Badge>{*label}</Badge>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

/// Card advertising a single feature.
#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    let icon = match feature.icon {
        FeatureIcon::Shield => view! { <ShieldIcon class="h-6 w-6 text-blue-600" /> }.into_any(),
        FeatureIcon::Sparkles => {
            view! { <SparklesIcon class="h-6 w-6 text-blue-600" /> }.into_any()
        }
        FeatureIcon::Zap => view! { <ZapIcon class="h-6 w-6 text-blue-600" /> }.into_any(),
    };

    view! {
        <div data-feature-card="">
            <Card title=feature.title icon=icon>
                <p>{feature.description}</p>
            </Card>
        </div>
    }
}
