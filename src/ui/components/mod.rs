//! Reusable UI primitives.
//!
//! Small, composable components rendered via Leptos SSR.
//!
//! # Components
//!
//! - [`Card`]: Feature card with icon, heading and body
//! - [`Badge`]: Status label
//! - [`ButtonLink`]: Link styled as a button
//! - [`ShieldIcon`], [`SparklesIcon`], [`ZapIcon`], [`CheckCircleIcon`]: inline SVG icons

mod badge;
mod button;
mod card;
mod icons;

pub use badge::Badge;
pub use button::ButtonLink;
pub use card::Card;
pub use icons::*;
