//! UI components and layouts.
//!
//! Leptos SSR components for the landing site. Everything here renders
//! static markup; there is no client-side hydration.
//!
//! # Structure
//!
//! - [`metadata`]: Document head metadata shared by all pages
//! - [`layout`]: Root layout wrapping every page
//! - [`home`]: The landing page
//! - [`app`]: Page selection and the Not Found page
//! - [`components`]: Reusable UI primitives

pub mod app;
pub mod components;
pub mod home;
pub mod layout;
pub mod metadata;
