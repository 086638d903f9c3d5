use docqet_web::render::{render_document, render_home_page};
use docqet_web::ui::app::Page;
use docqet_web::ui::metadata::SITE_METADATA;
use pretty_assertions::assert_eq;

/// Case-insensitive occurrence count, mirroring a `/text/i` matcher.
fn count_ci(haystack: &str, needle: &str) -> usize {
    haystack
        .to_lowercase()
        .matches(&needle.to_lowercase())
        .count()
}

#[test]
fn renders_welcome_message() {
    let html = render_home_page();

    assert_eq!(count_ci(&html, "Welcome to"), 1);
    assert_eq!(count_ci(&html, "Docqet"), 1);
    assert_eq!(count_ci(&html, "Secure Document Sharing with AI"), 1);
}

#[test]
fn renders_development_environment_status() {
    let html = render_home_page();

    assert_eq!(count_ci(&html, "Development Environment Ready"), 1);
    assert_eq!(count_ci(&html, "Next.js 14 with TypeScript"), 1);
    assert_eq!(count_ci(&html, "FastAPI Backend"), 1);
}

#[test]
fn renders_feature_cards() {
    let html = render_home_page();

    assert_eq!(html.matches("data-feature-card").count(), 3);
    assert_eq!(count_ci(&html, "Secure Sharing"), 1);
    assert_eq!(count_ci(&html, "AI-Powered Insights"), 1);
    assert_eq!(count_ci(&html, "Lightning Fast"), 1);
}

#[test]
fn feature_titles_are_card_headings() {
    let html = render_home_page();

    for title in ["Secure Sharing", "AI-Powered Insights", "Lightning Fast"] {
        assert!(
            html.contains(&format!(">{title}</h3>")),
            "missing heading for {title}"
        );
    }
}

#[test]
fn rendering_is_idempotent() {
    assert_eq!(render_home_page(), render_home_page());
    assert_eq!(render_document(Page::Home), render_document(Page::Home));
}

#[test]
fn layout_wraps_page_in_styled_shell() {
    let html = render_document(Page::Home);

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<html lang=\"en\">"));
    assert!(html.contains("<body class=\"font-inter\">"));
    assert!(html.contains("<div class=\"min-h-screen bg-gray-50\">"));

    let shell = html.find("min-h-screen bg-gray-50").unwrap();
    let welcome = html.find("Welcome to").unwrap();
    assert!(shell < welcome, "page content must sit inside the shell");
}

#[test]
fn document_head_carries_metadata() {
    let html = render_document(Page::Home);

    assert!(html.contains(&format!("<title>{}</title>", SITE_METADATA.title)));
    assert!(html.contains(&format!(
        "<meta name=\"description\" content=\"{}\"",
        SITE_METADATA.description
    )));
    assert!(html.contains(
        "<meta name=\"keywords\" content=\"document sharing, AI, security, collaboration\""
    ));
    assert!(html.contains("<meta name=\"author\" content=\"Docqet Team\""));
    assert!(html.contains("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\""));
    assert!(html.contains("<meta name=\"robots\" content=\"index, follow\""));

    assert!(html.contains(&format!(
        "<meta property=\"og:title\" content=\"{}\"",
        SITE_METADATA.title
    )));
    assert!(html.contains("<meta property=\"og:type\" content=\"website\""));
    assert!(html.contains("<meta property=\"og:locale\" content=\"en_US\""));
    assert!(html.contains("<meta name=\"twitter:card\" content=\"summary_large_image\""));
    assert!(html.contains(&format!(
        "<meta name=\"twitter:description\" content=\"{}\"",
        SITE_METADATA.description
    )));
    assert!(html.contains("href=\"/static/globals.css\""));
}

#[test]
fn metadata_record_is_consistent() {
    assert!(SITE_METADATA.validate().is_ok());
    assert!(!SITE_METADATA.title.is_empty());
    assert!(!SITE_METADATA.description.is_empty());
    assert_eq!(SITE_METADATA.open_graph.title, SITE_METADATA.title);
    assert_eq!(
        SITE_METADATA.open_graph.description,
        SITE_METADATA.description
    );
    assert_eq!(SITE_METADATA.twitter.title, SITE_METADATA.title);
    assert_eq!(SITE_METADATA.twitter.description, SITE_METADATA.description);
}
