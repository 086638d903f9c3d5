//! Document head metadata shared by every page.

use leptos::prelude::*;

use crate::error::MetadataError;

/// Stylesheet for the Inter web font (latin subset).
pub const FONT_STYLESHEET: &str =
    "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&subset=latin&display=swap";

/// Path of the shared stylesheet served by the app.
pub const GLOBAL_STYLESHEET: &str = "/static/globals.css";

const TITLE: &str = "Docqet - Secure Document Sharing with AI";
const DESCRIPTION: &str =
    "A modern platform for secure document sharing with AI-powered analysis and insights.";

/// Site-wide metadata consumed by [`HeadTags`].
pub static SITE_METADATA: PageMetadata = PageMetadata {
    title: TITLE,
    description: DESCRIPTION,
    keywords: &["document sharing", "AI", "security", "collaboration"],
    authors: &[Author {
        name: "Docqet Team",
    }],
    viewport: "width=device-width, initial-scale=1",
    robots: "index, follow",
    open_graph: OpenGraph {
        title: TITLE,
        description: DESCRIPTION,
        og_type: "website",
        locale: "en_US",
    },
    twitter: TwitterCard {
        card: "summary_large_image",
        title: TITLE,
        description: DESCRIPTION,
    },
};

/// Page author.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Author {
    pub name: &'static str,
}

/// Open Graph block (`og:*` properties).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenGraph {
    pub title: &'static str,
    pub description: &'static str,
    pub og_type: &'static str,
    pub locale: &'static str,
}

/// Twitter card block (`twitter:*` names).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Immutable description of a document for browsers, crawlers and link previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub authors: &'static [Author],
    pub viewport: &'static str,
    pub robots: &'static str,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
}

impl PageMetadata {
    /// Check that every field is filled in and the social blocks mirror
    /// the top-level title and description.
    pub fn validate(&self) -> Result<(), MetadataError> {
        let required = [
            ("title", self.title),
            ("description", self.description),
            ("viewport", self.viewport),
            ("robots", self.robots),
            ("open_graph.title", self.open_graph.title),
            ("open_graph.description", self.open_graph.description),
            ("open_graph.type", self.open_graph.og_type),
            ("open_graph.locale", self.open_graph.locale),
            ("twitter.card", self.twitter.card),
            ("twitter.title", self.twitter.title),
            ("twitter.description", self.twitter.description),
        ];
        for (field, value) in required {
            non_empty(field, value)?;
        }

        if self.keywords.is_empty() {
            return Err(MetadataError::EmptyField("keywords"));
        }
        for keyword in self.keywords {
            non_empty("keywords", keyword)?;
        }
        if self.authors.is_empty() {
            return Err(MetadataError::EmptyField("authors"));
        }
        for author in self.authors {
            non_empty("authors.name", author.name)?;
        }

        let mirrored = [
            ("open_graph.title", self.open_graph.title, self.title),
            (
                "open_graph.description",
                self.open_graph.description,
                self.description,
            ),
            ("twitter.title", self.twitter.title, self.title),
            (
                "twitter.description",
                self.twitter.description,
                self.description,
            ),
        ];
        for (field, value, expected) in mirrored {
            if value != expected {
                return Err(MetadataError::Mismatch(field));
            }
        }

        Ok(())
    }

    /// Keywords as a single `content` attribute value.
    pub fn keywords_joined(&self) -> String {
        self.keywords.join(", ")
    }
}

fn non_empty(field: &'static str, value: &str) -> Result<(), MetadataError> {
    if value.trim().is_empty() {
        Err(MetadataError::EmptyField(field))
    } else {
        Ok(())
    }
}

/// `<head>` contents: charset, title, SEO tags, social cards and stylesheets.
#[component]
pub fn HeadTags(
    /// Metadata to emit.
    metadata: &'static PageMetadata,
) -> impl IntoView {
    let authors = metadata
        .authors
        .iter()
        .map(|author| view! { <meta name="author" content=author.name /> })
        .collect_view();

    view! {
        <meta charset="utf-8" />
        <meta name="viewport" content=metadata.viewport />
        <title>{metadata.title}</title>
        <meta name="description" content=metadata.description />
        <meta name="keywords" content=metadata.keywords_joined() />
        {authors}
        <meta name="robots" content=metadata.robots />

        <meta {..::leptos::tachys::html::attribute::custom::custom_attribute("property", "og:title")} content=metadata.open_graph.title />
        <meta {..::leptos::tachys::html::attribute::custom::custom_attribute("property", "og:description")} content=metadata.open_graph.description />
        <meta {..::leptos::tachys::html::attribute::custom::custom_attribute("property", "og:type")} content=metadata.open_graph.og_type />
        <meta {..::leptos::tachys::html::attribute::custom::custom_attribute("property", "og:locale")} content=metadata.open_graph.locale />

        <meta name="twitter:card" content=metadata.twitter.card />
        <meta name="twitter:title" content=metadata.twitter.title />
        <meta name="twitter:description" content=metadata.twitter.description />

        <link rel="preconnect" href="https://fonts.googleapis.com" />
        <link rel="stylesheet" href=FONT_STYLESHEET />
        <link rel="stylesheet" href=GLOBAL_STYLESHEET />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_metadata_is_valid() {
        assert_eq!(SITE_METADATA.validate(), Ok(()));
    }

    #[test]
    fn social_blocks_mirror_title() {
        assert_eq!(SITE_METADATA.open_graph.title, SITE_METADATA.title);
        assert_eq!(SITE_METADATA.twitter.description, SITE_METADATA.description);
        assert_eq!(SITE_METADATA.open_graph.og_type, "website");
        assert_eq!(SITE_METADATA.open_graph.locale, "en_US");
        assert_eq!(SITE_METADATA.twitter.card, "summary_large_image");
    }

    #[test]
    fn empty_title_is_rejected() {
        let metadata = PageMetadata {
            title: "  ",
            ..SITE_METADATA
        };
        assert_eq!(
            metadata.validate(),
            Err(MetadataError::EmptyField("title"))
        );
    }

    #[test]
    fn diverging_twitter_title_is_rejected() {
        let metadata = PageMetadata {
            twitter: TwitterCard {
                title: "Something else",
                ..SITE_METADATA.twitter
            },
            ..SITE_METADATA
        };
        assert_eq!(
            metadata.validate(),
            Err(MetadataError::Mismatch("twitter.title"))
        );
    }

    #[test]
    fn keywords_join_with_comma() {
        assert_eq!(
            SITE_METADATA.keywords_joined(),
            "document sharing, AI, security, collaboration"
        );
    }
}
