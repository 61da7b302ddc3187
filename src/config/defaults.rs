//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

// ============================================================================
// [site] Section Defaults
// ============================================================================

pub mod site {
    pub fn url() -> Option<String> {
        None
    }

    pub fn author() -> String {
        "<YOUR_NAME>".into()
    }

    pub fn email() -> String {
        "user@noreply.plumage".into()
    }

    pub fn language() -> String {
        "en".into()
    }
}

// ============================================================================
// [theme] Section Defaults
// ============================================================================

pub mod theme {
    use super::super::{FooterLink, SocialLink};

    pub fn avatar() -> String {
        "images/avatar.jpg".into()
    }

    pub fn styles() -> Vec<String> {
        vec!["css/styles.css".into()]
    }

    pub fn icon_script() -> String {
        "https://kit.fontawesome.com/icons.js".into()
    }

    pub fn social() -> Vec<SocialLink> {
        vec![
            SocialLink {
                label: "GitHub".into(),
                url: "https://github.com/alice".into(),
                icon: "fab fa-github fa-2x".into(),
            },
            SocialLink {
                label: "Twitter".into(),
                url: "https://twitter.com/alice".into(),
                icon: "fab fa-twitter fa-2x".into(),
            },
        ]
    }

    pub fn attribution() -> FooterLink {
        FooterLink {
            label: "Plumage".into(),
            url: "https://github.com/plumage-rs/plumage".into(),
        }
    }
}

// ============================================================================
// [feed] Section Defaults
// ============================================================================

pub mod feed {
    use crate::content::SectionId;

    pub mod rss {
        pub fn path() -> String {
            "feed.xml".into()
        }
    }

    pub mod sitemap {
        pub fn path() -> String {
            "sitemap.xml".into()
        }
    }

    pub fn sections() -> Vec<SectionId> {
        vec![SectionId::Posts]
    }
}
