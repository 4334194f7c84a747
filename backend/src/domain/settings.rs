//! Typed site settings.
//!
//! The settings table is a key/value bag; this struct gives it named fields
//! with defaults declared in one place. Unknown keys are ignored and missing
//! or unparsable keys fall back to their defaults, so a partially populated
//! table never fails a page render.

use serde::{Deserialize, Serialize};

/// Default number of teasers on the listing pages.
pub const DEFAULT_ITEMS_PER_PAGE: u32 = 10;

/// Site-wide presentation settings loaded once per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    /// Site title shown in the header and page titles.
    pub site_title: String,
    /// Strapline under the title.
    pub site_motto: String,
    /// Contact address shown on the contact page.
    pub admin_email: String,
    /// Teasers per listing page.
    pub items_per_page: u32,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_title: "Dalthaus Photography".to_owned(),
            site_motto: "Photography & Visual Stories".to_owned(),
            admin_email: "admin@example.com".to_owned(),
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl SiteSettings {
    /// Build settings from raw key/value pairs, applying defaults for any
    /// key that is absent or fails to parse.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut settings = Self::default();
        for (key, value) in pairs {
            let value = value.into();
            match key.as_ref() {
                "site_title" => settings.site_title = value,
                "site_motto" => settings.site_motto = value,
                "admin_email" => settings.admin_email = value,
                "items_per_page" => {
                    if let Ok(parsed) = value.parse::<u32>() {
                        if parsed > 0 {
                            settings.items_per_page = parsed;
                        }
                    }
                }
                _ => {}
            }
        }
        settings
    }
}
