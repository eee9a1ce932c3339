//! Site configuration singleton and the static skills list.

use serde::{Deserialize, Serialize};

/// Site-wide configuration rendered in the hero and contact sections.
///
/// Replaced wholesale when fetched from the server; never mutated by
/// the client. The [`Default`] values seed the view model so the page
/// renders sensibly when the config endpoint is unreachable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub designer_name: String,
    pub designer_title: String,
    pub designer_description: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            designer_name: "Alex Silva".to_string(),
            designer_title: "Graphic Designer & Digital Creative".to_string(),
            designer_description: "Specialist in branding, digital design and impactful visual experiences.".to_string(),
            email: "alex.silva@email.com".to_string(),
            phone: "+55 (11) 99999-9999".to_string(),
            location: "Sao Paulo, SP".to_string(),
        }
    }
}

/// Skills rendered in the hero section. Hard-coded client-side; not
/// part of the remote configuration.
pub const SKILLS: &[&str] = &[
    "Adobe Illustrator",
    "Adobe Photoshop",
    "Adobe InDesign",
    "Figma",
    "Branding",
    "Web Design",
    "Print Design",
    "Typography",
    "UI/UX",
];
