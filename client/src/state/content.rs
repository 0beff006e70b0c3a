//! Static content model for the landing page.
//!
//! DESIGN
//! ======
//! Every record is plain owned data fixed at build time. Publication order in
//! [`SiteContent::publications`] is display order; nothing sorts or filters it.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use serde::{Deserialize, Serialize};

use crate::util::links::{self, ContentError, LinkTarget};

/// Source string the authoring template uses when no headshot was supplied.
pub const IMAGE_PLACEHOLDER_SRC: &str = "YOUR_IMAGE_DATA_URI_HERE";

/// Badge text shown on indexed publications.
pub const INDEXED_BADGE_LABEL: &str = "Nature Indexed";

/// External profile and document links for the page subject.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLinks {
    pub github: String,
    pub linkedin: String,
    pub resume: String,
}

/// Identity and contact record for the page subject.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub location: String,
    pub email: String,
    pub links: ProfileLinks,
    /// Headshot source (URL or data URI). `None` renders a placeholder.
    #[serde(default)]
    pub image: Option<String>,
}

impl Profile {
    /// `mailto:` link for the profile email, verbatim.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Alt text for the headshot.
    pub fn image_alt(&self) -> String {
        format!("{} headshot", self.name)
    }

    /// Usable headshot source, skipping empty and template placeholder values.
    pub fn image_src(&self) -> Option<&str> {
        self.image
            .as_deref()
            .map(str::trim)
            .filter(|src| !src.is_empty() && *src != IMAGE_PLACEHOLDER_SRC)
    }

    /// Up to two uppercase initials, used when no headshot is available.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// One bibliographic record in the publications grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,
    pub journal: String,
    pub link: String,
    #[serde(rename = "desc")]
    pub description: String,
    #[serde(default)]
    pub indexed: bool,
}

/// Call-to-action card at the bottom of the page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactCopy {
    pub heading: String,
    pub blurb: String,
    pub button_label: String,
}

/// Everything the landing page renders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub profile: Profile,
    pub publications: Vec<Publication>,
    /// In-page anchor or external page listing every publication.
    pub full_publications_url: String,
    pub about: String,
    pub contact: ContactCopy,
}

impl SiteContent {
    /// Check every literal link and required field, stopping at the first problem.
    ///
    /// # Errors
    ///
    /// Returns the first [`ContentError`] found, in page order.
    pub fn validate(&self) -> Result<(), ContentError> {
        match self.issues().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Every content problem, in page order.
    pub fn issues(&self) -> Vec<ContentError> {
        let profile = &self.profile;
        let mut issues = Vec::new();

        if profile.name.trim().is_empty() {
            issues.push(ContentError::EmptyField { field: "profile.name".to_owned() });
        }
        if let Err(e) = links::validate_email("profile.email", &profile.email) {
            issues.push(e);
        }
        if let Err(e) = links::validate_http_url("profile.links.github", &profile.links.github) {
            issues.push(e);
        }
        if let Err(e) = links::validate_http_url("profile.links.linkedin", &profile.links.linkedin) {
            issues.push(e);
        }
        if let Err(e) = links::validate_target(
            "profile.links.resume",
            &profile.links.resume,
            &[LinkTarget::Absolute, LinkTarget::Relative],
        ) {
            issues.push(e);
        }
        if let Err(e) = links::validate_target(
            "full_publications_url",
            &self.full_publications_url,
            &[LinkTarget::Absolute, LinkTarget::Anchor, LinkTarget::Relative],
        ) {
            issues.push(e);
        }

        for (i, publication) in self.publications.iter().enumerate() {
            if publication.title.trim().is_empty() {
                issues.push(ContentError::EmptyField { field: format!("publications[{i}].title") });
            }
            if publication.journal.trim().is_empty() {
                issues.push(ContentError::EmptyField { field: format!("publications[{i}].journal") });
            }
            if let Err(e) = links::validate_http_url(&format!("publications[{i}].link"), &publication.link) {
                issues.push(e);
            }
        }

        issues
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            profile: Profile {
                name: "Anton Putintsev".to_owned(),
                title: "Senior Research Engineer – Hybrid Photonics & Quantum Optics".to_owned(),
                tagline: "Pushing the limits of real-time control of polaritonic states and optical computing."
                    .to_owned(),
                location: "Moscow, Russia".to_owned(),
                email: "putintsev.ad@gmail.com".to_owned(),
                links: ProfileLinks {
                    github: "https://github.com/antonputintsev".to_owned(),
                    linkedin: "https://www.linkedin.com/in/anton-putintsev/".to_owned(),
                    resume: "CV.pdf".to_owned(),
                },
                image: Some(IMAGE_PLACEHOLDER_SRC.to_owned()),
            },
            publications: vec![
                Publication {
                    title: "Room temperature, cascadable, all-optical polariton universal gates".to_owned(),
                    journal: "Nature Communications (2024)".to_owned(),
                    link: "https://www.nature.com/articles/s41467-024-49690-3".to_owned(),
                    description: "Demonstrated universal polariton logic gates operating at room temperature."
                        .to_owned(),
                    indexed: true,
                },
                Publication {
                    title: "Temporal bandwidth of consecutive polariton condensation".to_owned(),
                    journal: "Physical Review B – Letter (2025)".to_owned(),
                    link: "https://doi.org/10.1103/PhysRevB.111.L161403".to_owned(),
                    description: "First demonstration of consecutive condensation dynamics with unprecedented \
                                  temporal resolution."
                        .to_owned(),
                    indexed: true,
                },
                Publication {
                    title: "Controlling the spatial profile and energy landscape of organic polariton \
                            condensates in double-dye cavities"
                        .to_owned(),
                    journal: "Physical Review Letters (2023)".to_owned(),
                    link: "https://doi.org/10.1103/PhysRevLett.131.186902".to_owned(),
                    description: "Introduced a method for spatial and energetic control in polariton condensates."
                        .to_owned(),
                    indexed: true,
                },
            ],
            full_publications_url: "#publications".to_owned(),
            about: "Senior Researcher in hybrid photonics and quantum optics, leading R&D in polaritonic \
                    devices and optical computing. Proven track record in securing funding, mentoring, and \
                    publishing high-impact research (PRL, Nature Comms). Passionate about innovation, \
                    collaboration, and pushing the boundaries of next-generation technologies."
                .to_owned(),
            contact: ContactCopy {
                heading: "Let’s collaborate".to_owned(),
                blurb: "Open to new research opportunities and collaborations in quantum optics and photonics."
                    .to_owned(),
                button_label: "Email me".to_owned(),
            },
        }
    }
}
