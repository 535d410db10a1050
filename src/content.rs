use std::sync::LazyLock;

use chrono::{DateTime, Datelike, Utc};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const PORTFOLIO_FILE: &str = "portfolio.json";

pub static GLOBAL_PORTFOLIO: LazyLock<Portfolio> = LazyLock::new(|| {
    Portfolio::load().expect("Should be able to load embedded portfolio content")
});

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    NotFound(String),
    #[error("couldn't parse {file}")]
    Parse {
        file: String,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub contact: ContactInfo,
    pub jobs: Vec<Job>,
    pub projects: Vec<Project>,
    pub resume: Resume,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub bio: Vec<String>,
    pub location: String,
    pub photo: Photo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Recipient of the contact form's mail link.
    pub email: String,
    pub phone: Link,
    pub github: Link,
    pub linkedin: Link,
}

/// An outbound hyperlink. `href` is passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub title: String,
    pub organization: String,
    pub location: String,
    pub period: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub status: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    /// Hosted copy of the full resume.
    pub link: String,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
}

impl Portfolio {
    pub fn load() -> Result<Self, ContentError> {
        let file = Assets::get(PORTFOLIO_FILE)
            .ok_or_else(|| ContentError::NotFound(PORTFOLIO_FILE.to_string()))?;
        Self::from_slice(&file.data)
    }

    pub fn from_slice(data: &[u8]) -> Result<Self, ContentError> {
        serde_json::from_slice(data).map_err(|source| ContentError::Parse {
            file: PORTFOLIO_FILE.to_string(),
            source,
        })
    }

    /// `mailto:` link for the plain contact email.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact.email)
    }

    pub fn copyright(&self) -> String {
        format!(
            "© {} {}. All rights reserved.",
            build_year(),
            self.profile.name
        )
    }
}

/// The embedded site content, parsed on first use.
pub fn portfolio() -> &'static Portfolio {
    &GLOBAL_PORTFOLIO
}

/// Year the site was built, from the stamp written by `build.rs`.
pub fn build_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or_else(|_| Utc::now().year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_loads() {
        let p = Portfolio::load().expect("embedded content should parse");
        assert_eq!(&p, portfolio());
        assert!(!p.profile.name.is_empty());
        assert_eq!(p.profile.bio.len(), 2);
        assert_eq!(p.jobs.len(), 4);
        assert_eq!(p.projects.len(), 3);
        assert!(!p.resume.skills.is_empty());
        assert!(p.contact.email.contains('@'));
    }

    #[test]
    fn test_embedded_content_is_complete() {
        let p = portfolio();
        for job in &p.jobs {
            assert!(!job.title.is_empty());
            assert!(!job.period.is_empty());
            assert!(!job.highlights.is_empty(), "{} has no highlights", job.title);
        }
        for project in &p.projects {
            assert!(project.link.starts_with("https://"), "{}", project.link);
            assert!(!project.tech.is_empty());
        }
        assert!(p.resume.link.starts_with("https://"));
        assert!(p.contact.phone.href.starts_with("tel:"));
        assert!(p.contact.github.href.starts_with("https://"));
        assert!(p.contact.linkedin.href.starts_with("https://"));
    }

    #[test]
    fn test_local_assets_are_served() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        let photo = &portfolio().profile.photo.src;
        assert!(photo.starts_with('/'), "{photo}");
        assert!(public.join(&photo[1..]).is_file(), "{photo} missing from public/");
        assert!(public.join("favicon.svg").is_file());
    }

    #[test]
    fn test_malformed_content() {
        let err = Portfolio::from_slice(b"{\"profile\": {}}").unwrap_err();
        assert!(matches!(err, ContentError::Parse { .. }));
        assert_eq!(err.to_string(), "couldn't parse portfolio.json");
    }

    #[test]
    fn test_copyright_and_mailto() {
        let p = portfolio();
        let year = build_year();
        assert!(year >= 2025);
        assert_eq!(
            p.copyright(),
            format!("© {year} {}. All rights reserved.", p.profile.name)
        );
        assert_eq!(p.mailto(), format!("mailto:{}", p.contact.email));
    }
}
