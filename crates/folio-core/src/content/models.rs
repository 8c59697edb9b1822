use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::expand_tilde;

/// Everything shown on the page, one field per section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    pub profile: Profile,
    pub about: About,
    pub skills: Skills,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub achievements: Vec<Achievement>,
    pub education: Vec<Education>,
    pub contact: Contact,
}

/// Hero section data
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    /// Logo text; derived from the name when empty
    pub initials: Option<String>,
    /// Static headline shown under the name
    pub headline: String,
    /// Phrases cycled by the typing effect
    pub roles: Vec<String>,
    pub tagline: String,
    pub location: Option<String>,
    /// CV path or URL
    pub cv: Option<String>,
}

impl Profile {
    /// Logo text: explicit initials, else first letters of the first and last name
    pub fn logo(&self) -> String {
        if let Some(initials) = self.initials.as_ref().filter(|s| !s.trim().is_empty()) {
            return initials.clone();
        }
        let words: Vec<&str> = self.name.split_whitespace().collect();
        let first = words.first().and_then(|w| w.chars().next());
        let last = words.iter().skip(1).last().and_then(|w| w.chars().next());
        first
            .into_iter()
            .chain(last)
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// What to hand to the system opener for the CV.
    ///
    /// URLs pass through; relative paths resolve against `base_dir`.
    pub fn cv_target(&self, base_dir: Option<&Path>) -> Option<String> {
        let cv = self.cv.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        // single-letter schemes are Windows drive letters, not URLs
        if Url::parse(cv).is_ok_and(|url| url.scheme().len() > 1) {
            return Some(cv.to_string());
        }
        let path = expand_tilde(Path::new(cv));
        let path = match base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path,
        };
        Some(path.to_string_lossy().into_owned())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct About {
    pub highlights: Vec<FeatureCard>,
    /// Paragraphs of the longer biography
    pub journey: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureCard {
    pub icon: Option<String>,
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub groups: Vec<SkillGroup>,
    /// "Currently learning" banner
    pub learning: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillGroup {
    pub name: String,
    pub items: Vec<String>,
    /// Render items inline as tags instead of a bullet list
    pub inline: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub role: String,
    pub organization: String,
    pub period: String,
    pub location: Option<String>,
    pub summary: String,
    pub responsibilities: Vec<String>,
    pub impact: Vec<String>,
    pub stack: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    /// e.g. "Undergraduate thesis (Jul 2024 – Dec 2024)"
    pub context: String,
    pub description: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Achievement {
    /// Short label such as "ORAL PRESENTER"
    pub badge: Option<String>,
    pub title: String,
    pub issuer: String,
    pub description: String,
    pub highlights: Vec<String>,
    pub takeaway: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub location: Option<String>,
    pub period: String,
    pub grade: Option<String>,
    pub coursework: Vec<String>,
    pub final_project: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub intro: String,
    pub links: Vec<ContactLink>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactLink {
    pub label: String,
    /// Text shown to the reader
    pub value: String,
    /// Target opened with the system opener
    pub href: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Email,
    Web,
    Other,
}

impl ContactLink {
    pub fn kind(&self) -> LinkKind {
        match Url::parse(&self.href) {
            Ok(url) => match url.scheme() {
                "mailto" => LinkKind::Email,
                "http" | "https" => LinkKind::Web,
                _ => LinkKind::Other,
            },
            Err(_) => LinkKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logo_from_name() {
        let profile = Profile {
            name: "ada king lovelace".to_string(),
            ..Default::default()
        };
        assert_eq!(profile.logo(), "AL");

        let single = Profile {
            name: "Prince".to_string(),
            ..Default::default()
        };
        assert_eq!(single.logo(), "P");
    }

    #[test]
    fn test_explicit_initials_win() {
        let profile = Profile {
            name: "Ada Lovelace".to_string(),
            initials: Some("AAL".to_string()),
            ..Default::default()
        };
        assert_eq!(profile.logo(), "AAL");
    }

    #[test]
    fn test_cv_target() {
        let profile = |cv: Option<&str>| Profile {
            cv: cv.map(str::to_string),
            ..Default::default()
        };
        assert_eq!(profile(None).cv_target(None), None);
        assert_eq!(profile(Some("  ")).cv_target(None), None);
        assert_eq!(
            profile(Some("https://example.com/cv.pdf")).cv_target(Some(Path::new("/srv"))),
            Some("https://example.com/cv.pdf".to_string())
        );
        assert_eq!(
            profile(Some("docs/cv.pdf")).cv_target(Some(Path::new("/srv/site"))),
            Some("/srv/site/docs/cv.pdf".to_string())
        );
        assert_eq!(
            profile(Some("/abs/cv.pdf")).cv_target(Some(Path::new("/srv"))),
            Some("/abs/cv.pdf".to_string())
        );
    }

    #[test]
    fn test_link_kind() {
        let link = |href: &str| ContactLink {
            href: href.to_string(),
            ..Default::default()
        };
        assert_eq!(link("mailto:me@example.com").kind(), LinkKind::Email);
        assert_eq!(link("https://example.com/me").kind(), LinkKind::Web);
        assert_eq!(link("not a url").kind(), LinkKind::Other);
    }
}
