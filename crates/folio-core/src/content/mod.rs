mod models;

use std::path::Path;

use tracing::{debug, info};
use url::Url;

pub use models::{
    About, Achievement, Contact, ContactLink, Education, Experience, FeatureCard, LinkKind,
    Portfolio, Profile, Project, SkillGroup, Skills,
};

use crate::{Error, Result};

/// Sample content bundled into the binary
pub const SAMPLE_CONTENT: &str = include_str!("../../assets/portfolio.toml");

impl Portfolio {
    /// Parse content from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ContentParse(e.to_string()))
    }

    /// The bundled sample portfolio
    pub fn sample() -> Result<Self> {
        Self::from_toml(SAMPLE_CONTENT)
    }

    /// Load content from `path`, or the bundled sample when no path is configured
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                info!("Loading portfolio content from {}", path.display());
                let content = std::fs::read_to_string(path)?;
                Self::from_toml(&content)
            }
            None => {
                debug!("No content file configured, using bundled sample");
                Self::sample()
            }
        }
    }

    /// Reject content the page cannot present: a missing name or a contact
    /// link whose target is not a URL.
    pub fn validate(&self) -> Result<()> {
        if self.profile.name.trim().is_empty() {
            return Err(Error::ContentParse("profile.name is required".to_string()));
        }
        for link in &self.contact.links {
            Url::parse(&link.href)?;
        }
        Ok(())
    }
}
