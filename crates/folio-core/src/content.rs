//! Portfolio content model.
//!
//! Mirrors the page's data source (camelCase JSON). The carousel never looks
//! at this; it only sees the cards rendered from `projects`.

use crate::error::ContentError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub name: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Network name -> profile URL.
    #[serde(default)]
    pub social: BTreeMap<String, String>,
    #[serde(default)]
    pub skill_progress: Vec<SkillProgress>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillProgress {
    pub name: String,
    pub percentage: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub duration: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    #[serde(default)]
    pub logo: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub description: String,
    pub image: String,
    pub role: String,
    pub number: String,
    #[serde(default)]
    pub stack: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub coming_soon: bool,
}

impl Project {
    /// A project links out only when it has a link and isn't marked upcoming.
    pub fn live_link(&self) -> Option<&str> {
        if self.coming_soon {
            return None;
        }
        self.link.as_deref().filter(|l| !l.is_empty())
    }
}

impl Portfolio {
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let portfolio: Portfolio = serde_json::from_str(json)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.name.trim().is_empty() {
            return Err(ContentError::Empty("name"));
        }
        if let Some(skill) = self.skill_progress.iter().find(|s| s.percentage > 100) {
            return Err(ContentError::Percentage {
                name: skill.name.clone(),
                percentage: skill.percentage,
            });
        }
        if self.projects.iter().any(|p| p.name.trim().is_empty()) {
            return Err(ContentError::Empty("projects[].name"));
        }
        Ok(())
    }

    /// Lead role for the hero line, if any.
    pub fn primary_role(&self) -> Option<&str> {
        self.roles.first().map(String::as_str)
    }
}
