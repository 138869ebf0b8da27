// SPDX-License-Identifier: MPL-2.0
//! Static portfolio content.
//!
//! The profile is the single data source for everything the page renders:
//! identity, contact details, projects, timeline entries, skills, and
//! interests. A default profile ships embedded in the binary; `--profile`
//! points the viewer at an alternative TOML file.
//!
//! Content is fixed for the lifetime of the session. In particular the
//! project list length seeds the carousel and never changes afterwards.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

const EMBEDDED_PROFILE: &str = include_str!("../assets/profile.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub name: String,
    pub greeting: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub github: String,
    pub linkedin: String,
    pub resume_url: String,
    pub objective_quote: String,
    pub objective_detail: String,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub education: Vec<TimelineEntry>,
    #[serde(default)]
    pub experience: Vec<TimelineEntry>,
    #[serde(default)]
    pub internships: Vec<TimelineEntry>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub interests: Vec<Interest>,
}

/// A single project entry shown by the carousel.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub link: String,
}

/// One education, work, or internship card.
#[derive(Debug, Clone, Deserialize)]
pub struct TimelineEntry {
    pub title: String,
    pub organization: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Interest {
    pub title: String,
    pub description: String,
    /// Decorative glyph rendered above the title.
    pub emblem: String,
}

impl Profile {
    /// Parses the profile embedded at compile time.
    ///
    /// The embedded TOML is part of the crate, so a parse failure here is a
    /// packaging defect rather than a runtime condition.
    pub fn embedded() -> Self {
        toml::from_str(EMBEDDED_PROFILE).expect("embedded profile must be valid TOML")
    }

    fn validate(self) -> Result<Self> {
        if self.name.trim().is_empty() {
            return Err(Error::Profile("name must not be empty".into()));
        }
        if self.projects.is_empty() {
            return Err(Error::Profile("at least one project is required".into()));
        }
        Ok(self)
    }
}

/// Loads the profile from `path`, falling back to the embedded one when no
/// override was given.
pub fn load(path: Option<&Path>) -> Result<Profile> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            let profile: Profile = toml::from_str(&content)
                .map_err(|err| Error::Profile(err.to_string()))?;
            profile.validate()
        }
        None => Ok(Profile::embedded()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn embedded_profile_parses_and_has_projects() {
        let profile = Profile::embedded();
        assert!(!profile.name.is_empty());
        assert!(!profile.projects.is_empty());
        assert!(!profile.education.is_empty());
        assert!(!profile.skills.is_empty());
    }

    #[test]
    fn load_without_override_uses_embedded_profile() {
        let profile = load(None).expect("embedded profile should load");
        assert_eq!(profile.name, Profile::embedded().name);
    }

    #[test]
    fn load_from_file_overrides_embedded_profile() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("profile.toml");
        let mut file = fs::File::create(&path).expect("failed to create profile file");
        file.write_all(
            br#"
name = "Jane Doe"
greeting = "Hi, I'm Jane"
title = "Systems Engineer"
email = "jane@example.com"
phone = "555-0100"
location = "Somewhere"
github = "https://github.com/jane"
linkedin = "https://linkedin.com/in/jane"
resume_url = "https://example.com/resume.pdf"
objective_quote = "Build small, build well"
objective_detail = "Detail."

[[projects]]
title = "One"
description = "A project."
link = "https://example.com/one"
"#,
        )
        .expect("failed to write profile file");

        let profile = load(Some(&path)).expect("override profile should load");
        assert_eq!(profile.name, "Jane Doe");
        assert_eq!(profile.projects.len(), 1);
    }

    #[test]
    fn load_rejects_profile_without_projects() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("profile.toml");
        fs::write(
            &path,
            r#"
name = "Jane Doe"
greeting = "Hi"
title = "Engineer"
email = "jane@example.com"
phone = "555-0100"
location = "Somewhere"
github = "g"
linkedin = "l"
resume_url = "r"
objective_quote = "q"
objective_detail = "d"
"#,
        )
        .expect("failed to write profile file");

        let err = load(Some(&path)).expect_err("empty project list should be rejected");
        assert!(matches!(err, Error::Profile(_)));
    }

    #[test]
    fn load_reports_missing_file_as_io_error() {
        let err = load(Some(Path::new("/nonexistent/profile.toml")))
            .expect_err("missing file should fail");
        assert!(matches!(err, Error::Io(_)));
    }
}
