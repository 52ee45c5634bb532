//! Portfolio content: who the terminal is about.
//!
//! The built-in record is compiled in. A TOML file with the same shape can
//! replace it wholesale; the content is never mutated at runtime.

use std::path::Path;

use serde::Deserialize;
use termfolio_types::error::{FolioError, Result};

const BANNER: &str = r#"
  _  __  _                                       _
 | |/ / | |__    ___  _ __ ___    ___  _ __   __| | _ __  __ _
 | ' /  | '_ \  / _ \| '_ ` _ \  / _ \| '_ \ / _` || '__|/ _` |
 | . \  | | | ||  __/| | | | | ||  __/| | | | (_| || |  | (_| |
 |_|\_\ |_| |_| \___||_| |_| |_| \___||_| |_|\__,_||_|   \__,_|
"#;

const ABOUT: &str = "Eager to apply theoretical knowledge in a practical environment, I am a \
Computer Applications graduate. I have developed a Python-based OSINT tool for gathering \
intelligence and automated security configurations using Bash scripting. Additionally, I \
built a framework for basic network security testing that identifies vulnerabilities, with a \
strong emphasis on system hardening. My skills include OSINT techniques and network scanning, \
showcasing proficiency in Linux command line and network protocols.

Location: New Delhi";

/// A named group of skills.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

/// One position held.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

/// A showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Repository location, with or without scheme.
    #[serde(default)]
    pub github: Option<String>,
}

impl Project {
    /// Repository URL with an `https://` scheme if none was given.
    pub fn github_url(&self) -> Option<String> {
        self.github.as_ref().map(|g| {
            if g.starts_with("http") {
                g.clone()
            } else {
                format!("https://{g}")
            }
        })
    }
}

/// Ways to get in touch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Contact {
    pub email: String,
    pub linkedin: String,
    pub github: String,
    /// Handle including the leading `@`.
    pub twitter: String,
}

impl Contact {
    /// `(label, url)` pairs in display order.
    pub fn links(&self) -> Vec<(&'static str, String)> {
        let handle = self.twitter.trim_start_matches('@');
        vec![
            ("Email", format!("mailto:{}", self.email)),
            ("LinkedIn", format!("https://{}", self.linkedin)),
            ("GitHub", format!("https://{}", self.github)),
            ("Twitter", format!("https://twitter.com/{handle}")),
        ]
    }
}

fn default_role() -> String {
    "Cybersecurity Professional".to_string()
}

/// The whole portfolio record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Portfolio {
    pub name: String,
    /// Tagline shown next to the name in `about`.
    pub title: String,
    /// Job title used in the resume heading.
    #[serde(default = "default_role")]
    pub role: String,
    /// Ascii art banner shown at startup.
    #[serde(default)]
    pub ascii: String,
    pub about: String,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    pub contact: Contact,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Portfolio {
    /// The compiled-in portfolio.
    pub fn builtin() -> Self {
        Self {
            name: "Khemendra Singh".to_string(),
            title: "Securing Digital Environments".to_string(),
            role: default_role(),
            ascii: BANNER.to_string(),
            about: ABOUT.to_string(),
            skills: vec![
                SkillGroup {
                    category: "Offensive Security".to_string(),
                    items: strings(&[
                        "Penetration Testing",
                        "Red Team Operations",
                        "Vulnerability assessment",
                        "Social Engineering",
                        "OSINT",
                    ]),
                },
                SkillGroup {
                    category: "Defensive Security".to_string(),
                    items: strings(&["Malware Analysis"]),
                },
                SkillGroup {
                    category: "Tools & Technologies".to_string(),
                    items: strings(&[
                        "Kali Linux",
                        "Metasploit",
                        "Burp Suite",
                        "Wireshark",
                        "Nmap",
                        "Gobuster",
                        "Hydra",
                        "Python",
                        "Bash",
                    ]),
                },
                SkillGroup {
                    category: "Certifications".to_string(),
                    items: strings(&[
                        "Linux Essentials",
                        "Intro to Cybersecurity",
                        "Advanced Networking",
                        "Junior Cybersecurity Analyst",
                        "CompTIA Security+",
                    ]),
                },
            ],
            experience: Vec::new(),
            projects: vec![
                Project {
                    name: "AI-Enhanced Network Scanner (NetScan)".to_string(),
                    description: "Implemented port scanning and host discovery features for a \
                                  network scanner with basic anomaly detection capabilities and \
                                  simple reporting for scan results."
                        .to_string(),
                    tags: strings(&["Python", "Network Programming", "Security Assessment"]),
                    github: Some("github.com/C0dEbReAkEr-glitch/NetScan".to_string()),
                },
                Project {
                    name: "OSINT Framework (OIntel)".to_string(),
                    description: "Developed a Python-based tool to gather intelligence from \
                                  public sources, implemented data collection modules with basic \
                                  reporting functionality."
                        .to_string(),
                    tags: strings(&["Web APIs", "Data Collection", "Python"]),
                    github: Some("github.com/C0dEbReAkEr-glitch/OIntel".to_string()),
                },
                Project {
                    name: "Linux System Hardening Scripts".to_string(),
                    description: "Developed bash scripts to automate security configurations \
                                  for Ubuntu/Debian systems and implemented basic security \
                                  measures for system protection including firewall rules."
                        .to_string(),
                    tags: strings(&["Bash", "Linux Security", "Configuration Management"]),
                    github: Some("github.com/C0dEbReAkEr-glitch/Linux_security_harden".to_string()),
                },
            ],
            contact: Contact {
                email: "mail4khemendra@gmail.com".to_string(),
                linkedin: "linkedin.com/in/khemendra-singh-khangarot".to_string(),
                github: "github.com/C0dEbReAkEr-glitch".to_string(),
                twitter: "@3FOXshield1".to_string(),
            },
        }
    }

    /// Parse a portfolio from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let p: Portfolio = toml::from_str(text)?;
        p.validate()?;
        Ok(p)
    }

    /// Load a portfolio file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            FolioError::Portfolio(format!("cannot read {}: {e}", path.display()))
        })?;
        let p = Self::from_toml_str(&text)?;
        log::info!("Loaded portfolio for {} from {}", p.name, path.display());
        Ok(p)
    }

    /// The file at `path` if given, else the built-in record.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::builtin()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(FolioError::Portfolio("name must not be empty".to_string()));
        }
        if let Some(s) = self.skills.iter().find(|s| s.category.trim().is_empty()) {
            return Err(FolioError::Portfolio(format!(
                "skill group with items {:?} has no category",
                s.items
            )));
        }
        Ok(())
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
name = "Ada Lovelace"
title = "Analytical Engines"
about = "First programmer."

[contact]
email = "ada@example.com"
linkedin = "linkedin.com/in/ada"
github = "github.com/ada"
twitter = "@ada"
"#;

    #[test]
    fn builtin_is_valid() {
        let p = Portfolio::builtin();
        assert!(p.validate().is_ok());
        assert_eq!(p.skills.len(), 4);
        assert_eq!(p.projects.len(), 3);
        assert!(p.experience.is_empty());
        assert!(p.ascii.contains("|_|"));
    }

    #[test]
    fn minimal_toml_fills_defaults() {
        let p = Portfolio::from_toml_str(MINIMAL).unwrap();
        assert_eq!(p.name, "Ada Lovelace");
        assert_eq!(p.role, "Cybersecurity Professional");
        assert!(p.skills.is_empty());
        assert!(p.projects.is_empty());
        assert!(p.ascii.is_empty());
    }

    #[test]
    fn blank_name_rejected() {
        let text = MINIMAL.replace("Ada Lovelace", "  ");
        let err = Portfolio::from_toml_str(&text).unwrap_err();
        assert!(matches!(err, FolioError::Portfolio(_)));
    }

    #[test]
    fn missing_contact_is_parse_error() {
        let err = Portfolio::from_toml_str("name = \"x\"\ntitle = \"t\"\nabout = \"a\"").unwrap_err();
        assert!(matches!(err, FolioError::TomlParse(_)));
    }

    #[test]
    fn projects_and_skills_parse() {
        let text = format!(
            "{MINIMAL}\n[[skills]]\ncategory = \"Math\"\nitems = [\"Calculus\"]\n\n\
             [[projects]]\nname = \"Engine\"\ndescription = \"Notes\"\ngithub = \"https://x.org/e\"\n"
        );
        let p = Portfolio::from_toml_str(&text).unwrap();
        assert_eq!(p.skills[0].items, vec!["Calculus".to_string()]);
        assert_eq!(p.projects[0].github_url().as_deref(), Some("https://x.org/e"));
        assert!(p.projects[0].tags.is_empty());
    }

    #[test]
    fn github_url_adds_scheme() {
        let p = Portfolio::builtin();
        assert_eq!(
            p.projects[0].github_url().as_deref(),
            Some("https://github.com/C0dEbReAkEr-glitch/NetScan")
        );
    }

    #[test]
    fn contact_links() {
        let links = Portfolio::builtin().contact.links();
        assert_eq!(links.len(), 4);
        assert_eq!(links[0].1, "mailto:mail4khemendra@gmail.com");
        assert_eq!(links[3].1, "https://twitter.com/3FOXshield1");
    }

    #[test]
    fn load_or_builtin_without_path() {
        assert_eq!(Portfolio::load_or_builtin(None).unwrap(), Portfolio::builtin());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("me.toml");
        std::fs::write(&path, MINIMAL).unwrap();
        let p = Portfolio::load_or_builtin(Some(&path)).unwrap();
        assert_eq!(p.contact.twitter, "@ada");
    }
}
