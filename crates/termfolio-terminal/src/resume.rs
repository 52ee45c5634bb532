//! Plain-text resume generation and the sink it is saved through.

use std::path::{Path, PathBuf};

use termfolio_types::error::{FolioError, Result};

use crate::portfolio::Portfolio;

/// Build the resume text from portfolio data.
pub fn resume_text(p: &Portfolio) -> String {
    let skills: Vec<String> = p
        .skills
        .iter()
        .map(|g| format!("{}: {}", g.category, g.items.join(", ")))
        .collect();
    let experience: Vec<String> = p
        .experience
        .iter()
        .map(|e| format!("{} at {} ({})\n{}", e.title, e.company, e.period, e.description))
        .collect();
    let projects: Vec<String> = p
        .projects
        .iter()
        .map(|proj| format!("{}: {}", proj.name, proj.description))
        .collect();

    format!(
        "{} - {} Resume\n\nContact: {}\n\nSKILLS\n{}\n\nEXPERIENCE\n{}\n\nPROJECTS\n{}",
        p.name,
        p.role,
        p.contact.email,
        skills.join("\n"),
        experience.join("\n\n"),
        projects.join("\n\n"),
    )
}

/// File name for `name`'s resume: every whitespace character becomes `_`.
pub fn resume_filename(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    format!("{stem}_Resume.txt")
}

/// Destination for generated files.
pub trait DownloadSink {
    /// Store `contents` under `filename` and return where it went.
    fn save(&mut self, filename: &str, contents: &str) -> Result<PathBuf>;
}

/// Writes downloads into a directory, creating it on first use.
#[derive(Debug, Clone)]
pub struct DirDownloads {
    dir: PathBuf,
}

impl DirDownloads {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DirDownloads {
    fn save(&mut self, filename: &str, contents: &str) -> Result<PathBuf> {
        if filename.is_empty() || filename.contains(['/', '\\']) {
            return Err(FolioError::Download(format!("invalid file name: {filename:?}")));
        }
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(filename);
        std::fs::write(&path, contents)?;
        log::info!("Saved {} ({} bytes)", path.display(), contents.len());
        Ok(path)
    }
}
