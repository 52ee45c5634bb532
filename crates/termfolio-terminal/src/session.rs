//! The terminal window logic around the processor.
//!
//! Some commands are made to look expensive: the session holds them back
//! behind a "Processing command..." indicator for `loading_delay_ms` before
//! the processor sees them, echo included.

use termfolio_types::config::FolioConfig;
use termfolio_types::error::Result;
use termfolio_ui::TimerQueue;

use crate::portfolio::Portfolio;
use crate::processor::{CommandProcessor, Dispatch};
use crate::resume::DirDownloads;
use crate::transcript::Transcript;

/// Text of the loading indicator.
pub const LOADING_TEXT: &str = "Processing command...";

pub struct Session {
    processor: CommandProcessor,
    queued: TimerQueue<String>,
    config: FolioConfig,
}

impl Session {
    pub fn new(processor: CommandProcessor, config: &FolioConfig) -> Self {
        Self {
            processor,
            queued: TimerQueue::new(),
            config: config.clone(),
        }
    }

    /// Build the whole stack from configuration: portfolio file (or the
    /// built-in one), download directory and timings.
    pub fn from_config(config: &FolioConfig) -> Result<Self> {
        let portfolio = Portfolio::load_or_builtin(config.portfolio.as_deref())?;
        let downloads = DirDownloads::new(config.download_dir.clone());
        log::info!(
            "Session for {} (downloads in {})",
            portfolio.name,
            downloads.dir().display()
        );
        let processor = CommandProcessor::new(portfolio, Box::new(downloads))
            .with_resume_delay(config.timing.resume_delay_ms);
        Ok(Self::new(processor, config))
    }

    fn is_loading(&self, raw: &str) -> bool {
        match crate::processor::resolve(raw) {
            Dispatch::Command(kind) => self.config.is_loading_command(kind.name()),
            _ => false,
        }
    }

    /// Hand a submitted line on. Returns `true` if it was held back behind the
    /// loading indicator.
    pub fn submit(&mut self, raw: &str) -> bool {
        if self.is_loading(raw) {
            let delay = self.config.timing.loading_delay_ms;
            log::debug!("holding {raw:?} for {delay}ms");
            self.queued.schedule(delay, raw.to_string());
            true
        } else {
            self.processor.process(raw);
            false
        }
    }

    /// Advance every pending delay by `dt_ms`.
    pub fn tick(&mut self, dt_ms: u32) {
        self.processor.tick(dt_ms);
        for raw in self.queued.tick(dt_ms) {
            self.processor.process(&raw);
        }
    }

    /// True while any held-back command is still waiting.
    pub fn loading(&self) -> bool {
        !self.queued.is_empty()
    }

    pub fn transcript(&self) -> &Transcript {
        self.processor.transcript()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Block;
    use crate::transcript::EntryKind;

    fn session(dir: &std::path::Path) -> Session {
        let config = FolioConfig {
            download_dir: dir.to_path_buf(),
            ..FolioConfig::default()
        };
        Session::from_config(&config).unwrap()
    }

    #[test]
    fn light_command_runs_now() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session(dir.path());
        assert!(!s.submit("about"));
        assert!(!s.loading());
        assert_eq!(s.transcript().len(), 4);
    }

    #[test]
    fn heavy_command_waits() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session(dir.path());
        assert!(s.submit("Projects"));
        assert!(s.loading());
        assert_eq!(s.transcript().len(), 2);

        s.tick(599);
        assert_eq!(s.transcript().len(), 2);
        s.tick(1);
        assert!(!s.loading());
        let last = s.transcript().last().unwrap();
        assert_eq!(last.kind, EntryKind::Response);
        assert!(matches!(last.body, Block::Projects { .. }));
    }

    #[test]
    fn overlapping_heavy_commands_keep_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session(dir.path());
        s.submit("skills");
        s.tick(300);
        s.submit("experience");
        s.tick(300);
        assert!(s.loading());
        s.tick(300);
        assert!(!s.loading());
        let echoes: Vec<&str> = s
            .transcript()
            .entries()
            .iter()
            .filter(|e| e.kind == EntryKind::Command)
            .filter_map(|e| e.body.as_text())
            .collect();
        assert_eq!(echoes, ["skills", "experience"]);
    }

    #[test]
    fn egg_mentioning_heavy_verb_is_immediate() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session(dir.path());
        assert!(!s.submit("hack skills"));
    }

    #[test]
    fn resume_lands_in_download_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = session(dir.path());
        s.submit("resume");
        s.tick(1500);
        let path = dir.path().join("Khemendra_Singh_Resume.txt");
        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.starts_with("Khemendra Singh - Cybersecurity Professional Resume"));
    }

    #[test]
    fn custom_loading_set() {
        let dir = tempfile::tempdir().unwrap();
        let config = FolioConfig {
            download_dir: dir.path().to_path_buf(),
            loading_commands: vec!["ABOUT".into()],
            ..FolioConfig::default()
        };
        let mut s = Session::from_config(&config).unwrap();
        assert!(s.submit("about"));
        assert!(!s.submit("projects"));
    }

    #[test]
    fn missing_portfolio_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = FolioConfig {
            portfolio: Some(dir.path().join("nope.toml")),
            ..FolioConfig::default()
        };
        assert!(Session::from_config(&config).is_err());
    }
}
