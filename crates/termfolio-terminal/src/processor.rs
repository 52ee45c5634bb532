//! Command resolution and dispatch.
//!
//! A command line is trimmed and lowercased, checked against the easter eggs,
//! then looked up in the catalog. Every line is echoed into the transcript
//! before its response. The only delayed effect is the resume download,
//! which fires from [`CommandProcessor::tick`].

use termfolio_ui::TimerQueue;

use crate::block::Block;
use crate::catalog::CommandKind;
use crate::easter;
use crate::portfolio::Portfolio;
use crate::resume::{self, DownloadSink};
use crate::transcript::{EntryKind, Transcript};

/// Default wait before the resume is handed to the sink.
pub const RESUME_DELAY_MS: u32 = 1500;

/// What a command line resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Blank line.
    Empty,
    /// An easter egg with its reply.
    Egg(&'static str),
    /// A cataloged command.
    Command(CommandKind),
    /// Lowercased verb that matched nothing.
    Unknown(String),
}

/// Resolve `raw` without touching any state.
pub fn resolve(raw: &str) -> Dispatch {
    let normalized = raw.trim().to_lowercase();
    if let Some(reply) = easter::find(&normalized) {
        return Dispatch::Egg(reply);
    }
    let Some(verb) = normalized.split_whitespace().next() else {
        return Dispatch::Empty;
    };
    match CommandKind::from_verb(verb) {
        Some(kind) => Dispatch::Command(kind),
        None => Dispatch::Unknown(verb.to_string()),
    }
}

enum Deferred {
    Resume,
}

/// Runs command lines against the portfolio and records the results.
pub struct CommandProcessor {
    portfolio: Portfolio,
    transcript: Transcript,
    deferred: TimerQueue<Deferred>,
    downloads: Box<dyn DownloadSink>,
    resume_delay_ms: u32,
}

impl CommandProcessor {
    /// Create a processor whose transcript starts with the banner and the
    /// welcome line.
    pub fn new(portfolio: Portfolio, downloads: Box<dyn DownloadSink>) -> Self {
        let mut transcript = Transcript::new();
        if !portfolio.ascii.trim().is_empty() {
            transcript.push(EntryKind::Ascii, Block::banner(&portfolio));
        }
        transcript.push(EntryKind::Response, Block::welcome(&portfolio));
        Self {
            portfolio,
            transcript,
            deferred: TimerQueue::new(),
            downloads,
            resume_delay_ms: RESUME_DELAY_MS,
        }
    }

    pub fn with_resume_delay(mut self, ms: u32) -> Self {
        self.resume_delay_ms = ms;
        self
    }

    /// Echo `raw` and append its response.
    pub fn process(&mut self, raw: &str) -> Dispatch {
        self.transcript
            .push(EntryKind::Command, Block::text(raw.to_string()));
        let dispatch = resolve(raw);
        log::debug!("{raw:?} -> {dispatch:?}");

        match &dispatch {
            Dispatch::Empty => {},
            Dispatch::Egg(reply) => {
                self.transcript.push(EntryKind::Response, Block::text(*reply));
            },
            Dispatch::Command(kind) => self.run(*kind),
            Dispatch::Unknown(verb) => {
                self.transcript
                    .push(EntryKind::Error, Block::not_found(verb));
            },
        }
        dispatch
    }

    fn run(&mut self, kind: CommandKind) {
        let p = &self.portfolio;
        let block = match kind {
            CommandKind::Help => Block::help(),
            CommandKind::About => Block::about(p),
            CommandKind::Skills => Block::skills(p),
            CommandKind::Experience => Block::experience(p),
            CommandKind::Projects => Block::projects(p),
            CommandKind::Contact => Block::contact(p),
            CommandKind::Clear => {
                self.transcript.clear();
                return;
            },
            CommandKind::Resume => {
                self.deferred.schedule(self.resume_delay_ms, Deferred::Resume);
                Block::Progress("Preparing resume download...".to_string())
            },
        };
        self.transcript.push(EntryKind::Response, block);
    }

    /// Advance delayed actions by `dt_ms`. Returns how many fired.
    pub fn tick(&mut self, dt_ms: u32) -> usize {
        let due = self.deferred.tick(dt_ms);
        let fired = due.len();
        for action in due {
            match action {
                Deferred::Resume => self.deliver_resume(),
            }
        }
        fired
    }

    fn deliver_resume(&mut self) {
        let filename = resume::resume_filename(&self.portfolio.name);
        let text = resume::resume_text(&self.portfolio);
        match self.downloads.save(&filename, &text) {
            Ok(path) => {
                log::info!("Resume written to {}", path.display());
                self.transcript.push(
                    EntryKind::Response,
                    Block::text(format!("Resume download initiated: {filename}")),
                );
            },
            Err(e) => {
                log::warn!("Resume download failed: {e}");
                self.transcript.push(
                    EntryKind::Error,
                    Block::text(format!("Resume download failed: {e}")),
                );
            },
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }
}
