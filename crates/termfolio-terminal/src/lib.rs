//! Command processor and terminal session.
//!
//! Input lines resolve against a closed catalog of commands plus a handful of
//! easter eggs. Each resolved command renders a [`Block`] from the portfolio
//! data and appends it to the append-only [`Transcript`].

pub mod block;
pub mod catalog;
pub mod easter;
pub mod portfolio;
mod processor;
pub mod resume;
mod session;
pub mod transcript;

/// A rendered piece of terminal output.
pub use block::Block;
/// The closed set of commands.
pub use catalog::CommandKind;
/// Static portfolio content.
pub use portfolio::Portfolio;
/// What a command line resolved to.
pub use processor::Dispatch;
/// Runs command lines against the transcript.
pub use processor::{CommandProcessor, RESUME_DELAY_MS};
/// Resolve a command line without running it.
pub use processor::resolve;
/// Where generated resumes go.
pub use resume::{DirDownloads, DownloadSink};
/// Processor plus loading-indicator timing.
pub use session::{LOADING_TEXT, Session};
/// The visible history of the terminal.
pub use transcript::{Entry, EntryKind, Transcript};
