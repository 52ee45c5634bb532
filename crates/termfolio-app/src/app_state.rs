use std::collections::HashMap;

use termfolio_terminal::catalog;
use termfolio_terminal::{EntryKind, Session};
use termfolio_types::config::FolioConfig;
use termfolio_types::error::Result;
use termfolio_types::input::InputEvent;
use termfolio_ui::{InputAction, InputLine, Typewriter};

/// Result of handling a single input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// All mutable application state except the terminal handle.
pub struct AppState {
    pub config: FolioConfig,
    pub session: Session,
    pub input: InputLine,
    /// Typewriters for plain-text responses, keyed by entry id.
    pub typewriters: HashMap<u64, Typewriter>,
    /// Lowest entry id not yet looked at for animation.
    next_unseen: u64,
}

impl AppState {
    pub fn new(config: FolioConfig) -> Result<Self> {
        let session = Session::from_config(&config)?;
        let mut state = Self {
            config,
            session,
            input: InputLine::new(catalog::vocabulary()),
            typewriters: HashMap::new(),
            next_unseen: 0,
        };
        state.sync_typewriters();
        Ok(state)
    }

    pub fn handle(&mut self, event: InputEvent) -> InputResult {
        match self.input.handle(event) {
            InputAction::Submit(line) => {
                self.session.submit(&line);
                self.sync_typewriters();
                InputResult::Continue
            },
            InputAction::Quit => InputResult::Quit,
            InputAction::None => InputResult::Continue,
        }
    }

    /// Advance session timers and running animations by `dt_ms`.
    pub fn tick(&mut self, dt_ms: u32) {
        for tw in self.typewriters.values_mut() {
            tw.tick(dt_ms);
        }
        self.session.tick(dt_ms);
        self.sync_typewriters();
    }

    /// Start typewriters for new text responses and drop the ones whose
    /// entries were cleared.
    fn sync_typewriters(&mut self) {
        let transcript = self.session.transcript();
        match transcript.entries().first() {
            Some(first) => {
                let first_id = first.id;
                self.typewriters.retain(|id, _| *id >= first_id);
            },
            None => self.typewriters.clear(),
        }

        let ms = self.config.timing.type_ms_per_char;
        for entry in transcript.entries() {
            if entry.id < self.next_unseen {
                continue;
            }
            if entry.kind == EntryKind::Response
                && let Some(text) = entry.body.as_text()
            {
                self.typewriters.insert(entry.id, Typewriter::new(text, ms));
            }
        }
        self.next_unseen = transcript.next_id();
        self.typewriters.retain(|_, tw| !tw.is_finished());
    }

    /// Revealed part of a text response, `None` if it is fully shown.
    pub fn typed(&self, id: u64) -> Option<&str> {
        self.typewriters.get(&id).map(Typewriter::visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termfolio_terminal::Block;

    fn state() -> (AppState, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let config = FolioConfig {
            download_dir: dir.path().to_path_buf(),
            ..FolioConfig::default()
        };
        (AppState::new(config).unwrap(), dir)
    }

    fn type_line(state: &mut AppState, line: &str) -> InputResult {
        for ch in line.chars() {
            state.handle(InputEvent::TextInput(ch));
        }
        state.handle(InputEvent::Submit)
    }

    #[test]
    fn welcome_line_types_out() {
        let (mut s, _dir) = state();
        assert_eq!(s.typed(1).map(|t| t.chars().count()), Some(1));
        s.tick(10_000);
        assert_eq!(s.typed(1), None);
    }

    #[test]
    fn egg_reply_is_animated() {
        let (mut s, _dir) = state();
        s.tick(10_000);
        type_line(&mut s, "matrix");
        let id = s.session.transcript().last().unwrap().id;
        assert_eq!(s.typed(id), Some("W"));
        s.tick(10);
        assert_eq!(s.typed(id), Some("Wa"));
    }

    #[test]
    fn blocks_are_not_animated() {
        let (mut s, _dir) = state();
        type_line(&mut s, "help");
        let last = s.session.transcript().last().unwrap();
        assert!(matches!(last.body, Block::Table { .. }));
        assert_eq!(s.typed(last.id), None);
    }

    #[test]
    fn clear_drops_animations() {
        let (mut s, _dir) = state();
        type_line(&mut s, "coffee");
        assert!(!s.typewriters.is_empty());
        type_line(&mut s, "clear");
        assert!(s.typewriters.is_empty());
        assert!(s.session.transcript().is_empty());
    }

    #[test]
    fn submit_records_history() {
        let (mut s, _dir) = state();
        type_line(&mut s, "about");
        type_line(&mut s, "   ");
        assert_eq!(s.input.history(), ["about"]);
    }

    #[test]
    fn quit_event_quits() {
        let (mut s, _dir) = state();
        assert_eq!(s.handle(InputEvent::Quit), InputResult::Quit);
    }
}
