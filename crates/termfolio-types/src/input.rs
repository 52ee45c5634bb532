//! Platform-agnostic input event types.
//!
//! The front end maps its native key events to these enums. The command line
//! widget never sees raw terminal input.

/// A platform-agnostic input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Character typed.
    TextInput(char),
    /// Backspace / delete-left.
    Backspace,
    /// Delete the character under the cursor.
    Delete,
    /// Cursor movement inside the buffer.
    Cursor(CursorMove),
    /// Wipe the whole buffer.
    ClearLine,
    /// Step into older history.
    HistoryOlder,
    /// Step back toward the present.
    HistoryNewer,
    /// Tab completion trigger.
    Complete,
    /// Pick one of the visible completion candidates (0-based).
    PickSuggestion(usize),
    /// Enter.
    Submit,
    /// User requested quit (Ctrl+C, Ctrl+D, Esc on an empty line).
    Quit,
}

/// Cursor movement inside the input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorMove {
    Left,
    Right,
    Home,
    End,
}
