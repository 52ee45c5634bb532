//! Frame layout and drawing.
//!
//! Layout is computed as plain lines first so it can be tested without a
//! terminal; `draw` only positions and colors them.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::queue;
use termfolio_terminal::block::ProjectCard;
use termfolio_terminal::{Block, Entry, EntryKind, LOADING_TEXT};

use crate::app_state::AppState;

/// One screen row before wrapping.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub text: String,
    pub color: Option<Color>,
}

impl Line {
    fn new(text: impl Into<String>, color: Option<Color>) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

fn card_lines(card: &ProjectCard, out: &mut Vec<String>) {
    let star = if card.featured { "★ " } else { "" };
    out.push(format!("{star}{}", card.name));
    out.extend(card.description.lines().map(|l| format!("  {l}")));
    if !card.tags.is_empty() {
        out.push(format!("  Tags: {}", card.tags.join(", ")));
    }
    if let Some(link) = &card.link {
        out.push(format!("  View Code: {link}"));
    }
}

/// Text rows for a block.
pub fn block_lines(block: &Block) -> Vec<String> {
    let mut out = Vec::new();
    match block {
        Block::Text(s) | Block::Progress(s) => out.extend(s.lines().map(str::to_string)),
        Block::Art(s) => out.extend(s.trim_matches('\n').lines().map(str::to_string)),
        Block::Section { title, lines } => {
            out.push(title.clone());
            out.extend(lines.iter().map(|l| format!("  {l}")));
        },
        Block::Table {
            title,
            rows,
            footer,
        } => {
            out.push(title.clone());
            let width = rows
                .iter()
                .map(|(k, _)| k.chars().count())
                .max()
                .unwrap_or(0);
            for (k, v) in rows {
                out.push(format!("  {k:<width$}  {v}"));
            }
            if let Some(f) = footer {
                out.push(String::new());
                out.push(f.clone());
            }
        },
        Block::Projects { title, cards } => {
            out.push(title.clone());
            for card in cards {
                out.push(String::new());
                card_lines(card, &mut out);
            }
        },
    }
    out
}

fn entry_lines(entry: &Entry, state: &AppState, out: &mut Vec<Line>) {
    let (color, rows) = match entry.kind {
        EntryKind::Command => {
            let text = entry.body.as_text().unwrap_or_default();
            (
                Some(Color::Green),
                vec![format!("{} {text}", state.config.prompt)],
            )
        },
        EntryKind::Response => match state.typed(entry.id) {
            Some(partial) => (None, partial.lines().map(str::to_string).collect()),
            None => (None, block_lines(&entry.body)),
        },
        EntryKind::Error => (Some(Color::Red), block_lines(&entry.body)),
        EntryKind::Ascii => (Some(Color::Cyan), block_lines(&entry.body)),
    };
    out.extend(rows.into_iter().map(|r| Line::new(r, color)));
}

/// Transcript rows plus the loading indicator, top to bottom.
pub fn body_lines(state: &AppState) -> Vec<Line> {
    let mut out = Vec::new();
    for entry in state.session.transcript().entries() {
        entry_lines(entry, state, &mut out);
    }
    if state.session.loading() {
        out.push(Line::new(LOADING_TEXT, Some(Color::Yellow)));
    }
    out
}

/// `[host]-[cwd]`
pub fn title_bar(state: &AppState) -> String {
    format!("[{}]-[{}]", state.config.host, state.config.cwd)
}

/// Prompt row and, when the picker is open, the numbered candidates.
pub fn footer_lines(state: &AppState) -> Vec<Line> {
    let mut out = vec![Line::new(
        format!("{} {}", state.config.prompt, state.input.text()),
        None,
    )];
    if let Some(candidates) = state.input.suggestions() {
        let picks: Vec<String> = candidates
            .iter()
            .take(9)
            .enumerate()
            .map(|(i, c)| format!("[Alt+{}] {c}", i + 1))
            .collect();
        out.push(Line::new(picks.join("  "), Some(Color::DarkGrey)));
    }
    out
}

/// Split `text` into rows of at most `width` characters.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 || text.is_empty() {
        return vec![text.to_string()];
    }
    let chars: Vec<char> = text.chars().collect();
    chars.chunks(width).map(|c| c.iter().collect()).collect()
}

/// The last `rows` wrapped body rows, so the newest output stays in view.
pub fn scrolled(lines: &[Line], width: usize, rows: usize) -> Vec<Line> {
    let mut wrapped: Vec<Line> = lines
        .iter()
        .flat_map(|l| wrap(&l.text, width).into_iter().map(|t| Line::new(t, l.color)))
        .collect();
    let skip = wrapped.len().saturating_sub(rows);
    wrapped.split_off(skip)
}

fn put<W: Write>(out: &mut W, row: u16, line: &Line) -> io::Result<()> {
    queue!(out, MoveTo(0, row))?;
    match line.color {
        Some(c) => queue!(out, SetForegroundColor(c), Print(&line.text), ResetColor),
        None => queue!(out, Print(&line.text)),
    }
}

/// Draw a full frame into a `cols` x `rows` screen.
pub fn draw<W: Write>(out: &mut W, state: &AppState, cols: u16, rows: u16) -> io::Result<()> {
    let width = usize::from(cols);
    queue!(out, Clear(ClearType::All))?;
    let title: String = title_bar(state).chars().take(width).collect();
    put(out, 0, &Line::new(title, Some(Color::Blue)))?;

    let footer = footer_lines(state);
    let body_rows = usize::from(rows)
        .saturating_sub(1)
        .saturating_sub(footer.len());
    let body = scrolled(&body_lines(state), width, body_rows);

    let mut row: u16 = 1;
    for line in body.iter().chain(footer.iter()) {
        let clipped = Line::new(line.text.chars().take(width).collect::<String>(), line.color);
        put(out, row, &clipped)?;
        row = row.saturating_add(1);
    }

    let prompt_row = 1 + body.len() as u16;
    let prompt_width = state.config.prompt.chars().count() + 1;
    let cursor_col = (prompt_width + state.input.cursor_pos()).min(width.saturating_sub(1));
    queue!(out, MoveTo(cursor_col as u16, prompt_row))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use termfolio_terminal::Portfolio;
    use termfolio_types::config::FolioConfig;
    use termfolio_types::input::InputEvent;

    fn state() -> (AppState, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let config = FolioConfig {
            download_dir: dir.path().to_path_buf(),
            timing: termfolio_types::config::TimingConfig {
                type_ms_per_char: 0,
                ..Default::default()
            },
            ..FolioConfig::default()
        };
        (AppState::new(config).unwrap(), dir)
    }

    fn submit(state: &mut AppState, line: &str) {
        for ch in line.chars() {
            state.handle(InputEvent::TextInput(ch));
        }
        state.handle(InputEvent::Submit);
    }

    fn texts(lines: &[Line]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn table_keys_are_padded() {
        let lines = block_lines(&Block::Table {
            title: "T".into(),
            rows: vec![("a".into(), "1".into()), ("long".into(), "2".into())],
            footer: Some("tip".into()),
        });
        assert_eq!(lines, ["T", "  a     1", "  long  2", "", "tip"]);
    }

    #[test]
    fn featured_project_has_star() {
        let lines = block_lines(&Block::projects(&Portfolio::builtin()));
        assert_eq!(lines[0], "Projects");
        assert!(lines[2].starts_with("★ AI-Enhanced"));
        assert_eq!(lines.iter().filter(|l| l.starts_with('★')).count(), 1);
        assert!(lines.iter().any(|l| l.contains("View Code: https://github.com/")));
    }

    #[test]
    fn art_drops_surrounding_newlines() {
        let lines = block_lines(&Block::Art("\n ab\n cd\n".into()));
        assert_eq!(lines, [" ab", " cd"]);
    }

    #[test]
    fn command_echo_has_prompt() {
        let (mut s, _dir) = state();
        submit(&mut s, "Help");
        let body = body_lines(&s);
        assert!(texts(&body).contains(&"└─$ Help"));
        assert_eq!(
            body.iter().find(|l| l.text == "└─$ Help").unwrap().color,
            Some(Color::Green)
        );
    }

    #[test]
    fn unknown_verb_is_red() {
        let (mut s, _dir) = state();
        submit(&mut s, "nope");
        let body = body_lines(&s);
        let err = body.iter().find(|l| l.text == "Command not found: nope").unwrap();
        assert_eq!(err.color, Some(Color::Red));
    }

    #[test]
    fn loading_indicator_while_pending() {
        let (mut s, _dir) = state();
        submit(&mut s, "projects");
        assert_eq!(body_lines(&s).last().unwrap().text, LOADING_TEXT);
        s.tick(600);
        assert!(!texts(&body_lines(&s)).contains(&LOADING_TEXT));
    }

    #[test]
    fn suggestions_listed_under_prompt() {
        let (mut s, _dir) = state();
        s.handle(InputEvent::TextInput('c'));
        s.handle(InputEvent::Complete);
        let footer = footer_lines(&s);
        assert_eq!(footer.len(), 2);
        assert_eq!(footer[0].text, "└─$ c");
        assert!(footer[1].text.contains("[Alt+1] contact"));
        assert!(footer[1].text.contains("[Alt+2] clear"));
    }

    #[test]
    fn title_bar_text() {
        let (s, _dir) = state();
        assert_eq!(title_bar(&s), "[root@WhoAmI]-[/home/portfolio]");
    }

    #[test]
    fn wrap_by_chars() {
        assert_eq!(wrap("abcdef", 4), ["abcd", "ef"]);
        assert_eq!(wrap("☕☕☕", 2), ["☕☕", "☕"]);
        assert_eq!(wrap("", 4), [""]);
    }

    #[test]
    fn scrolled_keeps_newest() {
        let lines: Vec<Line> = (0..10).map(|i| Line::new(i.to_string(), None)).collect();
        let tail = scrolled(&lines, 80, 3);
        assert_eq!(texts(&tail), ["7", "8", "9"]);
    }

    #[test]
    fn draw_writes_into_buffer() {
        let (s, _dir) = state();
        let mut buf = Vec::new();
        draw(&mut buf, &s, 80, 24).unwrap();
        let out = String::from_utf8_lossy(&buf);
        assert!(out.contains("[root@WhoAmI]-[/home/portfolio]"));
        assert!(out.contains("└─$"));
    }
}
