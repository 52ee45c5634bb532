//! Content blocks: the payload of every transcript entry.
//!
//! Blocks are plain data built from the portfolio at call time. The front end
//! decides how to draw them.

use crate::catalog::CommandKind;
use crate::portfolio::Portfolio;

/// Footer line under the `help` table.
pub const HELP_TIP: &str = "Tip: Try using tab completion and arrow keys for history. \
                            There might also be some easter eggs hidden in the terminal...";

/// A project as shown by `projects`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    /// Fully-qualified repository URL.
    pub link: Option<String>,
    /// Only the first project is featured.
    pub featured: bool,
}

/// A rendered piece of terminal output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Plain text. The only block that gets the typewriter treatment.
    Text(String),
    /// Preformatted ascii art.
    Art(String),
    /// A heading followed by lines of text.
    Section { title: String, lines: Vec<String> },
    /// A heading followed by key/value rows.
    Table {
        title: String,
        rows: Vec<(String, String)>,
        footer: Option<String>,
    },
    /// A heading followed by project cards.
    Projects {
        title: String,
        cards: Vec<ProjectCard>,
    },
    /// Transient "working on it" note.
    Progress(String),
}

impl Block {
    pub fn text(s: impl Into<String>) -> Self {
        Block::Text(s.into())
    }

    /// The plain text of a `Text` block.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Block::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Startup banner.
    pub fn banner(p: &Portfolio) -> Self {
        Block::Art(p.ascii.clone())
    }

    /// Startup greeting.
    pub fn welcome(p: &Portfolio) -> Self {
        Block::Text(format!(
            "Welcome to {}'s portfolio terminal. Type 'help' to see available commands.",
            p.name
        ))
    }

    pub fn help() -> Self {
        let rows = CommandKind::listed()
            .map(|c| (c.name().to_string(), c.description().to_string()))
            .collect();
        Block::Table {
            title: "Available commands".to_string(),
            rows,
            footer: Some(HELP_TIP.to_string()),
        }
    }

    pub fn about(p: &Portfolio) -> Self {
        Block::Section {
            title: format!("{} - {}", p.name, p.title),
            lines: p.about.lines().map(str::to_string).collect(),
        }
    }

    pub fn skills(p: &Portfolio) -> Self {
        Block::Table {
            title: "Technical Skills".to_string(),
            rows: p
                .skills
                .iter()
                .map(|g| (g.category.clone(), g.items.join(", ")))
                .collect(),
            footer: None,
        }
    }

    /// Work history, or a note that there is none.
    pub fn experience(p: &Portfolio) -> Self {
        let mut lines = Vec::new();
        if p.experience.is_empty() {
            lines.push("No work experience listed yet.".to_string());
        }
        for (i, e) in p.experience.iter().enumerate() {
            if i > 0 {
                lines.push(String::new());
            }
            lines.push(format!("{} at {} ({})", e.title, e.company, e.period));
            lines.extend(e.description.lines().map(str::to_string));
        }
        Block::Section {
            title: "Work Experience".to_string(),
            lines,
        }
    }

    pub fn projects(p: &Portfolio) -> Self {
        let cards = p
            .projects
            .iter()
            .enumerate()
            .map(|(i, proj)| ProjectCard {
                name: proj.name.clone(),
                description: proj.description.clone(),
                tags: proj.tags.clone(),
                link: proj.github_url(),
                featured: i == 0,
            })
            .collect();
        Block::Projects {
            title: "Projects".to_string(),
            cards,
        }
    }

    pub fn contact(p: &Portfolio) -> Self {
        Block::Table {
            title: "Contact Information".to_string(),
            rows: p
                .contact
                .links()
                .into_iter()
                .map(|(label, url)| (label.to_string(), url))
                .collect(),
            footer: None,
        }
    }

    /// Error body for an unknown verb.
    pub fn not_found(verb: &str) -> Self {
        Block::Text(format!(
            "Command not found: {verb}\nType 'help' to see available commands."
        ))
    }
}
