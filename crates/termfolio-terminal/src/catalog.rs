//! The command catalog: every verb the terminal understands.

/// A cataloged command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Help,
    About,
    Skills,
    Experience,
    Projects,
    Contact,
    Clear,
    Resume,
}

impl CommandKind {
    /// All commands, in the order `help` lists them.
    pub const ALL: [CommandKind; 8] = [
        CommandKind::Help,
        CommandKind::About,
        CommandKind::Skills,
        CommandKind::Experience,
        CommandKind::Projects,
        CommandKind::Contact,
        CommandKind::Clear,
        CommandKind::Resume,
    ];

    /// The verb the user types.
    pub fn name(self) -> &'static str {
        match self {
            CommandKind::Help => "help",
            CommandKind::About => "about",
            CommandKind::Skills => "skills",
            CommandKind::Experience => "experience",
            CommandKind::Projects => "projects",
            CommandKind::Contact => "contact",
            CommandKind::Clear => "clear",
            CommandKind::Resume => "resume",
        }
    }

    /// One-line description for `help`.
    pub fn description(self) -> &'static str {
        match self {
            CommandKind::Help => "List all available commands",
            CommandKind::About => "Display information about me",
            CommandKind::Skills => "List my technical skills",
            CommandKind::Experience => "Show my work experience",
            CommandKind::Projects => "Display my portfolio projects",
            CommandKind::Contact => "Show my contact information",
            CommandKind::Clear => "Clear the terminal screen",
            CommandKind::Resume => "Download my resume",
        }
    }

    /// Whether `help` and tab completion offer this command. Unlisted
    /// commands still dispatch when typed.
    pub fn is_listed(self) -> bool {
        !matches!(self, CommandKind::Experience)
    }

    /// Listed commands, in `help` order.
    pub fn listed() -> impl Iterator<Item = CommandKind> {
        Self::ALL.into_iter().filter(|c| c.is_listed())
    }

    /// Exact, lowercase lookup.
    pub fn from_verb(verb: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == verb)
    }
}

/// Command names for tab completion.
pub fn vocabulary() -> Vec<&'static str> {
    CommandKind::listed().map(|c| c.name()).collect()
}
