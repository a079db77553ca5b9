//! Command parsing for the terminal
//!
//! Input is trimmed and lower-cased, then matched in a fixed order. The
//! first rule that matches decides the command.

use crate::catalog::EntityKind;

/// Text printed by `help`, `--help` and `-h`
pub const HELP_TEXT: &str = concat!(
    "Commands:\n",
    "\n",
    "  help                (show this message)\n",
    "  about               (who am I)\n",
    "  skills              (my tech stack)\n",
    "  \n",
    "  projects            (list projects)\n",
    "  open project [id]   (view project)\n",
    "  \n",
    "  posts               (list posts)\n",
    "  open post [id]      (read post)\n",
    "  \n",
    "  github              (open GitHub)\n",
    "  linkedin            (open LinkedIn)\n",
    "  download cv         (get my resume)\n",
    "  contact             (how to reach me)\n",
    "  clear               (clear screen)",
);

/// Text printed by `about`
pub const ABOUT_TEXT: &str = concat!(
    "Lev Kany — Backend Engineer\n",
    "\n",
    "6+ years of experience building production\n",
    "systems at scale. A strong problem solver\n",
    "with deep expertise in Python.",
);

/// Text printed by `skills`
pub const SKILLS_TEXT: &str = concat!(
    "Technical Skills:\n",
    "\n",
    "  • Python (Django, FastAPI, Flask)\n",
    "  • PostgreSQL, MongoDB\n",
    "  • REST API Design\n",
    "  • Docker & Containerization\n",
    "  • Git & CI/CD\n",
    "  • Linux Administration",
);

/// Text printed by `contact`
pub const CONTACT_TEXT: &str = concat!(
    "Contact:\n",
    "\n",
    "  GitHub:   github.com/levkany\n",
    "  LinkedIn: linkedin.com/in/levkany\n",
    "  \n",
    "Type \"github\" or \"linkedin\" to open directly.",
);

/// Zero-argument commands looked up by exact name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaticCommand {
    /// List the commands
    Help,
    /// Short bio
    About,
    /// Tech stack
    Skills,
    /// Where to reach me
    Contact,
    /// Open the GitHub profile
    Github,
    /// Open the LinkedIn profile
    Linkedin,
    /// Download the CV
    DownloadCv,
}

impl StaticCommand {
    /// Every static command, in help order
    pub const ALL: [StaticCommand; 7] = [
        StaticCommand::Help,
        StaticCommand::About,
        StaticCommand::Skills,
        StaticCommand::Contact,
        StaticCommand::Github,
        StaticCommand::Linkedin,
        StaticCommand::DownloadCv,
    ];

    /// The lowercase name the command is typed as
    pub fn name(&self) -> &'static str {
        match self {
            StaticCommand::Help => "help",
            StaticCommand::About => "about",
            StaticCommand::Skills => "skills",
            StaticCommand::Contact => "contact",
            StaticCommand::Github => "github",
            StaticCommand::Linkedin => "linkedin",
            StaticCommand::DownloadCv => "download cv",
        }
    }

    /// Exact-name lookup in the table
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.name() == name)
    }
}

/// Command types
#[derive(Debug, Clone, PartialEq)]
pub enum CommandType {
    /// Entry of the static command table
    Static(StaticCommand),
    /// Erase the terminal log
    Clear,
    /// List every entity of a kind
    List(EntityKind),
    /// Open one entity by id
    Open { kind: EntityKind, id: String },
    /// Anything that matched no rule; carries the trimmed original text
    Unknown { input: String },
}

/// Parsed command
#[derive(Debug, Clone)]
pub struct Command {
    /// The type of command
    pub command_type: CommandType,
}

impl Command {
    /// Parse a command from user input
    ///
    /// Never fails: unrecognized text becomes `CommandType::Unknown`.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let cmd = input.to_lowercase();

        let command_type = if let Some(command) = StaticCommand::from_name(&cmd) {
            CommandType::Static(command)
        } else if cmd == "clear" {
            CommandType::Clear
        } else if cmd == "projects" {
            CommandType::List(EntityKind::Project)
        } else if cmd == "posts" {
            CommandType::List(EntityKind::Post)
        } else if let Some(rest) = cmd.strip_prefix("open project ") {
            CommandType::Open {
                kind: EntityKind::Project,
                id: rest.trim().to_string(),
            }
        } else if let Some(rest) = cmd.strip_prefix("open post ") {
            CommandType::Open {
                kind: EntityKind::Post,
                id: rest.trim().to_string(),
            }
        } else if cmd == "--help" || cmd == "-h" {
            CommandType::Static(StaticCommand::Help)
        } else {
            CommandType::Unknown {
                input: input.to_string(),
            }
        };

        Command { command_type }
    }
}

/// Words offered by tab completion, in help order
pub fn completion_words() -> Vec<&'static str> {
    let mut words: Vec<&'static str> = StaticCommand::ALL.iter().map(|c| c.name()).collect();
    words.extend(["projects", "open project ", "posts", "open post ", "clear"]);
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static_commands() {
        for command in StaticCommand::ALL {
            let cmd = Command::parse(command.name());
            assert_eq!(cmd.command_type, CommandType::Static(command));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let cmd = Command::parse("  Download CV ");
        assert_eq!(
            cmd.command_type,
            CommandType::Static(StaticCommand::DownloadCv)
        );

        let cmd = Command::parse("PROJECTS");
        assert_eq!(cmd.command_type, CommandType::List(EntityKind::Project));
    }

    #[test]
    fn test_parse_clear_command() {
        let cmd = Command::parse("clear");
        assert_eq!(cmd.command_type, CommandType::Clear);
    }

    #[test]
    fn test_parse_help_flags() {
        assert_eq!(
            Command::parse("--help").command_type,
            CommandType::Static(StaticCommand::Help)
        );
        assert_eq!(
            Command::parse("-H").command_type,
            CommandType::Static(StaticCommand::Help)
        );
    }

    #[test]
    fn test_parse_open_commands() {
        let cmd = Command::parse("open project   2 ");
        assert_eq!(
            cmd.command_type,
            CommandType::Open {
                kind: EntityKind::Project,
                id: "2".to_string()
            }
        );

        let cmd = Command::parse("Open Post 1");
        assert_eq!(
            cmd.command_type,
            CommandType::Open {
                kind: EntityKind::Post,
                id: "1".to_string()
            }
        );
    }

    #[test]
    fn test_parse_open_without_id() {
        // Trimming removes the space the prefix needs.
        let cmd = Command::parse("open project ");
        assert_eq!(
            cmd.command_type,
            CommandType::Unknown {
                input: "open project".to_string()
            }
        );
    }

    #[test]
    fn test_parse_unknown_keeps_case() {
        let cmd = Command::parse("  FooBar ");
        assert_eq!(
            cmd.command_type,
            CommandType::Unknown {
                input: "FooBar".to_string()
            }
        );
    }

    #[test]
    fn test_help_text_lists_every_command() {
        for word in completion_words() {
            let word = word.trim_end();
            assert!(HELP_TEXT.contains(word), "help is missing {word}");
        }
    }
}
