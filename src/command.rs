//! Command types and parsing for the draft session prompt

/// Help information for a command
#[derive(Debug, Clone)]
pub struct CommandHelp {
    pub name: &'static str,
    pub description: &'static str,
}

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    /// Select a draft by list number or reply id
    Select(String),
    List,
    Show,
    Edit,
    Reset,
    Copy,
    /// Resubmit the last entered email after a failure
    Retry,
    New,
    Help,
    Quit,
}

/// Parse a command string into a ParsedCommand
pub fn parse_command(input: &str) -> Option<ParsedCommand> {
    let trimmed = input.trim();

    if let Some(arg) = trimmed.strip_prefix("select ") {
        let arg = arg.trim();
        if arg.is_empty() {
            return None;
        }
        return Some(ParsedCommand::Select(arg.to_string()));
    }

    match trimmed {
        "list" | "l" => Some(ParsedCommand::List),
        "show" | "s" => Some(ParsedCommand::Show),
        "edit" | "e" => Some(ParsedCommand::Edit),
        "reset" | "r" => Some(ParsedCommand::Reset),
        "copy" | "c" => Some(ParsedCommand::Copy),
        "retry" => Some(ParsedCommand::Retry),
        "new" | "n" => Some(ParsedCommand::New),
        "help" | "h" | "?" => Some(ParsedCommand::Help),
        "q" | "quit" => Some(ParsedCommand::Quit),
        _ => None,
    }
}

/// Get all available commands for help display
pub fn available_commands() -> Vec<CommandHelp> {
    vec![
        CommandHelp {
            name: "select <n|id>",
            description: "Select a draft and open it for editing",
        },
        CommandHelp {
            name: "list",
            description: "List the drafts from the last request",
        },
        CommandHelp {
            name: "show",
            description: "Show the selected draft's working text",
        },
        CommandHelp {
            name: "edit",
            description: "Replace the selected draft's working text",
        },
        CommandHelp {
            name: "reset",
            description: "Restore the selected draft to its original text",
        },
        CommandHelp {
            name: "copy",
            description: "Copy the working text to the clipboard",
        },
        CommandHelp {
            name: "retry",
            description: "Resubmit the last entered email",
        },
        CommandHelp {
            name: "new",
            description: "Start over with a new email",
        },
        CommandHelp {
            name: "help",
            description: "Show this help message",
        },
        CommandHelp {
            name: "quit",
            description: "Exit the application",
        },
    ]
}
