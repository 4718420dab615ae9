//! Line-oriented interactive session
//!
//! Thin presentation layer: reads input, dispatches to the action handlers,
//! prints state. It holds no draft state of its own; every transition goes
//! through the App.

use std::io::{self, Write};

use anyhow::Result;

use crate::command::{self, ParsedCommand};
use crate::tone;

use super::App;

/// What to do after the draft command loop exits
enum NextStep {
    NewEmail,
    /// Resubmit the kept email text
    Retry,
    Quit,
}

impl App {
    pub(crate) async fn repl(&mut self) -> Result<()> {
        println!("redraft - AI email reply drafts");
        println!("Backend: {}", self.config.backend.base_url);

        // The entered email survives a failed submit so the user can retry
        // without retyping.
        let mut pending: Option<String> = None;

        loop {
            let text = match pending.take() {
                Some(text) => text,
                None => {
                    let Some(text) =
                        read_block("\nPaste the email to answer (finish with a single '.'):")?
                    else {
                        break;
                    };
                    text
                }
            };

            println!("Generating replies...");
            if self.submit_email(&text).await {
                println!("{}", self.state.status.message);
                self.print_drafts();
            } else {
                if let Some(error) = self.controller.phase().error() {
                    println!("Error: {error}");
                }

                if self.state.replies.is_empty() {
                    let Some(answer) = read_line("Retry with the same email? [Y/n]: ")? else {
                        break;
                    };
                    if !answer.trim().eq_ignore_ascii_case("n") {
                        pending = Some(text);
                    }
                    continue;
                }

                // Drafts from the previous request are still usable; the
                // prompt below offers 'retry' alongside them.
                println!("Previous drafts are still available ('retry' resubmits the email).");
                self.print_drafts();
            }

            match self.draft_loop()? {
                NextStep::NewEmail => continue,
                NextStep::Retry => {
                    pending = Some(text);
                    continue;
                }
                NextStep::Quit => break,
            }
        }

        Ok(())
    }

    fn draft_loop(&mut self) -> Result<NextStep> {
        loop {
            let Some(line) = read_line("draft> ")? else {
                return Ok(NextStep::Quit);
            };
            if line.trim().is_empty() {
                continue;
            }

            let Some(cmd) = command::parse_command(&line) else {
                println!("Unknown command. Type 'help' for a list.");
                continue;
            };

            match cmd {
                ParsedCommand::Select(arg) => self.handle_select(&arg),
                ParsedCommand::List => self.print_drafts(),
                ParsedCommand::Show => self.print_working(),
                ParsedCommand::Edit => {
                    if self.state.editor.is_none() {
                        println!("No draft selected. Use 'select <n>' first.");
                        continue;
                    }
                    let Some(text) =
                        read_block("Enter replacement text (finish with a single '.'):")?
                    else {
                        return Ok(NextStep::Quit);
                    };
                    self.edit_draft(text);
                    println!("Draft updated.");
                }
                ParsedCommand::Reset => {
                    if self.reset_draft() {
                        println!("Draft restored to original.");
                    } else {
                        println!("No draft selected.");
                    }
                }
                ParsedCommand::Copy => {
                    self.copy_draft();
                    match self.state.status.error.take() {
                        Some(error) => println!("Error: {error}"),
                        None => println!("{}", self.state.status.message),
                    }
                }
                ParsedCommand::Retry => {
                    return Ok(NextStep::Retry);
                }
                ParsedCommand::New => {
                    self.clear_selection();
                    return Ok(NextStep::NewEmail);
                }
                ParsedCommand::Help => {
                    for help in command::available_commands() {
                        println!("  {:<14} {}", help.name, help.description);
                    }
                }
                ParsedCommand::Quit => return Ok(NextStep::Quit),
            }
        }
    }

    fn handle_select(&mut self, arg: &str) {
        // A number is a list position; anything else is a reply id.
        let id = match arg.parse::<usize>() {
            Ok(n) if n >= 1 => match self.state.replies.get(n - 1) {
                Some(reply) => reply.id.clone(),
                None => {
                    println!("No draft number {n} (have {}).", self.state.replies.len());
                    return;
                }
            },
            _ => arg.to_string(),
        };

        if self.select_reply(&id) {
            self.print_working();
        } else {
            println!("No draft with id '{id}'.");
        }
    }

    fn print_drafts(&self) {
        if self.state.replies.is_empty() {
            println!("No drafts yet.");
            return;
        }

        println!();
        for (i, reply) in self.state.replies.iter().enumerate() {
            let look = tone::lookup(&reply.tone);
            let marker = if self.state.replies.selected_id() == Some(reply.id.as_str()) {
                "*"
            } else {
                " "
            };
            println!("{marker}[{}] {} {}", i + 1, look.icon, look.label);
            println!("     {}", reply.preview);
        }
    }

    fn print_working(&self) {
        match &self.state.editor {
            Some(editor) => {
                if let Some(reply) = self.state.replies.selected() {
                    let look = tone::lookup(&reply.tone);
                    let edited = if editor.is_dirty() { " (edited)" } else { "" };
                    println!("\n{} {}{edited}", look.icon, look.label);
                }
                println!("{}", editor.working());
            }
            None => println!("No draft selected. Use 'select <n>' first."),
        }
    }
}

/// Print a prompt and read one line. None on EOF.
fn read_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Read lines until a lone '.' terminator. None on EOF before the terminator.
fn read_block(prompt: &str) -> Result<Option<String>> {
    println!("{prompt}");

    let mut lines = Vec::new();
    loop {
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim_end_matches(['\r', '\n']);
        if line == "." {
            return Ok(Some(lines.join("\n")));
        }
        lines.push(line.to_string());
    }
}
