//! Console front-end.
//!
//! Reads one command per line, applies it to the active panel, and writes the
//! response. Each command completes before the next line is read.

use std::str::FromStr;
use std::sync::Arc;

use diceroller_domain::{DiceError, SortMode};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use super::mockup::{MockupButton, MockupPanel};
use super::render;
use super::state::RollerState;
use crate::app::App;
use crate::infrastructure::settings::OutputFormat;
use crate::use_cases::{RollDice, RollError};

/// The two panels of the front-end
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    /// Static mock-up with non-functional buttons
    #[default]
    Static,
    /// Functional roller
    Roller,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Static => "Static mock-up",
            Tab::Roller => "Roller",
        }
    }
}

impl FromStr for Tab {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" | "mockup" | "1" => Ok(Tab::Static),
            "roller" | "functional" | "2" => Ok(Tab::Roller),
            other => Err(ConsoleError::InvalidArgument {
                command: "tab",
                value: other.to_string(),
            }),
        }
    }
}

/// A parsed console line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Tab(Tab),
    Dice(String),
    Faces(String),
    Sort(SortMode),
    Roll,
    Press(MockupButton),
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = ConsoleError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, Some(arg.trim())),
            None => (line, None),
        };

        match name.to_ascii_lowercase().as_str() {
            "tab" => Ok(Command::Tab(required(arg, "tab")?.parse()?)),
            // Clearing a field is a valid edit.
            "dice" => Ok(Command::Dice(arg.unwrap_or_default().to_string())),
            "faces" => Ok(Command::Faces(arg.unwrap_or_default().to_string())),
            "sort" => Ok(Command::Sort(required(arg, "sort")?.parse()?)),
            "roll" => Ok(Command::Roll),
            "press" => {
                let label = required(arg, "press")?;
                label
                    .parse()
                    .map(Command::Press)
                    .map_err(|_| ConsoleError::InvalidArgument {
                        command: "press",
                        value: label.to_string(),
                    })
            }
            "show" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(ConsoleError::UnknownCommand(line.to_string())),
        }
    }
}

fn required<'a>(arg: Option<&'a str>, command: &'static str) -> Result<&'a str, ConsoleError> {
    arg.filter(|a| !a.is_empty())
        .ok_or(ConsoleError::MissingArgument(command))
}

/// What the loop does after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue(String),
    Quit,
}

#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("Unknown command: '{0}' (try 'help')")]
    UnknownCommand(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
    #[error("Invalid argument for '{command}': '{value}'")]
    InvalidArgument { command: &'static str, value: String },
    #[error("{0}")]
    Dice(#[from] DiceError),
    #[error("Only digits are allowed: '{0}'")]
    RejectedInput(String),
    #[error("'{command}' is not available on the {tab} tab")]
    WrongTab { command: &'static str, tab: &'static str },
    #[error("Roll is disabled for the current input")]
    RollDisabled,
    #[error("Roll failed: {0}")]
    Roll(#[from] RollError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConsoleError {
    /// Errors after which the session cannot go on.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ConsoleError::Io(_))
    }
}

/// Interactive console session
pub struct Console {
    roll: Arc<RollDice>,
    state: RollerState,
    mockup: MockupPanel,
    tab: Tab,
    output: OutputFormat,
}

impl Console {
    pub fn new(app: &App) -> Self {
        Self {
            roll: app.use_cases.roll.clone(),
            state: RollerState::from_settings(&app.settings),
            mockup: MockupPanel::new(),
            tab: Tab::default(),
            output: app.settings.output,
        }
    }

    pub fn state(&self) -> &RollerState {
        &self.state
    }

    /// Render the active panel.
    pub fn render(&self) -> Result<String, ConsoleError> {
        let body = match self.tab {
            Tab::Static => render::render_mockup(),
            Tab::Roller => render::render_roller(&self.state, self.output)?,
        };
        Ok(format!("== {} ==\n{}", self.tab.title(), body))
    }

    /// Apply one command.
    pub fn handle(&mut self, command: Command) -> Result<Outcome, ConsoleError> {
        match command {
            Command::Tab(tab) => {
                tracing::debug!(from = self.tab.title(), to = tab.title(), "Switching tab");
                self.tab = tab;
                Ok(Outcome::Continue(self.render()?))
            }
            Command::Dice(text) => {
                self.require_tab(Tab::Roller, "dice")?;
                if !self.state.set_dice_text(&text) {
                    return Err(ConsoleError::RejectedInput(text));
                }
                Ok(Outcome::Continue(render::render_parameters(&self.state)))
            }
            Command::Faces(text) => {
                self.require_tab(Tab::Roller, "faces")?;
                if !self.state.set_faces_text(&text) {
                    return Err(ConsoleError::RejectedInput(text));
                }
                Ok(Outcome::Continue(render::render_parameters(&self.state)))
            }
            Command::Sort(mode) => {
                self.require_tab(Tab::Roller, "sort")?;
                self.state.set_sort_mode(mode);
                Ok(Outcome::Continue(render::render_parameters(&self.state)))
            }
            Command::Roll => {
                self.require_tab(Tab::Roller, "roll")?;
                if !self.state.can_roll() {
                    return Err(ConsoleError::RollDisabled);
                }
                let result = self.roll.execute(&self.state.configuration())?;
                self.state.record(result);
                Ok(Outcome::Continue(render::render_result(
                    self.state.result(),
                    self.output,
                )?))
            }
            Command::Press(button) => {
                self.require_tab(Tab::Static, "press")?;
                Ok(Outcome::Continue(self.mockup.press(button)))
            }
            Command::Show => Ok(Outcome::Continue(self.render()?)),
            Command::Help => Ok(Outcome::Continue(render::render_help())),
            Command::Quit => Ok(Outcome::Quit),
        }
    }

    fn require_tab(&self, tab: Tab, command: &'static str) -> Result<(), ConsoleError> {
        if self.tab == tab {
            Ok(())
        } else {
            Err(ConsoleError::WrongTab {
                command,
                tab: self.tab.title(),
            })
        }
    }

    /// Run until `quit` or end of input.
    pub async fn run<R, W>(&mut self, reader: R, writer: &mut W) -> Result<(), ConsoleError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();

        let banner = self.render()?;
        write_block(writer, &banner).await?;

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            let outcome = line.parse::<Command>().and_then(|command| self.handle(command));
            match outcome {
                Ok(Outcome::Continue(text)) => write_block(writer, &text).await?,
                Ok(Outcome::Quit) => break,
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    tracing::debug!(error = %e, "Command rejected");
                    write_block(writer, &format!("error: {e}")).await?;
                }
            }
        }

        writer.flush().await?;
        Ok(())
    }
}

async fn write_block<W>(writer: &mut W, text: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(text.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await
}
