use std::fmt;

use anyhow::Result;
use inquire::ui::{Attributes, Color, RenderConfig, Styled};
use inquire::{InquireError, Text};

use crate::relay::BotResponder;
use crate::ui::{self, Spinner};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    You,
    Bot,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::You => write!(f, "You"),
            Self::Bot => write!(f, "Bot"),
        }
    }
}

/// One transcript line. Append-only; entries are never edited after the fact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

/// An interactive chat session against the relay.
///
/// The prompt does not return while a request is in flight, so there is never
/// more than one pending exchange and the transcript cannot interleave.
pub struct ChatSession {
    responder: Box<dyn BotResponder>,
    transcript: Vec<ChatMessage>,
    pending: bool,
}

impl ChatSession {
    pub fn new(responder: Box<dyn BotResponder>) -> Self {
        Self {
            responder,
            transcript: Vec::new(),
            pending: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_banner();

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightGreen)
            .with_attr(Attributes::BOLD);
        let answered_style = Styled::new("You:")
            .with_fg(Color::LightCyan)
            .with_attr(Attributes::BOLD);
        let render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(answered_style);

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_help_message("Type your message and press Enter, Ctrl+C to leave")
                .prompt();

            match input {
                Ok(line) => {
                    let text = line.trim();
                    if text.is_empty() {
                        continue;
                    }

                    let spinner = Spinner::new("Bot is typing...");
                    let reply = self.exchange(text.to_string()).await;
                    spinner.stop();

                    ui::print_bot_line(&reply);
                }
                Err(
                    InquireError::OperationCanceled | InquireError::OperationInterrupted,
                ) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    /// One send/receive cycle: the user entry lands before the call is
    /// issued, the bot entry after it settles.
    async fn exchange(&mut self, text: String) -> String {
        self.transcript.push(ChatMessage {
            sender: Sender::You,
            text: text.clone(),
        });
        self.pending = true;

        let reply = self.responder.bot_response(&text).await;

        self.pending = false;
        self.transcript.push(ChatMessage {
            sender: Sender::Bot,
            text: reply.clone(),
        });

        reply
    }
}
