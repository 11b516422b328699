//! CLI commands for the chat client

use clap::Subcommand;
use std::io::{self, BufRead, Write};
use tokio::runtime::Runtime;

use crate::client::ChatClient;
use crate::config::Settings;
use crate::display::{format_message, format_transcript};
use crate::error::{VerziError, VerziResult};
use crate::models::ChatSession;
use crate::services::{ChatBackend, ChatService};

/// Chat subcommands
#[derive(Subcommand, Debug)]
pub enum ChatCommands {
    /// Send one message and print the reply
    Send {
        /// Message text
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },

    /// Interactive conversation on stdin (`/quit` to leave)
    #[command(alias = "interactive")]
    Repl,
}

/// Handle chat commands
pub fn handle_chat_command(settings: &Settings, cmd: ChatCommands) -> VerziResult<()> {
    let client = ChatClient::from_settings(&settings.chat)?;
    if settings.chat.resolve_api_key().is_none() {
        eprintln!(
            "Warning: no API key configured (set {} or chat.api_key)",
            settings.chat.api_key_env
        );
    }

    let service = ChatService::new(client);
    let mut session = ChatSession::new(settings.chat.greeting.clone());
    let runtime = runtime()?;

    match cmd {
        ChatCommands::Send { message } => {
            let text = message.join(" ");
            if let Some(reply) = runtime.block_on(service.send(&mut session, &text))? {
                println!("{}", reply.content);
            }
            Ok(())
        }
        ChatCommands::Repl => {
            let stdin = io::stdin();
            run_repl(&runtime, &service, &mut session, stdin.lock(), io::stdout().lock())
        }
    }
}

/// Runtime for blocking on one request at a time
pub(crate) fn runtime() -> VerziResult<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| VerziError::Io(format!("Failed to start async runtime: {}", e)))
}

/// Read lines from `input` until EOF or `/quit`, printing each reply
///
/// A failed turn is reported and the loop continues.
pub fn run_repl<B, R, W>(
    runtime: &Runtime,
    service: &ChatService<B>,
    session: &mut ChatSession,
    input: R,
    mut output: W,
) -> VerziResult<()>
where
    B: ChatBackend,
    R: BufRead,
    W: Write,
{
    let io_err = |e: io::Error| VerziError::Io(e.to_string());

    writeln!(output, "{}", format_transcript(session.messages())).map_err(io_err)?;

    for line in input.lines() {
        let line = line.map_err(io_err)?;
        match line.trim() {
            "/quit" | "/exit" => break,
            "/history" => {
                writeln!(output, "{}", format_transcript(session.messages())).map_err(io_err)?;
                continue;
            }
            _ => {}
        }

        match runtime.block_on(service.send(session, &line)) {
            Ok(Some(reply)) => writeln!(output, "{}", format_message(&reply)).map_err(io_err)?,
            Ok(None) => {}
            Err(err) => writeln!(output, "Error: {}", err).map_err(io_err)?,
        }
        output.flush().map_err(io_err)?;
    }

    Ok(())
}
