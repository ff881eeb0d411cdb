use std::io::Write;

use anyhow::Result;
use clap::Args;
use parliament_lib::{ChatSession, Client, FileSessionStore, SessionStore, Settings};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::output::{format_chat_reply, print_json, OutputFormat};

#[derive(Args)]
pub struct ChatArgs {
    /// Ask a single question and exit instead of starting a session prompt
    #[arg(long)]
    pub query: Option<String>,

    /// Forget the saved session before starting
    #[arg(long)]
    pub new_session: bool,
}

enum Input<'a> {
    Quit,
    Clear,
    Ask(&'a str),
    Skip,
}

fn parse_input(line: &str) -> Input<'_> {
    match line.trim() {
        "/quit" | "/exit" => Input::Quit,
        "/clear" => Input::Clear,
        "" => Input::Skip,
        query => Input::Ask(query),
    }
}

pub async fn run(
    args: &ChatArgs,
    client: &Client,
    settings: &Settings,
    format: &OutputFormat,
) -> Result<()> {
    let mut session = ChatSession::mount(FileSessionStore::new(settings.session_file()));
    if args.new_session {
        session.clear();
    }

    if let Some(query) = &args.query {
        let exchange = session.submit(client, query).await?;
        print_reply(&exchange.reply, client, format);
        return Ok(());
    }

    eprintln!("Ask about bills, MPs, committees or loans. /clear starts over, /quit exits.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        eprint!("> ");
        std::io::stderr().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        match parse_input(&line) {
            Input::Quit => break,
            Input::Skip => continue,
            Input::Clear => {
                session.clear();
                eprintln!("Conversation cleared.");
            }
            Input::Ask(query) => match session.submit(client, query).await {
                Ok(exchange) => print_reply(&exchange.reply, client, format),
                Err(e) => eprintln!("{}", e),
            },
        }
    }

    if let Some(id) = session.store().get() {
        tracing::debug!("Chat session {} kept for next time", id);
    }
    Ok(())
}

fn print_reply(reply: &parliament_lib::types::ChatReply, client: &Client, format: &OutputFormat) {
    match format {
        OutputFormat::Json => print_json(reply),
        _ => println!("{}\n", format_chat_reply(reply, client.media())),
    }
}
