mod rest;
mod store;


use std::io::{self, Write};
use std::path::PathBuf;

use chat::flow::chat::SendOutcome;
use chat::flow::login::AuthOutcome;
use chat::flow::profile::ProfileOutcome;
use chat::types::{Credentials, PageRequest};
use chat::{ApiError, ChatApi, Session, validate};
use clap::{Parser, Subcommand};

use rest::RestClient;
use store::FileTokenStore;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("not logged in; run `chat-cli login <username> <password>` first")]
    NotLoggedIn,
    #[error("session token rejected by the backend; log in again")]
    SessionRejected,
    #[error("no config directory; pass --session-file or set CHAT_SESSION_FILE")]
    NoSessionPath,
    #[error("message is empty")]
    EmptyMessage,
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("output failed: {0}")]
    Io(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "chat-cli", about = "Group chat terminal client")]
struct Cli {
    #[arg(long, env = "CHAT_BASE_URL", default_value = "http://127.0.0.1:8000")]
    base_url: String,

    /// Where the session token is kept.
    #[arg(long, env = "CHAT_SESSION_FILE")]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Create an account and log in.
    Register { username: String, password: String },
    /// Log in and store the session token.
    Login { username: String, password: String },
    /// End the session.
    Logout,
    /// Show the logged-in member.
    Whoami,
    /// List messages.
    Messages {
        #[arg(long, default_value_t = PageRequest::DEFAULT_LIMIT)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    /// Send a message; the words are joined with single spaces.
    Send {
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        text: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let path = match cli.session_file {
        Some(path) => path,
        None => store::default_session_path().ok_or(CliError::NoSessionPath)?,
    };
    let store = FileTokenStore::new(path);
    tracing::debug!(path = %store.path().display(), "session file");
    let session = Session::new(store);
    let api = RestClient::new(&cli.base_url)?;

    run(cli.command, &api, &session, &mut io::stdout().lock()).await
}

async fn run<A>(command: Command, api: &A, session: &Session, out: &mut impl Write) -> Result<(), CliError>
where
    A: ChatApi + ?Sized,
{
    match command {
        Command::Register { username, password } => {
            let credentials = credentials(&username, &password)?;
            let outcome = chat::flow::register::sign_up(api, session, &credentials).await;
            signed_in(outcome, &credentials, out)
        }
        Command::Login { username, password } => {
            let credentials = credentials(&username, &password)?;
            let outcome = chat::flow::login::sign_in(api, session, &credentials).await;
            signed_in(outcome, &credentials, out)
        }
        Command::Logout => {
            chat::flow::chat::logout(api, session).await;
            writeln!(out, "logged out")?;
            Ok(())
        }
        Command::Whoami => match chat::flow::profile::load_profile(api, session).await {
            ProfileOutcome::Redirect(_) => Err(CliError::NotLoggedIn),
            ProfileOutcome::Failed(message) => Err(CliError::Rejected(message)),
            ProfileOutcome::Loaded(member) => {
                let registered = chat::datetime::registered_at(&member.created_at, &chrono::Local);
                writeln!(out, "{} (зарегистрирован {registered})", member.username)?;
                Ok(())
            }
        },
        Command::Messages { limit, offset } => {
            let token = session.require().map_err(|_| CliError::NotLoggedIn)?;
            let messages = api
                .messages(&token, PageRequest { limit, offset })
                .await
                .map_err(|e| {
                    if e.is_unauthorized() {
                        CliError::SessionRejected
                    } else {
                        CliError::Api(e)
                    }
                })?;
            if messages.is_empty() {
                writeln!(out, "Нет сообщений. Начните беседу!")?;
            }
            for message in messages {
                writeln!(out, "{}: {}", message.author, message.text)?;
            }
            Ok(())
        }
        Command::Send { text } => {
            let text = text.join(" ");
            let draft = validate::message_draft(&text).map_err(|rejection| {
                rejection
                    .message()
                    .map_or(CliError::EmptyMessage, |m| CliError::Rejected(m.to_owned()))
            })?;
            match chat::flow::chat::send_message(api, session, draft).await {
                SendOutcome::Redirect(_) => Err(CliError::NotLoggedIn),
                SendOutcome::Failed(message) => Err(CliError::Rejected(message)),
                SendOutcome::Sent(created) => {
                    writeln!(out, "sent #{}", created.id)?;
                    Ok(())
                }
            }
        }
    }
}

fn credentials(username: &str, password: &str) -> Result<Credentials, CliError> {
    validate::credentials(username, password).map_err(|message| CliError::Rejected(message.to_owned()))
}

fn signed_in(outcome: AuthOutcome, credentials: &Credentials, out: &mut impl Write) -> Result<(), CliError> {
    match outcome {
        AuthOutcome::SignedIn { .. } => {
            writeln!(out, "logged in as {}", credentials.username)?;
            Ok(())
        }
        AuthOutcome::Failed { message } => Err(CliError::Rejected(message)),
    }
}
