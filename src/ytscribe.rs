use std::io::{self, BufRead, IsTerminal, Lines, StdinLock, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use ytscribe::command::{ConsoleCommand, HELP};
use ytscribe::console::TranscriptionConsole;
use ytscribe::gate::CredentialGate;
use ytscribe::notify::{Notifier, TerminalNotifier};
use ytscribe::route::{Entry, Route};
use ytscribe::{
    ConfigCredentialStore, ConfigManager, CredentialStore, DEFAULT_LOG_LEVEL, HttpTranscriber,
    LOG_ENV, Transcriber, render,
};

type Input = Lines<StdinLock<'static>>;

const KEY_PROMPT: &str = "api key> ";

/// How the gate reads the API key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyInput {
    /// Read from the terminal with echo turned off.
    Hidden,
    /// Read the next stdin line, for piped input.
    Lines,
}

impl KeyInput {
    fn for_stdin(is_terminal: bool) -> Self {
        if is_terminal { Self::Hidden } else { Self::Lines }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "ytscribe",
    version,
    about = "Transcribe and translate YouTube videos from the terminal"
)]
struct Args {
    /// Config file to use instead of the one in the platform config directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Transcription service endpoint for this run.
    #[arg(long)]
    endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger; stdout belongs to the screens
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL)),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    // Load config
    let config_manager = match args.config {
        Some(path) => ConfigManager::with_config_path(path),
        None => ConfigManager::new()?,
    };
    let config = config_manager.load()?;
    let endpoint = args
        .endpoint
        .unwrap_or_else(|| config.endpoint().to_owned());
    let http = HttpTranscriber::from_endpoint(endpoint);
    info!(
        config = ?config_manager.config_path(),
        endpoint = http.endpoint(),
        language = %config.language(),
        "ytscribe starting"
    );

    let store: Arc<dyn CredentialStore> = Arc::new(ConfigCredentialStore::new(config_manager));
    let transcriber: Arc<dyn Transcriber> = Arc::new(http);
    let notifier: Arc<dyn Notifier> = Arc::new(TerminalNotifier::new());
    let key_input = KeyInput::for_stdin(io::stdin().is_terminal());
    let mut input = io::stdin().lock().lines();

    let mut route = Route::Gate;
    loop {
        debug!(route = ?route, "entering screen");
        let next = match route {
            Route::Gate => match CredentialGate::enter(store.clone(), notifier.clone())? {
                Entry::Redirect(to) => Some(to),
                Entry::Render(gate) => run_gate(gate, key_input, &mut input)?,
            },
            Route::Console => {
                let entry = TranscriptionConsole::enter(
                    store.clone(),
                    transcriber.clone(),
                    notifier.clone(),
                )?;
                match entry {
                    Entry::Redirect(to) => Some(to),
                    Entry::Render(console) => {
                        let console = console.with_language(config.language());
                        run_console(console, &mut input).await?
                    }
                }
            }
        };

        match next {
            Some(to) => route = to,
            None => break,
        }
    }

    info!("ytscribe exiting");
    Ok(())
}

fn prompt(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", text)?;
    stdout.flush().context("Failed to flush stdout")
}

/// Next input line, or `None` at end of input.
fn read_line(input: &mut Input) -> Result<Option<String>> {
    input
        .next()
        .transpose()
        .context("Failed to read from stdin")
}

/// Next API key entry, or `None` at end of input.
fn read_key(key_input: KeyInput, input: &mut Input) -> Result<Option<String>> {
    match key_input {
        KeyInput::Hidden => match rpassword::prompt_password(KEY_PROMPT) {
            Ok(line) => Ok(Some(line)),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e).context("Failed to read API key from terminal"),
        },
        KeyInput::Lines => {
            prompt(KEY_PROMPT)?;
            read_line(input)
        }
    }
}

/// Runs the capture form until a key is saved or input ends.
fn run_gate(
    mut gate: CredentialGate,
    key_input: KeyInput,
    input: &mut Input,
) -> Result<Option<Route>> {
    print!("{}", render::gate(&gate));
    println!("(type `help` to show or hide instructions, `quit` to exit)");

    loop {
        let Some(line) = read_key(key_input, input)? else {
            return Ok(None);
        };
        match line.trim() {
            "" => continue,
            "quit" | "exit" => return Ok(None),
            "help" | "instructions" => {
                gate.toggle_instructions();
                print!("{}", render::gate(&gate));
                continue;
            }
            _ => {}
        }

        gate.edit(line);
        match gate.submit() {
            Ok(route) => return Ok(Some(route)),
            Err(e) => debug!(error = %e, "API key not accepted"),
        }
    }
}

/// Runs the console until the user quits or input ends.
async fn run_console(
    mut console: TranscriptionConsole,
    input: &mut Input,
) -> Result<Option<Route>> {
    print!("{}", render::console(&console));
    println!("(type `help` for commands)");

    loop {
        prompt("ytscribe> ")?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        let command = match line.parse::<ConsoleCommand>() {
            Ok(command) => command,
            Err(ytscribe::command::CommandError::Empty) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match command {
            ConsoleCommand::Transcribe { url, language } => {
                console.set_url(url);
                if let Some(language) = language {
                    console.set_language(language);
                }
                let request = match console.begin_submit() {
                    Ok(request) => request,
                    Err(e) => {
                        debug!(error = %e, "submission refused");
                        continue;
                    }
                };
                print!("{}", render::panel(&console.panel()));
                if let Err(e) = console.complete_submit(request).await {
                    debug!(error = %e, "submission failed");
                }
                print!("{}", render::panel(&console.panel()));
            }
            ConsoleCommand::Language(language) => {
                console.set_language(language);
                println!("Target language: {}", language.label());
            }
            ConsoleCommand::Languages => {
                print!("{}", render::languages(console.language()));
            }
            ConsoleCommand::Toggle(section) => {
                console.toggle(section);
                print!("{}", render::panel(&console.panel()));
            }
            ConsoleCommand::Show => print!("{}", render::console(&console)),
            ConsoleCommand::Help => println!("{}", HELP),
            ConsoleCommand::Quit => return Ok(None),
        }
    }
}
