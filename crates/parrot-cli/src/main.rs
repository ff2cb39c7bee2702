//! parrot CLI: demo chat page in the terminal

use clap::{Parser, Subcommand};
use parrot_engine::{Config, ConfigError, Message, Session, ThemeName};
use std::path::PathBuf;

/// Demo chat page that echoes your messages back
#[derive(Parser)]
#[command(name = "parrot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a JSON config file
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_file: Option<PathBuf>,

    /// Override the reply delay in milliseconds
    #[arg(long, global = true)]
    delay_ms: Option<u64>,

    /// Override the color theme (light, dark)
    #[arg(long, global = true)]
    theme: Option<ThemeName>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the chat page (default when no command specified)
    Tui,

    /// Print the effective configuration
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Send messages without a terminal UI and print the transcript
    Script {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Messages to send, in order
        #[arg(required = true)]
        messages: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    match cli.command {
        None | Some(Commands::Tui) => {
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            if let Err(e) = rt.block_on(parrot_tui::run_tui(config)) {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Config { json }) => {
            cmd_config(&config, json);
        }
        Some(Commands::Script { json, messages }) => {
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            let transcript = rt.block_on(run_script(&config, &messages));
            print_transcript(&transcript, json);
        }
    }
}

/// Load the config file if given, then apply command-line overrides.
fn load_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(delay) = cli.delay_ms {
        config.reply_delay_ms = delay;
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    Ok(config)
}

fn cmd_config(config: &Config, json: bool) {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(config).expect("failed to serialize")
        );
        return;
    }

    println!("Configuration\n");
    println!("  Title:          {}", config.title);
    println!("  Subtitle:       {}", config.subtitle);
    println!("  Greeting:       {}", config.greeting);
    println!("  Reply template: {}", config.reply_template);
    println!("  Reply delay:    {}ms", config.reply_delay_ms);
    println!("  Theme:          {:?}", config.theme);
    println!("  Page width:     {}", config.max_width);
    println!("  Bubble width:   {}", config.bubble_width);
}

/// Send each message, waiting for its reply before the next one.
async fn run_script(config: &Config, messages: &[String]) -> Vec<Message> {
    let mut session = Session::new(config);
    for text in messages {
        session.send(text);
        session.settle().await;
    }
    session.shutdown()
}

fn print_transcript(transcript: &[Message], json: bool) {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(transcript).expect("failed to serialize")
        );
        return;
    }

    for msg in transcript {
        println!("[{}] {}: {}", msg.id, msg.sender.label(), msg.text);
    }
}
