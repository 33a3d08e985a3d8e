use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use mediassist::{Commands, Container, ContainerConfig, Router};

#[derive(Parser)]
#[command(name = "mediassist")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use a scripted mock gateway instead of the Gemini API (no key needed)
    #[arg(long, global = true)]
    mock: bool,

    /// Gemini model name (default: gemini-1.5-pro, or $GEMINI_MODEL)
    #[arg(long, global = true)]
    model: Option<String>,

    /// Start conversations without the assistant's welcome message
    #[arg(long, global = true)]
    no_welcome: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let container = Container::new(ContainerConfig {
        mock: cli.mock,
        model: cli.model,
        welcome: !cli.no_welcome,
    })?;
    let router = Router::new(&container);

    match cli.command {
        Commands::Chat => run_chat_repl(&container, &router).await,
        command => {
            let spinner = start_spinner(match command {
                Commands::Analyze { .. } => "Analyzing medical image...",
                _ => "Thinking...",
            });
            let output = router.route(command).await;
            spinner.finish_and_clear();
            println!("{}", output?);
            Ok(())
        }
    }
}

/// Interactive chat loop: one blocking gateway call per submitted
/// line, so turns are processed strictly in submission order.
async fn run_chat_repl(container: &Container, router: &Router<'_>) -> Result<()> {
    println!("MediAssist — medical Q&A assistant ({})", container.model_name());
    println!("Type /reset to clear the conversation, /quit to exit.\n");

    {
        let session = container.session().lock().await;
        if let Some(welcome) = session.last() {
            println!("MediAssist: {}\n", welcome.content());
        }
    }

    let controller = router.chat_controller();
    let mut editor = DefaultEditor::new()?;

    loop {
        match editor.readline("you> ") {
            Ok(line) => {
                let line = line.trim().to_string();

                match line.as_str() {
                    "" => continue,
                    "/quit" | "/exit" => break,
                    "/reset" => {
                        println!("{}\n", controller.reset().await?);
                        continue;
                    }
                    _ => {}
                }

                editor.add_history_entry(&line)?;

                let spinner = start_spinner("Thinking...");
                let reply = controller.submit_for_reply(&line).await;
                spinner.finish_and_clear();

                if let Some(reply) = reply? {
                    println!("MediAssist: {}\n", reply);
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

fn start_spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
