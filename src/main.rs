use clap::Parser;
use colored::{control::set_override, Colorize};
use is_terminal::IsTerminal;

use aktara::cli::args::{Cli, Commands, CompletionsArgs};
use aktara::cli::commands::{self, Context};
use aktara::cli::OutputFormat;
use aktara::config::{Config, Paths};
use aktara::error::AktaraError;
use aktara::logging;

#[tokio::main]
async fn main() {
    // Respect NO_COLOR environment variable (https://no-color.org/)
    // Also disable colors when stdout is not a terminal (for piping)
    if std::env::var("NO_COLOR").is_ok() || !std::io::stdout().is_terminal() {
        set_override(false);
    }

    if let Err(e) = run().await {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

async fn run() -> Result<(), AktaraError> {
    let cli = Cli::parse();

    // Handle completions command early (no config needed)
    if let Commands::Completions(CompletionsArgs { shell }) = &cli.command {
        Cli::print_completions(*shell);
        return Ok(());
    }

    let paths = Paths::new()?;
    let _log_guard = logging::init(&paths, cli.verbose);
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "aktara starting");

    let mut config = Config::load_from(&paths)?;
    let format = cli
        .output
        .unwrap_or_else(|| OutputFormat::from_config(&config.output.format));

    // Config commands work on the file as written, without overrides
    if let Commands::Config(args) = &cli.command {
        let output = commands::config(&mut config, &paths, args, format)?;
        print_output(&output);
        return Ok(());
    }

    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    if let Some(token) = &cli.token {
        config.set_token(token.clone());
    }

    let ctx = Context {
        config,
        paths,
        format,
        notify: cli.notify,
    };

    let output = match &cli.command {
        Commands::Search(args) => commands::search(&ctx, args).await?,
        Commands::Shop(args) => commands::shop(&ctx, args).await?,
        Commands::Product(args) => commands::product(&ctx, args)?,
        Commands::Buy(args) => commands::buy(&ctx, args)?,
        Commands::Cart(args) => commands::cart(&ctx, args)?,
        Commands::Wishlist(args) => commands::wishlist(&ctx, args)?,
        Commands::Login(args) => commands::login(&ctx, args).await?,
        Commands::Signup(args) => commands::signup(&ctx, args).await?,
        Commands::Subscribe(args) => commands::subscribe(&ctx, args).await?,
        Commands::Config(_) | Commands::Completions(_) => unreachable!(), // Handled above
    };

    print_output(&output);
    Ok(())
}

fn print_output(output: &str) {
    if !output.is_empty() {
        println!("{output}");
    }
}
