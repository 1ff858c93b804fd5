use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use detailing::commands::{compose::ComposeCommand, page::PageCommand, submit::SubmitCommand};
use detailing_config::DEFAULT_CONFIG_PATH;
use detailing_utils::detailing_version;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::Completion { shell } = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            env!("CARGO_BIN_NAME"),
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    init_tracing();

    let config =
        detailing_config::load(cli.config.as_slice()).context("Failed to load config")?;

    match cli.command {
        Command::Compose(command) => command.invoke(config)?,
        Command::Submit(command) => command.invoke(config).await?,
        Command::Page(command) => command.invoke(config)?,
        Command::CheckConfig { verbose } => {
            verbose.then(|| println!("{config:#?}"));
        }
        Command::Completion { .. } => unreachable!(),
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version = detailing_version())]
struct Cli {
    /// Config files to load, later files override earlier ones
    #[arg(
        long,
        short,
        global = true,
        env = "DETAILING_CONFIG",
        value_delimiter = ':',
        default_value = DEFAULT_CONFIG_PATH
    )]
    config: Vec<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate a booking form and print the composed message
    #[command(aliases(["c"]))]
    Compose(ComposeCommand),
    /// Run the full booking flow and dispatch the message
    #[command(aliases(["send", "s"]))]
    Submit(SubmitCommand),
    /// Replay navigation and FAQ interactions on the page
    #[command(aliases(["p"]))]
    Page(PageCommand),
    /// Validate configuration
    CheckConfig {
        /// Print a debug representation of the config
        #[arg(short, long)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    #[cfg(tracing_pretty)]
    let fmt_layer = fmt_layer.pretty();

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(EnvFilter::from_default_env()))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli() {
        Cli::command().debug_assert();
    }
}
