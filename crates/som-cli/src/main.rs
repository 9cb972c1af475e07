use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use som_config::SomConfig;
use som_runtime::{construct, BinaryOp, Int32Value, OverflowPolicy};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Literal printed when `som` runs without a subcommand.
const DEMO_LITERAL: i32 = 4;

#[derive(Parser)]
#[command(name = "som")]
#[command(author, version, about = "32-bit integer literal runtime")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a som.toml (default: ./som.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Overflow behavior of add/mul/eval (wrapping or checked), overriding the config file
    #[arg(long, global = true, value_name = "POLICY")]
    overflow: Option<OverflowPolicy>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an integer literal and print it
    Print {
        #[arg(allow_negative_numbers = true)]
        literal: Int32Value,
    },

    /// Add two literals (S32_ADD)
    Add {
        #[arg(allow_negative_numbers = true)]
        lhs: Int32Value,
        #[arg(allow_negative_numbers = true)]
        rhs: Int32Value,
    },

    /// Multiply two literals (S32_MUL)
    Mul {
        #[arg(allow_negative_numbers = true)]
        lhs: Int32Value,
        #[arg(allow_negative_numbers = true)]
        rhs: Int32Value,
    },

    /// Evaluate S32_MUL(S32_ADD(2, 2), 2) and print the result
    Eval,
}

fn init_tracing(verbose: bool, log_level: &str) {
    let level = if verbose { "debug" } else { log_level };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<SomConfig> {
    let config = match &cli.config {
        Some(path) => SomConfig::from_file(path)?,
        None => SomConfig::discover(&std::env::current_dir().into_diagnostic()?)?,
    };
    Ok(match cli.overflow {
        Some(policy) => config.with_overflow(policy),
        None => config,
    })
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    init_tracing(cli.verbose, &cli.log_level);

    // The bare demo never reads som.toml.
    let Some(command) = &cli.command else {
        println!("{}", construct(DEMO_LITERAL));
        return Ok(());
    };

    let config = load_config(&cli)?;
    let policy = config.arithmetic.overflow;
    tracing::debug!(%policy, project = ?config.project.name, "resolved configuration");

    let result = match *command {
        Commands::Print { literal } => literal,
        Commands::Add { lhs, rhs } => policy.apply(BinaryOp::Add, lhs, rhs)?,
        Commands::Mul { lhs, rhs } => policy.apply(BinaryOp::Mul, lhs, rhs)?,
        Commands::Eval => {
            let two = construct(2);
            let sum = policy.add(two, two)?;
            tracing::debug!(%sum, "S32_ADD(2, 2)");
            policy.multiply(sum, two)?
        }
    };

    println!("{}", result);
    Ok(())
}
