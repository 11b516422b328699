use anyhow::Result;
use clap::{Parser, Subcommand};

use verzi::cli::{handle_budget_command, handle_chat_command, handle_feedback_command};
use verzi::config::{paths::VerziPaths, settings::Settings};
use verzi::logging::{self, LogTarget};

#[derive(Parser)]
#[command(
    name = "verzi",
    author = "VerziBiz",
    version,
    about = "Budget tracker, chat client and feedback survey for VerziBiz",
    long_about = "verzi tracks a monthly budget against a ledger of expenses, \
                  compares daily income with weekly spend, talks to a chat \
                  completions endpoint, and submits the VerziBiz service survey. \
                  Run without a subcommand to open the interactive interface."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Budget reports from a ledger file
    #[command(subcommand)]
    Budget(verzi::cli::BudgetCommands),

    /// Talk to the chat assistant
    #[command(subcommand)]
    Chat(verzi::cli::ChatCommands),

    /// Submit the feedback survey
    #[command(subcommand)]
    Feedback(verzi::cli::FeedbackCommands),

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = VerziPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let target = match cli.command {
        Some(Commands::Tui) | None => LogTarget::File,
        _ => LogTarget::Stderr,
    };
    logging::init(&settings, &paths, target)?;

    match cli.command {
        Some(Commands::Tui) | None => {
            verzi::tui::run_tui(&settings)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&settings, cmd)?;
        }
        Some(Commands::Chat(cmd)) => {
            handle_chat_command(&settings, cmd)?;
        }
        Some(Commands::Feedback(cmd)) => {
            handle_feedback_command(&settings, cmd)?;
        }
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Initialized VerziBiz at: {}", paths.base_dir().display());
            println!("Settings written to: {}", paths.settings_file().display());
            println!();
            println!("Set {} to enable the chat assistant.", settings.chat.api_key_env);
        }
        Some(Commands::Config) => {
            println!("VerziBiz Configuration");
            println!("======================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Log file:       {}", paths.log_file().display());
            println!("Initialized:    {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Log level:        {}", settings.log_level);
            println!(
                "  Monthly income:   {}",
                settings
                    .budget
                    .monthly_income
                    .format_with_symbol(&settings.currency_symbol)
            );
            println!("  Days per month:   {}", settings.budget.days_per_month);
            println!("  Chat endpoint:    {}", settings.chat.endpoint);
            println!("  Chat model:       {}", settings.chat.model);
            println!(
                "  Chat API key:     {}",
                if settings.chat.resolve_api_key().is_some() {
                    "configured"
                } else {
                    "missing"
                }
            );
            println!("  Feedback endpoint: {}", settings.feedback.endpoint);
        }
    }

    Ok(())
}
