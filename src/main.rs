use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// mealplanner - recipes, meal plans and shopping lists
#[derive(Parser)]
#[command(name = "mealplanner")]
#[command(about = "Plan meals and build shopping lists from them", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Issue a development token for a user
    Token {
        #[arg(long)]
        user: String,

        /// Token lifetime (defaults to auth.token_ttl_secs)
        #[arg(long)]
        ttl_secs: Option<u64>,
    },
    /// Rebuild a user's shopping list from planned meals
    Generate {
        #[arg(long)]
        user: String,

        /// First day, YYYY-MM-DD (defaults to this week's Sunday)
        #[arg(long)]
        start: Option<String>,

        /// Last day, YYYY-MM-DD (defaults to six days after start)
        #[arg(long)]
        end: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = mealplanner::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealplanner::observability::init_observability(&config.observability)?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
        Commands::Migrate => cli::database::migrate(config).await,
        Commands::Reset => cli::database::reset(config).await,
        Commands::Token { user, ttl_secs } => cli::token::issue(config, user, ttl_secs),
        Commands::Generate { user, start, end } => {
            cli::generate::run(config, user, start, end).await
        }
    }
}
