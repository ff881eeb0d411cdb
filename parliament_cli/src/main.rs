mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use parliament_lib::types::Engagement;
use parliament_lib::{Client, Settings};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "parliament")]
#[command(about = "Follow bills, MPs, committees and loans in parliament")]
struct Cli {
    /// Output format: table, json or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Backend API base URL (overrides config and PARLIAMENT_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List bills before parliament
    Bills(commands::bills::BillsArgs),
    /// Show one bill with its readings
    Bill(commands::bills::BillArgs),
    /// Like a bill
    Like(commands::bills::EngageArgs),
    /// Record a comment on a bill
    Comment(commands::bills::EngageArgs),
    /// Share a bill
    Share(commands::bills::EngageArgs),
    /// List news articles
    News(commands::news::NewsArgs),
    /// Show one news article
    Article(commands::news::ArticleArgs),
    /// List members of parliament
    Mps(commands::mps::MpsArgs),
    /// Show one member of parliament
    Mp(commands::mps::MpArgs),
    /// List parliamentary committees
    Committees(commands::committees::CommitteesArgs),
    /// Show one committee with its members and documents
    Committee(commands::committees::CommitteeArgs),
    /// List loans approved by parliament
    Loans(commands::loans::LoansArgs),
    /// Show one loan with its documents
    Loan(commands::loans::LoanArgs),
    /// List "hot in parliament" items
    Hot(commands::hot::HotArgs),
    /// Show one "hot in parliament" item
    HotItem(commands::hot::HotItemArgs),
    /// Ask the parliament chatbot
    Chat(commands::chat::ChatArgs),
    /// Send a message to the site team
    Contact(commands::contact::ContactArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("parliament=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "markdown" | "md" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let mut settings = Settings::load()?;
    if let Some(api_url) = &cli.api_url {
        settings = settings.with_api_url(api_url);
    }
    let client = Client::new(settings.client_config())?;

    match &cli.command {
        Commands::Bills(args) => commands::bills::run_list(args, &client, &format).await?,
        Commands::Bill(args) => commands::bills::run_detail(args, &client, &format).await?,
        Commands::Like(args) => {
            commands::bills::run_engage(args, Engagement::Like, &client, &format).await?
        }
        Commands::Comment(args) => {
            commands::bills::run_engage(args, Engagement::Comment, &client, &format).await?
        }
        Commands::Share(args) => {
            commands::bills::run_engage(args, Engagement::Share, &client, &format).await?
        }
        Commands::News(args) => commands::news::run_list(args, &client, &format).await?,
        Commands::Article(args) => commands::news::run_detail(args, &client, &format).await?,
        Commands::Mps(args) => commands::mps::run_list(args, &client, &format).await?,
        Commands::Mp(args) => commands::mps::run_detail(args, &client, &format).await?,
        Commands::Committees(args) => {
            commands::committees::run_list(args, &client, &format).await?
        }
        Commands::Committee(args) => {
            commands::committees::run_detail(args, &client, &format).await?
        }
        Commands::Loans(args) => commands::loans::run_list(args, &client, &format).await?,
        Commands::Loan(args) => commands::loans::run_detail(args, &client, &format).await?,
        Commands::Hot(args) => commands::hot::run_list(args, &client, &format).await?,
        Commands::HotItem(args) => commands::hot::run_detail(args, &client, &format).await?,
        Commands::Chat(args) => commands::chat::run(args, &client, &settings, &format).await?,
        Commands::Contact(args) => commands::contact::run(args, &client, &format).await?,
    }

    Ok(())
}
