//! Prop-firm challenge operations desk CLI

use clap::{Parser, Subcommand};
use propdesk::{
    client::PropFirmClient,
    config::Config,
    notify::Notifier,
    pricing::{self, ConfigSource},
    types::{ChallengeCode, TerminationReason, Trader},
    workflow::{BreachWorkflowCoordinator, TriageState},
};
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "propdesk")]
#[command(about = "Operations desk for a prop-firm trading challenge platform")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// List challenge types
    Challenges,
    /// Show resolved pricing tiers for a challenge code
    Tiers {
        /// Challenge code (e.g. CLASSIC_2STEP)
        code: String,
    },
    /// Run a breach check and show the results
    Check,
    /// Terminate a breached challenge
    Terminate {
        /// Challenge ID from the breach results
        #[arg(long)]
        challenge_id: String,
        /// Termination reason (e.g. "Max Daily Loss")
        #[arg(long)]
        reason: String,
    },
    /// List notification templates
    Templates,
    /// Preview a template rendered for a trader
    Preview {
        /// Template ID
        #[arg(long)]
        template_id: String,
        #[arg(long, default_value = "Jane Doe")]
        trader_name: String,
        #[arg(long, default_value = "ACC-0001")]
        account_id: String,
        #[arg(long, default_value = "10000")]
        initial_balance: Decimal,
        #[arg(long, default_value = "10000")]
        current_equity: Decimal,
        #[arg(long)]
        breach_reason: Option<String>,
    },
    /// Send a templated email to a user
    SendEmail {
        #[arg(long)]
        user_id: String,
        #[arg(long)]
        template_id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;
    let client = PropFirmClient::new(&config)?;

    match cli.command {
        Commands::Challenges => list_challenges(&client).await,
        Commands::Tiers { code } => show_tiers(&client, &code).await,
        Commands::Check => run_check(client).await,
        Commands::Terminate {
            challenge_id,
            reason,
        } => terminate(client, &challenge_id, &reason).await,
        Commands::Templates => list_templates(&client).await,
        Commands::Preview {
            template_id,
            trader_name,
            account_id,
            initial_balance,
            current_equity,
            breach_reason,
        } => {
            let trader = Trader {
                user_id: String::new(),
                name: trader_name,
                account_id,
                initial_balance,
                current_equity,
                breach_reason,
            };
            preview(client, &config, &template_id, &trader).await
        }
        Commands::SendEmail {
            user_id,
            template_id,
        } => send_email(client, &config, &user_id, &template_id).await,
    }
}

async fn list_challenges(client: &PropFirmClient) -> anyhow::Result<()> {
    let types = client.challenge_types().await?;
    for ct in types {
        println!(
            "{:<15} {:<30} active={} recommended={}",
            ct.code, ct.name, ct.is_active, ct.recommended
        );
    }
    Ok(())
}

async fn show_tiers(client: &PropFirmClient, code: &str) -> anyhow::Result<()> {
    let code = ChallengeCode::from_str(code)?;
    let tiers = pricing::resolve_from_source(client, code).await;

    println!("Tiers for {}:", code);
    for tier in tiers {
        match (tier.phase1_price, tier.phase2_price) {
            (Some(p1), Some(p2)) => println!(
                "  ${:<9} phase1 ${} / phase2 ${} (regular ${})",
                tier.account_size, p1, p2, tier.regular_price
            ),
            _ => println!(
                "  ${:<9} ${} (regular ${})",
                tier.account_size, tier.discount_price, tier.regular_price
            ),
        }
    }
    Ok(())
}

async fn run_check(client: PropFirmClient) -> anyhow::Result<()> {
    let mut coordinator = BreachWorkflowCoordinator::new(client);
    coordinator.run_check().await?;

    print_results(coordinator.state());
    Ok(())
}

async fn terminate(client: PropFirmClient, challenge_id: &str, reason: &str) -> anyhow::Result<()> {
    let reason = TerminationReason::from_str(reason)?;
    let mut coordinator = BreachWorkflowCoordinator::new(client);
    coordinator.run_check().await?;

    let index = coordinator
        .breaches()
        .and_then(|breaches| breaches.iter().position(|b| b.challenge_id == challenge_id))
        .ok_or_else(|| anyhow::anyhow!("No breach found for challenge {}", challenge_id))?;

    coordinator.select_breach(index)?;
    coordinator.set_reason(reason)?;
    coordinator.confirm().await?;

    println!("Challenge {} terminated ({})", challenge_id, reason);
    print_results(coordinator.state());
    Ok(())
}

fn print_results(state: &TriageState) {
    if let TriageState::Results(report) = state {
        println!(
            "{} breach(es) found at {}",
            report.breaches_found, report.checked_at
        );
        for (i, b) in report.breaches.iter().enumerate() {
            println!(
                "  [{}] {} ({}) challenge={} {}: {} vs limit {} - {}",
                i,
                b.trader_name,
                b.account_id,
                b.challenge_id,
                b.breach_type,
                b.breach_value,
                b.threshold_value,
                b.description
            );
        }
    }
}

async fn list_templates(client: &PropFirmClient) -> anyhow::Result<()> {
    let templates = client.email_templates().await?;
    for t in templates {
        println!("{:<10} {:<25} {}", t.id, t.name, t.subject);
    }
    Ok(())
}

async fn preview(
    client: PropFirmClient,
    config: &Config,
    template_id: &str,
    trader: &Trader,
) -> anyhow::Result<()> {
    let notifier = Notifier::new(client, config.company.name.clone());
    let templates = notifier.templates().await?;
    let template = templates
        .iter()
        .find(|t| t.id == template_id)
        .ok_or_else(|| anyhow::anyhow!("No template with id {}", template_id))?;

    let rendered = notifier.preview(template, trader);
    println!("Subject: {}", rendered.subject);
    println!("---");
    println!("{}", rendered.body);
    Ok(())
}

async fn send_email(
    client: PropFirmClient,
    config: &Config,
    user_id: &str,
    template_id: &str,
) -> anyhow::Result<()> {
    let notifier = Notifier::new(client, config.company.name.clone());
    let templates = notifier.templates().await?;
    let template = templates
        .iter()
        .find(|t| t.id == template_id)
        .ok_or_else(|| anyhow::anyhow!("No template with id {}", template_id))?;

    let trader = Trader {
        user_id: user_id.to_string(),
        name: String::new(),
        account_id: String::new(),
        initial_balance: Decimal::ZERO,
        current_equity: Decimal::ZERO,
        breach_reason: None,
    };
    notifier.send(Some(&trader), Some(template)).await?;
    println!("Email sent to user {}", user_id);
    Ok(())
}
