//! Wobble CLI - command-line front end for the Wobble client library.
//!
//! Logs in, then runs a single call or tails the notification stream until
//! Ctrl-C.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use wobble_core::{Subscription, WobbleClient, WobbleError};

#[derive(Parser, Debug)]
#[command(name = "wobble")]
#[command(about = "Command-line client for a Wobble server")]
struct Args {
    /// JSON-RPC endpoint URL
    #[arg(long, env = "WOBBLE_ENDPOINT")]
    endpoint: String,

    /// Account email (calls run anonymously without it)
    #[arg(long, env = "WOBBLE_EMAIL")]
    email: Option<String>,

    /// Account password
    #[arg(long, env = "WOBBLE_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the server API version
    Version,
    /// Print the logged-in user
    Whoami,
    /// List inbox topics
    Inbox,
    /// List contacts
    Contacts,
    /// Print notifications as they arrive, until Ctrl-C
    Watch,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging; RUST_LOG overrides the flag
    let default_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .compact()
        .init();

    let mut client = WobbleClient::connect(&args.endpoint)
        .with_context(|| format!("Invalid endpoint {}", args.endpoint))?;

    if let Some(email) = &args.email {
        let password = args
            .password
            .as_deref()
            .context("--password is required with --email")?;
        client.login(email, password).await.context("Login failed")?;
    }

    match args.command {
        Command::Version => println!("{}", client.api_version().await?),
        Command::Whoami => print_json(&client.current_user().await?)?,
        Command::Inbox => print_json(&client.list_inbox_topics().await?)?,
        Command::Contacts => print_json(&client.contacts().await?)?,
        Command::Watch => watch(&client).await?,
    }

    if client.session().is_authenticated() {
        if let Err(e) = client.logout().await {
            warn!("Logout failed: {}", e);
        }
    }

    Ok(())
}

async fn watch(client: &WobbleClient) -> Result<()> {
    let mut subscription = client.subscribe_notifications();
    info!("Watching notifications on {}", client.config().endpoint);

    let outcome = tokio::select! {
        result = print_notifications(&mut subscription) => result,
        signal = tokio::signal::ctrl_c() => {
            signal?;
            info!("Shutdown signal received, stopping");
            Ok(())
        }
    };

    // The loop may be parked in a long poll; do not wait for it.
    subscription.abort();
    outcome
}

async fn print_notifications(subscription: &mut Subscription) -> Result<()> {
    loop {
        match subscription.next_notification().await {
            Ok(notification) => println!("{}", serde_json::to_string(&notification)?),
            Err(WobbleError::SubscriptionClosed) => return Ok(()),
            Err(e) => return Err(e).context("Notification stream failed"),
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
