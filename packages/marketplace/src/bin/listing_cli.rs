//! Command-line host for the marketplace forms
//!
//! Stands in for the mobile screens: reads drafts from JSON files, drives the
//! form controllers against in-memory collaborators and prints JSON results.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use marketplace_core::config::Config;
use marketplace_core::domains::listings::{
    ListingDraft, ListingField, ListingFormController, ShippingField,
};
use marketplace_core::domains::seller_registration::SellerRegistrationForm;
use marketplace_core::domains::support_chat::SupportChat;
use marketplace_core::kernel::MarketplaceDeps;

#[derive(Parser)]
#[command(name = "listing_cli")]
#[command(about = "Drive the BookBuddies listing, chat and seller forms from the shell")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a listing draft and print the payload it would submit
    Validate { draft: PathBuf },

    /// Post a listing draft to the in-memory store
    Post {
        draft: PathBuf,
        /// Draft to apply as an edit of the freshly posted listing
        #[arg(long)]
        revise: Option<PathBuf>,
    },

    /// Send messages to support and print the transcript
    Chat { messages: Vec<String> },

    /// Validate and submit a seller registration form
    Register { form: PathBuf },
}

#[derive(Serialize)]
struct Response<T: Serialize> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

fn output<T: Serialize>(resp: Response<T>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&resp)?);
    Ok(())
}

fn success<T: Serialize>(data: T) -> Result<()> {
    output(Response {
        success: true,
        message: None,
        data: Some(data),
    })
}

fn failure(message: impl ToString) -> Result<()> {
    output::<()>(Response {
        success: false,
        message: Some(message.to_string()),
        data: None,
    })
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let deps = MarketplaceDeps::in_memory();

    match cli.command {
        Commands::Validate { draft } => cmd_validate(&deps, &draft),
        Commands::Post { draft, revise } => cmd_post(&deps, &config, &draft, revise.as_deref()).await,
        Commands::Chat { messages } => cmd_chat(&config, &messages).await,
        Commands::Register { form } => cmd_register(&deps, &form).await,
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Replay a saved draft through the controller, field by field
fn apply_draft(controller: &mut ListingFormController, draft: &ListingDraft) {
    controller.set_field(ListingField::Title, &draft.title);
    controller.set_field(ListingField::Author, &draft.author);
    controller.set_field(ListingField::Price, &draft.price_text);
    controller.set_field(ListingField::Description, &draft.description);
    controller.set_category(draft.category);
    controller.set_image(draft.image_ref.clone());

    controller.set_shipping_method(draft.shipping.method);
    controller.set_shipping_field(ShippingField::Cost, &draft.shipping.cost_text);
    controller.set_shipping_field(ShippingField::Address, &draft.shipping.address);
    controller.set_shipping_field(ShippingField::City, &draft.shipping.city);
    controller.set_shipping_field(ShippingField::PostalCode, &draft.shipping.postal_code);
}

// ============================================================================
// Commands
// ============================================================================

fn cmd_validate(deps: &MarketplaceDeps, path: &Path) -> Result<()> {
    let draft: ListingDraft = read_json(path)?;
    let mut controller = ListingFormController::new(deps.listing_store.clone());
    apply_draft(&mut controller, &draft);

    match controller.validate() {
        Ok(payload) => success(payload),
        Err(e) => failure(e),
    }
}

async fn cmd_post(
    deps: &MarketplaceDeps,
    config: &Config,
    path: &Path,
    revise: Option<&Path>,
) -> Result<()> {
    let draft: ListingDraft = read_json(path)?;
    let mut controller = ListingFormController::new(deps.listing_store.clone());
    apply_draft(&mut controller, &draft);

    let listing = match controller.submit().await {
        Ok(listing) => listing,
        Err(e) => return failure(e),
    };
    tracing::info!(
        listing_id = %listing.id,
        price = %listing.price,
        currency = %config.currency,
        "Listing posted"
    );

    let Some(revise) = revise else {
        return success(listing);
    };

    let revision: ListingDraft = read_json(revise)?;
    let mut editor = ListingFormController::for_existing(deps.listing_store.clone(), &listing);
    apply_draft(&mut editor, &revision);

    match editor.submit().await {
        Ok(updated) => success(updated),
        Err(e) => failure(e),
    }
}

async fn cmd_chat(config: &Config, messages: &[String]) -> Result<()> {
    let mut chat = SupportChat::new(config.chat_config());

    for text in messages {
        if let Err(e) = chat.send_message(text) {
            tracing::warn!(error = %e, "Skipping message");
        }
    }
    chat.flush_replies().await;

    success(chat.messages())
}

async fn cmd_register(deps: &MarketplaceDeps, path: &Path) -> Result<()> {
    let form: SellerRegistrationForm = read_json(path)?;

    match form.submit(deps.seller_registry.as_ref()).await {
        Ok(application) => success(application),
        Err(e) => failure(e),
    }
}
