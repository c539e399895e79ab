//! Example demonstrating recipient dispatch end to end
//!
//! Run with the mock provider (no credentials needed):
//!
//! ```text
//! cargo run --example dispatch_demo -- "(201) 381-4794, 617-555-0199" "Hello!"
//! ```
//!
//! Point it at Vonage by exporting `SMS_PROVIDER=vonage`, `SMS_API_KEY`,
//! `SMS_API_SECRET` and `SMS_FROM_NUMBER`.

use sc_core::services::dispatch::{DispatchConfig, DispatchService};
use sc_infra::sms::create_sms_provider;
use sc_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    let provider = create_sms_provider(&config.sms);

    let mut args = std::env::args().skip(1);
    let numbers = args
        .next()
        .unwrap_or_else(|| "(201) 381-4794, 617-555-0199".to_string());
    let message = args.next().unwrap_or_else(|| "Hello from SmsCast!".to_string());

    println!(
        "Dispatching via {} provider ({} environment)\n",
        provider.provider_name(),
        config.environment
    );

    let service = DispatchService::new(provider, DispatchConfig::from(&config.sms));
    let outcomes = service.dispatch(&numbers, &message).await;

    for outcome in &outcomes {
        match (&outcome.message_id(), &outcome.error()) {
            (Some(id), _) => println!("✓ {} sent, message id {}", outcome.recipient, id),
            (_, Some(error)) => println!("✗ {} failed: {}", outcome.recipient, error),
            _ => {}
        }
    }

    let sent = outcomes.iter().filter(|o| o.is_sent()).count();
    println!("\n{} sent, {} failed", sent, outcomes.len() - sent);

    Ok(())
}
