//! Uganda Directory - Main entry point
//!
//! A terminal front end over the directory library: browse regions and
//! districts, then manage a district's broadcast list and send SMS
//! broadcasts through the configured backend.

use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;
use uganda_directory::workflow::{AddNumberOutcome, BroadcastOutcome};
use uganda_directory::{
    Catalog, Config, NotificationKind, SmsClient, SmsGateway, SmsGatewayImpl, SubmissionWorkflow,
};

/// `RUST_LOG` wins when set; the configured level is the fallback.
fn log_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Config first: its log_level seeds the subscriber filter
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&config.log_level))
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded successfully");

    let catalog = match &config.catalog_path {
        Some(path) => {
            info!("Loading catalog from {}", path);
            Catalog::from_file(path)?
        }
        None => Catalog::uganda_default(),
    };

    let client = SmsClient::new(&config);
    let gateway = Arc::new(SmsGatewayImpl::new(client)) as Arc<dyn SmsGateway>;

    info!(
        "Uganda Directory ready: {} regions, add-number endpoint {}",
        catalog.regions().len(),
        config.add_number_api_url
    );

    run(&catalog, gateway, &config).await
}

async fn run(catalog: &Catalog, gateway: Arc<dyn SmsGateway>, config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("\nUganda Directory - Regions");
        for region in catalog.regions() {
            println!("  {} ({} districts)", region.name, region.districts.len());
        }
        print!("Region name (or 'quit'): ");
        io::stdout().flush()?;

        let input = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };
        let input = input.trim();
        if input == "quit" {
            return Ok(());
        }

        let region = match catalog.region(input) {
            Ok(region) => region,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        println!("\n{} Region - Districts", region.name);
        for district in &region.districts {
            println!("  {} ({} contacts)", district.name, district.contact_count());
        }
        print!("District name (or 'back'): ");
        io::stdout().flush()?;

        let input = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };
        let input = input.trim();
        if input == "back" {
            continue;
        }

        let district = match catalog.district(&region.name, input) {
            Ok(district) => district,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        let mut workflow = SubmissionWorkflow::new(
            region.name.clone(),
            district,
            gateway.clone(),
            Duration::from_secs(config.notification_ttl_secs),
        );

        district_session(&mut workflow, &mut lines).await?;
    }
}

/// Per-district command loop: list recipients, add numbers, send broadcasts.
///
/// The broadcast list is session-scoped; leaving and re-entering the district
/// rebuilds it from the catalog seeds.
async fn district_session(
    workflow: &mut SubmissionWorkflow,
    lines: &mut io::Lines<io::StdinLock<'_>>,
) -> Result<()> {
    println!("\nSMS Broadcasting - commands: list, add <number>, send, back");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };
        let line = line.trim();

        match line {
            "back" => return Ok(()),
            "list" => {
                if workflow.list().is_empty() {
                    println!("No phone numbers are currently registered for this district.");
                } else {
                    println!("Recipients in broadcast list: {}", workflow.list().len());
                    for number in workflow.list().numbers() {
                        println!("  {}", number);
                    }
                }
            }
            "send" => {
                let outcome = workflow
                    .broadcast(|count| {
                        print!("Send an SMS broadcast to {} recipients? (y/n): ", count);
                        let _ = io::stdout().flush();
                        match lines.next() {
                            Some(Ok(answer)) => answer.trim().eq_ignore_ascii_case("y"),
                            _ => false,
                        }
                    })
                    .await;
                if matches!(outcome, BroadcastOutcome::Declined) {
                    println!("Broadcast cancelled.");
                }
                print_notification(workflow);
            }
            other => {
                if let Some(number) = other.strip_prefix("add ") {
                    let outcome = workflow.add_number(number.trim()).await;
                    if matches!(outcome, AddNumberOutcome::Added) {
                        println!("Recipients in broadcast list: {}", workflow.list().len());
                    }
                    print_notification(workflow);
                } else if !other.is_empty() {
                    println!("Unknown command: {}", other);
                }
            }
        }
    }
}

fn print_notification(workflow: &SubmissionWorkflow) {
    if let Some(notification) = workflow.notification() {
        let tag = match notification.kind {
            NotificationKind::Success => "ok",
            NotificationKind::Warning => "warning",
            NotificationKind::Error => "error",
        };
        println!("[{}] {}", tag, notification.message);
    }
}
