mod adapters;
mod application;
mod cli;
mod detection;
mod ports;
mod shared;

use application::{BuiltWith, LookupResult};
use cli::{Args, OutputFormat};
use detection::DomainInfo;
use owo_colors::OwoColorize;
use shared::error::ExitCode;
use shared::Result;
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Version validation happens here, before any network activity
    let client = BuiltWith::new(args.key, args.api_version)?;

    let result = client.lookup(&args.domain).await?;

    match (args.format, &result) {
        (OutputFormat::Json, LookupResult::Raw(value)) => {
            println!("{}", serde_json::to_string_pretty(value)?);
        }
        (OutputFormat::Json, LookupResult::Detail(info)) => {
            println!("{}", serde_json::to_string_pretty(info.raw())?);
        }
        (OutputFormat::Text, LookupResult::Raw(value)) => {
            // Version 1 responses have no fixed shape to render
            println!("{}", serde_json::to_string_pretty(value)?);
        }
        (OutputFormat::Text, LookupResult::Detail(info)) => {
            print_domain_info(info);
        }
    }

    Ok(())
}

fn print_domain_info(info: &DomainInfo) {
    for (url, technologies) in info {
        let host = if url.subdomain.is_empty() {
            url.domain.clone()
        } else {
            format!("{}.{}", url.subdomain, url.domain)
        };
        println!("{}{}", host.cyan().bold(), url.path);

        for technology in technologies {
            let liveness = if technology.currently_live {
                "live".green().to_string()
            } else {
                "stale".yellow().to_string()
            };
            println!(
                "  {} [{}] ({}) first {} / last {}",
                technology.name.bold(),
                technology.tag,
                liveness,
                technology.first_detected.format("%Y-%m-%d"),
                technology.last_detected.format("%Y-%m-%d"),
            );
        }
        println!();
    }
}
