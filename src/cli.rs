use clap::{Args, Parser, Subcommand};

use crate::{ApiResponse, Importer, Source};

#[derive(Parser)]
#[command(name = "garimpo", version, about = "Product extraction from merchant pages (JSON only)")]
pub struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Import a product from a merchant URL (Amazon, Havan or Shopee)
    Import(ImportArgs),
    /// Classify a URL without fetching anything
    Classify(ClassifyArgs),
}

#[derive(Args)]
struct ImportArgs {
    /// The product page URL. Unsupported merchants are rejected before any
    /// network request.
    url: String,
    /// Include the per-strategy trace in the output
    #[arg(long)]
    trace: bool,
}

#[derive(Args)]
struct ClassifyArgs {
    url: String,
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Import(args) => {
            let importer = Importer::new()?;
            match importer.import(&args.url).await {
                Ok(outcome) if args.trace => print_json(ApiResponse::ok(outcome)),
                Ok(outcome) => print_json(ApiResponse::ok(outcome.product)),
                Err(e) => print_json(ApiResponse::<()>::err(e.to_string())),
            }
        }
        Command::Classify(args) => {
            let source = Source::classify(&args.url);
            print_json(ApiResponse::ok(serde_json::json!({
                "url": args.url,
                "source": source.label(),
                "supported": source != Source::Unsupported,
            })));
        }
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(val: T) {
    // pretty JSON output
    println!("{}", serde_json::to_string_pretty(&val).unwrap());
}
