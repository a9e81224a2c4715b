use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "view-cli")]
#[command(about = "Client for the Profile View Counter API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show service banner and current count
    Status,
    /// Show count, last update and unique visitors
    Views,
    /// Record one view
    Record,
    /// Fetch the SVG badge
    Badge {
        #[arg(long)]
        label: Option<String>,
        #[arg(long)]
        color: Option<String>,
        #[arg(long)]
        style: Option<String>,
        /// Write the SVG here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check service health
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    match cli.command {
        Commands::Status => {
            let res = client.get(format!("{}/", base)).send().await?;
            print_json(res).await?;
        }
        Commands::Views => {
            let res = client.get(format!("{}/api/views", base)).send().await?;
            print_json(res).await?;
        }
        Commands::Record => {
            let res = client.post(format!("{}/api/views", base)).send().await?;
            print_json(res).await?;
        }
        Commands::Badge { label, color, style, output } => {
            let params: Vec<(&str, String)> = [("label", label), ("color", color), ("style", style)]
                .into_iter()
                .filter_map(|(k, v)| v.map(|v| (k, v)))
                .collect();

            let res = client
                .get(format!("{}/api/badge", base))
                .query(&params)
                .send()
                .await?;
            let svg = read_success(res).await?;

            match output {
                Some(path) => {
                    std::fs::write(&path, svg)?;
                    println!("Badge written to {}", path.display());
                }
                None => print!("{}", svg),
            }
        }
        Commands::Health => {
            let res = client.get(format!("{}/health", base)).send().await?;
            print_json(res).await?;
        }
    }

    Ok(())
}

async fn read_success(res: reqwest::Response) -> Result<String, Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;
    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
        eprintln!("{}", text);
        std::process::exit(1);
    }
    Ok(text)
}

async fn print_json(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_success(res).await?;
    let json: Value = serde_json::from_str(&text)?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
