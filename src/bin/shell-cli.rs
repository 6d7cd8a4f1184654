use clap::{Parser, Subcommand};
use serde::Serialize;

use page_shell::config::SiteConfig;
use page_shell::{MemoryHistory, Page, Shell};

#[derive(Parser)]
#[command(name = "shell-cli")]
#[command(about = "Inspect and exercise the page shell routes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the route table in evaluation order
    Routes,
    /// Show which page each path dispatches to (JSON)
    Dispatch {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Render the full HTML document for a path
    Render {
        path: String,
        #[arg(short, long, default_value = "Page Shell")]
        title: String,
    },
    /// Replay navigation steps; "back" and "forward" move through history
    Walk {
        #[arg(required = true)]
        steps: Vec<String>,
    },
    /// Fetch a path from a running server
    Fetch {
        path: String,
        #[arg(short, long, default_value = "http://localhost:8080")]
        url: String,
    },
}

#[derive(Serialize)]
struct Dispatched<'a> {
    path: &'a str,
    page: Page,
    text: &'static str,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let shell = Shell::default();

    match cli.command {
        Commands::Routes => {
            for route in shell.routes().routes() {
                println!("{:<10} {}", route.pattern(), route.page());
            }
        }
        Commands::Dispatch { paths } => {
            let results: Vec<Dispatched> = paths
                .iter()
                .map(|path| {
                    let page = shell.dispatch(path);
                    Dispatched { path, page, text: page.text() }
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        Commands::Render { path, title } => {
            let shell = Shell::standard(SiteConfig { title });
            println!("{}", shell.render(&path).html);
        }
        Commands::Walk { steps } => {
            let mut history = MemoryHistory::default();
            println!("{:<24} {}", history.location(), shell.render_current(&history).page);
            for step in steps {
                match step.as_str() {
                    "back" => {
                        history.back();
                    }
                    "forward" => {
                        history.forward();
                    }
                    path => history.push(path),
                }
                println!("{:<24} {}", history.location(), shell.render_current(&history).page);
            }
        }
        Commands::Fetch { path, url } => {
            let res = reqwest::get(format!("{}{}", url.trim_end_matches('/'), path)).await?;
            println!("Status: {}", res.status());
            if let Some(id) = res.headers().get("x-request-id") {
                println!("Request ID: {}", id.to_str()?);
            }
            println!("{}", res.text().await?);
        }
    }

    Ok(())
}
