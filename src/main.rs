use clap::{Parser, Subcommand};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::error::Error;
use std::fs::File;

use vneditor::api::ApiClient;
use vneditor::core::{config, fixtures};
use vneditor::routing::{app_routes, resolve};

#[derive(Parser)]
#[command(name = "vned", about = "Developer client for the visual novel editor backend")]
struct Args {
    /// Backend base URL (overrides VNED_BACKEND_URL and the config file)
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the characters in a project
    Characters { project_id: Option<String> },
    /// Show a single character
    Character { character_id: String },
    /// List the dialogue lines in a project
    Lines { project_id: Option<String> },
    /// Render a project to a Ren'Py script on the backend
    Export { project_id: Option<String> },
    /// Resolve a client-side path against the route table
    Resolve { path: String },
    /// List the registered routes
    Routes,
    /// Print the bundled sample data as JSON
    Samples,
}

/// Prints every named route with its full path pattern.
fn print_routes(routes: &[vneditor::routing::Route], prefix: &str) {
    for route in routes {
        let trimmed = route.path.trim_matches('/');
        let full = if trimmed.is_empty() {
            prefix.to_string()
        } else {
            format!("{prefix}/{trimmed}")
        };
        if let Some(name) = &route.name {
            let shown = if full.is_empty() { "/" } else { full.as_str() };
            println!("{name:<20} {shown}");
        }
        print_routes(&route.children, &full);
    }
}

/// Picks the project id: explicit argument, else the configured default.
fn require_project(
    explicit: Option<String>,
    resolved: &config::ResolvedConfig,
) -> Result<String, Box<dyn Error>> {
    explicit
        .or_else(|| resolved.default_project.clone())
        .ok_or_else(|| "no project id given and no default_project configured".into())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to vned.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("vned.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config()?;
    let resolved = config::resolve(&file_config, args.base_url.as_deref());
    log::info!("vned starting up against {}", resolved.base_url);

    let client = ApiClient::new(Some(resolved.base_url.clone()));

    match args.command {
        Command::Characters { project_id } => {
            let project_id = require_project(project_id, &resolved)?;
            let characters = client.characters().by_project(&project_id).await?;
            println!("{}", serde_json::to_string_pretty(&characters)?);
        }
        Command::Character { character_id } => {
            let character = client.characters().get(&character_id).await?;
            println!("{}", serde_json::to_string_pretty(&character)?);
        }
        Command::Lines { project_id } => {
            let project_id = require_project(project_id, &resolved)?;
            let lines = client.dialogue().lines(&project_id).await?;
            println!("{}", serde_json::to_string_pretty(&lines)?);
        }
        Command::Export { project_id } => {
            let project_id = require_project(project_id, &resolved)?;
            let result = client.dialogue().export(&project_id).await?;
            match result.script_path {
                Some(path) => println!("exported project {} to {}", result.project_id, path),
                None => println!(
                    "exported project {}: {}",
                    result.project_id,
                    result.message.unwrap_or_default()
                ),
            }
        }
        Command::Resolve { path } => {
            let found = resolve(&app_routes(), &path)?;
            println!("route:  {}", found.name);
            println!("view:   {:?}", found.view);
            if !found.params.is_empty() {
                println!("params: {:?}", found.params);
            }
            if let Some(layout) = found.meta.get("layout") {
                println!("layout: {layout}");
            }
        }
        Command::Routes => {
            print_routes(&app_routes(), "");
        }
        Command::Samples => {
            let samples = serde_json::json!({
                "characters": fixtures::sample_characters(),
                "projects": fixtures::sample_projects(),
            });
            println!("{}", serde_json::to_string_pretty(&samples)?);
        }
    }

    Ok(())
}
