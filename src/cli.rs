use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::PartSelection;
use crate::build_planning::domain::ComponentId;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'text' or 'json'",
                s
            )),
        }
    }
}

/// Validate PC part lists for compatibility and price them
#[derive(Parser, Debug)]
#[command(name = "rigforge")]
#[command(version = "0.4.1")]
#[command(about = "Validate PC part lists for compatibility and price them", long_about = None)]
pub struct Args {
    /// Path to the JSON component catalog
    #[arg(short, long)]
    pub catalog: PathBuf,

    /// Selected parts as component ids, optionally with a quantity:
    /// "42" or "42:2". Can be specified multiple times: -p 1 -p 7:2
    #[arg(short, long = "part", value_name = "ID[:QTY]")]
    pub parts: Vec<String>,

    /// Check a single candidate component against the selected parts
    /// instead of validating the full build
    #[arg(long)]
    pub candidate: Option<u64>,

    /// Output format: text or json (defaults to the config file's
    /// format, then to text)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Parses one `id[:qty]` part argument.
pub fn parse_part(raw: &str) -> Result<PartSelection, String> {
    let (id, quantity) = match raw.split_once(':') {
        Some((id, qty)) => {
            let quantity: u32 = qty
                .parse()
                .map_err(|_| format!("Invalid quantity in part '{}': {}", raw, qty))?;
            (id, quantity)
        }
        None => (raw, 1),
    };

    let id: u64 = id
        .parse()
        .map_err(|_| format!("Invalid component id in part '{}': {}", raw, id))?;

    Ok(PartSelection::new(ComponentId(id), quantity))
}
