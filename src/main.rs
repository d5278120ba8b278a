use rigforge::adapters::outbound::caching::CachingComponentRepository;
use rigforge::adapters::outbound::catalog::load_catalog_store;
use rigforge::adapters::outbound::memory::InMemoryBuildStore;
use rigforge::application::dto::{CompatibilityReport, PartSelection, ValidationReport};
use rigforge::application::use_cases::{
    BuildAssembler, CheckCompatibilityUseCase, ResolvedPart,
};
use rigforge::build_planning::domain::{BuildLine, ComponentId};
use rigforge::cli::{parse_part, Args, OutputFormat};
use rigforge::config::discover_config;
use rigforge::shared::{ExitCode, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use std::process;
use std::str::FromStr;
use std::time::Duration;

/// JSON payload for a successfully validated and priced build.
#[derive(Serialize)]
struct PricedBuild {
    valid: bool,
    lines: Vec<BuildLine>,
    total_price: Decimal,
}

#[tokio::main]
async fn main() {
    let args = Args::parse_args();

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = discover_config(&std::env::current_dir()?)?.unwrap_or_default();

    let format = match (args.format, config.format.as_deref()) {
        (Some(format), _) => format,
        (None, Some(configured)) => {
            // Already validated during config loading.
            OutputFormat::from_str(configured).unwrap_or(OutputFormat::Text)
        }
        (None, None) => OutputFormat::Text,
    };

    let parts = match parse_parts(&args.parts) {
        Ok(parts) => parts,
        Err(message) => {
            eprintln!("❌ {}", message);
            return Ok(ExitCode::InvalidArguments);
        }
    };

    let store = load_catalog_store(&args.catalog)?;
    let components = match config.cache_ttl_seconds {
        Some(ttl) => CachingComponentRepository::with_ttl(store, Duration::from_secs(ttl)),
        None => CachingComponentRepository::new(store),
    };

    match args.candidate {
        Some(candidate) => {
            let selected: Vec<ComponentId> =
                parts.iter().map(|part| part.component_id).collect();
            let use_case = CheckCompatibilityUseCase::new(components);
            let report = use_case.check(&selected, ComponentId(candidate)).await?;
            present_compatibility(&report, format)?;
            Ok(if report.compatible {
                ExitCode::Success
            } else {
                ExitCode::BuildRejected
            })
        }
        None => {
            let assembler = BuildAssembler::new(components, InMemoryBuildStore::new());
            let report = assembler.validate_report(&parts).await?;
            if report.valid {
                let resolved = assembler.validate(&parts).await?;
                present_priced_build(&resolved, format)?;
                Ok(ExitCode::Success)
            } else {
                present_validation_failure(&report, format)?;
                Ok(ExitCode::BuildRejected)
            }
        }
    }
}

fn parse_parts(raw: &[String]) -> std::result::Result<Vec<PartSelection>, String> {
    if raw.is_empty() {
        return Err(
            "No parts selected.\n\n💡 Hint: Pass at least one component with -p <ID[:QTY]>."
                .to_string(),
        );
    }
    raw.iter().map(|part| parse_part(part)).collect()
}

fn present_compatibility(report: &CompatibilityReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Text => {
            if report.compatible {
                println!("✅ Compatible with the selected parts");
            } else if let Some(ref reason) = report.reason {
                println!("❌ Incompatible: {}", reason);
            }
        }
    }
    Ok(())
}

fn present_priced_build(resolved: &[ResolvedPart], format: OutputFormat) -> Result<()> {
    let lines: Vec<BuildLine> = resolved
        .iter()
        .map(|part| BuildLine {
            component_id: part.component.id,
            name: part.component.name.clone(),
            quantity: part.quantity,
            price_at_time: part.component.price,
        })
        .collect();
    let total_price = lines.iter().map(BuildLine::line_total).sum();

    match format {
        OutputFormat::Json => {
            let payload = PricedBuild {
                valid: true,
                lines,
                total_price,
            };
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        OutputFormat::Text => {
            println!("✅ Build is valid\n");
            for line in &lines {
                println!(
                    "  {} x{}  {} ({} each)",
                    line.name,
                    line.quantity,
                    line.line_total(),
                    line.price_at_time
                );
            }
            println!("\nTotal: {}", total_price);
        }
    }
    Ok(())
}

fn present_validation_failure(report: &ValidationReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Text => {
            println!("❌ Build is invalid\n");
            for error in &report.errors {
                println!("  - {}", error);
            }
        }
    }
    Ok(())
}
