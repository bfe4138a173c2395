//! CLI command handlers that bridge CLI arguments to library operations

use crate::cli_bin::args::*;
use anyhow::{Context, Result};
use log::{debug, info};
use textmode::{ParsedRecord, ResourceType, TextMode};

/// Execute the read command
pub async fn read_command(args: ReadArgs) -> Result<()> {
    debug!("Executing read command with args: {:?}", args);

    let resource_type = build_resource_type(&args.resource).await?;
    let record = TextMode::new()
        .read_file(&args.file, Some(&resource_type))
        .await?;

    output_record(&record, args.format, args.pretty)
}

/// Execute the write command
pub async fn write_command(args: WriteArgs) -> Result<()> {
    debug!("Executing write command with args: {:?}", args);

    let resource_type = build_resource_type(&args.resource).await?;
    let body = match (&args.body, &args.body_file) {
        (Some(body), _) => Some(body.clone()),
        (None, Some(path)) => Some(
            tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read body from {}", path.display()))?,
        ),
        (None, None) => None,
    };
    let record = body.map(ParsedRecord::body_only);

    TextMode::new()
        .write_file(&args.file, record.as_ref(), Some(&resource_type))
        .await?;
    info!("Wrote {}", args.file.display());
    Ok(())
}

/// Execute the copy command
pub async fn copy_command(args: CopyArgs) -> Result<()> {
    debug!("Executing copy command with args: {:?}", args);

    let resource_type = build_resource_type(&args.resource).await?;
    let mode = TextMode::new();
    let record = mode.read_file(&args.source, Some(&resource_type)).await?;
    mode.write_file(&args.destination, Some(&record), Some(&resource_type))
        .await?;

    info!(
        "Copied body of {} to {} ({})",
        args.source.display(),
        args.destination.display(),
        record.encoding().unwrap_or_default()
    );
    Ok(())
}

/// Build a resource type from an optional YAML file plus flag overrides
async fn build_resource_type(options: &ResourceTypeOptions) -> Result<ResourceType> {
    let mut resource_type = match &options.resource_type {
        Some(path) => {
            let text = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read resource type {}", path.display()))?;
            ResourceType::from_yaml_str(&text)
                .with_context(|| format!("Invalid resource type {}", path.display()))?
        }
        None => ResourceType::new(),
    };

    if let Some(encoding) = &options.encoding {
        resource_type = resource_type.with_encoding(encoding.clone());
    }
    if options.no_frontmatter {
        resource_type = resource_type.with_parse_frontmatter(false);
    }
    Ok(resource_type)
}

fn output_record(record: &ParsedRecord, format: OutputFormat, pretty: bool) -> Result<()> {
    match format {
        OutputFormat::Yaml => {
            let output = serde_yaml::to_string(record)?;
            print!("{}", output);
        }
        OutputFormat::Json => {
            let output = if pretty {
                serde_json::to_string_pretty(record)?
            } else {
                serde_json::to_string(record)?
            };
            println!("{}", output);
        }
    }
    Ok(())
}
