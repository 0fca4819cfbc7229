//! Samples command - sample names by type.

use anyhow::Result;
use clap::Args;
use console::{Style, style};

use super::Context;

/// Arguments for the samples command.
#[derive(Args, Debug)]
pub struct SamplesArgs {
    /// Sample type to list (e.g. Plasmid); lists types when omitted
    pub sample_type: Option<String>,
}

/// Run the samples command.
pub async fn run(args: SamplesArgs, ctx: &Context) -> Result<()> {
    let (client, _) = ctx.connect().await?;
    let samples = client.samples();
    let catalog = samples.get_sample_names().await?;
    let dim = Style::new().dim();

    match args.sample_type.as_deref() {
        Some(sample_type) => {
            let names = samples.sample_names_for(Some(sample_type));
            if ctx.json_output {
                println!("{}", serde_json::to_string_pretty(&names)?);
            } else if names.is_empty() {
                println!("{}", dim.apply_to(format!("No samples of type '{}'", sample_type)));
            } else {
                for name in names {
                    println!("{}", name);
                }
            }
        }
        None => {
            if ctx.json_output {
                println!("{}", serde_json::to_string_pretty(&*catalog)?);
            } else {
                println!("{}", style("Sample types").bold());
                for type_name in catalog.type_names() {
                    let count = catalog.names(type_name).map_or(0, <[String]>::len);
                    println!("  {} {}", type_name, dim.apply_to(format!("({})", count)));
                }
            }
        }
    }

    Ok(())
}
