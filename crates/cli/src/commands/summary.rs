use super::{load_config, load_dataset, Format};
use colored::*;
use core_permissions::{property_groups, summarize, HeaderSummary, PropertyGroup};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct Summary<'a> {
    headers: Vec<HeaderSummary<'a>>,
    property_groups: Vec<PropertyGroup<'a>>,
}

pub fn run(
    file: &Path,
    headers: &[String],
    config: Option<&Path>,
    format: Format,
) -> anyhow::Result<()> {
    let config = load_config(config)?;
    let dataset = load_dataset(file)?;

    let selected: Vec<&str> = if headers.is_empty() {
        dataset.headers().iter().map(String::as_str).collect()
    } else {
        headers.iter().map(String::as_str).collect()
    };

    if let Some(unknown) = selected
        .iter()
        .find(|h| !dataset.headers().iter().any(|known| known == *h))
    {
        anyhow::bail!("Unknown column: {}", unknown);
    }

    let summary = Summary {
        headers: summarize(dataset.rows(), &selected, config.property_top_values),
        property_groups: property_groups(dataset.rows(), &selected, config.property_sample_size),
    };

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
        Format::Text => print_text(file, dataset.row_count(), &summary),
    }

    Ok(())
}

fn print_text(file: &Path, rows: usize, summary: &Summary<'_>) {
    println!("{} {} ({} rows)", "Data summary:".bold(), file.display(), rows);

    for header in &summary.headers {
        println!();
        println!("{}", header.header.bold());
        println!("  Non-empty values: {}", header.count);
        println!("  Unique values:    {}", header.unique_values);
        println!(
            "  Most common:      {} ({})",
            if header.most_common.value.is_empty() {
                "(empty)"
            } else {
                header.most_common.value
            },
            header.most_common.count
        );

        for stat in &header.property_stats {
            let values: Vec<String> = stat
                .values
                .iter()
                .map(|v| format!("{}={}", v.value, v.count))
                .collect();
            println!("    {} {}", stat.key.cyan(), values.join("  "));
        }
    }

    if !summary.property_groups.is_empty() {
        println!();
        println!("{}", "Shared property keys".bold());
        for group in &summary.property_groups {
            println!(
                "  {} {} columns: {}",
                group.key.cyan(),
                group.headers.len(),
                group.headers.join(", ")
            );
        }
    }
}
