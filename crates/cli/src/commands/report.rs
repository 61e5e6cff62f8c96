use super::{load_config, load_dataset, paint, Format};
use colored::*;
use core_permissions::{
    by_feature, by_group, by_role, by_role_feature, overview, stacked_rows, top_permissions,
    Breakdown, GroupCounts, Overview, PermissionUsage, RoleFeatureEntry, RoleFilter,
};
use serde::Serialize;
use std::path::Path;
use tracing::info;

#[derive(Serialize)]
struct Report<'a> {
    role: &'a str,
    overview: Overview,
    groups: GroupCounts,
    by_role: Vec<Breakdown<'a>>,
    by_feature: Vec<Breakdown<'a>>,
    role_features: Vec<RoleFeatureEntry<'a>>,
    top_permissions: Vec<PermissionUsage<'a>>,
}

pub fn run(
    file: &Path,
    role: Option<&str>,
    top: Option<usize>,
    config: Option<&Path>,
    format: Format,
) -> anyhow::Result<()> {
    let config = load_config(config)?;
    let dataset = load_dataset(file)?;

    if !dataset.has_permission_columns() {
        anyhow::bail!(
            "{} lacks the permission columns: {}",
            file.display(),
            dataset.missing_permission_columns().join(", ")
        );
    }

    let filter = role.map_or(RoleFilter::All, RoleFilter::parse);
    let view = dataset.filter_by_role(&filter);
    let records = view.records();
    info!(rows = records.len(), ?filter, "building report");

    let report = Report {
        role: role.unwrap_or("all"),
        overview: overview(&records),
        groups: by_group(&records),
        by_role: by_role(&records),
        by_feature: by_feature(&records),
        role_features: by_role_feature(&records, config.role_feature_limit),
        top_permissions: top_permissions(&records, top.unwrap_or(config.top_permissions)),
    };

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        Format::Text => print_text(file, &report),
    }

    Ok(())
}

fn print_text(file: &Path, report: &Report<'_>) {
    println!(
        "{} {} (role: {})",
        "Permission report:".bold(),
        file.display(),
        report.role.cyan()
    );
    println!(
        "  {} Entries: {}  Roles: {}  Features: {}  Permissions: {}",
        "✓".green(),
        report.overview.entries,
        report.overview.roles,
        report.overview.features,
        report.overview.permissions
    );

    println!();
    println!("{}", "Enabled permissions by group".bold());
    for (group, count) in report.groups.iter() {
        println!("  {:<12} {:>6}", paint(group), count);
    }

    print_stacked("By role", &report.by_role);
    print_stacked("By feature", &report.by_feature);
    print_stacked("Role x feature", &stacked_rows(&report.role_features));

    println!();
    println!("{}", "Top permissions".bold());
    for (rank, usage) in report.top_permissions.iter().enumerate() {
        println!(
            "  {:>2}. {:<32} {:<12} enabled {:>4}  disabled {:>4}",
            rank + 1,
            usage.name,
            paint(usage.group),
            usage.enabled,
            usage.disabled
        );
    }
}

fn print_stacked(title: &str, rows: &[Breakdown<'_>]) {
    println!();
    println!("{}", title.bold());
    if rows.is_empty() {
        println!("  {}", "(none)".dimmed());
        return;
    }

    let width = rows.iter().map(|row| row.name.len()).max().unwrap_or(0);
    for row in rows {
        let cells: Vec<String> = row
            .counts
            .iter()
            .filter(|(_, count)| *count > 0)
            .map(|(group, count)| format!("{} {}", paint(group), count))
            .collect();
        let cells = if cells.is_empty() {
            "-".dimmed().to_string()
        } else {
            cells.join("  ")
        };
        println!("  {:<width$}  {}", row.name, cells, width = width);
    }
}
