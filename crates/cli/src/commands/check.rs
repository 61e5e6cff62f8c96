use super::load_dataset;
use colored::*;
use std::path::Path;

pub fn run(file: &Path) -> anyhow::Result<()> {
    println!("{} {}", "Checking export:".bold(), file.display());

    let dataset = load_dataset(file)?;

    println!("  {} Rows: {}", "✓".green(), dataset.row_count());
    println!("  {} Columns: {}", "✓".green(), dataset.column_count());

    let missing = dataset.missing_permission_columns();
    if !missing.is_empty() {
        for column in &missing {
            println!("  {} Missing column: {}", "✗".red(), column);
        }
        anyhow::bail!(
            "Export cannot drive the permission reports: missing {}",
            missing.join(", ")
        );
    }
    println!("  {} Permission columns present", "✓".green());

    let mut warnings = 0;

    let records = dataset.records();
    let skipped = records
        .iter()
        .filter(|r| r.role_name.is_empty() || !r.has_permission())
        .count();
    if skipped > 0 {
        println!(
            "  {} {} row(s) lack a role or permission and are skipped by role reports",
            "⚠".yellow(),
            skipped
        );
        warnings += 1;
    }

    let bag_values = records
        .iter()
        .filter(|r| core_permissions::has_envelope(r.value))
        .count();
    if bag_values > 0 {
        println!(
            "  {} {} value(s) are property bags and never count as enabled",
            "⚠".yellow(),
            bag_values
        );
        warnings += 1;
    }

    // Summary
    println!();
    if warnings == 0 {
        println!("{} Export is valid!", "✓".green().bold());
    } else {
        println!(
            "{} Export is valid with {} warning(s)",
            "⚠".yellow().bold(),
            warnings
        );
    }

    Ok(())
}
