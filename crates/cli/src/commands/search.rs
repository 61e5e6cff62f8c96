use super::{load_config, load_dataset, paint};
use colored::*;
use core_permissions::{
    export_csv, paginate, permission_badge, search, value_badge, AnalysisConfig, Page, Row,
    NOT_AVAILABLE,
};
use std::fs;
use std::path::Path;

/// Page of the matches sized by the configured page size
fn page_of<'m>(matches: &'m [&'m Row], page: usize, config: &AnalysisConfig) -> Page<'m, &'m Row> {
    paginate(matches, page, config.page_size)
}

pub fn run(
    file: &Path,
    term: &str,
    page: usize,
    export: Option<&Path>,
    config: Option<&Path>,
) -> anyhow::Result<()> {
    let config = load_config(config)?;
    let dataset = load_dataset(file)?;
    let headers = dataset.headers();
    let matches = search(dataset.rows(), headers, term);

    if let Some(path) = export {
        fs::write(path, export_csv(headers, &matches))
            .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path.display(), e))?;
        println!(
            "{} Exported {} row(s) to: {}",
            "✓".green().bold(),
            matches.len(),
            path.display()
        );
    }

    let page = page_of(&matches, page, &config);

    println!("{}", headers.join(" | ").bold());
    for row in page.items {
        let cells: Vec<&str> = headers
            .iter()
            .map(|h| row.get(h).map_or("", String::as_str))
            .collect();
        let group = match permission_badge(row) {
            Some(group) => paint(group).to_string(),
            None => NOT_AVAILABLE.dimmed().to_string(),
        };
        let enabled = match value_badge(row) {
            Some(true) => "enabled".green(),
            Some(false) => "disabled".red(),
            None => NOT_AVAILABLE.dimmed(),
        };
        println!("{}  [{} {}]", cells.join(" | "), group, enabled);
    }

    println!();
    if page.total == 0 {
        println!("No matching entries");
    } else {
        println!(
            "Showing {} to {} of {} entries (page {}/{})",
            page.first, page.last, page.total, page.page, page.total_pages
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_follows_configured_size() {
        let rows: Vec<Row> = (0..12)
            .map(|i| Row::from([("Name".to_string(), format!("row{}", i))]))
            .collect();
        let matches: Vec<&Row> = rows.iter().collect();
        let config = AnalysisConfig {
            page_size: 5,
            ..AnalysisConfig::default()
        };

        let page = page_of(&matches, 3, &config);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 2);
        assert_eq!((page.first, page.last), (11, 12));

        let page = page_of(&matches, 1, &AnalysisConfig::default());
        assert_eq!(page.items.len(), 10);
    }
}
