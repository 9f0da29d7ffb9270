//! The `files` command: one line per source file with its card counts.

use services::{AppServices, FileSummary};

fn summary_line(summary: &FileSummary) -> String {
    format!(
        "{}: {} card(s), {} due",
        summary.file, summary.total, summary.due
    )
}

/// # Errors
///
/// Returns an error if the storage query fails.
pub async fn execute(services: &AppServices) -> anyhow::Result<()> {
    let summaries = services.selection().file_summaries().await?;
    if summaries.is_empty() {
        ui::console::print_info(super::review::NO_FILES);
        return Ok(());
    }
    for summary in &summaries {
        println!("{}", summary_line(summary));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_line_lists_counts() {
        let summary = FileSummary {
            file: "notes/rust.md".into(),
            total: 12,
            due: 3,
        };
        assert_eq!(summary_line(&summary), "notes/rust.md: 12 card(s), 3 due");
    }
}
