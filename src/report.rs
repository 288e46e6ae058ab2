/*!
 * Reporting functionality for dumpmd
 *
 * Renders the end-of-run summary with the tabled library.
 */

use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::types::ScanStatistics;
use crate::utils::format_file_size;

/// Summary of one run
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Output file path
    pub output_file: String,
    /// Size of the written document in bytes
    pub output_size: u64,
    /// Time taken to scan and write
    pub duration: Duration,
    /// Counters collected by the scanner
    pub statistics: ScanStatistics,
}

/// Report generator for scan results
pub struct Reporter;

impl Reporter {
    /// Create a new reporter
    pub fn new() -> Self {
        Self
    }

    /// Format a number with human-readable units
    fn format_number(&self, num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Generate the summary table
    pub fn generate_report(&self, report: &ScanReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: &'static str,

            #[tabled(rename = "Value")]
            value: String,
        }

        let stats = &report.statistics;
        let mut rows = vec![
            SummaryRow {
                key: "Output File",
                value: report.output_file.clone(),
            },
            SummaryRow {
                key: "Output Size",
                value: format_file_size(report.output_size),
            },
            SummaryRow {
                key: "Process Time",
                value: format!("{:.4?}", report.duration),
            },
            SummaryRow {
                key: "Total Files",
                value: self.format_number(stats.total_files),
            },
            SummaryRow {
                key: "Text Files",
                value: self.format_number(stats.text_files),
            },
            SummaryRow {
                key: "Omitted Files",
                value: self.format_number(stats.omitted_files),
            },
            SummaryRow {
                key: "Excluded Entries",
                value: self.format_number(stats.excluded_entries),
            },
        ];

        if stats.unreadable_files > 0 || stats.directory_errors > 0 {
            rows.push(SummaryRow {
                key: "Read Errors",
                value: format!(
                    "{} files, {} directories",
                    stats.unreadable_files, stats.directory_errors
                ),
            });
        }

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &ScanReport) {
        println!("Context generated and saved to: {}", report.output_file);
        println!("\n{}", self.generate_report(report));
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}
