//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use resdeploy_core::CopyReport;
use resdeploy_core::ResourceLocator;
use std::path::Path;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.1} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.1} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.1} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn write_status(&self, ok: bool, message: &str) {
        if self.use_colors {
            let mark = if ok {
                style("✓").green().bold()
            } else {
                style("⚠").yellow().bold()
            };
            let _ = self.term.write_line(&format!("{mark} {message}"));
        } else if ok {
            let _ = self.term.write_line(message);
        } else {
            let _ = self.term.write_line(&format!("WARNING: {message}"));
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_copy_result(&self, locator: &ResourceLocator, report: &CopyReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        match &report.failure {
            None => self.write_status(true, "Copy complete"),
            Some(reason) => self.write_status(false, &format!("Copy stopped early: {reason}")),
        }

        let _ = self
            .term
            .write_line(&format!("  Files copied: {}", report.files_copied));
        let _ = self
            .term
            .write_line(&format!("  Directories: {}", report.directories_created));
        if report.files_skipped > 0 {
            let _ = self
                .term
                .write_line(&format!("  Files skipped: {}", report.files_skipped));
        }
        let _ = self.term.write_line(&format!(
            "  Total size: {}",
            Self::format_size(report.bytes_written)
        ));

        if self.verbose {
            let _ = self.term.write_line(&format!("  Source: {locator}"));
            let _ = self
                .term
                .write_line(&format!("  Duration: {:?}", report.duration));
            for warning in &report.warnings {
                let _ = self.term.write_line(&format!("  - {warning}"));
            }
        }

        Ok(())
    }

    fn format_write_result(&self, name: &str, dest: &Path, bytes: u64) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        self.write_status(
            true,
            &format!(
                "Wrote {name} to {} ({})",
                dest.display(),
                Self::format_size(bytes)
            ),
        );

        Ok(())
    }
}
