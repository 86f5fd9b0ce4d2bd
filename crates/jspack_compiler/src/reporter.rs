use std::io::{self, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;
use log::debug;

use jspack_core::PackError;

use crate::batch::BatchOutcome;
use crate::compiler::CompiledPackage;

/// List the packages produced for one root: source, bundle, manifest.
pub fn print_packages<W: Write>(writer: &mut W, packages: &[CompiledPackage]) -> io::Result<()> {
    debug!("Printing {} compiled packages", packages.len());
    for package in packages {
        writeln!(
            writer,
            "{} {}",
            "✓".green().bold(),
            package.source_path.display().to_string().bright_white().bold()
        )?;
        writeln!(
            writer,
            "    {}   {}",
            "bundle".dimmed(),
            package.compiled_path.display().to_string().blue()
        )?;
        writeln!(
            writer,
            "    {} {}",
            "manifest".dimmed(),
            package.manifest_path.display().to_string().blue()
        )?;
    }
    Ok(())
}

/// Plain file list, one path per line (the `resolve` mode's output)
pub fn print_file_list<W: Write>(writer: &mut W, files: &[PathBuf]) -> io::Result<()> {
    for file in files {
        writeln!(writer, "{}", file.display())?;
    }
    Ok(())
}

/// Render one root's failure. Recursion gets its cycle enumerated line by
/// line so the user can see exactly which chain is circular.
pub fn print_error<W: Write>(writer: &mut W, root: &Path, err: &PackError) -> io::Result<()> {
    match err {
        PackError::Recursion { cycle } => {
            writeln!(
                writer,
                "{} {}: circular dependency:",
                "✗".red().bold(),
                root.display().to_string().bright_white().bold()
            )?;
            for (idx, path) in cycle.iter().enumerate() {
                let connector = if idx == 0 { "   " } else { "-> " };
                writeln!(
                    writer,
                    "    {}{}",
                    connector.dimmed(),
                    path.display().to_string().yellow()
                )?;
            }
        }
        other => {
            writeln!(
                writer,
                "{} {}: {}",
                "✗".red().bold(),
                root.display().to_string().bright_white().bold(),
                other
            )?;
        }
    }
    Ok(())
}

/// Per-root status table plus totals for a folder compilation
pub fn print_batch_summary<W: Write>(writer: &mut W, outcome: &BatchOutcome) -> io::Result<()> {
    writeln!(writer, "\n{}", "─".repeat(60).dimmed())?;
    for root_outcome in &outcome.outcomes {
        let status = match &root_outcome.result {
            Ok(_) => "compiled".green(),
            Err(_) => "  failed".red().bold(),
        };
        writeln!(writer, "  {}  {}", status, root_outcome.root.display())?;
    }
    writeln!(writer, "{}", "─".repeat(60).dimmed())?;
    writeln!(
        writer,
        "  {} of {} roots compiled",
        outcome.succeeded().to_string().cyan(),
        outcome.outcomes.len().to_string().cyan()
    )?;
    Ok(())
}
