use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use jspack_compiler::{
    ClearConfig, CompileConfig, FolderConfig, ResolveConfig, clear_packages, compile_and_write,
    compile_folder, print_batch_summary, print_error, print_file_list, print_packages,
    resolve_dependencies,
};
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "jspack")]
#[command(about = "Resolves annotated script/stylesheet dependencies into ordered bundles", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compile root file(s) into bundles and manifests
    Compile(CompileConfig),
    /// Compile every source file found under the given folder(s)
    CompileFolder(FolderConfig),
    /// Print a file's flattened dependency lists without compiling
    Resolve(ResolveConfig),
    /// Remove compiled bundles and manifests under the given folder(s)
    Clear(ClearConfig),
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    let start = Instant::now();

    let completely_successful = match cli.command {
        Commands::Compile(cfg) => run_compile(&mut stdout, &cfg)?,
        Commands::CompileFolder(cfg) => run_compile_folder(&mut stdout, &cfg)?,
        Commands::Resolve(cfg) => run_resolve(&mut stdout, &cfg)?,
        Commands::Clear(cfg) => run_clear(&mut stdout, &cfg)?,
    };

    let elapsed_ms = start.elapsed().as_millis();
    writeln!(
        stdout,
        "\n{} Finished in {}ms.",
        "●".bright_blue(),
        elapsed_ms.to_string().cyan()
    )?;
    stdout.flush()?;

    if !completely_successful {
        // Non-zero exit to fail CI
        std::process::exit(1);
    }
    Ok(())
}

fn run_compile<W: Write>(stdout: &mut W, cfg: &CompileConfig) -> Result<bool> {
    let opts = cfg.compiler_options();
    let mut completely_successful = true;

    for file in &cfg.files {
        info!("Compiling file {}", file.display());
        match compile_and_write(file, &opts) {
            Ok(packages) => {
                debug!("{} produced {} packages", file.display(), packages.len());
                print_packages(stdout, &packages)?;
            }
            Err(e) => {
                print_error(stdout, file, &e)?;
                completely_successful = false;
            }
        }
    }

    Ok(completely_successful)
}

fn run_compile_folder<W: Write>(stdout: &mut W, cfg: &FolderConfig) -> Result<bool> {
    let opts = cfg.compiler_options();
    let mut completely_successful = true;

    for folder in &cfg.folders {
        info!("Compiling folder {}", folder.display());
        match compile_folder(folder, &opts) {
            Ok(outcome) => {
                for root_outcome in &outcome.outcomes {
                    match &root_outcome.result {
                        Ok(packages) => print_packages(stdout, packages)?,
                        Err(e) => print_error(stdout, &root_outcome.root, e)?,
                    }
                }
                print_batch_summary(stdout, &outcome)?;
                if !outcome.all_succeeded() {
                    completely_successful = false;
                }
            }
            Err(e) => {
                print_error(stdout, folder, &e)?;
                completely_successful = false;
            }
        }
    }

    Ok(completely_successful)
}

fn run_resolve<W: Write>(stdout: &mut W, cfg: &ResolveConfig) -> Result<bool> {
    let opts = cfg.compiler_options();
    let mut completely_successful = true;

    for file in &cfg.files {
        info!("Resolving dependencies from {}", file.display());
        match resolve_dependencies(file, &opts) {
            Ok(assets) => {
                // Stylesheets first, then scripts, matching page emit order
                let mut files: Vec<PathBuf> = Vec::new();
                if !cfg.exclude_stylesheets {
                    files.extend(assets.stylesheets);
                }
                if !cfg.exclude_scripts {
                    files.extend(assets.scripts);
                }
                if cfg.json {
                    writeln!(stdout, "{}", serde_json::to_string(&files)?)?;
                } else {
                    print_file_list(stdout, &files)?;
                }
            }
            Err(e) => {
                print_error(stdout, file, &e)?;
                completely_successful = false;
            }
        }
    }

    Ok(completely_successful)
}

fn run_clear<W: Write>(stdout: &mut W, cfg: &ClearConfig) -> Result<bool> {
    let mut completely_successful = true;

    for folder in &cfg.folders {
        let folder = match folder.canonicalize() {
            Ok(path) => path,
            Err(_) => {
                writeln!(
                    stdout,
                    "{} {}: no such folder",
                    "✗".red().bold(),
                    folder.display()
                )?;
                completely_successful = false;
                continue;
            }
        };

        info!("Clearing packages in {}", folder.display());
        if clear_packages(&folder) {
            writeln!(stdout, "{} cleared {}", "✓".green().bold(), folder.display())?;
        } else {
            writeln!(
                stdout,
                "{} {}: some artifacts could not be removed",
                "✗".red().bold(),
                folder.display()
            )?;
            completely_successful = false;
        }
    }

    Ok(completely_successful)
}
