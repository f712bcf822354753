//! Command-line entry point: writes the Temple Finder launcher icons.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use temple_icons::{IconError, IconWriter};

/// Writes `app/src/main/res/mipmap-*/ic_launcher{,_round}.png` under the
/// current directory.
#[derive(Parser)]
#[command(name = "temple-icons")]
#[command(about = "Generate temple-themed Android launcher icons", version)]
struct Cli {}

fn main() -> ExitCode {
    Cli::parse();
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error creating icons: {err}");
            eprintln!("{}", err.hint());
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), IconError> {
    println!("Creating Temple Finder app icons...");
    let report = IconWriter::new(".").write_all_with(|preset| {
        println!(
            "Creating {} icons ({}x{})...",
            preset.density(),
            preset.size(),
            preset.size()
        );
    })?;

    println!("All {} app icons created successfully!", report.file_count());
    println!("Icons saved to:");
    for dir in &report.directories {
        println!("   - {}/", dir.display());
    }
    Ok(())
}

// The filter is fixed; the tool reads no environment variables.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("temple_icons=info"))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
