use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Frame every image in a folder: rounded corners, inner shadow, drop shadow.
///
/// WARNING: the output folder is deleted and recreated on every run.
#[derive(Parser, Debug)]
#[command(name = "shotframe", version)]
struct Cli {
    /// Folder with .jpg/.jpeg/.png/.bmp/.tiff images (not searched recursively).
    input_folder: PathBuf,

    /// Destination folder, wiped before use [default: <input_folder>-processed].
    output_folder: Option<PathBuf>,
}

fn main() -> ExitCode {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let report = shotframe::process_folder_with(
        &cli.input_folder,
        cli.output_folder.as_deref(),
        &shotframe::FrameStyle::default(),
        |event| match event {
            shotframe::FileEvent::Processed { input, output } => {
                println!(
                    "Processed: {} -> {}",
                    shotframe::display_name(input),
                    shotframe::display_name(output)
                );
            }
            shotframe::FileEvent::Failed(failure) => {
                println!(
                    "Error processing {}: {}",
                    failure.name(),
                    failure.error.display_chain()
                );
            }
        },
    )?;

    println!("Successfully processed {} images", report.processed.len());
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
