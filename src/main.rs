use clap::Parser;
use std::process;
use strata::cli::{self, CliArgs};
use strata_logger::{init, log, LogSeverity};

fn main() {
    let args = CliArgs::parse();

    init(if args.verbose {
        LogSeverity::Debug
    } else {
        LogSeverity::Info
    });

    match cli::run(&args) {
        Ok(summary) => log(
            format!(
                "{} placements, {} palette entries, size {}x{}x{}, {} bytes",
                summary.placements,
                summary.palette,
                summary.size.dx,
                summary.size.dy,
                summary.size.dz,
                summary.bytes
            ),
            LogSeverity::Info,
        ),
        Err(err) => {
            log(err.to_string(), LogSeverity::Error);
            process::exit(1);
        }
    }
}
