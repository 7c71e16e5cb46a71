use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use dirtree::cli::Cli;
use dirtree::fs::RealFileSystem;
use tracing::Level;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    let options = match cli.walk_options() {
        Ok(options) => options,
        Err(err) => {
            println!("tree: {err}");
            return ExitCode::from(1);
        }
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = match dirtree::tree(&RealFileSystem, &mut out, &cli.roots(), &options).await {
        Ok(_) => out.flush(),
        Err(err) => Err(err),
    };

    if let Err(err) = result {
        eprintln!("tree: {err}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}
