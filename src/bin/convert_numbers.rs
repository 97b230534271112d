use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use text_tools::report::ReportSink;
use text_tools::{convert, Error};

#[derive(Debug, Parser)]
struct Args {
    #[clap(index = 1, help = "Path to a file with one integer per line")]
    input_file: PathBuf,
}

fn main() {
    let args = parse_args();
    let mut sink = ReportSink::new(io::stdout(), convert::RESULTS_FILE);
    if let Err(err) = convert::run(&args.input_file, &mut io::stdout(), &mut sink) {
        fail(err);
    }
}

fn parse_args() -> Args {
    Args::try_parse().unwrap_or_else(|err| {
        if err.use_stderr() {
            println!("Usage: convert-numbers <fileWithData.txt>");
            process::exit(1);
        }
        err.exit()
    })
}

fn fail(err: Error) -> ! {
    match err {
        Error::Io(err) => println!("An error occurred: {err}"),
        err => println!("{err}"),
    }
    process::exit(1);
}
