use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use text_tools::report::ReportSink;
use text_tools::{wordcount, Error};

#[derive(Debug, Parser)]
struct Args {
    #[clap(index = 1, help = "Path to a text file to count words in")]
    input_file: PathBuf,
}

fn main() {
    let args = parse_args();
    let mut sink = ReportSink::new(io::stdout(), wordcount::RESULTS_FILE);
    if let Err(err) = wordcount::run(&args.input_file, &mut sink) {
        fail(err);
    }
}

fn parse_args() -> Args {
    Args::try_parse().unwrap_or_else(|err| {
        if err.use_stderr() {
            println!("Usage: word-count <fileWithData.txt>");
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
