//! # pigeonstats CLI
//!
//! Command-line interface for the pigeonstats library.

use std::path::Path;
use std::process;

use clap::Parser as ClapParser;

use pigeonstats::cli::Args;
use pigeonstats::config::ParserConfig;
use pigeonstats::parser::TranscriptParser;
use pigeonstats::report::Report;
use pigeonstats::{PigeonstatsError, Summary};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), PigeonstatsError> {
    let args = <Args as ClapParser>::parse();

    println!("Analyzing GamePigeon results from {}...", args.input);

    let config = ParserConfig::new().with_self_identity(&args.me);
    let parser = TranscriptParser::with_config(config);
    let summary = parser.parse(Path::new(&args.input))?;

    #[cfg(feature = "json-output")]
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_report(&summary);
    }

    #[cfg(not(feature = "json-output"))]
    print_report(&summary);

    #[cfg(feature = "plot")]
    if args.plot {
        let chart_path = Path::new(&args.chart);
        pigeonstats::chart::render(&summary, chart_path)?;
        println!();
        println!("📈 Chart written to {}", chart_path.display());
    }

    Ok(())
}

fn print_report(summary: &Summary) {
    println!();
    println!("{}", Report::new(summary));
}
