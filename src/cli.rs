//! Command-line interface definition using clap.

use clap::Parser;

/// Count GamePigeon wins, losses and draws from an iMessage transcript
/// export.
#[derive(Parser, Debug, Clone)]
#[command(name = "pigeonstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    pigeonstats messages.txt
    pigeonstats messages.txt --plot
    pigeonstats messages.txt --plot --chart results.png
    pigeonstats messages.txt --json
    pigeonstats messages.txt --me \"John Appleseed\"")]
pub struct Args {
    /// Path to the exported transcript file
    pub input: String,

    /// Additionally render the results chart
    #[cfg(feature = "plot")]
    #[arg(long)]
    pub plot: bool,

    /// Path of the chart image
    #[cfg(feature = "plot")]
    #[arg(long, value_name = "PATH", default_value = "gamepigeon_results.png")]
    pub chart: String,

    /// Print the summary as JSON instead of the text report
    #[cfg(feature = "json-output")]
    #[arg(long)]
    pub json: bool,

    /// Sender name the export uses for the transcript owner
    #[arg(long, value_name = "NAME", default_value = "Me")]
    pub me: String,
}
