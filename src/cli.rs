use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "docent",
    about = "Deterministic Q&A over e-learning course content",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Answer a question against a course file (interactive without a query)
    Ask {
        /// Path to the course JSON file, or "-" for stdin
        #[arg(short, long)]
        course: String,

        /// The question; omit it for an interactive loop
        query: Vec<String>,

        /// Emit the answer as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Print the table of contents of a course file
    Toc {
        /// Path to the course JSON file, or "-" for stdin
        #[arg(short, long)]
        course: String,
    },

    /// Report entry statistics and run the index invariant checks
    Inspect {
        /// Path to the course JSON file, or "-" for stdin
        #[arg(short, long)]
        course: String,

        /// Emit the report as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}
