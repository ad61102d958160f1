#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # notenrechner
//!
//! Command line front end for the grade book. The default command opens
//! an interactive grade-entry session; `show` and `report` are one-shot
//! commands over a saved roster file.

use std::path::PathBuf;

use anyhow::Result;
use bpaf::*;
use notenrechner::{report, roster, shell::Session};
use tracing::{Level, info, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Interactive grade-entry session, optionally preloading a roster
    Session(Option<PathBuf>),
    /// Print the summary table for a roster file
    Show(PathBuf),
    /// Write a JSON grade report for a roster file
    Report {
        /// Roster file to summarize
        input:  PathBuf,
        /// Where the JSON report goes
        output: PathBuf,
    },
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses a roster file path
    fn roster_file() -> impl Parser<PathBuf> {
        positional("ROSTER").help("Path to a roster CSV file")
    }

    let session = {
        let preload = roster_file().optional();
        construct!(Cmd::Session(preload))
            .to_options()
            .command("session")
            .help("Enter grades interactively")
    };

    let show = construct!(Cmd::Show(roster_file()))
        .to_options()
        .command("show")
        .help("Print the grade summary for a roster");

    let report = {
        let output = short('o')
            .long("output")
            .help("Where to write the JSON report")
            .argument::<PathBuf>("OUT");
        let input = roster_file();
        construct!(Cmd::Report { output, input })
            .to_options()
            .command("report")
            .help("Write a JSON grade report for a roster")
    };

    let cmd = construct!([session, show, report]).fallback(Cmd::Session(None));

    cmd.to_options()
        .descr("Grade book and final-report calculator")
        .run()
}

fn main() -> Result<()> {
    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(Level::INFO);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    match options() {
        Cmd::Session(preload) => {
            let mut session = match preload {
                Some(path) => Session::with_roster(path)?,
                None => Session::new(),
            };
            session.run()
        }
        Cmd::Show(path) => {
            let book = roster::load(&path)?;
            if book.is_empty() {
                println!("No students in {}.", path.display());
            } else {
                println!("{}", report::summary_table(&report::summarize(&book)));
            }
            Ok(())
        }
        Cmd::Report { input, output } => {
            let book = roster::load(&input)?;
            report::write_json_report(&output, &report::summarize(&book))?;
            info!(
                students = book.len(),
                "Wrote report to {}",
                output.display()
            );
            Ok(())
        }
    }
}
