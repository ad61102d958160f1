#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use anyhow::Result;
use colored::Colorize;
use itertools::Itertools;
use tracing::info;

use crate::{record::GradeBook, report, roster};

/// An interactive grade-entry session over stdin/stdout.
///
/// The session owns the grade book. Every mutation goes through the
/// validated entry path or a full roster load, so the book never holds an
/// invalid interactive submission.
#[derive(Default)]
pub struct Session {
    /// The grade book owned by this session.
    book:         GradeBook,
    /// The roster file last loaded or saved, shown in the prompt and used
    /// as the default save target.
    current_file: Option<PathBuf>,
}

impl Session {
    /// Creates a session with an empty grade book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session preloaded from the roster at `path`.
    pub fn with_roster(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let book = roster::load(path)?;
        info!(students = book.len(), "Loaded roster {}", path.display());

        Ok(Self {
            book,
            current_file: Some(path.to_path_buf()),
        })
    }

    /// Runs the session until `quit` or end of input. End of input is the
    /// terminal equivalent of closing the window: a plain exit, not an
    /// error.
    pub fn run(&mut self) -> Result<()> {
        println!("Notenrechner: type `help` for commands, `quit` to leave.");

        let mut input = io::stdin().lock();
        loop {
            self.prompt()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if !self.dispatch(line) {
                break;
            }
        }

        Ok(())
    }

    /// Prints the prompt, naming the roster file the session works on.
    fn prompt(&self) -> Result<()> {
        match &self.current_file {
            Some(file) => {
                let label = file
                    .file_name()
                    .map(|name| name.to_string_lossy())
                    .unwrap_or_else(|| file.to_string_lossy());
                print!("[{label}]> ");
            }
            None => print!("> "),
        }
        io::stdout().flush()?;

        Ok(())
    }

    /// Executes one command line. Returns `false` when the session should
    /// end.
    fn dispatch(&mut self, line: &str) -> bool {
        let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match command {
            "add" => self.add(rest),
            "list" => self.list(),
            "show" => self.show(rest),
            "load" => self.load(rest),
            "save" => self.save(rest),
            "help" => print_help(),
            "quit" | "exit" => return false,
            unknown => {
                eprintln!("{}", format!("Unknown command: {unknown} (try `help`)").red());
            }
        }

        true
    }

    /// Handles `add <name> <subject=grade> ...`: validates every field and
    /// records the student only when the whole submission is clean.
    fn add(&mut self, rest: &str) {
        let mut name_parts = Vec::new();
        let mut fields = Vec::new();

        for token in rest.split_whitespace() {
            if let Some((subject, value)) = token.splitn(2, '=').collect_tuple() {
                fields.push((subject, value));
            } else if fields.is_empty() {
                name_parts.push(token);
            } else {
                eprintln!(
                    "{}",
                    format!("Expected `subject=grade` after the name, got `{token}`").red()
                );
                return;
            }
        }

        let name = name_parts.join(" ");
        match self.book.add_checked(&name, &fields) {
            Ok(count) => {
                println!("{}", format!("Recorded {count} grades for {name}.").green());
            }
            Err(err) => eprintln!("{}", err.to_string().red()),
        }
    }

    /// Prints the summary table for every student in the book.
    fn list(&self) {
        if self.book.is_empty() {
            println!("No students recorded yet.");
            return;
        }

        let summaries = report::summarize(&self.book);
        println!("{}", report::summary_table(&summaries));
    }

    /// Prints the detail block for one student.
    fn show(&self, name: &str) {
        if name.is_empty() {
            eprintln!("{}", "Usage: show <name>".red());
            return;
        }
        if !self.book.contains(name) {
            eprintln!("{}", format!("No student named {name}.").red());
            return;
        }

        println!("{}", report::student_detail(name, self.book.get(name)));
    }

    /// Replaces the book with the roster at `path`. On failure the book is
    /// left exactly as it was.
    fn load(&mut self, path: &str) {
        if path.is_empty() {
            eprintln!("{}", "Usage: load <file>".red());
            return;
        }

        match roster::load(path) {
            Ok(book) => {
                self.book = book;
                self.current_file = Some(PathBuf::from(path));
                info!(students = self.book.len(), "Loaded roster {path}");
                println!(
                    "{}",
                    format!("Loaded {} students from {path}.", self.book.len()).green()
                );
            }
            Err(err) => eprintln!("{}", format!("{err:#}").red()),
        }
    }

    /// Saves the book to `path`, or to the current roster file when no
    /// path is given. Refuses to write an empty book.
    fn save(&mut self, path: &str) {
        if self.book.is_empty() {
            eprintln!("{}", "Nothing to save yet; add a student first.".red());
            return;
        }

        let target = if path.is_empty() {
            match &self.current_file {
                Some(file) => file.clone(),
                None => {
                    eprintln!("{}", "Usage: save <file>".red());
                    return;
                }
            }
        } else {
            PathBuf::from(path)
        };

        match roster::save(&target, &self.book) {
            Ok(()) => {
                info!(students = self.book.len(), "Saved roster {}", target.display());
                println!(
                    "{}",
                    format!(
                        "Saved {} students to {}.",
                        self.book.len(),
                        target.display()
                    )
                    .green()
                );
                self.current_file = Some(target);
            }
            Err(err) => eprintln!("{}", format!("{err:#}").red()),
        }
    }
}

/// Prints the command reference.
fn print_help() {
    println!(
        "\
Commands:
  add <name> <subject=grade> ...   record a student (grades 1 to 6)
  list                             summary table for every student
  show <name>                      grades and averages for one student
  load <file>                      replace the book with a roster file
  save [file]                      write the book to a roster file
  help                             this overview
  quit                             leave the session"
    );
}
