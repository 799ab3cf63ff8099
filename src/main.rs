use std::fs;
use std::io::{self, BufRead, Read, Write};

use anyhow::{Context, Result};
use clap::Parser;

use docent::contracts::check_index_well_formed;
use docent::{answer, Course, CourseIndex};

mod cli;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Ask { course, query, json } => {
            let index = load_index(&course)?;
            if query.is_empty() {
                interactive_loop(&index, json)
            } else {
                let reply = answer(&index, &query.join(" "));
                print_answer(&reply, json)
            }
        }
        Commands::Toc { course } => {
            let index = load_index(&course)?;
            print_toc(&index);
            Ok(())
        }
        Commands::Inspect { course, json } => {
            let index = load_index(&course)?;
            inspect(&index, json)
        }
    }
}

/// Read and index a course file. `-` reads the JSON from stdin.
fn load_index(path: &str) -> Result<CourseIndex> {
    let raw = if path == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read course JSON from stdin")?;
        buffer
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read course file {path}"))?
    };

    let course: Course =
        serde_json::from_str(&raw).with_context(|| format!("invalid course JSON in {path}"))?;
    let index = CourseIndex::build(&course);
    check_index_well_formed(&index);
    Ok(index)
}

fn print_answer(reply: &docent::Answer, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(reply)?);
    } else {
        println!("{}", reply.message);
    }
    Ok(())
}

/// Read questions line by line until EOF or an exit word. The prompt is
/// only printed when stdin is a terminal, so piped input stays clean.
fn interactive_loop(index: &CourseIndex, json: bool) -> Result<()> {
    let prompt = atty::is(atty::Stream::Stdin);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        if prompt {
            write!(stdout, "? ")?;
            stdout.flush()?;
        }
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        if matches!(query, "exit" | "quit") {
            return Ok(());
        }
        print_answer(&answer(index, query), json)?;
    }
}

fn print_toc(index: &CourseIndex) {
    for lesson in &index.toc {
        println!("{}", lesson.lesson_title);
        for block in &lesson.blocks {
            println!("  - {}", block.title);
        }
    }
}

fn inspect(index: &CourseIndex, json: bool) -> Result<()> {
    let stats = index.stats();
    let validation = index.validate();

    if json {
        let report = serde_json::json!({
            "stats": stats,
            "valid": validation.is_ok(),
            "error": validation.as_ref().err().map(ToString::to_string),
        });
        println!("{report}");
    } else {
        println!("lessons:    {}", stats.lessons);
        println!("entries:    {}", stats.total_entries);
        println!("  headings:   {}", stats.headings);
        println!("  paragraphs: {}", stats.paragraphs);
        println!("  captions:   {}", stats.captions);
        println!("  questions:  {}", stats.questions);
        println!("  answers:    {}", stats.answers);
        println!("  slides:     {}", stats.slides);
        match &validation {
            Ok(()) => println!("invariants: ok"),
            Err(err) => println!("invariants: VIOLATED - {err}"),
        }
    }

    if let Err(err) = validation {
        anyhow::bail!("index invariant violated: {err}");
    }
    Ok(())
}
