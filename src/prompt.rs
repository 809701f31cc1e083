use crate::fields::{parse_year, validate_field};
use crate::metadata::MetaData;
use anyhow::{anyhow, Result};
use colored::*;
use std::io::{self, BufRead, Stdout, StdinLock, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Process,
    Skip,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Review {
    Confirm,
    Year,
    TitleAndSubtitles,
    Authors,
}

/// Collects field values from a human. Every value returned is already validated.
pub trait Prompter {
    fn decide(&mut self, path: &Path) -> Result<Decision>;
    fn year(&mut self, default: Option<u32>) -> Result<u32>;
    /// At least one entry: the title, then subtitles in order.
    fn title_and_subtitles(&mut self, defaults: &[String]) -> Result<Vec<String>>;
    fn authors(&mut self, defaults: &[String]) -> Result<Vec<String>>;
    fn review(&mut self, meta: &MetaData) -> Result<Review>;
    fn confirm(&mut self, from: &Path, to: &Path) -> Result<bool>;
}

pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask one question; an empty answer takes the default.
    fn ask(&mut self, question: &str, default: &str) -> Result<String> {
        if default.is_empty() {
            write!(self.output, "{} ", format!("{}:", question).bright_cyan().bold())?;
        } else {
            write!(
                self.output,
                "{} [{}] ",
                format!("{}:", question).bright_cyan().bold(),
                default
            )?;
        }
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(anyhow!("Input closed while waiting for: {}", question));
        }
        let answer = line.trim();
        Ok(if answer.is_empty() {
            default.to_string()
        } else {
            answer.to_string()
        })
    }

    fn complain(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{} {}", "⚠️".yellow(), message.yellow())?;
        Ok(())
    }

    /// One entry per line until an empty line. Entry n offers default n;
    /// `-` drops the remaining defaults.
    fn entries(&mut self, label: &str, defaults: &[String]) -> Result<Vec<String>> {
        let mut entries = Vec::new();
        let mut defaults_cleared = false;
        loop {
            let default = if defaults_cleared {
                ""
            } else {
                defaults.get(entries.len()).map_or("", String::as_str)
            };
            let answer = self.ask(&format!("Input {} #{}", label, entries.len() + 1), default)?;
            if answer == "-" {
                defaults_cleared = true;
                continue;
            }
            if answer.is_empty() {
                return Ok(entries);
            }
            match validate_field(&answer) {
                Ok(value) => entries.push(value.to_string()),
                Err(err) => self.complain(&err.to_string())?,
            }
        }
    }

    fn render_table(&mut self, meta: &MetaData) -> Result<()> {
        let rows = meta.table_rows();
        let width = rows.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
        writeln!(self.output)?;
        for (label, value) in rows {
            writeln!(
                self.output,
                "  {}  {}",
                format!("{:<width$}", label, width = width).bright_blue(),
                value.bright_white()
            )?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn decide(&mut self, path: &Path) -> Result<Decision> {
        let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        writeln!(self.output, "\n{} {}", "File:".green().bold(), name.bright_white())?;
        loop {
            let answer = self.ask("Process, skip or quit?", "process")?;
            match answer.to_lowercase().as_str() {
                "process" | "p" => return Ok(Decision::Process),
                "skip" | "s" => return Ok(Decision::Skip),
                "quit" | "q" => return Ok(Decision::Quit),
                _ => self.complain("Enter 'process', 'skip' or 'quit'")?,
            }
        }
    }

    fn year(&mut self, default: Option<u32>) -> Result<u32> {
        let default = default.map(|y| y.to_string()).unwrap_or_default();
        loop {
            let answer = self.ask("Input year", &default)?;
            match parse_year(&answer) {
                Ok(year) => return Ok(year),
                Err(_) => self.complain("Enter a valid year")?,
            }
        }
    }

    fn title_and_subtitles(&mut self, defaults: &[String]) -> Result<Vec<String>> {
        loop {
            let entries = self.entries("title/subtitle", defaults)?;
            if !entries.is_empty() {
                return Ok(entries);
            }
            self.complain("A title is required")?;
        }
    }

    fn authors(&mut self, defaults: &[String]) -> Result<Vec<String>> {
        self.entries("author", defaults)
    }

    fn review(&mut self, meta: &MetaData) -> Result<Review> {
        self.render_table(meta)?;
        loop {
            let answer = self.ask(
                "Confirm? [] yes, [y]ear, [t]itle/subtitles, [a]uthors",
                "",
            )?;
            match answer.to_lowercase().as_str() {
                "" | "yes" => return Ok(Review::Confirm),
                "y" | "year" => return Ok(Review::Year),
                "t" | "title" => return Ok(Review::TitleAndSubtitles),
                "a" | "authors" => return Ok(Review::Authors),
                _ => self.complain("Enter '', 'y', 't' or 'a'")?,
            }
        }
    }

    fn confirm(&mut self, from: &Path, to: &Path) -> Result<bool> {
        writeln!(
            self.output,
            "\n{} {}\n{} {}",
            "FROM:".bright_black().bold(),
            from.display().to_string().bright_white(),
            "  TO:".green().bold(),
            to.display().to_string().bright_cyan()
        )?;
        loop {
            let answer = self.ask("Rename?", "yes")?;
            match parse_bool(&answer) {
                Some(value) => return Ok(value),
                None => self.complain("Enter 'yes' or 'no'")?,
            }
        }
    }
}

fn parse_bool(text: &str) -> Option<bool> {
    match text.trim().to_lowercase().as_str() {
        "y" | "yes" | "true" | "1" | "on" => Some(true),
        "n" | "no" | "false" | "0" | "off" => Some(false),
        _ => None,
    }
}
