//! Interactive prompts.
//!
//! Reads the domain list and the per-domain export choices. Input is any
//! async buffered reader and prompts go to any writer, so the whole dialogue
//! can be driven from memory.

use std::collections::HashSet;
use std::io::{self, Write};

use colored::*;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::config::{ExportMode, EXIT_COMMAND};
use crate::dns::DomainBatch;

/// What the user asked for at the domain prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptInput {
    /// `exit`, or end of input
    Exit,
    Batch(DomainBatch),
}

/// Answer to "save this domain?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportChoice {
    Yes,
    No,
    /// This domain and every remaining one
    All,
    /// Neither this domain nor any remaining one
    None,
}

impl ExportChoice {
    /// Parses an answer. Anything unrecognized means no.
    pub fn parse(answer: &str) -> Self {
        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => ExportChoice::Yes,
            "a" | "all" => ExportChoice::All,
            "x" | "none" => ExportChoice::None,
            _ => ExportChoice::No,
        }
    }

    fn saves(&self) -> bool {
        matches!(self, ExportChoice::Yes | ExportChoice::All)
    }
}

/// Domains whose results are saved to CSV.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportPlan {
    selected: HashSet<String>,
}

impl ExportPlan {
    /// Saves every domain of `batch`.
    pub fn all(batch: &DomainBatch) -> Self {
        Self {
            selected: batch.domains().iter().cloned().collect(),
        }
    }

    /// Saves nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// Applies answers in batch order. An `All` or `None` answer settles the
    /// remaining domains; missing answers mean no.
    pub fn from_choices(
        batch: &DomainBatch,
        choices: impl IntoIterator<Item = ExportChoice>,
    ) -> Self {
        let mut plan = Self::none();
        let mut choices = choices.into_iter();
        let mut settled: Option<bool> = None;
        for domain in batch.domains() {
            let save = match settled {
                Some(save) => save,
                None => {
                    let choice = choices.next().unwrap_or(ExportChoice::No);
                    match choice {
                        ExportChoice::All => settled = Some(true),
                        ExportChoice::None => settled = Some(false),
                        _ => {}
                    }
                    choice.saves()
                }
            };
            if save {
                plan.selected.insert(domain.clone());
            }
        }
        plan
    }

    pub fn should_export(&self, domain: &str) -> bool {
        self.selected.contains(domain)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

/// Line-oriented prompt dialogue.
pub struct Prompter<R, W> {
    reader: R,
    out: W,
}

impl<R, W> Prompter<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(reader: R, out: W) -> Self {
        Self { reader, out }
    }

    /// Consumes the prompter, returning its writer.
    pub fn into_output(self) -> W {
        self.out
    }

    fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text.cyan())?;
        self.out.flush()
    }

    /// Reads one trimmed line; `None` at end of input.
    async fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Asks for a comma-separated domain list.
    ///
    /// Empty input selects `default_domain`; `exit` or end of input ends the
    /// session.
    pub async fn read_domains(&mut self, default_domain: &str) -> io::Result<PromptInput> {
        self.say(&format!(
            "Enter domain names separated by commas, or type '{EXIT_COMMAND}' to quit (default: {default_domain}):"
        ))?;
        match self.read_line().await? {
            None => Ok(PromptInput::Exit),
            Some(line) if line.eq_ignore_ascii_case(EXIT_COMMAND) => Ok(PromptInput::Exit),
            Some(line) => Ok(PromptInput::Batch(DomainBatch::parse(&line, default_domain))),
        }
    }

    /// Decides which domains of `batch` are saved.
    ///
    /// With `ExportMode::Ask` the user is asked per domain until an
    /// all/none answer settles the rest. End of input answers no for every
    /// remaining domain.
    pub async fn ask_export_plan(
        &mut self,
        batch: &DomainBatch,
        mode: ExportMode,
    ) -> io::Result<ExportPlan> {
        match mode {
            ExportMode::All => return Ok(ExportPlan::all(batch)),
            ExportMode::None => return Ok(ExportPlan::none()),
            ExportMode::Ask => {}
        }

        let mut choices = Vec::new();
        for domain in batch.domains() {
            self.say(&format!(
                "Do you want to save the results for {domain} to a CSV file? (y(es)/n(o)/a(ll)/x(none))"
            ))?;
            let Some(answer) = self.read_line().await? else {
                break;
            };
            let choice = ExportChoice::parse(&answer);
            choices.push(choice);
            if matches!(choice, ExportChoice::All | ExportChoice::None) {
                break;
            }
        }
        Ok(ExportPlan::from_choices(batch, choices))
    }
}
