//! Batch lemmatization command

use crate::error::CliError;
use crate::input::{read_lines, split_line, unescape_separator};
use anyhow::{Context, Result};
use clap::Parser;
use nefnir_core::Lemmatizer;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the lemmatize command
#[derive(Debug, Parser)]
#[command(
    name = "nefnir",
    version,
    about = "Rule-based lemmatizer for tagged Icelandic text"
)]
pub struct ProcessArgs {
    /// Tagged input file, one "form<separator>tag" pair per line
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// String separating word forms, tags and lemmas
    #[arg(short, long, value_name = "STRING", default_value = "\\t")]
    pub separator: String,

    /// Rule table file
    #[arg(long, value_name = "FILE", default_value = "rules.json")]
    pub rules: PathBuf,

    /// Tag map file
    #[arg(long, value_name = "FILE", default_value = "tags.json")]
    pub tags: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ProcessArgs {
    /// Execute the lemmatize command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        let time_start = Instant::now();
        let separator = unescape_separator(&self.separator)?;

        let lemmatizer = Lemmatizer::from_paths(&self.tags, &self.rules)
            .map_err(|e| CliError::TableError(e.to_string()))
            .with_context(|| {
                format!(
                    "Failed to load tables from {} and {}",
                    self.tags.display(),
                    self.rules.display()
                )
            })?;

        log::info!("Reading input from {}", self.input.display());
        log::info!("Separator set to {:?}", separator);

        let lines = read_lines(&self.input)?;
        let num_lines = lines.len();

        // Corpus lines repeat heavily; lemmatize each distinct line once.
        let mut cache: HashMap<&str, String> = HashMap::new();
        for line in &lines {
            cache
                .entry(line.as_str())
                .or_insert_with(|| render_line(&lemmatizer, line, &separator));
        }

        let outputs: Vec<&str> = lines.iter().map(|line| cache[line.as_str()].as_str()).collect();

        let elapsed = time_start.elapsed().as_secs_f64();
        log::info!(
            "{} lines processed in {:.2} s ({:.1} lines/s)",
            num_lines,
            elapsed,
            num_lines as f64 / elapsed
        );

        self.write_output(&outputs)
    }

    /// Write one output line per input line.
    fn write_output(&self, outputs: &[&str]) -> Result<()> {
        let mut writer: BufWriter<Box<dyn Write>> = match &self.output {
            Some(path) => {
                log::info!("Writing output to {}", path.display());
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                BufWriter::new(Box::new(file))
            }
            None => BufWriter::new(Box::new(io::stdout())),
        };

        for output in outputs {
            writeln!(writer, "{output}").context("Failed to write output")?;
        }
        writer.flush().context("Failed to flush output")?;

        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

/// Lemmatize one input line. Well-formed lines render as
/// `form<sep>tag<sep>lemma`; anything else renders empty so the output
/// stays line-aligned with the input.
fn render_line(lemmatizer: &Lemmatizer, line: &str, separator: &str) -> String {
    match split_line(line, separator) {
        Some((form, tag)) if !form.is_empty() => {
            let lemma = lemmatizer.lemmatize(form, tag);
            let mut rendered =
                String::with_capacity(form.len() + tag.len() + lemma.len() + 2 * separator.len());
            rendered.push_str(form);
            rendered.push_str(separator);
            rendered.push_str(tag);
            rendered.push_str(separator);
            rendered.push_str(&lemma);
            rendered
        }
        Some(_) => String::new(),
        None => {
            if !line.trim().is_empty() {
                log::warn!("Ignoring line: {}", line);
            }
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nefnir_core::{RuleSet, TagLexicon};

    fn lemmatizer() -> Lemmatizer {
        Lemmatizer::new(
            TagLexicon::from_json_str(r#"{"nken-s": "nke-s"}"#).unwrap(),
            RuleSet::from_json_str(r#"{"nke-s": {"suffix": {"s": ["s", ""]}}}"#).unwrap(),
        )
    }

    #[test]
    fn renders_well_formed_line() {
        let lem = lemmatizer();
        assert_eq!(
            render_line(&lem, "Halldórs\tnken-s", "\t"),
            "Halldórs\tnken-s\tHalldór"
        );
    }

    #[test]
    fn renders_blank_line_as_empty() {
        let lem = lemmatizer();
        assert_eq!(render_line(&lem, "", "\t"), "");
        assert_eq!(render_line(&lem, "   ", "\t"), "");
    }

    #[test]
    fn renders_malformed_line_as_empty() {
        let lem = lemmatizer();
        assert_eq!(render_line(&lem, "no-separator-here", "\t"), "");
        assert_eq!(render_line(&lem, "a\tb\tc", "\t"), "");
    }

    #[test]
    fn renders_empty_form_as_empty() {
        let lem = lemmatizer();
        assert_eq!(render_line(&lem, "\tnken-s", "\t"), "");
    }

    #[test]
    fn respects_custom_separator() {
        let lem = lemmatizer();
        assert_eq!(
            render_line(&lem, "Halldórs,nken-s", ","),
            "Halldórs,nken-s,Halldór"
        );
    }
}
