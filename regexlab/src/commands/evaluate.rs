// regexlab/src/commands/evaluate.rs
//! Implements the `test` command: one full evaluation pass, rendered as a
//! match table plus the replacement and highlight previews.

use std::fs;
use std::io::Read;

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use is_terminal::IsTerminal;
use log::debug;
use owo_colors::OwoColorize;

use regexlab_core::{pipeline, EditorInput, MatchRecord};

use crate::cli::TestCommand;

pub fn run(cmd: &TestCommand) -> Result<()> {
    let text = read_sample_text(cmd)?;
    debug!("evaluating {} byte(s) of sample text", text.len());

    let input = EditorInput {
        pattern: cmd.pattern.clone(),
        flags: cmd.flags.clone(),
        text,
        replacement: cmd.replace.clone().unwrap_or_default(),
    };
    let output = pipeline::run(&input);

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let styled = std::io::stdout().is_terminal();

    // A pattern that fails to compile is a reported result, not a CLI
    // failure: the exit code stays zero and the editor-style message goes to
    // stdout, matching the panel behavior of the interactive front end.
    if let Some(error) = &output.result.error {
        if styled {
            println!("{} {error}", "pattern error:".red().bold());
        } else {
            println!("pattern error: {error}");
        }
        return Ok(());
    }

    if !output.result.records.is_empty() {
        println!("{}", match_table(&output.result.records));
    }

    let summary = format!(
        "{} match(es) in {:.3} ms (flags: \"{}\")",
        output.result.records.len(),
        output.result.elapsed_millis,
        output.flags,
    );
    if styled {
        println!("{}", summary.bold());
    } else {
        println!("{summary}");
    }

    if cmd.html {
        println!();
        println!("{}", output.highlight);
    }

    if cmd.replace.is_some() {
        println!();
        if styled {
            println!("{}", "replaced:".green().bold());
        } else {
            println!("replaced:");
        }
        println!("{}", output.replaced);
    }

    Ok(())
}

/// Resolves the sample text: inline flag first, then file, then stdin.
fn read_sample_text(cmd: &TestCommand) -> Result<String> {
    if let Some(text) = &cmd.text {
        return Ok(text.clone());
    }
    if let Some(path) = &cmd.input_file {
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display()));
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read sample text from stdin")?;
    Ok(buffer)
}

fn match_table(records: &[MatchRecord]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Span", "Match", "Groups"]);

    for record in records {
        table.add_row(vec![
            record.ordinal.to_string(),
            format!("{}..{}", record.start, record.end),
            record.text.clone(),
            format_groups(record),
        ]);
    }
    table
}

/// Renders capture groups for one row: numbered first, then named.
fn format_groups(record: &MatchRecord) -> String {
    let mut parts = Vec::new();
    for (i, group) in record.numbered_groups.iter().enumerate() {
        match group {
            Some(value) => parts.push(format!("${}={value}", i + 1)),
            None => parts.push(format!("${}=-", i + 1)),
        }
    }
    for (name, group) in &record.named_groups {
        match group {
            Some(value) => parts.push(format!("{name}={value}")),
            None => parts.push(format!("{name}=-")),
        }
    }
    parts.join(", ")
}
