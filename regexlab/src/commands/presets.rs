// regexlab/src/commands/presets.rs
//! Implements the `presets` command family: listing, showing, exporting and
//! importing preset collections.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use log::debug;

use regexlab_core::{default_presets, merge_presets, validate_presets, Preset};

use crate::cli::PresetsCommand;

pub fn run(cmd: &PresetsCommand) -> Result<()> {
    match cmd {
        PresetsCommand::List => list(),
        PresetsCommand::Show { id } => show(id),
        PresetsCommand::Export { output } => export(output.as_deref()),
        PresetsCommand::Import { file } => import(file),
    }
}

fn list() -> Result<()> {
    println!("{}", catalog_table(default_presets()));
    Ok(())
}

fn show(id: &str) -> Result<()> {
    let Some(preset) = default_presets().iter().find(|p| p.id == id) else {
        bail!("No preset named '{id}'. Try `regexlab presets list`.");
    };

    println!("id:      {}", preset.id);
    println!("name:    {}", preset.name);
    println!("pattern: {}", preset.pattern);
    println!("flags:   {}", preset.flags);
    println!("test:    {}", preset.test);
    if let Some(replace) = &preset.replace {
        println!("replace: {replace}");
    }
    Ok(())
}

fn export(output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(default_presets())?;
    match output {
        Some(path) => {
            fs::write(path, &json)
                .with_context(|| format!("Failed to write preset catalog to {}", path.display()))?;
            println!("Exported {} preset(s) to {}", default_presets().len(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn import(file: &PathBuf) -> Result<()> {
    let raw = fs::read_to_string(file)
        .with_context(|| format!("Failed to read preset file {}", file.display()))?;
    let user: Vec<Preset> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse preset file {}", file.display()))?;
    debug!("imported {} user preset(s)", user.len());

    let merged = merge_presets(default_presets().to_vec(), user);
    validate_presets(&merged)?;

    println!("{} preset(s) after merge:", merged.len());
    println!("{}", catalog_table(&merged));
    Ok(())
}

fn catalog_table(presets: &[Preset]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Id", "Name", "Flags", "Pattern"]);

    for preset in presets {
        table.add_row(vec![
            preset.id.clone(),
            preset.name.clone(),
            preset.flags.clone(),
            preset.pattern.clone(),
        ]);
    }
    table
}
