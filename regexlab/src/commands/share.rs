// regexlab/src/commands/share.rs
//! Implements the `share` command pair: minting and importing editor-state
//! tokens.

use std::io::Read;

use anyhow::{Context, Result};
use log::debug;

use regexlab_core::{decode_state, encode_state, ShareState};

use crate::cli::{ShareCommand, ShareDecodeCommand, ShareEncodeCommand};

pub fn run(cmd: &ShareCommand) -> Result<()> {
    match cmd {
        ShareCommand::Encode(args) => encode(args),
        ShareCommand::Decode(args) => decode(args),
    }
}

fn encode(args: &ShareEncodeCommand) -> Result<()> {
    let token = encode_state(&args.pattern, &args.flags, &args.text, args.replace.as_deref());
    debug!("minted share token of {} byte(s)", token.len());
    println!("{token}");
    Ok(())
}

fn decode(args: &ShareDecodeCommand) -> Result<()> {
    let token = match &args.token {
        Some(token) => token.clone(),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read share token from stdin")?;
            buffer
        }
    };

    let state = decode_state(token.trim());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&state)?);
        return Ok(());
    }

    if state == ShareState::default() {
        println!("(no recognized fields in token)");
        return Ok(());
    }

    print_field("pattern", state.pattern.as_deref());
    print_field("flags", state.flags.as_deref());
    print_field("text", state.text.as_deref());
    print_field("replace", state.replacement.as_deref());
    Ok(())
}

fn print_field(label: &str, value: Option<&str>) {
    if let Some(value) = value {
        println!("{label}: {value}");
    }
}
