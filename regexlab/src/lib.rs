// regexlab/src/lib.rs
//! # RegexLab CLI
//!
//! This crate provides the terminal front end for the RegexLab core: it
//! passes the four editor strings (pattern, flags, text, replacement) into
//! `regexlab-core` and renders the four artifacts (match rows, timing and
//! error, replacement preview, highlight markup) that come back.

pub mod cli;
pub mod commands;
pub mod logger;
