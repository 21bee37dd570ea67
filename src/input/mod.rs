//! Input adapters: build a validated `Case` from the line-oriented text
//! format or from JSON.

mod json;
mod text;

pub use json::parse_case_json;
pub use text::parse_case_text;

use crate::errors::AppResult;
use crate::models::Case;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Read};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    #[default]
    Auto,
    Text,
    Json,
}

impl InputFormat {
    /// Resolve `Auto` by looking at the first non-blank character.
    pub fn detect(self, content: &str) -> InputFormat {
        match self {
            InputFormat::Auto => {
                if content.trim_start().starts_with('{') {
                    InputFormat::Json
                } else {
                    InputFormat::Text
                }
            }
            other => other,
        }
    }
}

pub fn parse_case(content: &str, format: InputFormat) -> AppResult<Case> {
    match format.detect(content) {
        InputFormat::Json => parse_case_json(content),
        _ => parse_case_text(content),
    }
}

/// Read raw case content from a file, or stdin when `path` is `None` or `-`.
pub fn read_source(path: Option<&str>) -> AppResult<String> {
    match path {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(p) => Ok(fs::read_to_string(crate::utils::path::expand_tilde(p))?),
    }
}

/// Short name of where the case came from, for the evaluation log.
pub fn source_label(path: Option<&str>) -> String {
    match path {
        None | Some("-") => "stdin".to_string(),
        Some(p) => p.to_string(),
    }
}
