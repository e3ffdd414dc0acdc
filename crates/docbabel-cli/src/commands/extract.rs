//! Extract command - list the translatable text units of a source file.

use std::fs;
use std::path::PathBuf;

use colored::Colorize;
use docbabel::{Codelist, Schema, TextUnit};

pub fn run(file: PathBuf, json: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("Source file not found: {}", file.display()).into());
    }

    let content = fs::read_to_string(&file)?;
    let units: Vec<TextUnit> = match file.extension().and_then(|e| e.to_str()) {
        Some("csv") => Codelist::parse(&content)?.units().collect(),
        Some("json") => Schema::parse(&content)?.units(),
        _ => return Err(format!("Unsupported file format: {}", file.display()).into()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&units)?);
    } else {
        for unit in &units {
            println!("{}\t{}", unit.location, unit.text);
        }
    }

    if verbose {
        eprintln!(
            "{} {} unit(s) from {}",
            "Extracted".cyan().bold(),
            units.len().to_string().white().bold(),
            file.display()
        );
    }

    Ok(())
}
