//! Translate command - run a batch translation over a configuration file.

use std::fs;
use std::path::PathBuf;

use colored::Colorize;
use docbabel::{BatchTranslator, ConfigEntry, DirProvider};

pub fn run(
    config: PathBuf,
    language: String,
    locale_dir: PathBuf,
    source_language: String,
    substitutions: Vec<String>,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !config.exists() {
        return Err(format!("Configuration file not found: {}", config.display()).into());
    }

    let entries: Vec<ConfigEntry> = serde_json::from_str(&fs::read_to_string(&config)?)?;
    let provider = DirProvider::new(&locale_dir).with_source_language(source_language);

    let mut translator = BatchTranslator::new(&provider, language.clone());
    for pair in &substitutions {
        let (name, value) = pair
            .split_once('=')
            .ok_or_else(|| format!("Invalid substitution '{}', expected name=value", pair))?;
        translator = translator.with_substitution(name, value);
    }

    translator.run(&entries)?;

    println!(
        "{} {} configuration entr{} to {}",
        "Translated".cyan().bold(),
        entries.len().to_string().white().bold(),
        if entries.len() == 1 { "y" } else { "ies" },
        language.white().bold()
    );

    Ok(())
}
