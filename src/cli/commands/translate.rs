use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::super::args::TranslateCommand;
use super::{CommandResult, CommandSummary, TranslateSummary, helper::finish};
use crate::{catalog::Catalog, translator::Translator};

use super::release::COMPILED_EXTENSION;

pub fn translate(cmd: TranslateCommand, start_dir: &Path) -> Result<CommandResult> {
    let path = start_dir.join(&cmd.catalog);
    let translator = load_translator(&path)
        .with_context(|| format!("Failed to load {}", cmd.catalog.display()))?;

    let text = match cmd.count {
        Some(n) => translator.translate_plural(&cmd.context, &cmd.source, n),
        None => translator.translate(&cmd.context, &cmd.source).to_string(),
    };

    Ok(finish(
        CommandSummary::Translate(TranslateSummary { text }),
        Vec::new(),
        1,
        translator.len(),
        true,
    ))
}

/// Compiled `.json` tables are loaded as-is; anything else is parsed as a catalog.
fn load_translator(path: &Path) -> Result<Translator> {
    if path.extension().is_some_and(|ext| ext == COMPILED_EXTENSION) {
        let json = fs::read_to_string(path)?;
        return Translator::from_json(&json);
    }
    let catalog = Catalog::load(path)?;
    Ok(Translator::from_catalog(&catalog))
}
