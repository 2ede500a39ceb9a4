use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::super::args::ReleaseCommand;
use super::{
    CommandResult, CommandSummary, ReleaseRow, ReleaseSummary, helper::finish_with_context,
};
use crate::{
    context::CatalogContext,
    translator::Translator,
};

/// Extension of compiled translation files.
pub const COMPILED_EXTENSION: &str = "json";

pub fn release(cmd: ReleaseCommand, start_dir: &Path) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CatalogContext::new(start_dir, &args.common.options())?;

    let out_dir = args.out_dir.as_ref().map(|dir| start_dir.join(dir));
    if let Some(dir) = &out_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let mut rows = Vec::new();
    for loaded in &ctx.catalogs {
        let translator = Translator::from_catalog(&loaded.catalog);
        let output = match &out_dir {
            Some(dir) => dir.join(compiled_name(&loaded.path)),
            None => loaded.path.with_extension(COMPILED_EXTENSION),
        };
        fs::write(&output, translator.to_json()?)
            .with_context(|| format!("Failed to write {}", output.display()))?;

        let output_path = match &args.out_dir {
            Some(dir) => dir.join(compiled_name(&loaded.path)),
            None => Path::new(&loaded.file_path).with_extension(COMPILED_EXTENSION),
        };
        rows.push(ReleaseRow {
            output_path: output_path.to_string_lossy().replace('\\', "/"),
            stats: loaded.catalog.stats(),
            generated: translator.len(),
        });
    }

    Ok(finish_with_context(
        CommandSummary::Release(ReleaseSummary { rows }),
        Vec::new(),
        &ctx,
        true,
    ))
}

/// `translations/A_cs.ts` compiles to `A_cs.json`.
fn compiled_name(catalog_path: &Path) -> PathBuf {
    let stem = catalog_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "catalog".to_string());
    PathBuf::from(format!("{}.{}", stem, COMPILED_EXTENSION))
}
