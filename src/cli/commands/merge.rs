use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::super::args::MergeCommand;
use super::{CommandResult, CommandSummary, MergeRow, MergeSummary, helper::finish_with_context};
use crate::{
    catalog::{Catalog, merge as merge_catalogs},
    context::CatalogContext,
};

pub fn merge(cmd: MergeCommand, start_dir: &Path) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CatalogContext::new(start_dir, &args.common.options())?;

    let template_path = start_dir.join(&args.template);
    let template = Catalog::load(&template_path)
        .with_context(|| format!("Failed to load template {}", args.template.display()))?;
    let template_real = fs::canonicalize(&template_path).ok();

    let mut rows = Vec::new();
    let mut file_count = 0;

    for loaded in &ctx.catalogs {
        // The template usually lives among the catalogs it is merged into.
        if template_real.is_some() && fs::canonicalize(&loaded.path).ok() == template_real {
            continue;
        }

        let (mut merged, stats) = merge_catalogs(&loaded.catalog, &template);
        if merged.source_language.is_none() {
            merged.source_language = Some(ctx.config.source_language.clone());
        }
        // Location hints or document attributes may change without any entry
        // being added or dropped.
        let changed = stats.has_changes() || merged != loaded.catalog;
        if changed {
            file_count += 1;
            if args.apply {
                merged
                    .save(&loaded.path)
                    .with_context(|| format!("Failed to write {}", loaded.file_path))?;
            }
        }
        rows.push(MergeRow {
            file_path: loaded.file_path.clone(),
            stats,
            changed,
        });
    }

    Ok(finish_with_context(
        CommandSummary::Merge(MergeSummary {
            rows,
            file_count,
            is_apply: args.apply,
        }),
        Vec::new(),
        &ctx,
        true,
    ))
}
