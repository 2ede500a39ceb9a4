use std::path::Path;

use anyhow::Result;

use super::super::args::StatsCommand;
use super::{CommandResult, CommandSummary, StatsRow, StatsSummary, helper::finish_with_context};
use crate::{catalog::CatalogStats, context::CatalogContext};

pub fn stats(cmd: StatsCommand, start_dir: &Path) -> Result<CommandResult> {
    let ctx = CatalogContext::new(start_dir, &cmd.common.options())?;

    let rows: Vec<StatsRow> = ctx
        .catalogs
        .iter()
        .map(|loaded| StatsRow {
            file_path: loaded.file_path.clone(),
            language: loaded.catalog.language.clone().unwrap_or_default(),
            stats: loaded.catalog.stats(),
        })
        .collect();

    let mut total = CatalogStats::default();
    for row in &rows {
        total += row.stats;
    }

    Ok(finish_with_context(
        CommandSummary::Stats(StatsSummary { rows, total }),
        Vec::new(),
        &ctx,
        true,
    ))
}
