//! Dashboard statistics.

use affiliate_catalog::prelude::*;
use anyhow::Result;

use super::report;
use crate::context::Context;

/// Show the dashboard summary cards.
pub async fn run(ctx: &Context) -> Result<()> {
    ctx.require_admin()?;

    let mut workflow = AdminWorkflow::new(ctx.repository()?);
    let spinner = ctx.output.spinner("Loading products...");
    let loaded = workflow.refresh().await;
    spinner.finish_and_clear();
    report(&mut workflow, loaded, &ctx.output)?;

    let stats = workflow.stats();
    if ctx.output.is_json() {
        ctx.output.json(&stats);
        return Ok(());
    }

    ctx.output.header("Dashboard");
    ctx.output.kv("Produtos ativos", &stats.active.to_string());
    ctx.output.kv("Em destaque", &stats.featured.to_string());
    ctx.output.kv("Último adicionado", stats.last_product_label());

    Ok(())
}
