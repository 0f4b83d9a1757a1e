//! Admin product management.

use affiliate_catalog::admin::NO_PRODUCT_LABEL;
use affiliate_catalog::prelude::*;
use affiliate_client::HttpProductRepository;
use anyhow::{bail, Context as _, Result};
use console::{style, Term};
use dialoguer::{Confirm, Input};

use super::{report, ProductFields, ProductsArgs, ProductsCommand};
use crate::context::Context;
use crate::output::featured_badge;

type Workflow = AdminWorkflow<HttpProductRepository>;

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    ctx.require_admin()?;

    let mut workflow = AdminWorkflow::new(ctx.repository()?);

    match args.command {
        ProductsCommand::List => list_products(&mut workflow, ctx).await,
        ProductsCommand::Add(fields) => add_product(&mut workflow, fields, ctx).await,
        ProductsCommand::Edit { id, fields } => {
            edit_product(&mut workflow, ProductId::new(id), fields, ctx).await
        }
        ProductsCommand::Delete { id } => {
            delete_product(&mut workflow, ProductId::new(id), ctx).await
        }
    }
}

async fn list_products(workflow: &mut Workflow, ctx: &Context) -> Result<()> {
    let spinner = ctx.output.spinner("Loading products...");
    let loaded = workflow.refresh().await;
    spinner.finish_and_clear();
    report(workflow, loaded, &ctx.output)?;

    if ctx.output.is_json() {
        ctx.output.json(&workflow.products());
        return Ok(());
    }

    ctx.output.header("Produtos");
    if workflow.products().is_empty() {
        ctx.output.info(NO_PRODUCT_LABEL);
        return Ok(());
    }

    let widths = [6, 32, 14, 12, 12];
    ctx.output
        .table_row(&["ID", "Título", "Preço", "Plataforma", "Categoria"], &widths);
    for product in workflow.products() {
        let id = product.id.map(|id| id.to_string()).unwrap_or_default();
        ctx.output.table_row(
            &[
                &id,
                &product.display_title,
                &product.display_price,
                &product.platform,
                &product.category,
            ],
            &widths,
        );
        if product.featured {
            ctx.output.list_item(&featured_badge(true));
        }
    }

    Ok(())
}

async fn add_product(workflow: &mut Workflow, fields: ProductFields, ctx: &Context) -> Result<()> {
    workflow.open_create();
    let draft = fill_form(workflow.form().initial_draft(), &fields, ctx)?;
    save(workflow, draft, ctx).await
}

async fn edit_product(
    workflow: &mut Workflow,
    id: ProductId,
    fields: ProductFields,
    ctx: &Context,
) -> Result<()> {
    let spinner = ctx.output.spinner("Loading products...");
    let loaded = workflow.refresh().await;
    spinner.finish_and_clear();
    report(workflow, loaded, &ctx.output)?;

    let target = match workflow.find(id) {
        Some(product) => product.clone(),
        None => bail!("Product #{} not found", id),
    };

    workflow.open_edit(target);
    let draft = fill_form(workflow.form().initial_draft(), &fields, ctx)?;
    save(workflow, draft, ctx).await
}

async fn delete_product(workflow: &mut Workflow, id: ProductId, ctx: &Context) -> Result<()> {
    let spinner = ctx.output.spinner("Deleting product...");
    let result = workflow.delete(id).await;
    spinner.finish_and_clear();
    report(workflow, result, &ctx.output)
}

async fn save(workflow: &mut Workflow, draft: ProductDraft, ctx: &Context) -> Result<()> {
    let spinner = ctx.output.spinner("Saving product...");
    let result = workflow.save(draft).await;
    spinner.finish_and_clear();
    let saved = report(workflow, result, &ctx.output)?;

    if ctx.output.is_json() {
        ctx.output.json(&saved);
    } else if let Some(id) = saved.id {
        ctx.output.kv("id", &id.to_string());
    }
    Ok(())
}

fn interactive(ctx: &Context) -> bool {
    !ctx.output.is_json() && Term::stdout().is_term()
}

/// Overwrite draft fields with the ones given as flags.
fn apply_flags(mut draft: ProductDraft, fields: &ProductFields) -> ProductDraft {
    let text_fields = [
        (&mut draft.display_title, &fields.title),
        (&mut draft.short_description, &fields.description),
        (&mut draft.image_url, &fields.image_url),
        (&mut draft.affiliate_link, &fields.link),
        (&mut draft.custom_slug, &fields.slug),
        (&mut draft.display_price, &fields.price),
        (&mut draft.platform, &fields.platform),
        (&mut draft.category, &fields.category),
    ];
    for (slot, value) in text_fields {
        if let Some(value) = value {
            *slot = value.clone();
        }
    }
    if let Some(featured) = fields.featured {
        draft.featured = featured;
    }
    draft
}

/// Apply flags, then prompt for whatever the flags left out.
fn fill_form(initial: ProductDraft, fields: &ProductFields, ctx: &Context) -> Result<ProductDraft> {
    let mut draft = apply_flags(initial, fields);
    if fields.no_input || !interactive(ctx) {
        return Ok(draft);
    }

    println!("{}", style("Preencha os campos do produto").bold());

    let prompts = [
        ("Título", &mut draft.display_title, fields.title.is_none()),
        ("Descrição curta", &mut draft.short_description, fields.description.is_none()),
        ("URL da imagem", &mut draft.image_url, fields.image_url.is_none()),
        ("Link de afiliado", &mut draft.affiliate_link, fields.link.is_none()),
        ("Slug", &mut draft.custom_slug, fields.slug.is_none()),
        ("Preço", &mut draft.display_price, fields.price.is_none()),
        ("Plataforma", &mut draft.platform, fields.platform.is_none()),
        ("Categoria", &mut draft.category, fields.category.is_none()),
    ];
    for (label, slot, missing) in prompts {
        if !missing {
            continue;
        }
        *slot = Input::<String>::new()
            .with_prompt(label)
            .with_initial_text(slot.as_str())
            .allow_empty(true)
            .interact_text()
            .with_context(|| format!("Failed to read {}", label))?;
    }

    if fields.featured.is_none() {
        draft.featured = Confirm::new()
            .with_prompt("Em destaque?")
            .default(draft.featured)
            .interact()?;
    }

    Ok(draft)
}
