//! Public storefront commands.

use affiliate_catalog::prelude::*;
use affiliate_catalog::storefront::{LOAD_FAILED_HINT, LOAD_FAILED_MESSAGE};
use anyhow::{bail, Result};
use console::style;
use serde::Serialize;

use super::{BrowseArgs, ShowArgs};
use crate::context::Context;
use crate::render::{self, Layout};

/// JSON shape of the storefront page.
#[derive(Serialize)]
struct PageJson<'a> {
    heading: &'a str,
    categories: &'a [&'a str],
    featured: Option<&'a Product>,
    products: &'a [&'a Product],
}

async fn load_storefront(ctx: &Context) -> Result<Storefront> {
    let repository = ctx.repository()?;
    let mut storefront = Storefront::new();

    let spinner = ctx.output.spinner("Loading products...");
    let loaded = storefront.load(&repository).await;
    spinner.finish_and_clear();

    if let Err(e) = loaded {
        ctx.output.debug(&format!("List failed: {}", e));
    }
    Ok(storefront)
}

/// Render the storefront: hero, category chips, heading and grid.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let mut storefront = load_storefront(ctx).await?;
    if let Some(search) = args.search {
        storefront.set_search(search);
    }
    if let Some(category) = args.category {
        storefront.select_category(category);
    }

    let layout = Layout::from_width(ctx.output.term_width());
    let page = storefront.page();

    let view = match page {
        StorefrontPage::Ready(ref view) => view,
        _ => {
            let message = page.notice().unwrap_or(LOAD_FAILED_MESSAGE);
            bail!("{} {}", message, LOAD_FAILED_HINT);
        }
    };

    if ctx.output.is_json() {
        ctx.output.json(&PageJson {
            heading: view.heading(),
            categories: &view.categories,
            featured: view.featured,
            products: &view.products,
        });
        return Ok(());
    }

    if let Some(hero) = view.featured {
        println!();
        for line in render::hero(hero, layout) {
            println!("{}", line);
        }
    }

    println!();
    println!(
        "{}",
        render::category_chips(&view.categories, &storefront.query().category)
    );

    ctx.output.header(view.heading());
    if let Some(notice) = page.notice() {
        ctx.output.info(notice);
        return Ok(());
    }
    for product in &view.products {
        println!("  {}", render::card(product, layout));
    }
    println!(
        "\n{}",
        style(format!("{} produto(s)", view.products.len())).dim()
    );

    Ok(())
}

/// Render one product's detail view.
pub async fn show(args: ShowArgs, ctx: &Context) -> Result<()> {
    let storefront = load_storefront(ctx).await?;
    if matches!(storefront.state(), LoadState::Failed) {
        bail!("{} {}", LOAD_FAILED_MESSAGE, LOAD_FAILED_HINT);
    }

    let id = ProductId::new(args.id);
    let product = match storefront.find(id) {
        Some(product) => product,
        None => bail!("Product #{} not found", id),
    };

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    let layout = Layout::choose(args.compact, args.full, ctx.output.term_width());
    ctx.output.debug(&format!("Layout: {}", layout.as_str()));

    ctx.output.header(&product.display_title);
    for (label, value) in render::detail(product, layout) {
        ctx.output.kv(label, &value);
    }

    Ok(())
}
