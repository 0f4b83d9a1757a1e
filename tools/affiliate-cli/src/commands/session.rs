//! Login and logout.

use affiliate_catalog::admin::notification::LOGGED_OUT;
use anyhow::{bail, Context as _, Result};
use dialoguer::Password;

use super::LoginArgs;
use crate::context::Context;

/// Store an admin token in the session file.
pub async fn login(args: LoginArgs, ctx: &Context) -> Result<()> {
    let token = match args.token {
        Some(token) => token,
        None => Password::new()
            .with_prompt("Admin token")
            .interact()
            .context("Failed to read token")?,
    };

    if token.trim().is_empty() {
        bail!("Token must not be empty");
    }

    ctx.session.login(&token)?;
    tracing::info!("admin session stored");
    ctx.output.success("Login realizado");

    Ok(())
}

/// Forget the admin token.
pub async fn logout(ctx: &Context) -> Result<()> {
    ctx.session.logout()?;
    tracing::info!("admin session cleared");
    ctx.output.success(LOGGED_OUT);
    Ok(())
}
