//! Terminal front end for the inventory page.
//!
//! Each subcommand mounts a `ProductPage`, performs one user action through
//! it and prints the resulting view.

pub mod args;
pub mod prompt;
pub mod render;

use std::io::Write;

use anyhow::{bail, Context};
use inventory_core::{ApiConfig, ProductApi, ProductData, ProductPage, Prompt, Transport};

pub use args::{Cli, Commands};
pub use prompt::TerminalPrompt;

/// Resolve the base URL: `--base-url` (or its env var) first.
pub fn config(cli: &Cli) -> anyhow::Result<ApiConfig> {
    let config = match &cli.base_url {
        Some(url) => ApiConfig::new(url.clone()),
        None => ApiConfig::from_env(),
    };
    config.context("no usable backend URL; pass --base-url")
}

/// Run one command. Returns whether the page ended without an error.
pub async fn run<T, P>(
    command: &Commands,
    page: &mut ProductPage<T, P>,
    out: &mut impl Write,
) -> anyhow::Result<bool>
where
    T: Transport,
    P: Prompt,
{
    page.mount().await;
    if page.error().is_none() {
        match command {
            Commands::List => {}
            Commands::Add { fields } => {
                page.submit(fields.iter().cloned().collect()).await;
            }
            Commands::Edit { id, fields } => {
                if !page.begin_edit_by_id(id) {
                    bail!("product {id} not found");
                }
                let mut data: ProductData = page
                    .edit_session()
                    .product()
                    .map(|product| product.to_data())
                    .unwrap_or_default();
                data.extend(fields.iter().cloned());
                page.submit(data).await;
            }
            Commands::Delete { id } => {
                page.request_delete(id).await;
            }
        }
    }
    render::render_view(&page.view(), out)?;
    Ok(page.error().is_none())
}

pub fn page<P: Prompt>(
    config: &ApiConfig,
    prompt: P,
) -> ProductPage<inventory_core::ReqwestTransport, P> {
    ProductPage::new(
        ProductApi::new(config, inventory_core::ReqwestTransport::new()),
        prompt,
    )
}
