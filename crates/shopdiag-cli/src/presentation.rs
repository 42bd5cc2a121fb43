//! Report rendering for the terminal.
//!
//! Format-only: the report is already final when it gets here.

use std::fmt::Write as _;

use serde::Serialize;
use shopdiag_core::{CollectionDetail, CollectionDetails, DiagnosticReport, EnvironmentSnapshot};

use crate::commands::OutputFormat;
use crate::error::CliError;

/// Render a report in the requested format.
///
/// # Errors
///
/// Returns [`CliError::Output`] if JSON serialization fails.
pub fn render(report: &DiagnosticReport, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => to_pretty_json(report),
        OutputFormat::Text => Ok(render_text(report)),
    }
}

/// Pretty-printed JSON for any serializable value.
///
/// # Errors
///
/// Returns [`CliError::Output`] if serialization fails.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn render_text(report: &DiagnosticReport) -> String {
    let mut out = String::new();
    let status = if report.success { "OK" } else { "FAILED" };
    let _ = writeln!(out, "Storefront connection: {status}");
    write_env(&mut out, &report.env);

    if !report.success {
        let _ = writeln!(
            out,
            "\nError: {}",
            report.error.as_deref().unwrap_or("unknown error")
        );
        for cause in report.stack.iter().skip(1) {
            let _ = writeln!(out, "  caused by: {cause}");
        }
        return out;
    }

    if let Some(shop) = &report.shop {
        let _ = writeln!(out, "\nShop: {} ({})", shop.name, shop.id);
    } else {
        let _ = writeln!(out, "\nShop: --");
    }

    let _ = writeln!(out, "\nCollections ({}):", report.collections.len());
    if report.collections.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for collection in &report.collections {
        let _ = writeln!(
            out,
            "  {:<30} {:<30} shopdiag check --collection {}",
            collection.handle, collection.title, collection.handle
        );
    }

    match &report.collection_details {
        CollectionDetails::NotRequested => {}
        CollectionDetails::Found(detail) => write_detail(&mut out, detail),
        other => {
            if let Some(message) = other.error_message() {
                let _ = writeln!(out, "\nCollection details: {message}");
            }
        }
    }

    out
}

fn write_env(out: &mut String, env: &EnvironmentSnapshot) {
    let domain = if env.store_domain.is_empty() {
        "(not set)"
    } else {
        env.store_domain.as_str()
    };
    let _ = writeln!(out, "  Store domain: {domain}");
    if env.has_token {
        let _ = writeln!(out, "  Token:        present ({} chars)", env.token_length);
    } else {
        let _ = writeln!(out, "  Token:        missing");
    }
}

fn write_detail(out: &mut String, detail: &CollectionDetail) {
    let _ = writeln!(out, "\nCollection: {} ({})", detail.title, detail.handle);
    if !detail.description.is_empty() {
        let _ = writeln!(out, "  {}", detail.description);
    }
    let _ = writeln!(out, "  Products ({}):", detail.products.nodes.len());
    for product in &detail.products.nodes {
        let min = &product.price_range.min_variant_price;
        let max = &product.price_range.max_variant_price;
        let price = if min.amount == max.amount {
            format!("{} {}", min.amount, min.currency_code)
        } else {
            format!("{} - {} {}", min.amount, max.amount, max.currency_code)
        };
        let _ = writeln!(out, "    {:<40} {price}", product.title);
    }
    if detail.has_more_products() {
        let _ = writeln!(out, "    ... more products available");
    }
}
