//! Terminal rendering of the page view.
//!
//! `render_form` and `render_card` stand in for the form and card
//! components: the form gets `(initial_data, is_update)`, a card gets one
//! product.

use std::io::{self, Write};

use inventory_core::{FormProps, PageView, Product};
use serde_json::Value;

pub const TITLE: &str = "Apparel Inventory System";

pub fn render_view(view: &PageView<'_>, out: &mut impl Write) -> io::Result<()> {
    match view {
        PageView::Loading => writeln!(out, "Loading products..."),
        PageView::Error(message) => writeln!(out, "Error: {message}"),
        PageView::Ready { form, products } => {
            writeln!(out, "{TITLE}")?;
            writeln!(out)?;
            render_form(form, out)?;
            writeln!(out)?;
            writeln!(out, "Available Products Inventory")?;
            if products.is_empty() {
                return writeln!(out, "No products available.");
            }
            for product in products.iter() {
                render_card(product, out)?;
            }
            Ok(())
        }
    }
}

pub fn render_form(form: &FormProps, out: &mut impl Write) -> io::Result<()> {
    if !form.is_update {
        return writeln!(out, "[form] new product");
    }
    write!(out, "[form] updating")?;
    for (key, value) in &form.initial_data {
        write!(out, " {key}={}", display_value(value))?;
    }
    writeln!(out)
}

pub fn render_card(product: &Product, out: &mut impl Write) -> io::Result<()> {
    write!(out, "  #{}", product.id)?;
    for (key, value) in &product.fields {
        write!(out, "  {key}: {}", display_value(value))?;
    }
    writeln!(out)
}

/// Strings print bare, everything else as JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
