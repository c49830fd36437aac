use solid_invoice::{render_invoice, InvoiceWriter, Money, ShoppingCart, ShoppingItem};
use tracing::info;

use crate::cli::InvoiceArgs;

/// The cart used by the walkthrough.
pub fn sample_cart() -> ShoppingCart {
    let mut cart = ShoppingCart::new();
    cart.add(ShoppingItem::new(123, "Keyboard", Money::from_cents(45_000)));
    cart.add(ShoppingItem::new(124, "Mouse", Money::from_cents(30_000)));
    cart.add(ShoppingItem::new(125, "Monitor", Money::from_cents(220_000)));
    cart
}

pub fn run(args: &InvoiceArgs) -> anyhow::Result<String> {
    let cart = sample_cart();
    let path = InvoiceWriter::new()
        .append(args.append)
        .save(&cart, &args.out)?;

    info!(path = %path.display(), append = args.append, "saved invoice");

    Ok(format!(
        "{}\nWritten to {}\n",
        render_invoice(&cart)?.trim_end(),
        path.display()
    ))
}
