//! Plain-text invoice rendering.

use std::fmt::Write;

use crate::cart::ShoppingCart;
use crate::error::{InvoiceError, Result};

/// Renders a cart as one `#<id> <name> <price>` line per item followed by a
/// `Total: <total>` line.
///
/// Line breaks inside an item name are rendered as spaces so every item stays
/// on one line.
///
/// # Errors
///
/// [`InvoiceError::InvalidArgument`] for `cart` if the total exceeds
/// [`Money::MAX`](crate::Money::MAX).
///
/// ```
/// use solid_invoice::{render_invoice, Money, ShoppingCart, ShoppingItem};
///
/// let mut cart = ShoppingCart::new();
/// cart.add(ShoppingItem::new(7, "Cable", Money::from_cents(1999)));
///
/// assert_eq!(render_invoice(&cart)?, "#7 Cable 19.99\nTotal: 19.99\n");
/// # Ok::<(), solid_invoice::InvoiceError>(())
/// ```
pub fn render_invoice(cart: &ShoppingCart) -> Result<String> {
    let total = cart
        .total()
        .ok_or_else(|| InvoiceError::invalid("cart", "total exceeds the largest amount"))?;

    let mut out = String::new();
    for item in cart.items() {
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "#{} {} {}",
            item.id,
            item.name.replace(['\r', '\n'], " "),
            item.price
        );
    }
    let _ = writeln!(out, "Total: {total}");
    Ok(out)
}
