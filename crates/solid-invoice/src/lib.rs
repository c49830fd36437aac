//! Shopping cart invoices, one responsibility per type.
//!
//! - [`ShoppingCart`] holds line items and knows their total
//! - [`render_invoice`] turns a cart into a plain-text report
//! - [`InvoiceWriter`] puts that report on disk
//!
//! ```no_run
//! use solid_invoice::{InvoiceWriter, Money, ShoppingCart, ShoppingItem};
//!
//! let mut cart = ShoppingCart::new();
//! cart.add(ShoppingItem::new(123, "Keyboard", Money::from_cents(45_000)));
//! cart.add(ShoppingItem::new(124, "Mouse", Money::from_cents(30_000)));
//!
//! InvoiceWriter::new().append(true).save(&cart, "invoice.txt")?;
//! # Ok::<(), solid_invoice::InvoiceError>(())
//! ```

mod cart;
mod error;
mod money;
mod render;
mod writer;

pub use cart::{ShoppingCart, ShoppingItem};
pub use error::{InvoiceError, Result};
pub use money::Money;
pub use render::render_invoice;
pub use writer::{InvoiceWriter, WriteMode};
