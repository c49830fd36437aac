//! Cart and line items.

use crate::money::Money;

/// A line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingItem {
    pub id: u32,
    pub name: String,
    pub price: Money,
}

impl ShoppingItem {
    pub fn new(id: u32, name: impl Into<String>, price: Money) -> Self {
        ShoppingItem {
            id,
            name: name.into(),
            price,
        }
    }
}

/// An ordered list of line items.
///
/// The cart only keeps items; turning them into a report is
/// [`render_invoice`](crate::render_invoice)'s job and storing the report is
/// [`InvoiceWriter`](crate::InvoiceWriter)'s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingCart {
    items: Vec<ShoppingItem>,
}

impl ShoppingCart {
    pub fn new() -> Self {
        ShoppingCart::default()
    }

    /// Appends an item.
    pub fn add(&mut self, item: ShoppingItem) {
        self.items.push(item);
    }

    /// Returns the items in insertion order.
    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all item prices, or `None` if it exceeds [`Money::MAX`].
    pub fn total(&self) -> Option<Money> {
        Money::checked_sum(self.items.iter().map(|item| item.price))
    }
}

impl FromIterator<ShoppingItem> for ShoppingCart {
    fn from_iter<I: IntoIterator<Item = ShoppingItem>>(iter: I) -> Self {
        ShoppingCart {
            items: iter.into_iter().collect(),
        }
    }
}
