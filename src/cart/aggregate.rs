//! Cart Aggregation
//!
//! Groups line items by product name for display.

use std::collections::HashMap;

use crate::models::CartItem;

/// One display row: product name and how many units are in the cart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRow {
    pub name: String,
    pub count: usize,
}

/// Display-ready cart contents
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CartView {
    #[default]
    Empty,
    /// Rows ordered by first insertion of each name
    Rows(Vec<CartRow>),
}

#[cfg(test)]
impl CartView {
    pub fn is_empty(&self) -> bool {
        matches!(self, CartView::Empty)
    }

    pub fn rows(&self) -> &[CartRow] {
        match self {
            CartView::Empty => &[],
            CartView::Rows(rows) => rows,
        }
    }

    /// Count for `name`, zero when absent
    pub fn count_of(&self, name: &str) -> usize {
        self.rows()
            .iter()
            .find(|row| row.name == name)
            .map(|row| row.count)
            .unwrap_or(0)
    }
}

/// Count items per name, keeping the order in which each name first appeared
pub fn aggregate(items: &[CartItem]) -> CartView {
    if items.is_empty() {
        return CartView::Empty;
    }

    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<CartRow> = Vec::new();
    for item in items {
        match index.get(item.name.as_str()) {
            Some(&pos) => rows[pos].count += 1,
            None => {
                index.insert(item.name.as_str(), rows.len());
                rows.push(CartRow {
                    name: item.name.clone(),
                    count: 1,
                });
            }
        }
    }
    CartView::Rows(rows)
}
