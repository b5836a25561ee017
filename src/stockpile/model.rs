use crate::error::StockpileError;
use std::fmt;
use std::str::FromStr;

/// The fixed set of item categories. Names match exactly and case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Clothing,
    Electronics,
    Entertainment,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Clothing,
        Category::Electronics,
        Category::Entertainment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Clothing => "Clothing",
            Category::Electronics => "Electronics",
            Category::Entertainment => "Entertainment",
        }
    }

    /// "Clothing, Electronics, Entertainment", for prompts.
    pub fn names() -> String {
        Self::ALL
            .iter()
            .map(Category::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = StockpileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| StockpileError::InvalidCategory(s.to_string()))
    }
}

/// One inventory record.
///
/// Setters do no validation; the command layer owns the id, quantity and price rules.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    id: String,
    name: String,
    quantity: u32,
    price: f64,
    category: Category,
}

impl Item {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        quantity: u32,
        price: f64,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
            price,
            category,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    /// `id | name | quantity | price | category`, price with two decimals.
    pub fn display_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {:.2} | {}",
            self.id, self.name, self.quantity, self.price, self.category
        )
    }
}

/// Input for adding an item, gathered before anything touches the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub price: f64,
    pub category: Category,
}

impl NewItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        quantity: u32,
        price: f64,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
            price,
            category,
        }
    }
}

impl From<NewItem> for Item {
    fn from(new: NewItem) -> Self {
        Item::new(new.id, new.name, new.quantity, new.price, new.category)
    }
}

/// Field used to order items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Quantity,
    Price,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_line_formats_price_with_two_decimals() {
        let item = Item::new("A1", "Shirt", 3, 9.5, Category::Clothing);
        assert_eq!(item.display_line(), "A1 | Shirt | 3 | 9.50 | Clothing");
    }

    #[test]
    fn category_parses_exact_names_only() {
        assert_eq!("Clothing".parse::<Category>().unwrap(), Category::Clothing);
        assert_eq!(
            "Electronics".parse::<Category>().unwrap(),
            Category::Electronics
        );
        assert_eq!(
            "Entertainment".parse::<Category>().unwrap(),
            Category::Entertainment
        );
        assert!("Food".parse::<Category>().is_err());
        assert!("clothing".parse::<Category>().is_err());
        assert!(" Clothing".parse::<Category>().is_err());
    }

    #[test]
    fn setters_overwrite_mutable_fields() {
        let mut item = Item::new("A1", "TV", 1, 100.0, Category::Electronics);
        item.set_id("B2");
        item.set_quantity(7);
        item.set_price(0.0);
        assert_eq!(item.id(), "B2");
        assert_eq!(item.quantity(), 7);
        assert_eq!(item.price(), 0.0);
        assert_eq!(item.name(), "TV");
        assert_eq!(item.category(), Category::Electronics);
    }

    #[test]
    fn category_names_lists_all_three() {
        assert_eq!(Category::names(), "Clothing, Electronics, Entertainment");
    }
}
