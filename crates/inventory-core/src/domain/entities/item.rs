//! The inventory item entity.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ItemId;

/// One inventory record.
///
/// Equality compares `name`, `quantity`, `price` and `description`. The
/// identifier takes no part in it: two records stored under different ids
/// with the same contents are equal, and the same id with any other field
/// changed is not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    quantity: i32,
    price: f64,
    description: String,
}

impl Item {
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        quantity: i32,
        price: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
            price,
            description: description.into(),
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_id(&mut self, id: impl Into<ItemId>) {
        self.id = id.into();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_quantity(&mut self, quantity: i32) {
        self.quantity = quantity;
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Full one-line rendering: `id - name - quantity - price - description`.
    ///
    /// Used by list renderings and appended to error messages.
    pub fn display_line(&self) -> String {
        format!(
            "{} - {} - {} - {} - {}",
            self.id,
            self.name,
            self.quantity,
            PriceDisplay(self.price),
            self.description
        )
    }

    /// Bit pattern used for both equality and hashing. All NaNs collapse to
    /// one value; `0.0` and `-0.0` stay distinct.
    fn price_bits(&self) -> u64 {
        if self.price.is_nan() {
            f64::NAN.to_bits()
        } else {
            self.price.to_bits()
        }
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.quantity == other.quantity
            && self.price_bits() == other.price_bits()
            && self.name == other.name
            && self.description == other.description
    }
}

impl Eq for Item {}

impl Hash for Item {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.quantity.hash(state);
        self.price_bits().hash(state);
        self.description.hash(state);
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | ${}",
            self.name,
            self.quantity,
            PriceDisplay(self.price)
        )
    }
}

/// Prices always show a fractional part (`10.0`, not `10`).
struct PriceDisplay(f64);

impl fmt::Display for PriceDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
