//! Raw item input as typed by a user.
//!
//! Front-ends collect five strings and only build an [`Item`] once every
//! field is filled in and the numbers parse. Nothing that fails here ever
//! reaches the controller.

use crate::domain::{entities::item::Item, error::DomainError};

/// Unparsed form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemForm {
    pub id: String,
    pub name: String,
    pub quantity: String,
    pub price: String,
    pub description: String,
}

impl ItemForm {
    /// Populate the form from an existing record (list selection).
    pub fn from_item(item: &Item) -> Self {
        Self {
            id: item.id().to_string(),
            name: item.name().to_string(),
            quantity: item.quantity().to_string(),
            price: format!("{:?}", item.price()),
            description: item.description().to_string(),
        }
    }

    /// `true` when no field is blank. Mirrors the rule for enabling "add".
    pub fn is_complete(&self) -> bool {
        self.fields().iter().all(|(_, value)| !value.trim().is_empty())
    }

    /// Reset every field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Turn the form into an item.
    ///
    /// Blank fields are rejected in form order. Text fields are kept exactly
    /// as typed; numbers are trimmed before parsing.
    pub fn parse(&self) -> Result<Item, DomainError> {
        if let Some((field, _)) = self
            .fields()
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
        {
            return Err(DomainError::MissingField { field });
        }

        let quantity = self.quantity.trim().parse::<i32>().map_err(|e| {
            DomainError::InvalidQuantity {
                value: self.quantity.clone(),
                reason: e.to_string(),
            }
        })?;

        let price = self
            .price
            .trim()
            .parse::<f64>()
            .map_err(|e| DomainError::InvalidPrice {
                value: self.price.clone(),
                reason: e.to_string(),
            })?;

        Ok(Item::new(
            self.id.as_str(),
            self.name.as_str(),
            quantity,
            price,
            self.description.as_str(),
        ))
    }

    fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("id", self.id.as_str()),
            ("name", self.name.as_str()),
            ("quantity", self.quantity.as_str()),
            ("price", self.price.as_str()),
            ("description", self.description.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ItemForm {
        ItemForm {
            id: "1".into(),
            name: "Laptop".into(),
            quantity: "10".into(),
            price: "999.9".into(),
            description: "Simple Laptop".into(),
        }
    }

    #[test]
    fn parses_complete_form() {
        let item = filled().parse().unwrap();
        assert_eq!(item.id().as_str(), "1");
        assert_eq!(item, Item::new("1", "Laptop", 10, 999.9, "Simple Laptop"));
    }

    #[test]
    fn blank_field_is_reported_in_form_order() {
        let mut form = filled();
        form.name = "   ".into();
        form.description = String::new();
        assert_eq!(
            form.parse().unwrap_err(),
            DomainError::MissingField { field: "name" }
        );
        assert!(!form.is_complete());
    }

    #[test]
    fn non_numeric_quantity_is_rejected() {
        let mut form = filled();
        form.quantity = "ten".into();
        assert!(matches!(
            form.parse(),
            Err(DomainError::InvalidQuantity { value, .. }) if value == "ten"
        ));
    }

    #[test]
    fn fractional_quantity_is_rejected() {
        let mut form = filled();
        form.quantity = "1.5".into();
        assert!(matches!(
            form.parse(),
            Err(DomainError::InvalidQuantity { .. })
        ));
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let mut form = filled();
        form.price = "cheap".into();
        assert!(matches!(form.parse(), Err(DomainError::InvalidPrice { .. })));
    }

    #[test]
    fn negative_quantity_parses() {
        let mut form = filled();
        form.quantity = " -3 ".into();
        assert_eq!(form.parse().unwrap().quantity(), -3);
    }

    #[test]
    fn from_item_round_trips_through_parse() {
        let item = Item::new("7", "Mug", 3, 10.0, "Blue mug");
        let form = ItemForm::from_item(&item);
        assert_eq!(form.price, "10.0");
        let parsed = form.parse().unwrap();
        assert_eq!(parsed, item);
        assert_eq!(parsed.id(), item.id());
    }

    #[test]
    fn clear_empties_every_field() {
        let mut form = filled();
        form.clear();
        assert_eq!(form, ItemForm::default());
    }
}
