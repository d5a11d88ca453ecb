//! Display labels for the admin view

use std::fmt;

use shared::{FoodId, FoodItem};

pub const EMPTY_MENU_MESSAGE: &str = "No food items available";

pub const DELETE_PROMPT: &str = "Delete this food item?";

/// Price label, e.g. `₹270.00`
pub fn format_price(value: f64) -> String {
    format!("₹{value:.2}")
}

pub fn form_title(editing: bool) -> &'static str {
    if editing { "Edit Food Item" } else { "Add Food Item" }
}

pub fn submit_label(editing: bool) -> &'static str {
    if editing { "Update Food" } else { "Save Food" }
}

/// One rendered menu entry
#[derive(Debug, Clone, PartialEq)]
pub struct MenuCard {
    pub id: FoodId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub image: String,
    /// Original price
    pub price: String,
    /// Price after discount (equal to `price` without a discount)
    pub discounted_price: String,
    /// e.g. `10% OFF`, only with a discount
    pub discount_badge: Option<String>,
    /// One decimal, e.g. `4.5`
    pub rating: String,
    /// Whether the original price is shown struck through
    pub struck_through: bool,
}

impl From<&FoodItem> for MenuCard {
    fn from(item: &FoodItem) -> Self {
        let struck_through = item.has_discount();
        Self {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
            category: item.category.clone(),
            image: item.image.clone(),
            price: format_price(item.price),
            discounted_price: format_price(item.discounted_price()),
            discount_badge: struck_through.then(|| format!("{}% OFF", item.discount)),
            rating: format!("{:.1}", item.rating),
            struck_through,
        }
    }
}

impl fmt::Display for MenuCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}) ★{}  ",
            self.id, self.name, self.category, self.rating
        )?;
        match &self.discount_badge {
            Some(badge) => write!(f, "~{}~ {}  {}", self.price, self.discounted_price, badge),
            None => write!(f, "{}", self.discounted_price),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, price: f64, rating: f64, discount: f64) -> FoodItem {
        FoodItem {
            id: 1,
            name: name.to_string(),
            description: String::new(),
            category: "Main Course".to_string(),
            price,
            image: String::new(),
            rating,
            discount,
        }
    }

    #[test]
    fn test_discounted_card() {
        let card = MenuCard::from(&item("Pizza", 300.0, 4.5, 10.0));
        assert_eq!(card.price, "₹300.00");
        assert_eq!(card.discounted_price, "₹270.00");
        assert_eq!(card.discount_badge.as_deref(), Some("10% OFF"));
        assert_eq!(card.rating, "4.5");
        assert!(card.struck_through);
        assert_eq!(
            card.to_string(),
            "[1] Pizza (Main Course) ★4.5  ~₹300.00~ ₹270.00  10% OFF"
        );
    }

    #[test]
    fn test_plain_card() {
        let card = MenuCard::from(&item("Soda", 50.0, 4.0, 0.0));
        assert_eq!(card.discounted_price, "₹50.00");
        assert_eq!(card.discount_badge, None);
        assert_eq!(card.rating, "4.0");
        assert!(!card.struck_through);
        assert_eq!(card.to_string(), "[1] Soda (Main Course) ★4.0  ₹50.00");
    }

    #[test]
    fn test_fractional_discount_badge() {
        let card = MenuCard::from(&item("Cake", 10.0, 5.0, 12.5));
        assert_eq!(card.discount_badge.as_deref(), Some("12.5% OFF"));
        assert_eq!(card.discounted_price, "₹8.75");
    }

    #[test]
    fn test_form_labels() {
        assert_eq!(form_title(false), "Add Food Item");
        assert_eq!(form_title(true), "Edit Food Item");
        assert_eq!(submit_label(false), "Save Food");
        assert_eq!(submit_label(true), "Update Food");
    }
}
