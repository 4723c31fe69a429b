//! The product: a meal assembled one course at a time.

use std::fmt;

use serde::Serialize;

/// Text rendered in place of a course that was never set.
pub const UNSET_PLACEHOLDER: &str = "";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Meal {
    drink: Option<String>,
    main: Option<String>,
    dessert: Option<String>,
}

impl Meal {
    /// An empty meal. Every course starts unset.
    pub fn new() -> Self {
        Self::default()
    }

    // Setters overwrite whatever was there before.
    pub fn set_drink(&mut self, drink: impl Into<String>) {
        self.drink = Some(drink.into());
    }

    pub fn set_main(&mut self, main: impl Into<String>) {
        self.main = Some(main.into());
    }

    pub fn set_dessert(&mut self, dessert: impl Into<String>) {
        self.dessert = Some(dessert.into());
    }

    pub fn drink(&self) -> Option<&str> {
        self.drink.as_deref()
    }

    pub fn main(&self) -> Option<&str> {
        self.main.as_deref()
    }

    pub fn dessert(&self) -> Option<&str> {
        self.dessert.as_deref()
    }

    pub fn is_complete(&self) -> bool {
        self.drink.is_some() && self.main.is_some() && self.dessert.is_some()
    }

    /// `Drink: {drink}, Main: {main}, Dessert: {dessert}`, with
    /// [`UNSET_PLACEHOLDER`] standing in for missing courses.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Drink: {}, Main: {}, Dessert: {}",
            self.drink().unwrap_or(UNSET_PLACEHOLDER),
            self.main().unwrap_or(UNSET_PLACEHOLDER),
            self.dessert().unwrap_or(UNSET_PLACEHOLDER),
        )
    }
}
