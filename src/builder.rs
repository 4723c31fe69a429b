//! Builders: each variant writes its own fixed courses into the meal it owns.

use serde::Deserialize;

use crate::meal::Meal;

/// The construction steps a director can drive.
///
/// Each implementor owns exactly one [`Meal`]. The steps mutate that meal in
/// place, so driving the same builder twice rewrites the same record rather
/// than starting a fresh one.
pub trait MealBuilder {
    fn build_drink(&mut self);
    fn build_main(&mut self);
    fn build_dessert(&mut self);

    /// The meal as built so far. Safe to call before any step has run.
    fn meal(&self) -> &Meal;
}

// =============================================================================
// Kids
// =============================================================================

#[derive(Debug, Default)]
pub struct KidsMealBuilder {
    meal: Meal,
}

impl KidsMealBuilder {
    pub const DRINK: &'static str = "Yoghi-drink";
    pub const MAIN: &'static str = "Fish and Chips";
    pub const DESSERT: &'static str = "Ice-cream";

    pub fn new() -> Self {
        Self::default()
    }

    /// Hands the meal over to the caller, consuming the builder.
    pub fn into_meal(self) -> Meal {
        self.meal
    }
}

impl MealBuilder for KidsMealBuilder {
    fn build_drink(&mut self) {
        tracing::trace!(variant = "kids", drink = Self::DRINK, "set drink");
        self.meal.set_drink(Self::DRINK);
    }

    fn build_main(&mut self) {
        tracing::trace!(variant = "kids", main = Self::MAIN, "set main");
        self.meal.set_main(Self::MAIN);
    }

    fn build_dessert(&mut self) {
        tracing::trace!(variant = "kids", dessert = Self::DESSERT, "set dessert");
        self.meal.set_dessert(Self::DESSERT);
    }

    fn meal(&self) -> &Meal {
        &self.meal
    }
}

// =============================================================================
// Adult
// =============================================================================

#[derive(Debug, Default)]
pub struct AdultMealBuilder {
    meal: Meal,
}

impl AdultMealBuilder {
    pub const DRINK: &'static str = "Red wine";
    pub const MAIN: &'static str = "Ris de Veau";
    pub const DESSERT: &'static str = "Panna Cotta";

    pub fn new() -> Self {
        Self::default()
    }

    /// Hands the meal over to the caller, consuming the builder.
    pub fn into_meal(self) -> Meal {
        self.meal
    }
}

impl MealBuilder for AdultMealBuilder {
    fn build_drink(&mut self) {
        tracing::trace!(variant = "adult", drink = Self::DRINK, "set drink");
        self.meal.set_drink(Self::DRINK);
    }

    fn build_main(&mut self) {
        tracing::trace!(variant = "adult", main = Self::MAIN, "set main");
        self.meal.set_main(Self::MAIN);
    }

    fn build_dessert(&mut self) {
        tracing::trace!(variant = "adult", dessert = Self::DESSERT, "set dessert");
        self.meal.set_dessert(Self::DESSERT);
    }

    fn meal(&self) -> &Meal {
        &self.meal
    }
}

// =============================================================================
// Variant selection
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealKind {
    Kids,
    Adult,
}

impl MealKind {
    pub fn from_is_kid(is_kid: bool) -> Self {
        if is_kid {
            MealKind::Kids
        } else {
            MealKind::Adult
        }
    }

    /// A fresh builder for this variant, with an empty meal.
    pub fn builder(self) -> Box<dyn MealBuilder> {
        match self {
            MealKind::Kids => Box::new(KidsMealBuilder::new()),
            MealKind::Adult => Box::new(AdultMealBuilder::new()),
        }
    }
}
