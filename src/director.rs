//! The director: one fixed construction sequence for every builder.

use crate::builder::MealBuilder;
use crate::meal::Meal;

#[derive(Debug, Default, Clone, Copy)]
pub struct MealDirector;

impl MealDirector {
    pub fn new() -> Self {
        MealDirector
    }

    /// Runs drink, main, dessert in that order, then returns the builder's meal.
    ///
    /// The meal is borrowed from the builder. Calling this again with the same
    /// builder overwrites the same meal.
    pub fn create_meal<'b>(&self, builder: &'b mut dyn MealBuilder) -> &'b Meal {
        let span = tracing::debug_span!("create_meal");
        let _enter = span.enter();

        tracing::debug!(step = "drink", "building");
        builder.build_drink();
        tracing::debug!(step = "main", "building");
        builder.build_main();
        tracing::debug!(step = "dessert", "building");
        builder.build_dessert();

        builder.meal()
    }
}
