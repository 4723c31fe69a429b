//! # Builder & Director
//!
//! A director drives any [`MealBuilder`] through the same three steps
//! (drink, main, dessert) and hands back the [`Meal`] the builder assembled.
//! Which meal comes out depends only on the builder variant supplied.
//!
//! ## Layout
//!
//! 1. **Product** - [`Meal`], a record with three optional fields
//! 2. **Builders** - the [`MealBuilder`] trait plus [`KidsMealBuilder`] and [`AdultMealBuilder`]
//! 3. **Director** - [`MealDirector`], the fixed call sequence
//! 4. **Entry point** - [`DemoConfig`] picks the variant, [`run`] prints the result
//!
//! ## Running
//!
//! ```bash
//! cargo run --bin builder_demo
//! # Drink: Red wine, Main: Ris de Veau, Dessert: Panna Cotta
//! ```
//!
//! ```
//! use meal_builder::{MealDirector, MealKind};
//!
//! let mut builder = MealKind::Kids.builder();
//! let meal = MealDirector::new().create_meal(builder.as_mut());
//! assert_eq!(meal.render(), "Drink: Yoghi-drink, Main: Fish and Chips, Dessert: Ice-cream");
//! ```

pub mod builder;
pub mod config;
pub mod demo;
pub mod director;
pub mod error;
pub mod meal;

pub use builder::{AdultMealBuilder, KidsMealBuilder, MealBuilder, MealKind};
pub use config::DemoConfig;
pub use demo::run;
pub use director::MealDirector;
pub use error::DemoError;
pub use meal::Meal;
