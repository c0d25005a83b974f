//! # Creational Patterns
//!
//! This crate contains examples for three object-creation patterns.
//!
//! ## Patterns Covered
//!
//! 1. **Abstract Factory**
//!    - One factory per style produces a matched table and chair
//!    - Clients only see the `FurnitureFactory` trait
//!
//! 2. **Builder**
//!    - Parts are registered into a house under caller-chosen keys
//!    - The builder owns one live house for its whole lifetime
//!
//! 3. **Factory Method**
//!    - Each store overrides a single creation step
//!    - Ordering logic is shared and cannot be overridden
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --bin p1_abstract_factory
//! cargo run --bin p2_builder
//! cargo run --bin p3_factory_method
//!
//! # See registrations and orders as they happen
//! RUST_LOG=creational_patterns=debug cargo run --bin p2_builder
//! ```

pub mod abstract_factory;
pub mod builder;
pub mod error;
pub mod factory_method;
pub mod logging;

pub use abstract_factory::{factory_for, Chair, FurnitureFactory, FurnitureStyle, Table};
pub use builder::{
    Balcony, Component, Floor, House, HouseBuilder, Part, SimpleHouseBuilder, SwimmingPool, Wall,
};
pub use error::{PatternError, Result};
pub use factory_method::{store_for, OrderPizza, Pizza, PizzaStore, PizzaStyle};
