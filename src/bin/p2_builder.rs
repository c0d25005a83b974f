//! Pattern 2: Builder
//! Example: Assembling houses part by part
//!
//! Run with: cargo run --bin p2_builder

use colored::Colorize;
use creational_patterns::{
    logging, Balcony, Floor, HouseBuilder, SimpleHouseBuilder, SwimmingPool, Wall,
};

fn print_parts(builder: &SimpleHouseBuilder, keys: &[&str]) {
    let house = builder.house();
    for key in keys {
        match house.get(key) {
            Some(part) => println!("{}", part),
            None => println!("{}", format!("no component named '{}'", key).yellow()),
        }
    }
    println!("{}", house);
}

fn main() {
    logging::init();

    println!("{}", "House 1: ".bold());
    // Usage: Default parts under default keys.
    let mut builder = SimpleHouseBuilder::new();
    builder.add_wall().add_floor().add_balcony();
    print_parts(&builder, &["wall", "floor", "balcony"]);

    println!("\n");

    println!("{}", "House 2: ".bold());
    // Usage: Caller-built parts under caller-chosen keys.
    let mut builder = SimpleHouseBuilder::new();
    builder
        .add_wall_as(Wall::new(10.0, 20.0, 2.0), "kitchen_wall")
        .add_floor_as(Floor::new("wood", "brown", "square"), "kitchen_floor")
        .add_balcony_as(Balcony::new(1.0, 3.0, 0.5), "main_balcony")
        .add_swimming_pool_as(SwimmingPool::new(10.0, 30.0, 2.2, 10.0), "infinity_pool");
    print_parts(
        &builder,
        &["kitchen_wall", "kitchen_floor", "main_balcony", "infinity_pool"],
    );

    println!("\n{}", "=== Finished House as JSON ===".bold());
    let house = builder.build();
    match house.to_json() {
        Ok(json) => println!("{}", json),
        Err(err) => println!("{}", format!("could not serialize house: {}", err).red()),
    }
}
