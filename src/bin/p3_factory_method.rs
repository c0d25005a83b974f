//! Pattern 3: Factory Method
//! Example: Pizza stores that differ only in what they create
//!
//! Run with: cargo run --bin p3_factory_method

use colored::Colorize;
use creational_patterns::factory_method::client_code;
use creational_patterns::{logging, store_for, PizzaStyle};

fn main() {
    logging::init();

    for name in ["seattle", "chicago"] {
        match name.parse::<PizzaStyle>() {
            Ok(style) => {
                let city = format!("Pizza Delivery App: Launched in {}.", capitalize(name));
                println!("{}", city.bold());
                println!("{}\n", client_code(store_for(style).as_ref()));
            }
            Err(err) => println!("{}", err.to_string().red()),
        }
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
