//! Pattern 1: Abstract Factory
//! Example: One client, two furniture families
//!
//! Run with: cargo run --bin p1_abstract_factory

use colored::Colorize;
use creational_patterns::abstract_factory::client_code;
use creational_patterns::{factory_for, logging, FurnitureStyle};

fn main() {
    logging::init();

    // Usage: The client only sees `&dyn FurnitureFactory`; the style is picked by name.
    let headers = [
        "Client: Testing client code with the first factory type:",
        "Client: Testing the same client code with the second factory type:",
    ];

    for (header, name) in headers.iter().zip(["modern", "victorian"]) {
        match name.parse::<FurnitureStyle>() {
            Ok(style) => {
                println!("{}", header.bold());
                for line in client_code(factory_for(style).as_ref()) {
                    println!("{}", line);
                }
                println!();
            }
            Err(err) => println!("{}", err.to_string().red()),
        }
    }

    println!("{}", "=== Mixing Families ===".bold());
    // Usage: Products from two factories still type-check together.
    let chair = factory_for(FurnitureStyle::Modern).create_chair();
    let table = factory_for(FurnitureStyle::Victorian).create_table();
    println!("{}", chair.collaborate_with(table.as_ref()).yellow());
}
