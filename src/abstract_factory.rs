//! Pattern 1: Abstract Factory
//!
//! A factory produces a whole family of related products (a table and a chair)
//! that share one style. Client code only ever holds a `&dyn FurnitureFactory`,
//! so swapping the factory swaps the entire family.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{PatternError, Result};

// ============================================================================
// Style tag
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FurnitureStyle {
    Modern,
    Victorian,
}

impl FurnitureStyle {
    pub const ALL: [FurnitureStyle; 2] = [FurnitureStyle::Modern, FurnitureStyle::Victorian];

    pub fn as_str(&self) -> &'static str {
        match self {
            FurnitureStyle::Modern => "modern",
            FurnitureStyle::Victorian => "victorian",
        }
    }
}

impl fmt::Display for FurnitureStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FurnitureStyle {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "modern" => Ok(FurnitureStyle::Modern),
            "victorian" => Ok(FurnitureStyle::Victorian),
            _ => Err(PatternError::unknown_style("furniture", s)),
        }
    }
}

// ============================================================================
// Abstract products
// ============================================================================

pub trait Table {
    fn describe(&self) -> String;

    fn style(&self) -> FurnitureStyle;
}

pub trait Chair {
    /// What the chair does on its own.
    fn describe(&self) -> String;

    /// Works with any table, including one from another family. Only using a
    /// single factory per assembly keeps the pair consistent.
    fn collaborate_with(&self, table: &dyn Table) -> String;

    fn style(&self) -> FurnitureStyle;
}

// ============================================================================
// Concrete products
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModernTable;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VictorianTable;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModernChair;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VictorianChair;

fn table_description(style: FurnitureStyle) -> String {
    format!("The result of the {} table.", style)
}

fn collaboration(style: FurnitureStyle, table: &dyn Table) -> String {
    format!(
        "The result of the {} chair collaborating with the ({})",
        style,
        table.describe()
    )
}

impl Table for ModernTable {
    fn describe(&self) -> String {
        table_description(FurnitureStyle::Modern)
    }

    fn style(&self) -> FurnitureStyle {
        FurnitureStyle::Modern
    }
}

impl Table for VictorianTable {
    fn describe(&self) -> String {
        table_description(FurnitureStyle::Victorian)
    }

    fn style(&self) -> FurnitureStyle {
        FurnitureStyle::Victorian
    }
}

impl Chair for ModernChair {
    fn describe(&self) -> String {
        "The result of the chair.".to_string()
    }

    fn collaborate_with(&self, table: &dyn Table) -> String {
        collaboration(FurnitureStyle::Modern, table)
    }

    fn style(&self) -> FurnitureStyle {
        FurnitureStyle::Modern
    }
}

impl Chair for VictorianChair {
    fn describe(&self) -> String {
        "The result of the victorian chair.".to_string()
    }

    fn collaborate_with(&self, table: &dyn Table) -> String {
        collaboration(FurnitureStyle::Victorian, table)
    }

    fn style(&self) -> FurnitureStyle {
        FurnitureStyle::Victorian
    }
}

// ============================================================================
// Factories
// ============================================================================

/// Creates a matched table and chair.
///
/// Each implementation hardcodes the concrete product types of its style, so
/// every product it returns carries that style. Signatures return the abstract
/// products; callers never learn the concrete types.
pub trait FurnitureFactory {
    fn create_table(&self) -> Box<dyn Table>;

    fn create_chair(&self) -> Box<dyn Chair>;

    fn style(&self) -> FurnitureStyle;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ModernFactory;

#[derive(Debug, Clone, Copy, Default)]
pub struct VictorianFactory;

impl FurnitureFactory for ModernFactory {
    fn create_table(&self) -> Box<dyn Table> {
        debug!(style = %FurnitureStyle::Modern, "creating table");
        Box::new(ModernTable)
    }

    fn create_chair(&self) -> Box<dyn Chair> {
        debug!(style = %FurnitureStyle::Modern, "creating chair");
        Box::new(ModernChair)
    }

    fn style(&self) -> FurnitureStyle {
        FurnitureStyle::Modern
    }
}

impl FurnitureFactory for VictorianFactory {
    fn create_table(&self) -> Box<dyn Table> {
        debug!(style = %FurnitureStyle::Victorian, "creating table");
        Box::new(VictorianTable)
    }

    fn create_chair(&self) -> Box<dyn Chair> {
        debug!(style = %FurnitureStyle::Victorian, "creating chair");
        Box::new(VictorianChair)
    }

    fn style(&self) -> FurnitureStyle {
        FurnitureStyle::Victorian
    }
}

/// The one place that maps a style tag to a concrete factory.
pub fn factory_for(style: FurnitureStyle) -> Box<dyn FurnitureFactory> {
    match style {
        FurnitureStyle::Modern => Box::new(ModernFactory),
        FurnitureStyle::Victorian => Box::new(VictorianFactory),
    }
}

// ============================================================================
// Client
// ============================================================================

/// Builds one table and one chair from `factory` and reports what they do.
///
/// Never inspects which factory it got.
pub fn client_code(factory: &dyn FurnitureFactory) -> Vec<String> {
    let table = factory.create_table();
    let chair = factory.create_chair();

    vec![table.describe(), chair.collaborate_with(table.as_ref())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_products_share_its_style() {
        for style in FurnitureStyle::ALL {
            let factory = factory_for(style);
            assert_eq!(factory.style(), style);
            assert_eq!(factory.create_table().style(), style);
            assert_eq!(factory.create_chair().style(), style);
        }
    }

    #[test]
    fn chair_embeds_its_own_familys_table() {
        for style in FurnitureStyle::ALL {
            let factory = factory_for(style);
            let table = factory.create_table();
            let chair = factory.create_chair();

            let result = chair.collaborate_with(table.as_ref());
            assert!(result.contains(&table.describe()));

            for other in FurnitureStyle::ALL.into_iter().filter(|s| *s != style) {
                let foreign = format!("the {} table", other);
                assert!(!result.contains(&foreign), "{result} mentions {foreign}");
            }
        }
    }

    #[test]
    fn client_output_matches_sample() {
        assert_eq!(
            client_code(&ModernFactory),
            vec![
                "The result of the modern table.".to_string(),
                "The result of the modern chair collaborating with the (The result of the modern table.)"
                    .to_string(),
            ]
        );
        assert_eq!(
            client_code(&VictorianFactory),
            vec![
                "The result of the victorian table.".to_string(),
                "The result of the victorian chair collaborating with the (The result of the victorian table.)"
                    .to_string(),
            ]
        );
    }

    #[test]
    fn swapping_factory_changes_output() {
        assert_ne!(client_code(&ModernFactory), client_code(&VictorianFactory));
    }

    #[test]
    fn chair_accepts_a_foreign_table() {
        // Allowed by the signature; the result is a mixed pair.
        let result = ModernChair.collaborate_with(&VictorianTable);
        assert_eq!(
            result,
            "The result of the modern chair collaborating with the (The result of the victorian table.)"
        );
    }

    #[test]
    fn products_from_two_factories_mix() {
        let chair = factory_for(FurnitureStyle::Modern).create_chair();
        let table = factory_for(FurnitureStyle::Victorian).create_table();

        let result = chair.collaborate_with(table.as_ref());
        assert!(result.starts_with("The result of the modern chair"));
        assert!(result.contains("(The result of the victorian table.)"));
    }

    #[test]
    fn factories_are_independent() {
        let first = factory_for(FurnitureStyle::Modern);
        let second = factory_for(FurnitureStyle::Modern);
        let before = first.create_table().describe();

        for _ in 0..3 {
            second.create_table();
            second.create_chair();
        }

        assert_eq!(first.create_table().describe(), before);
        assert_eq!(first.create_chair().describe(), "The result of the chair.");
    }

    #[test]
    fn chairs_describe_themselves() {
        assert_eq!(ModernChair.describe(), "The result of the chair.");
        assert_eq!(VictorianChair.describe(), "The result of the victorian chair.");
    }

    #[test]
    fn parse_style_names() {
        assert_eq!("modern".parse::<FurnitureStyle>(), Ok(FurnitureStyle::Modern));
        assert_eq!(" Victorian ".parse::<FurnitureStyle>(), Ok(FurnitureStyle::Victorian));
        assert_eq!(
            "baroque".parse::<FurnitureStyle>(),
            Err(PatternError::unknown_style("furniture", "baroque"))
        );
    }

    #[test]
    fn style_display_round_trips() {
        for style in FurnitureStyle::ALL {
            assert_eq!(style.to_string().parse::<FurnitureStyle>(), Ok(style));
        }
    }
}
