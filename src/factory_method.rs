//! Pattern 3: Factory Method
//!
//! A store defines a single creation step, `create_pizza`. Ordering is written
//! once against that step in the [`OrderPizza`] extension trait; because it is a
//! blanket impl, no store can provide its own implementation of it.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{PatternError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PizzaStyle {
    Chicago,
    Seattle,
}

impl PizzaStyle {
    pub const ALL: [PizzaStyle; 2] = [PizzaStyle::Chicago, PizzaStyle::Seattle];

    pub fn as_str(&self) -> &'static str {
        match self {
            PizzaStyle::Chicago => "chicago",
            PizzaStyle::Seattle => "seattle",
        }
    }
}

impl fmt::Display for PizzaStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PizzaStyle {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chicago" => Ok(PizzaStyle::Chicago),
            "seattle" => Ok(PizzaStyle::Seattle),
            _ => Err(PatternError::unknown_style("pizza", s)),
        }
    }
}

// ============================================================================
// Products
// ============================================================================

pub trait Pizza {
    fn style(&self) -> String;

    /// Shared by every pizza.
    fn size(&self) -> String {
        "pizza size is jumbo".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChicagoStylePizza;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeattleStylePizza;

impl Pizza for ChicagoStylePizza {
    fn style(&self) -> String {
        format!("pizza style is {}", PizzaStyle::Chicago)
    }
}

impl Pizza for SeattleStylePizza {
    fn style(&self) -> String {
        format!("pizza style is {}", PizzaStyle::Seattle)
    }
}

// ============================================================================
// Creators
// ============================================================================

pub trait PizzaStore {
    /// The factory method.
    fn create_pizza(&self) -> Box<dyn Pizza>;
}

/// Orchestration that only knows about `create_pizza`.
///
/// The blanket impl means no store can supply its own trait impl. A store may
/// still declare an inherent `order_pizza`, which shadows this one on direct
/// calls to the concrete type; calls through `&dyn PizzaStore` or a generic
/// `S: PizzaStore` always reach the shared version.
pub trait OrderPizza {
    fn order_pizza(&self) -> Box<dyn Pizza>;
}

impl<S: PizzaStore + ?Sized> OrderPizza for S {
    fn order_pizza(&self) -> Box<dyn Pizza> {
        let pizza = self.create_pizza();
        debug!(style = %pizza.style(), "pizza ordered");
        pizza
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ChicagoPizzaStore;

#[derive(Debug, Clone, Copy, Default)]
pub struct SeattlePizzaStore;

impl PizzaStore for ChicagoPizzaStore {
    fn create_pizza(&self) -> Box<dyn Pizza> {
        Box::new(ChicagoStylePizza)
    }
}

impl PizzaStore for SeattlePizzaStore {
    fn create_pizza(&self) -> Box<dyn Pizza> {
        Box::new(SeattleStylePizza)
    }
}

pub fn store_for(style: PizzaStyle) -> Box<dyn PizzaStore> {
    match style {
        PizzaStyle::Chicago => Box::new(ChicagoPizzaStore),
        PizzaStyle::Seattle => Box::new(SeattlePizzaStore),
    }
}

/// Works with whatever store it is handed.
pub fn client_code(store: &dyn PizzaStore) -> String {
    let pizza = store.order_pizza();
    format!(
        "Client: I'm not aware of the pizza store, but it still works.\n{}.\n{}.",
        pizza.style(),
        pizza.size()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn order_dispatches_to_the_store() {
        for style in PizzaStyle::ALL {
            let pizza = store_for(style).order_pizza();
            assert_eq!(pizza.style(), format!("pizza style is {}", style));
            assert_eq!(pizza.size(), "pizza size is jumbo");
        }
    }

    #[test]
    fn order_matches_create() {
        let store = SeattlePizzaStore;
        assert_eq!(store.order_pizza().style(), store.create_pizza().style());
    }

    struct ShadowingStore;

    impl ShadowingStore {
        fn order_pizza(&self) -> Box<dyn Pizza> {
            Box::new(ChicagoStylePizza)
        }
    }

    impl PizzaStore for ShadowingStore {
        fn create_pizza(&self) -> Box<dyn Pizza> {
            Box::new(SeattleStylePizza)
        }
    }

    fn order_generic<S: PizzaStore>(store: &S) -> Box<dyn Pizza> {
        store.order_pizza()
    }

    #[test]
    fn inherent_method_only_shadows_direct_calls() {
        let store = ShadowingStore;
        assert_eq!(store.order_pizza().style(), "pizza style is chicago");

        let as_store: &dyn PizzaStore = &store;
        assert_eq!(as_store.order_pizza().style(), "pizza style is seattle");
        assert_eq!(order_generic(&store).style(), "pizza style is seattle");
        assert_eq!(OrderPizza::order_pizza(&store).style(), "pizza style is seattle");
    }

    #[test]
    fn size_is_shared() {
        assert_eq!(ChicagoStylePizza.size(), SeattleStylePizza.size());
    }

    #[test]
    fn client_output_matches_sample() {
        assert_eq!(
            client_code(&SeattlePizzaStore),
            "Client: I'm not aware of the pizza store, but it still works.\n\
             pizza style is seattle.\n\
             pizza size is jumbo."
        );
        assert!(client_code(&ChicagoPizzaStore).contains("pizza style is chicago."));
    }

    #[test]
    fn unknown_store_name() {
        let err = "naples".parse::<PizzaStyle>().unwrap_err();
        assert_eq!(err.to_string(), "unknown pizza style 'naples'");
    }

    proptest! {
        #[test]
        fn parsing_ignores_case(upper in proptest::collection::vec(any::<bool>(), 7)) {
            for style in PizzaStyle::ALL {
                let name: String = style
                    .as_str()
                    .chars()
                    .zip(upper.iter().cycle())
                    .map(|(c, up)| if *up { c.to_ascii_uppercase() } else { c })
                    .collect();
                prop_assert_eq!(name.parse::<PizzaStyle>(), Ok(style));
            }
        }
    }
}
