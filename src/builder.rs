//! Pattern 2: Builder
//!
//! A house is assembled step by step from independent parts. Each part is plain
//! data; the builder decides which parts go in and under which key. The same
//! builder can produce very different houses depending on the call sequence,
//! without one constructor per combination on `House`.
//!
//! Registering a part under a key that is already taken replaces the old part
//! silently and keeps the key's original position.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

// ============================================================================
// Parts
// ============================================================================

/// A unit that can be registered into a [`House`].
///
/// The identifier is `None` until registration stamps it with the key.
pub trait Part: fmt::Display {
    /// Key used when the caller does not pick one.
    const DEFAULT_KEY: &'static str;

    fn identifier(&self) -> Option<&str>;

    fn set_identifier(&mut self, key: &str);
}

fn or_none(value: Option<&str>) -> &str {
    value.unwrap_or("None")
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    #[serde(default)]
    pub identifier: Option<String>,
    pub width: f64,
    pub length: f64,
    pub height: f64,
}

impl Wall {
    pub fn new(width: f64, length: f64, height: f64) -> Self {
        Wall {
            identifier: None,
            width,
            length,
            height,
        }
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  (width: {}, height: {}, length: {})",
            or_none(self.identifier.as_deref()),
            self.width,
            self.height,
            self.length
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    #[serde(default)]
    pub identifier: Option<String>,
    pub material: Option<String>,
    pub color: Option<String>,
    pub pattern: Option<String>,
}

impl Floor {
    pub fn new(
        material: impl Into<String>,
        color: impl Into<String>,
        pattern: impl Into<String>,
    ) -> Self {
        Floor {
            identifier: None,
            material: Some(material.into()),
            color: Some(color.into()),
            pattern: Some(pattern.into()),
        }
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  (material: {}, color: {}, pattern: {})",
            or_none(self.identifier.as_deref()),
            or_none(self.material.as_deref()),
            or_none(self.color.as_deref()),
            or_none(self.pattern.as_deref())
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwimmingPool {
    #[serde(default)]
    pub identifier: Option<String>,
    pub width: f64,
    pub length: f64,
    pub height: f64,
    pub slope: f64,
}

impl SwimmingPool {
    pub fn new(width: f64, length: f64, height: f64, slope: f64) -> Self {
        SwimmingPool {
            identifier: None,
            width,
            length,
            height,
            slope,
        }
    }
}

impl fmt::Display for SwimmingPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  (width: {}, length: {}, height: {},slope: {})",
            or_none(self.identifier.as_deref()),
            self.width,
            self.length,
            self.height,
            self.slope
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Balcony {
    #[serde(default)]
    pub identifier: Option<String>,
    pub width: f64,
    pub length: f64,
    pub height: f64,
}

impl Balcony {
    pub fn new(width: f64, length: f64, height: f64) -> Self {
        Balcony {
            identifier: None,
            width,
            length,
            height,
        }
    }
}

impl fmt::Display for Balcony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (width: {}, height: {}, length: {})",
            or_none(self.identifier.as_deref()),
            self.width,
            self.height,
            self.length
        )
    }
}

macro_rules! impl_part {
    ($ty:ty, $key:literal) => {
        impl Part for $ty {
            const DEFAULT_KEY: &'static str = $key;

            fn identifier(&self) -> Option<&str> {
                self.identifier.as_deref()
            }

            fn set_identifier(&mut self, key: &str) {
                self.identifier = Some(key.to_string());
            }
        }
    };
}

impl_part!(Wall, "wall");
impl_part!(Floor, "floor");
impl_part!(SwimmingPool, "swimming_pool");
impl_part!(Balcony, "balcony");

// ============================================================================
// Component: the closed set of part kinds a house can hold
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Component {
    Wall(Wall),
    Floor(Floor),
    SwimmingPool(SwimmingPool),
    Balcony(Balcony),
}

impl Component {
    pub fn kind(&self) -> &'static str {
        match self {
            Component::Wall(_) => "wall",
            Component::Floor(_) => "floor",
            Component::SwimmingPool(_) => "swimming_pool",
            Component::Balcony(_) => "balcony",
        }
    }

    pub fn identifier(&self) -> Option<&str> {
        match self {
            Component::Wall(part) => part.identifier(),
            Component::Floor(part) => part.identifier(),
            Component::SwimmingPool(part) => part.identifier(),
            Component::Balcony(part) => part.identifier(),
        }
    }

    fn set_identifier(&mut self, key: &str) {
        match self {
            Component::Wall(part) => part.set_identifier(key),
            Component::Floor(part) => part.set_identifier(key),
            Component::SwimmingPool(part) => part.set_identifier(key),
            Component::Balcony(part) => part.set_identifier(key),
        }
    }

    pub fn as_wall(&self) -> Option<&Wall> {
        match self {
            Component::Wall(part) => Some(part),
            _ => None,
        }
    }

    pub fn as_floor(&self) -> Option<&Floor> {
        match self {
            Component::Floor(part) => Some(part),
            _ => None,
        }
    }

    pub fn as_swimming_pool(&self) -> Option<&SwimmingPool> {
        match self {
            Component::SwimmingPool(part) => Some(part),
            _ => None,
        }
    }

    pub fn as_balcony(&self) -> Option<&Balcony> {
        match self {
            Component::Balcony(part) => Some(part),
            _ => None,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Wall(part) => fmt::Display::fmt(part, f),
            Component::Floor(part) => fmt::Display::fmt(part, f),
            Component::SwimmingPool(part) => fmt::Display::fmt(part, f),
            Component::Balcony(part) => fmt::Display::fmt(part, f),
        }
    }
}

impl From<Wall> for Component {
    fn from(part: Wall) -> Self {
        Component::Wall(part)
    }
}

impl From<Floor> for Component {
    fn from(part: Floor) -> Self {
        Component::Floor(part)
    }
}

impl From<SwimmingPool> for Component {
    fn from(part: SwimmingPool) -> Self {
        Component::SwimmingPool(part)
    }
}

impl From<Balcony> for Component {
    fn from(part: Balcony) -> Self {
        Component::Balcony(part)
    }
}

// ============================================================================
// House: the composite
// ============================================================================

/// Parts keyed by name, in the order their keys were first registered.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct House {
    components: IndexMap<String, Component>,
}

impl House {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamps the part with `key` and stores it, returning whatever was there before.
    pub fn add(
        &mut self,
        component: impl Into<Component>,
        key: impl Into<String>,
    ) -> Option<Component> {
        let key = key.into();
        let mut component = component.into();
        component.set_identifier(&key);

        let kind = component.kind();
        let previous = self.components.insert(key.clone(), component);
        debug!(%key, kind, replaced = previous.is_some(), "registered component");
        previous
    }

    pub fn get(&self, key: &str) -> Option<&Component> {
        self.components.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.components.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Component)> {
        self.components.iter().map(|(key, part)| (key.as_str(), part))
    }

    /// Registered keys in insertion order, e.g. `"wall, floor"`.
    pub fn list_components(&self) -> String {
        self.keys().collect::<Vec<_>>().join(", ")
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

// Order is observable through `list_components`, so it takes part in equality.
impl PartialEq for House {
    fn eq(&self, other: &Self) -> bool {
        self.components.iter().eq(other.components.iter())
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "House components: {}", self.list_components())
    }
}

// ============================================================================
// Builders
// ============================================================================

/// Stepwise assembly of a [`House`].
///
/// Implementors supply `register` and `house`; the `add_*` steps are shared.
/// `add_x()` registers a default part under its default key, `add_x_as(part, key)`
/// registers the caller's part under the caller's key.
pub trait HouseBuilder {
    fn register(&mut self, component: Component, key: String);

    /// The house under construction. Always the same composite for one builder.
    fn house(&self) -> &House;

    /// Hands the finished house over.
    fn build(self) -> House;

    fn add_wall(&mut self) -> &mut Self {
        self.add_wall_as(Wall::default(), Wall::DEFAULT_KEY)
    }

    fn add_wall_as(&mut self, wall: Wall, key: impl Into<String>) -> &mut Self {
        self.register(wall.into(), key.into());
        self
    }

    fn add_floor(&mut self) -> &mut Self {
        self.add_floor_as(Floor::default(), Floor::DEFAULT_KEY)
    }

    fn add_floor_as(&mut self, floor: Floor, key: impl Into<String>) -> &mut Self {
        self.register(floor.into(), key.into());
        self
    }

    fn add_swimming_pool(&mut self) -> &mut Self {
        self.add_swimming_pool_as(SwimmingPool::default(), SwimmingPool::DEFAULT_KEY)
    }

    fn add_swimming_pool_as(&mut self, pool: SwimmingPool, key: impl Into<String>) -> &mut Self {
        self.register(pool.into(), key.into());
        self
    }

    fn add_balcony(&mut self) -> &mut Self {
        self.add_balcony_as(Balcony::default(), Balcony::DEFAULT_KEY)
    }

    fn add_balcony_as(&mut self, balcony: Balcony, key: impl Into<String>) -> &mut Self {
        self.register(balcony.into(), key.into());
        self
    }
}

/// Owns one in-progress house and adds to it in place.
#[derive(Debug, Default)]
pub struct SimpleHouseBuilder {
    house: House,
}

impl SimpleHouseBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HouseBuilder for SimpleHouseBuilder {
    fn register(&mut self, component: Component, key: String) {
        self.house.add(component, key);
    }

    fn house(&self) -> &House {
        &self.house
    }

    fn build(self) -> House {
        self.house
    }
}
