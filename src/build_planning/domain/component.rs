use crate::shared::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Maximum length for component names (matches the catalog column width)
const MAX_COMPONENT_NAME_LENGTH: usize = 200;

/// Identifier of a catalog component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(pub u64);

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Catalog categories a component can belong to.
///
/// The serialized names match the catalog data ("CPU", "RAM", ...), which is
/// also how they read in user-facing messages.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Category {
    #[serde(rename = "CPU")]
    Cpu,
    Motherboard,
    #[serde(rename = "RAM")]
    Ram,
    #[serde(rename = "GPU")]
    Gpu,
    Storage,
    #[serde(rename = "PSU")]
    Psu,
    Case,
    Cooling,
}

impl Category {
    /// Categories that every complete build must contain.
    pub const REQUIRED_FOR_BUILD: [Category; 5] = [
        Category::Cpu,
        Category::Motherboard,
        Category::Ram,
        Category::Psu,
        Category::Case,
    ];

    /// Categories that may appear at most once in a selected set.
    ///
    /// RAM, Storage and Cooling are deliberately absent: multiple entries of
    /// those are allowed and counted against motherboard/case limits.
    pub const SINGLE_OCCURRENCE: [Category; 4] = [
        Category::Cpu,
        Category::Motherboard,
        Category::Case,
        Category::Psu,
    ];

    pub fn is_single_occurrence(self) -> bool {
        Self::SINGLE_OCCURRENCE.contains(&self)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Cpu => "CPU",
            Category::Motherboard => "Motherboard",
            Category::Ram => "RAM",
            Category::Gpu => "GPU",
            Category::Storage => "Storage",
            Category::Psu => "PSU",
            Category::Case => "Case",
            Category::Cooling => "Cooling",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "CPU" => Ok(Category::Cpu),
            "Motherboard" => Ok(Category::Motherboard),
            "RAM" => Ok(Category::Ram),
            "GPU" => Ok(Category::Gpu),
            "Storage" => Ok(Category::Storage),
            "PSU" => Ok(Category::Psu),
            "Case" => Ok(Category::Case),
            "Cooling" => Ok(Category::Cooling),
            _ => Err(format!(
                "Unknown category: {}. Expected one of CPU, Motherboard, RAM, GPU, Storage, PSU, Case, Cooling",
                s
            )),
        }
    }
}

/// A specification value had the wrong shape for the requested access.
///
/// Raised when a key that must hold a non-negative number holds something
/// else. The compatibility engine maps this into a violation with a
/// descriptive message rather than letting it escape as a fault.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("expected a non-negative number for \"{key}\", found {found}")]
pub struct SpecValueError {
    pub key: String,
    pub found: String,
}

/// Untyped, category-specific specification bag (socket, ram_type, wattage,
/// form_factors, ...).
///
/// Accessors are deliberately lenient: an absent key behaves as zero/empty
/// and never crashes. Only a value of the wrong shape is reported, via
/// [`SpecValueError`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Specifications(serde_json::Map<String, Value>);

impl Specifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion, mainly for catalogs assembled in code.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    /// Returns the string value for `key`, or an empty string if the key is
    /// absent or null. Non-string scalars are rendered with their JSON
    /// representation so that comparisons stay total.
    pub fn text(&self, key: &str) -> String {
        match self.0.get(key) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// Returns the numeric value for `key`, defaulting to 0 when the key is
    /// absent.
    ///
    /// # Errors
    /// Returns a [`SpecValueError`] if the value exists but is not a
    /// non-negative number.
    pub fn number(&self, key: &str) -> std::result::Result<u64, SpecValueError> {
        match self.0.get(key) {
            None | Some(Value::Null) => Ok(0),
            Some(Value::Number(n)) => {
                if let Some(v) = n.as_u64() {
                    Ok(v)
                } else if let Some(f) = n.as_f64() {
                    if f >= 0.0 {
                        Ok(f.round() as u64)
                    } else {
                        Err(SpecValueError {
                            key: key.to_string(),
                            found: n.to_string(),
                        })
                    }
                } else {
                    Err(SpecValueError {
                        key: key.to_string(),
                        found: n.to_string(),
                    })
                }
            }
            Some(other) => Err(SpecValueError {
                key: key.to_string(),
                found: other.to_string(),
            }),
        }
    }

    /// Returns true if the sequence under `key` contains `needle`.
    /// An absent key or a non-sequence value behaves as an empty sequence.
    pub fn list_contains(&self, key: &str, needle: &str) -> bool {
        match self.0.get(key) {
            Some(Value::Array(items)) => items
                .iter()
                .any(|item| item.as_str().is_some_and(|s| s == needle)),
            _ => false,
        }
    }
}

/// A catalog component: immutable identity, mutable price and stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: ComponentId,
    pub name: String,
    pub category: Category,
    pub price: Decimal,
    pub stock: i64,
    /// Stock level at or below which a low-stock alert fires.
    pub reorder_point: i64,
    /// Quantity added when a reorder for this component is received.
    pub reorder_quantity: i64,
    pub specifications: Specifications,
}

impl Component {
    /// Creates a component, validating the catalog invariants.
    ///
    /// # Errors
    /// Returns an error if the name is empty or too long, or if the price
    /// is negative.
    pub fn new(
        id: ComponentId,
        name: impl Into<String>,
        category: Category,
        price: Decimal,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            anyhow::bail!("Component name cannot be empty");
        }
        if name.len() > MAX_COMPONENT_NAME_LENGTH {
            anyhow::bail!(
                "Component name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_COMPONENT_NAME_LENGTH
            );
        }
        if price < Decimal::ZERO {
            anyhow::bail!("Component price cannot be negative: {}", price);
        }
        Ok(Self {
            id,
            name,
            category,
            price,
            stock: 0,
            reorder_point: 10,
            reorder_quantity: 20,
            specifications: Specifications::new(),
        })
    }

    pub fn with_stock(mut self, stock: i64) -> Self {
        self.stock = stock;
        self
    }

    pub fn with_reorder(mut self, point: i64, quantity: i64) -> Self {
        self.reorder_point = point;
        self.reorder_quantity = quantity;
        self
    }

    pub fn with_spec(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.specifications = self.specifications.with(key, value);
        self
    }
}
