use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One line of an order file.
///
/// `customer_name` holds whatever free text the second column carried; it is
/// not validated and in practice usually describes the ordered item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    pub id: i32,
    pub customer_name: String,
    pub amount: Decimal,
}

impl Order {
    pub fn new(id: i32, customer_name: impl Into<String>, amount: Decimal) -> Self {
        Self {
            id,
            customer_name: customer_name.into(),
            amount,
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. Item: {}. Price: {}",
            self.id, self.customer_name, self.amount
        )
    }
}

/// Which reverser variant a pipeline runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ReverseStrategy {
    /// Walk the loaded orders from the last index down to the first.
    #[default]
    Indexed,
    /// Buffer the orders on a stack, then pop them.
    Streamed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub orders: Vec<Order>,
    pub format: OutputFormat,
    pub rendered: String,
}
