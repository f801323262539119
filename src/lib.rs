//! Load `;`-delimited order files and replay them from last to first.
//!
//! ```no_run
//! use order_reverse::{load_orders, reverse_indexed, Order, Result};
//!
//! let orders: Vec<Order> = load_orders().collect::<Result<_>>()?;
//! for order in reverse_indexed(Some(&orders))? {
//!     println!("{order}");
//! }
//! # Ok::<(), order_reverse::OrderError>(())
//! ```

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use crate::adapters::LocalStorage;
pub use crate::core::loader::{
    load_orders, load_orders_from, parse_line, parse_orders, OrderLoader, DEFAULT_ORDERS_FILE,
};
pub use crate::core::reverse::{reverse, reverse_indexed, reverse_streamed, RandomAccess};
pub use crate::core::{etl::EtlEngine, pipeline::ReversePipeline};
pub use domain::model::{Order, OutputFormat, ReverseStrategy};
pub use utils::error::{ErrorKind, OrderError, Result};
