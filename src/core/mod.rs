pub mod etl;
pub mod loader;
pub mod pipeline;
pub mod reverse;

pub use crate::domain::model::{Order, OutputFormat, ReverseStrategy, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
