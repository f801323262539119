use crate::domain::model::{Order, OutputFormat, ReverseStrategy, TransformResult};
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    /// Read a whole text file. Any failure to read is reported as
    /// [`OrderError::FileNotFound`](crate::OrderError::FileNotFound).
    fn read_to_string(&self, path: &str) -> Result<String>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn read_to_string(&self, path: &str) -> Result<String> {
        (**self).read_to_string(path)
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        (**self).write_file(path, data)
    }
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> Option<&str>;
    fn strategy(&self) -> ReverseStrategy;
    fn output_format(&self) -> OutputFormat;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<Order>>;
    fn transform(&self, orders: Vec<Order>) -> Result<TransformResult>;
    fn load(&self, result: TransformResult) -> Result<String>;
}
