use crate::core::loader::{OrderLoader, FIELD_DELIMITER};
use crate::core::reverse::reverse;
use crate::core::{ConfigProvider, Order, OutputFormat, Pipeline, Storage, TransformResult};
use crate::utils::error::{OrderError, Result};
use std::io::{self, Write};

pub const STDOUT_DESTINATION: &str = "<stdout>";

/// Load an order file, reverse it, render it and write it out.
pub struct ReversePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ReversePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for ReversePipeline<S, C> {
    fn extract(&self) -> Result<Vec<Order>> {
        let path = self.config.input_path();
        tracing::debug!("Loading orders from {}", path);

        let orders = OrderLoader::new(&self.storage, path).collect::<Result<Vec<_>>>()?;

        tracing::debug!("Loaded {} orders from {}", orders.len(), path);
        Ok(orders)
    }

    fn transform(&self, orders: Vec<Order>) -> Result<TransformResult> {
        let strategy = self.config.strategy();
        let format = self.config.output_format();
        tracing::debug!("Reversing {} orders ({:?})", orders.len(), strategy);

        let reversed: Vec<Order> = reverse(Some(orders.as_slice()), strategy)?
            .cloned()
            .collect();
        let rendered = render_orders(&reversed, format)?;

        Ok(TransformResult {
            orders: reversed,
            format,
            rendered,
        })
    }

    fn load(&self, result: TransformResult) -> Result<String> {
        match self.config.output_path() {
            Some(path) => {
                self.storage.write_file(path, result.rendered.as_bytes())?;
                tracing::debug!(
                    "Wrote {} orders as {:?} to {}",
                    result.orders.len(),
                    result.format,
                    path
                );
                Ok(path.to_string())
            }
            None => {
                write_rendered(io::stdout().lock(), &result.rendered)?;
                Ok(STDOUT_DESTINATION.to_string())
            }
        }
    }
}

/// Write a rendering to `out`. A reader that hung up early is not an error.
fn write_rendered<W: Write>(mut out: W, rendered: &str) -> Result<()> {
    match out.write_all(rendered.as_bytes()).and_then(|()| out.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("Output closed by reader, dropping the rest");
            Ok(())
        }
        result => Ok(result?),
    }
}

/// Render orders in the given format. Every format ends with a newline unless
/// there are no orders to render.
pub fn render_orders(orders: &[Order], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(orders.iter().map(|order| format!("{order}\n")).collect()),
        OutputFormat::Csv => render_csv(orders),
        OutputFormat::Json => {
            if orders.is_empty() {
                return Ok(String::new());
            }
            let mut json = serde_json::to_string_pretty(orders)?;
            json.push('\n');
            Ok(json)
        }
    }
}

// Same shape as the input files: no header, no quoting.
fn render_csv(orders: &[Order]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(FIELD_DELIMITER as u8)
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for order in orders {
        writer.serialize(order)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| OrderError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| {
        OrderError::IoError(io::Error::new(io::ErrorKind::InvalidData, e))
    })
}
