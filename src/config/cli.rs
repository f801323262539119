use crate::core::loader::DEFAULT_ORDERS_FILE;
use crate::core::{ConfigProvider, OutputFormat, ReverseStrategy};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "order-reverse")]
#[command(about = "Print the orders of a ;-delimited file from last to first")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_ORDERS_FILE)]
    pub input: String,

    #[arg(long, help = "Write to this file instead of stdout")]
    pub output: Option<String>,

    #[arg(long, value_enum, default_value_t = ReverseStrategy::Indexed)]
    pub strategy: ReverseStrategy,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "TOML configuration file; replaces the flags above")]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage per phase")]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> Option<&str> {
        self.output.as_deref()
    }

    fn strategy(&self) -> ReverseStrategy {
        self.strategy
    }

    fn output_format(&self) -> OutputFormat {
        self.format
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input", &self.input)?;
        validation::validate_optional_path("output", self.output.as_deref())?;
        Ok(())
    }
}
