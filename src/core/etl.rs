use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor_enabled: bool,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor_enabled,
        }
    }

    /// Run extract, transform and load in order. Returns where the output went.
    pub fn run(&self) -> Result<String> {
        let mut monitor = SystemMonitor::new(self.monitor_enabled);
        tracing::info!("Starting order reversal");

        let orders = self.pipeline.extract()?;
        tracing::info!("Extracted {} orders", orders.len());
        monitor.log_stats("extract", orders.len());

        let result = self.pipeline.transform(orders)?;
        tracing::info!("Reversed {} orders", result.orders.len());
        monitor.log_stats("transform", result.orders.len());

        let written = result.orders.len();
        let destination = self.pipeline.load(result)?;
        tracing::info!("Output saved to: {}", destination);
        monitor.log_stats("load", written);

        monitor.log_final_stats();
        Ok(destination)
    }
}
