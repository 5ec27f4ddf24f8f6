pub mod metrics;
pub mod sink;

pub use metrics::{CounterState, metrics_report, metrics_reset_all};
pub use sink::{MetricsEvent, MetricsSink, with_metrics_sink};
