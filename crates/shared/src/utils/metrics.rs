use prometheus_client::metrics::histogram::Histogram;
use prometheus_client::metrics::{counter::Counter, family::Family};
use prometheus_client::registry::Registry;
use prometheus_client_derive_encode::{EncodeLabelSet, EncodeLabelValue};

const DURATION_BUCKETS: [f64; 11] = [
    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Operation {
    ListProducts,
    GetCart,
    AddToCart,
    RemoveFromCart,
    IncrementQuantity,
    ClearCart,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Status {
    Success,
    Error,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct Labels {
    pub operation: Operation,
    pub status: Status,
}

/// Per-service request counter and latency histogram.
#[derive(Clone, Debug)]
pub struct Metrics {
    pub request_counter: Family<Labels, Counter>,
    pub request_duration: Family<Labels, Histogram>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            request_counter: Family::default(),
            request_duration: Family::new_with_constructor(|| {
                Histogram::new(DURATION_BUCKETS.into_iter())
            }),
        }
    }

    /// Registers both families as `{prefix}_request_counter` and `{prefix}_request_duration`.
    pub fn register(&self, registry: &mut Registry, prefix: &str, component: &str) {
        registry.register(
            format!("{prefix}_request_counter"),
            format!("Total number of requests to the {component}"),
            self.request_counter.clone(),
        );
        registry.register(
            format!("{prefix}_request_duration"),
            format!("Histogram of request durations for the {component}"),
            self.request_duration.clone(),
        );
    }

    pub fn record(&self, operation: Operation, status: Status, duration_secs: f64) {
        let labels = Labels { operation, status };
        self.request_counter.get_or_create(&labels).inc();
        self.request_duration
            .get_or_create(&labels)
            .observe(duration_secs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prometheus_client::encoding::text::encode;

    #[test]
    fn record_counts_per_label_set() {
        let metrics = Metrics::new();
        metrics.record(Operation::AddToCart, Status::Success, 0.01);
        metrics.record(Operation::AddToCart, Status::Success, 0.02);
        metrics.record(Operation::AddToCart, Status::Error, 0.5);

        let success = Labels {
            operation: Operation::AddToCart,
            status: Status::Success,
        };
        let failure = Labels {
            operation: Operation::AddToCart,
            status: Status::Error,
        };

        assert_eq!(metrics.request_counter.get_or_create(&success).get(), 2);
        assert_eq!(metrics.request_counter.get_or_create(&failure).get(), 1);
    }

    #[test]
    fn registers_under_prefix_and_encodes_labels() {
        let metrics = Metrics::new();
        let mut registry = Registry::default();
        metrics.register(&mut registry, "cart_command_service", "CartCommandService");
        metrics.record(Operation::ClearCart, Status::Success, 0.001);

        let mut buffer = String::new();
        encode(&mut buffer, &registry).expect("encode metrics");

        assert!(buffer.contains("cart_command_service_request_counter_total"));
        assert!(buffer.contains("cart_command_service_request_duration_bucket"));
        assert!(buffer.contains("operation=\"ClearCart\""));
        assert!(buffer.contains("status=\"Success\""));
    }
}
