/// Metric names emitted for a single transaction. Generated by `#[transaction]` as
/// `<fn>_success`, `<fn>_error` and `<fn>_latency`.
#[derive(Copy, Clone, Debug)]
pub struct TransactionLabels {
    pub success: &'static str,
    pub error: &'static str,
    pub latency: &'static str,
}
