use prometheus::{Encoder, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub location_updates_total: IntCounterVec,
    pub track_requests_total: IntCounterVec,
    pub tracked_orders: IntGauge,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let location_updates_total = IntCounterVec::new(
            Opts::new(
                "location_updates_total",
                "Total location updates by outcome",
            ),
            &["outcome"],
        )
        .expect("valid location_updates_total metric");

        let track_requests_total = IntCounterVec::new(
            Opts::new("track_requests_total", "Total track lookups by outcome"),
            &["outcome"],
        )
        .expect("valid track_requests_total metric");

        let tracked_orders = IntGauge::new(
            "tracked_orders",
            "Current number of orders with a stored snapshot",
        )
        .expect("valid tracked_orders metric");

        registry
            .register(Box::new(location_updates_total.clone()))
            .expect("register location_updates_total");
        registry
            .register(Box::new(track_requests_total.clone()))
            .expect("register track_requests_total");
        registry
            .register(Box::new(tracked_orders.clone()))
            .expect("register tracked_orders");

        Self {
            registry,
            location_updates_total,
            track_requests_total,
            tracked_orders,
        }
    }

    pub fn encode(&self) -> Result<String, String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| format!("failed to encode metrics: {err}"))?;

        String::from_utf8(buffer).map_err(|err| format!("metrics are not valid utf8: {err}"))
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
