use biometrics::{Collector, Counter, Moments};

pub(crate) static CLIENT_REQUESTS: Counter = Counter::new("concierge.client.requests");
pub(crate) static CLIENT_REQUEST_ERRORS: Counter = Counter::new("concierge.client.request_errors");
pub(crate) static CLIENT_REQUEST_DURATION: Moments =
    Moments::new("concierge.client.request_duration_seconds");

pub(crate) static SESSION_TURNS: Counter = Counter::new("concierge.session.turns");
pub(crate) static SESSION_TURN_FAILURES: Counter = Counter::new("concierge.session.turn_failures");
pub(crate) static SESSION_EMPTY_RESPONSES: Counter =
    Counter::new("concierge.session.empty_responses");
pub(crate) static SESSION_REJECTED_SUBMITS: Counter =
    Counter::new("concierge.session.rejected_submits");

/// Register this crate's biometrics with the provided collector.
pub fn register_biometrics(collector: Collector) {
    collector.register_counter(&CLIENT_REQUESTS);
    collector.register_counter(&CLIENT_REQUEST_ERRORS);
    collector.register_moments(&CLIENT_REQUEST_DURATION);

    collector.register_counter(&SESSION_TURNS);
    collector.register_counter(&SESSION_TURN_FAILURES);
    collector.register_counter(&SESSION_EMPTY_RESPONSES);
    collector.register_counter(&SESSION_REJECTED_SUBMITS);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sensors_register() {
        register_biometrics(Collector::new());
        CLIENT_REQUESTS.click();
        CLIENT_REQUEST_DURATION.add(0.25);
    }
}
