use oasis_leads::configuration::get_configuration;
use std::time::Duration;

#[test]
fn webhook_requests_are_bounded_by_a_timeout() {
    let configuration = get_configuration().expect("Failed to read configuration.");

    assert!(configuration.webhooks.timeout() > Duration::from_millis(0));
}
