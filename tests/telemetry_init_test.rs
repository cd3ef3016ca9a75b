//! Subscriber installation. Kept in its own test binary because only one
//! global subscriber may exist per process.

use bedrock_chat::telemetry::{SubscriberConfig, init_subscriber};

#[test]
fn stdout_logging_returns_guard_then_none_once_installed() {
    let first = init_subscriber(SubscriberConfig::default()).unwrap();
    assert!(first.is_some(), "stdout writer is non-blocking and needs its guard kept");

    let second = init_subscriber(SubscriberConfig::default()).unwrap();
    assert!(second.is_none());
}
