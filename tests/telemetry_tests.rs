use chart_config::telemetry::init_default_tracing;

#[test]
fn default_tracing_initializes_at_most_once() {
    let first = init_default_tracing();
    let second = init_default_tracing();
    assert!(!second);
    assert_eq!(first, cfg!(feature = "telemetry"));
}
