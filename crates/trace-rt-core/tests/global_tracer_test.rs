//! The process-wide default tracer.
//!
//! Kept to a single test since every case shares the same instance.

use test_support::FixedGenerator;
use trace_rt_core::{global, Carrier, Key, Protocol, TraceId, DEFAULT_KEY};

#[test]
fn default_tracer_lifecycle() {
    assert!(global::am_i_master());
    assert_eq!(global::keys(), vec![Key::from(DEFAULT_KEY)]);

    global::register_protocol("http", "X-Trace-Id");
    global::register_protocol("kafka", "kafka-trace");
    global::register_protocol("http", "B");
    assert_eq!(
        global::tracer().registry().key_for(&Protocol::from("http")),
        Some(Key::from("X-Trace-Id"))
    );

    global::set_generator(FixedGenerator::new("fixed-id-123"));
    assert_eq!(global::generate(&Carrier::new()).as_str(), "fixed-id-123");

    let carrier = global::set(&Carrier::new());
    assert!(global::exist(&carrier));
    assert!(global::exist_protocol(&carrier));
    assert_eq!(global::get(&carrier), "fixed-id-123");
    assert_eq!(global::get_by_protocol(&carrier, &Protocol::from("kafka")), "fixed-id-123");
    assert_eq!(
        global::try_get_by_protocol(&carrier, &Protocol::from("http")).map(|id| id.into_string()),
        Some("fixed-id-123".to_string())
    );

    let provided = global::set_id(&Carrier::new(), "caller-id");
    assert_eq!(global::try_get(&provided), Some(TraceId::from("caller-id")));

    global::i_am_master(false);
    let untouched = global::set(&Carrier::new());
    assert!(!global::exist(&untouched));
    global::i_am_master(true);
}
