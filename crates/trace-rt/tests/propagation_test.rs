//! End-to-end propagation through an async request pipeline.

use test_support::{http_kafka_tracer, FixedGenerator, HTTP_KEY, KAFKA_KEY};
use trace_rt::observability::request_span;
use trace_rt::scope::{current_carrier, current_trace_id, ensure_scope, with_carrier};
use trace_rt::{Carrier, Key, Protocol, TraceId, Tracer, TracerConfig};
use tracing::Instrument;
use tracing_test::traced_test;

/// Carrier entries a transport would serialize for `protocol`.
fn outbound_header(tracer: &Tracer, protocol: &str) -> Option<(Key, String)> {
    let protocol = Protocol::from(protocol);
    let key = tracer.registry().key_for(&protocol)?;
    let carrier = current_carrier()?;
    let id = tracer.try_get_by_protocol(&carrier, &protocol)?;
    Some((key, id.into_string()))
}

#[tokio::test]
async fn edge_service_mints_one_id_for_all_transports() {
    let tracer = http_kafka_tracer(true);
    tracer.set_generator(FixedGenerator::new("fixed-id-123"));

    let (http, kafka) = ensure_scope(&tracer, async {
        let http = outbound_header(&tracer, "http");
        let kafka = tokio::spawn(with_carrier(current_carrier().unwrap_or_default(), {
            let tracer = http_kafka_tracer(false);
            async move { outbound_header(&tracer, "kafka") }
        }))
        .await
        .expect("kafka task");
        (http, kafka)
    })
    .await;

    assert_eq!(http, Some((Key::from(HTTP_KEY), "fixed-id-123".to_string())));
    assert_eq!(kafka, Some((Key::from(KAFKA_KEY), "fixed-id-123".to_string())));
}

#[tokio::test]
async fn downstream_service_keeps_upstream_id() {
    let downstream = Tracer::from_config(
        &TracerConfig::from_json_str(
            r#"{"master": false, "protocols": [{"protocol": "kafka", "key": "kafka-trace"}]}"#,
        )
        .expect("config"),
    )
    .expect("tracer");
    let inbound = Carrier::from_pairs([(KAFKA_KEY, "upstream-id"), ("partition", "3")]);

    let seen = with_carrier(inbound, ensure_scope(&downstream, async {
        current_trace_id(&downstream)
    }))
    .await;

    assert_eq!(seen, Some(TraceId::from("upstream-id")));
}

#[test]
fn follower_without_upstream_id_stays_silent() {
    let follower = http_kafka_tracer(false);
    let seen = tokio_test::block_on(ensure_scope(&follower, async { current_trace_id(&follower) }));
    assert_eq!(seen, None);
}

#[tokio::test]
#[traced_test]
async fn request_logs_carry_the_trace_id() {
    let tracer = http_kafka_tracer(true);
    let carrier = tracer.set_id(&Carrier::new(), "logged-123");

    async {
        tracing::info!("processing order");
    }
    .instrument(request_span(&tracer, &carrier, "order"))
    .await;

    assert!(logs_contain("trace_id=logged-123"));
    assert!(logs_contain("processing order"));
}
