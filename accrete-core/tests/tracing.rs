//! Behavioural tests for engine instrumentation.

mod common;

use accrete_core::{
    GrowthModelBuilder, ModelError, RuleError, UndirectedGraph, WeightPolicy, growth_fn,
    termination_fn,
};
use accrete_test_support::tracing::RecordingLayer;
use common::{anchor_growth, five_cycle};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

#[test]
fn run_records_engine_spans_and_completion() {
    let mut model = GrowthModelBuilder::new()
        .with_seed(3)
        .build(five_cycle())
        .expect("five-cycle base is valid");
    model
        .set_termination_rule(termination_fn(|graph: &UndirectedGraph| {
            Ok(graph.node_count() >= 8)
        }))
        .expect("node ceiling passes its trial");
    model
        .set_growth_rule(growth_fn(anchor_growth))
        .expect("anchor growth passes its trial");

    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    tracing::subscriber::with_default(subscriber, || model.run(3, WeightPolicy::Poisson))
        .expect("run must terminate");

    let spans = layer.spans();
    let run_span = spans
        .iter()
        .find(|span| span.name == "engine.run")
        .expect("engine.run span must exist");
    assert_eq!(run_span.fields.get("nodes"), Some(&"5".to_owned()));
    assert_eq!(run_span.fields.get("edges"), Some(&"5".to_owned()));
    assert_eq!(run_span.fields.get("directed"), Some(&"false".to_owned()));
    assert_eq!(run_span.fields.get("max_order"), Some(&"3".to_owned()));
    assert_eq!(run_span.fields.get("policy"), Some(&"Poisson".to_owned()));

    assert!(
        spans.iter().any(|span| span.name == "engine.count"),
        "every iteration must open an engine.count span"
    );
    assert!(layer.has_message(Level::INFO, "termination rule satisfied"));
}

#[test]
fn rejected_rules_emit_a_warning() {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let err = tracing::subscriber::with_default(subscriber, || {
        let mut model = GrowthModelBuilder::new()
            .build(five_cycle())
            .expect("five-cycle base is valid");
        model.set_termination_rule(termination_fn(|_graph: &UndirectedGraph| {
            Err(RuleError::new("probe declined"))
        }))
    })
    .expect_err("failing trials must reject the rule");
    assert!(matches!(err, ModelError::RuleIncompatible { .. }));
    assert!(layer.has_message(Level::WARN, "rule rejected on trial invocation"));
}
