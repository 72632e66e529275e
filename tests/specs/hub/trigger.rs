//! Trigger specs
//!
//! Delivery order, argument forwarding and failure isolation.

use crate::prelude::*;

#[test]
fn greeting_scenario_runs_synchronously() {
    let recorder = Recorder::new();
    let (hub, errors) = hub();
    hub.register(Registry::new().on(
        "greeting",
        Registration::sync(recorder.listener("Printer", &["greeting"])),
    ))
    .unwrap();

    hub.trigger("greeting", vec![json!("hi")]);

    // Already recorded when trigger returns
    assert_eq!(recorder.calls().len(), 1);
    assert_eq!(recorder.calls()[0].args, vec![json!("hi")]);
    assert!(errors.records().is_empty());
}

#[test]
fn arguments_are_forwarded_verbatim() {
    let recorder = Recorder::new();
    let (hub, _errors) = hub();
    hub.register(Registry::new().on(
        "some_event",
        Registration::sync(recorder.listener("Object", &["some_event"])),
    ))
    .unwrap();
    let args = vec![json!(1), json!("two"), json!({"three": [3]}), Value::Null];

    hub.trigger("some_event", args.clone());

    assert_eq!(recorder.calls()[0].args, args);
}

#[test]
fn listeners_run_in_registration_order() {
    let recorder = Recorder::new();
    let (hub, _errors) = hub();
    let mut registry = Registry::new();
    for name in ["first", "second", "third", "fourth"] {
        registry.add("tick", Registration::sync(recorder.listener(name, &["tick"])));
    }
    hub.register(registry).unwrap();

    hub.trigger("tick", vec![]);

    assert_eq!(
        recorder.listeners(),
        vec!["first", "second", "third", "fourth"]
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>()
    );
}

#[test]
fn failing_listener_is_isolated_and_reported_once() {
    let recorder = Recorder::new();
    let (hub, errors) = hub();
    hub.register(
        Registry::new()
            .on("some_event", Registration::sync(flaky("FlakyObject", "some_event")))
            .on("some_event", Registration::sync(recorder.listener("Object", &["some_event"]))),
    )
    .unwrap();

    hub.trigger("some_event", vec![]);

    assert_eq!(recorder.listeners(), vec!["Object".to_string()]);
    let records = errors.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].listener, "FlakyObject");
    assert_eq!(records[0].handler, "handle_some_event");
}

#[test]
fn unregistered_event_does_nothing() {
    let recorder = Recorder::new();
    let (hub, errors) = hub();
    hub.register(Registry::new().on(
        "some_event",
        Registration::sync(recorder.listener("Object", &["some_event"])),
    ))
    .unwrap();

    hub.trigger("some_unregistered_event", vec![json!(1)]);

    assert!(recorder.calls().is_empty());
    assert!(errors.records().is_empty());
}
