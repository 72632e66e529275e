//! Registration specs
//!
//! A registry is validated as a whole and installed only if valid.

use crate::prelude::*;

#[test]
fn valid_registry_is_used_by_trigger() {
    let recorder = Recorder::new();
    let (hub, _errors) = hub();

    hub.register(Registry::new().on(
        "greeting",
        Registration::sync(recorder.listener("Printer", &["greeting"])),
    ))
    .unwrap();
    hub.trigger("greeting", vec![json!("hi")]);

    similar_asserts::assert_eq!(
        recorder.calls(),
        vec![Call {
            listener: "Printer".to_string(),
            handler: "handle_greeting".to_string(),
            args: vec![json!("hi")],
        }]
    );
}

#[test]
fn missing_listener_fails_and_installs_nothing() {
    let recorder = Recorder::new();
    let (hub, _errors) = hub();
    hub.register(Registry::new().on(
        "some_event",
        Registration::sync(recorder.listener("Object", &["some_event"])),
    ))
    .unwrap();

    let result = hub.register(
        Registry::new()
            .on("fresh", Registration::sync(recorder.listener("Fresh", &["fresh"])))
            .on("some_event", Registration::sync(Listener::new(""))),
    );

    assert_eq!(
        result,
        Err(RegistryError::MissingListener {
            event: EventName::from("some_event")
        })
    );
    hub.trigger("fresh", vec![]);
    hub.trigger("some_event", vec![]);
    assert_eq!(recorder.listeners(), vec!["Object".to_string()]);
}

#[test]
fn listener_lacking_handler_fails_at_registration() {
    let recorder = Recorder::new();
    let (hub, _errors) = hub();

    let err = hub
        .register(Registry::new().on(
            "hello",
            Registration::sync(recorder.listener("Printer", &["greeting"])),
        ))
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "listener `Printer` registered for `hello` does not respond to `handle_hello`"
    );
    assert!(hub.registry().is_empty());
}

#[test]
fn namespaced_listener_names_work() {
    let recorder = Recorder::new();
    let (hub, _errors) = hub();

    hub.register(Registry::new().on(
        "hello",
        Registration::sync(recorder.listener("Level1::Level2::NestedClass", &["hello"])),
    ))
    .unwrap();
    hub.trigger("hello", vec![]);

    assert_eq!(
        recorder.listeners(),
        vec!["Level1::Level2::NestedClass".to_string()]
    );
}

#[test]
fn one_listener_can_serve_several_events() {
    let recorder = Recorder::new();
    let (hub, _errors) = hub();
    let printer = Arc::new(recorder.listener("Printer", &["greeting", "farewell"]));

    hub.register(
        Registry::new()
            .on("greeting", Registration::sync(Arc::clone(&printer)))
            .on("farewell", Registration::sync(printer)),
    )
    .unwrap();
    hub.trigger("farewell", vec![json!("bye")]);
    hub.trigger("greeting", vec![json!("hi")]);

    let handlers: Vec<String> = recorder.calls().into_iter().map(|c| c.handler).collect();
    assert_eq!(
        handlers,
        vec!["handle_farewell".to_string(), "handle_greeting".to_string()]
    );
}
