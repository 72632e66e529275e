//! Deferred dispatch specs
//!
//! Real async dispatchers run handlers after `trigger` has returned.

use crate::prelude::*;
use std::time::Duration;

#[test]
fn queued_handlers_run_on_drain() {
    let recorder = Recorder::new();
    let queue = QueueDispatcher::new();
    let (hub, _errors) = hub();
    hub.set_async_dispatcher(Arc::new(queue.clone()));
    hub.register(Registry::new().on(
        "took_action",
        Registration::asynchronous(recorder.listener("Mailer", &["took_action"])),
    ))
    .unwrap();

    hub.trigger("took_action", vec![json!(1)]);
    assert!(recorder.calls().is_empty());

    assert_eq!(queue.drain(), 1);
    assert_eq!(recorder.listeners(), vec!["Mailer".to_string()]);
}

#[tokio::test(flavor = "multi_thread")]
async fn tokio_dispatcher_reports_failures_after_trigger() {
    let dispatcher = TokioDispatcher::from_current().unwrap();
    let recorder = Recorder::new();
    let (hub, errors) = hub();
    hub.set_async_dispatcher(Arc::new(dispatcher.clone()));
    hub.register(
        Registry::new()
            .on("some_event", Registration::asynchronous(flaky("FlakyObject", "some_event")))
            .on("some_event", Registration::asynchronous(recorder.listener("Object", &["some_event"]))),
    )
    .unwrap();

    hub.trigger("some_event", vec![json!("payload")]);
    tokio::time::timeout(Duration::from_secs(5), dispatcher.wait_idle())
        .await
        .unwrap();

    assert_eq!(recorder.calls()[0].args, vec![json!("payload")]);
    assert_eq!(
        errors.messages(),
        vec!["FlakyObject.handle_some_event failed: flaked".to_string()]
    );
}
