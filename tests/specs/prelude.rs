//! Shared fixtures for specs

pub use pubsub_adapters::{FakeDispatcher, FakeErrorHandler, QueueDispatcher, TokioDispatcher};
pub use pubsub_core::{
    DispatchError, EventName, Hub, Invocation, Listener, ListenerCatalog, Registration, Registry,
    RegistryConfig, RegistryError,
};
pub use serde_json::{json, Value};
pub use std::sync::{Arc, Mutex};

/// Records every handler call made to listeners it builds
#[derive(Clone, Default)]
pub struct Recorder {
    calls: Arc<Mutex<Vec<Call>>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub listener: String,
    pub handler: String,
    pub args: Vec<Value>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listener answering each of `events` by recording the call
    pub fn listener(&self, name: &str, events: &[&str]) -> Listener {
        let mut listener = Listener::new(name);
        for event in events {
            let calls = Arc::clone(&self.calls);
            let who = name.to_string();
            let handler = EventName::from(*event).handler().to_string();
            listener = listener.on(*event, move |args| {
                calls.lock().unwrap().push(Call {
                    listener: who.clone(),
                    handler: handler.clone(),
                    args: args.to_vec(),
                });
                Ok(())
            });
        }
        listener
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn listeners(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.listener).collect()
    }
}

/// Listener whose handler for `event` always fails
pub fn flaky(name: &str, event: &str) -> Listener {
    Listener::new(name).on(event, |_| Err("flaked".into()))
}

/// Hub that reports into a fake error handler
pub fn hub() -> (Hub, FakeErrorHandler) {
    let errors = FakeErrorHandler::new();
    let hub = Hub::new().with_error_handler(Arc::new(errors.clone()));
    (hub, errors)
}
