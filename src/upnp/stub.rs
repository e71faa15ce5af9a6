//! In-memory directory for tests. Counts invocations per action.

use crate::upnp::{Action, ActionResult, InvocationError, Service, ServiceDirectory};

use serde_json::Value;
use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;

#[derive(Default)]
pub struct StubDirectory {
    services: BTreeMap<String, StubService>,
}

#[derive(Default)]
pub struct StubService {
    actions: BTreeMap<String, StubAction>,
}

pub struct StubAction {
    answer: Result<ActionResult, String>,
    calls: Rc<Cell<usize>>,
}

impl StubDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an action answering with `fields`. Returns its call counter.
    pub fn action(
        &mut self,
        service: &str,
        action: &str,
        fields: &[(&str, Value)],
    ) -> Rc<Cell<usize>> {
        let fields = fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        self.insert(service, action, Ok(fields))
    }

    /// Register an action whose invocation always fails.
    pub fn failing(&mut self, service: &str, action: &str, message: &str) -> Rc<Cell<usize>> {
        self.insert(service, action, Err(message.to_string()))
    }

    /// Register a service with no actions.
    pub fn empty_service(&mut self, service: &str) {
        self.services.entry(service.to_string()).or_default();
    }

    fn insert(
        &mut self,
        service: &str,
        action: &str,
        answer: Result<ActionResult, String>,
    ) -> Rc<Cell<usize>> {
        let calls = Rc::new(Cell::new(0));
        self.services
            .entry(service.to_string())
            .or_default()
            .actions
            .insert(
                action.to_string(),
                StubAction {
                    answer,
                    calls: Rc::clone(&calls),
                },
            );
        calls
    }
}

impl ServiceDirectory for StubDirectory {
    fn service(&self, id: &str) -> Option<&dyn Service> {
        self.services.get(id).map(|s| s as &dyn Service)
    }
}

impl Service for StubService {
    fn action(&self, id: &str) -> Option<&dyn Action> {
        self.actions.get(id).map(|a| a as &dyn Action)
    }
}

impl Action for StubAction {
    fn invoke(&self) -> Result<ActionResult, InvocationError> {
        self.calls.set(self.calls.get() + 1);
        self.answer.clone().map_err(InvocationError::new)
    }
}
