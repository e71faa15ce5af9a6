//! Single-slot memo of the most recent action invocation.
//!
//! A hit is decided purely by string equality with the last successful
//! (service, action) pair. The slot is never cleared, not even between
//! cycles.

use crate::upnp::{ActionResult, CallError, ServiceDirectory};

use tracing::debug;

#[derive(Debug)]
struct CachedCall {
    service: String,
    action: String,
    result: ActionResult,
}

#[derive(Debug, Default)]
pub struct CallCache {
    last: Option<CachedCall>,
}

impl CallCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the result of `service`/`action`, invoking it only if it is not
    /// the pair held in the slot.
    ///
    /// On failure the slot keeps whatever it held before.
    pub fn invoke_if_needed(
        &mut self,
        directory: &dyn ServiceDirectory,
        service: &str,
        action: &str,
    ) -> Result<&ActionResult, CallError> {
        let call = match self.last.take() {
            Some(call) if call.service == service && call.action == action => {
                debug!(service, action, "reusing previous result");
                call
            }
            previous => match invoke(directory, service, action) {
                Ok(result) => CachedCall {
                    service: service.to_string(),
                    action: action.to_string(),
                    result,
                },
                Err(err) => {
                    self.last = previous;
                    return Err(err);
                }
            },
        };

        Ok(&self.last.insert(call).result)
    }

    /// The (service, action) pair currently held, if any.
    #[cfg(test)]
    pub fn last_call(&self) -> Option<(&str, &str)> {
        self.last
            .as_ref()
            .map(|c| (c.service.as_str(), c.action.as_str()))
    }
}

fn invoke(
    directory: &dyn ServiceDirectory,
    service: &str,
    action: &str,
) -> Result<ActionResult, CallError> {
    let svc = directory
        .service(service)
        .ok_or_else(|| CallError::ServiceNotFound {
            service: service.to_string(),
        })?;

    let act = svc.action(action).ok_or_else(|| CallError::ActionNotFound {
        service: service.to_string(),
        action: action.to_string(),
    })?;

    debug!(service, action, "invoking action");
    act.invoke().map_err(|source| CallError::Invocation {
        service: service.to_string(),
        action: action.to_string(),
        source,
    })
}
