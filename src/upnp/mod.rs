//! Router service directory: the seam between the poll loop and whatever
//! actually talks to the device.
//!
//! The poll loop only needs to look services and actions up by identifier and
//! invoke them. How a directory is discovered, and how an invocation reaches
//! the router, is up to the `Discovery` implementation.

pub mod snapshot;
#[cfg(test)]
pub mod stub;

pub use snapshot::SnapshotDiscovery;

use serde_json::Value;
use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

/// Text a missing or null field renders as.
pub const NIL: &str = "<nil>";

/// Field name -> opaque value, as returned by one action invocation.
pub type ActionResult = BTreeMap<String, Value>;

/// A callable remote operation.
pub trait Action {
    fn invoke(&self) -> Result<ActionResult, InvocationError>;
}

/// A remote service exposing named actions.
pub trait Service {
    fn action(&self, id: &str) -> Option<&dyn Action>;
}

/// All services a device exposes, keyed by service identifier.
pub trait ServiceDirectory {
    fn service(&self, id: &str) -> Option<&dyn Service>;
}

impl<T: ServiceDirectory + ?Sized> ServiceDirectory for Box<T> {
    fn service(&self, id: &str) -> Option<&dyn Service> {
        (**self).service(id)
    }
}

/// Resolves the service directory of the device at `host:port`.
pub trait Discovery {
    fn resolve_services(
        &self,
        host: &str,
        port: u16,
    ) -> Result<Box<dyn ServiceDirectory>, DiscoveryError>;
}

/// Failure to load a service directory. Nothing can be polled without one.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("cannot read service description {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse service description {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("service description {path} lists no services")]
    Empty { path: PathBuf },
}

/// Transport or protocol failure while invoking an action.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct InvocationError {
    message: String,
}

impl InvocationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Why one metric entry could not be answered.
#[derive(Debug, Error)]
pub enum CallError {
    #[error("cannot find defined service {service}")]
    ServiceNotFound { service: String },

    #[error("cannot find defined action {action} on service {service}")]
    ActionNotFound { service: String, action: String },

    #[error("unable to call action {action} on service {service}: {source}")]
    Invocation {
        service: String,
        action: String,
        #[source]
        source: InvocationError,
    },
}

/// Render an opaque field value as text.
///
/// Absent and null fields both become [`NIL`].
pub fn render_field(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => NIL.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn render_field_keeps_strings_verbatim() {
        assert_eq!(render_field(Some(&json!("Connected"))), "Connected");
        assert_eq!(render_field(Some(&json!(" 42 "))), " 42 ");
        assert_eq!(render_field(Some(&json!(""))), "");
    }

    #[test]
    fn render_field_uses_json_text_for_scalars() {
        assert_eq!(render_field(Some(&json!(100))), "100");
        assert_eq!(render_field(Some(&json!(-7))), "-7");
        assert_eq!(render_field(Some(&json!(3.5))), "3.5");
        assert_eq!(render_field(Some(&json!(true))), "true");
    }

    #[test]
    fn render_field_maps_missing_and_null_to_nil() {
        assert_eq!(render_field(None), NIL);
        assert_eq!(render_field(Some(&Value::Null)), NIL);
    }

    #[test]
    fn call_error_messages_name_service_and_action() {
        let err = CallError::ActionNotFound {
            service: "svc".into(),
            action: "GetX".into(),
        };
        assert_eq!(err.to_string(), "cannot find defined action GetX on service svc");

        let err = CallError::Invocation {
            service: "svc".into(),
            action: "GetX".into(),
            source: InvocationError::new("connection refused"),
        };
        assert_eq!(
            err.to_string(),
            "unable to call action GetX on service svc: connection refused"
        );
    }
}
