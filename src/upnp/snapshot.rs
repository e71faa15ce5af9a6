//! File-backed service directory.
//!
//! JSON shape:
//! {
//!   "services": {
//!     "urn:schemas-upnp-org:service:WANIPConnection:1": {
//!       "GetStatusInfo": {
//!         "ConnectionStatus": "Connected",
//!         "Uptime": 86400
//!       }
//!     }
//!   }
//! }
//!
//! Every invocation of an action answers with the fields recorded for it.

use crate::upnp::{
    Action, ActionResult, Discovery, DiscoveryError, InvocationError, Service, ServiceDirectory,
};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Loads a [`SnapshotDirectory`] from a JSON document on disk.
#[derive(Debug, Clone)]
pub struct SnapshotDiscovery {
    path: PathBuf,
}

impl SnapshotDiscovery {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Discovery for SnapshotDiscovery {
    fn resolve_services(
        &self,
        host: &str,
        port: u16,
    ) -> Result<Box<dyn ServiceDirectory>, DiscoveryError> {
        let directory = SnapshotDirectory::load(&self.path)?;
        info!(
            host,
            port,
            services = directory.services.len(),
            "loaded service description from {}",
            self.path.display()
        );
        Ok(Box::new(directory))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SnapshotDirectory {
    #[serde(default)]
    services: BTreeMap<String, SnapshotService>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct SnapshotService {
    actions: BTreeMap<String, SnapshotAction>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct SnapshotAction {
    fields: ActionResult,
}

impl SnapshotDirectory {
    pub fn load(path: &Path) -> Result<Self, DiscoveryError> {
        let text = fs::read_to_string(path).map_err(|source| DiscoveryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// Parse a document; `path` is only used in error messages.
    pub fn parse(text: &str, path: &Path) -> Result<Self, DiscoveryError> {
        let directory: SnapshotDirectory =
            serde_json::from_str(text).map_err(|source| DiscoveryError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if directory.services.is_empty() {
            return Err(DiscoveryError::Empty {
                path: path.to_path_buf(),
            });
        }

        Ok(directory)
    }
}

impl ServiceDirectory for SnapshotDirectory {
    fn service(&self, id: &str) -> Option<&dyn Service> {
        self.services.get(id).map(|s| s as &dyn Service)
    }
}

impl Service for SnapshotService {
    fn action(&self, id: &str) -> Option<&dyn Action> {
        self.actions.get(id).map(|a| a as &dyn Action)
    }
}

impl Action for SnapshotAction {
    fn invoke(&self) -> Result<ActionResult, InvocationError> {
        debug!(fields = self.fields.len(), "answering from snapshot");
        Ok(self.fields.clone())
    }
}
