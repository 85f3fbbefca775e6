//! Persistence of deployment records in the `deployments.json` file.
//!
//! The file maps a network name to the contracts deployed on that network:
//!
//! ```json
//! {
//!   "baseSepolia": {
//!     "WalletAuth": {
//!       "address": "0x...",
//!       "chainId": 84532,
//!       "deployedAt": "2025-01-01T00:00:00.000Z"
//!     }
//!   }
//! }
//! ```
//!
//! Writes are read-modify-write merges: recording a contract never removes
//! entries for other contracts or networks.

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::errors::ScriptError;

/// The metadata recorded for a single deployed contract
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRecord {
    /// The hex-encoded address of the contract
    pub address: String,
    /// The chain ID of the network the contract was deployed to
    pub chain_id: u64,
    /// When the record was written, as an ISO-8601 timestamp
    pub deployed_at: String,
}

/// The full contents of the deployments file, keyed by network name then
/// contract name.
///
/// Held as untyped JSON so that hand-edited entries, and fields this crate
/// does not write, survive a rewrite untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeploymentDocument(Map<String, Value>);

impl DeploymentDocument {
    /// Insert a record, replacing any prior record for the same
    /// (network, contract) pair
    pub fn upsert(
        &mut self,
        network: &str,
        contract: &str,
        record: DeploymentRecord,
    ) -> Result<(), ScriptError> {
        let record =
            serde_json::to_value(record).map_err(|e| ScriptError::Serde(e.to_string()))?;

        let entry = self
            .0
            .entry(network.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            warn!("replacing non-object entry for network {}", network);
            *entry = Value::Object(Map::new());
        }
        if let Some(contracts) = entry.as_object_mut() {
            contracts.insert(contract.to_string(), record);
        }

        Ok(())
    }

    /// Get the record for a contract on a network, if it is well-formed
    pub fn get(&self, network: &str, contract: &str) -> Option<DeploymentRecord> {
        let record = self.network(network)?.get(contract)?;
        serde_json::from_value(record.clone()).ok()
    }

    /// The raw entries for every contract deployed on a network
    pub fn network(&self, network: &str) -> Option<&Map<String, Value>> {
        self.0.get(network)?.as_object()
    }

    /// The names of all networks with recorded deployments
    pub fn networks(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Whether the document holds no networks
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serialize the document as 2-space indented JSON
    pub fn to_pretty_json(&self) -> Result<String, ScriptError> {
        serde_json::to_string_pretty(self).map_err(|e| ScriptError::Serde(e.to_string()))
    }
}

/// The on-disk deployments file
#[derive(Clone, Debug)]
pub struct DeploymentStore {
    /// The path of the deployments file
    path: PathBuf,
}

impl DeploymentStore {
    /// Create a store backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the deployments file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record the given contract addresses for a network, stamped with the
    /// current time, and write the merged document back to disk.
    ///
    /// Returns the document as written.
    pub fn persist<'a>(
        &self,
        network: &str,
        chain_id: u64,
        addresses: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<DeploymentDocument, ScriptError> {
        let deployed_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        self.persist_at(network, chain_id, addresses, &deployed_at)
    }

    /// Like [`DeploymentStore::persist`], with an explicit timestamp
    pub fn persist_at<'a>(
        &self,
        network: &str,
        chain_id: u64,
        addresses: impl IntoIterator<Item = (&'a str, &'a str)>,
        deployed_at: &str,
    ) -> Result<DeploymentDocument, ScriptError> {
        let mut document = self.load_or_default();

        for (contract, address) in addresses {
            let record = DeploymentRecord {
                address: address.to_string(),
                chain_id,
                deployed_at: deployed_at.to_string(),
            };
            document.upsert(network, contract, record)?;
        }

        fs::write(&self.path, document.to_pretty_json()?)
            .map_err(|e| ScriptError::WriteDeployments(e.to_string()))?;

        Ok(document)
    }

    /// Read the deployments file.
    ///
    /// Returns `None` if the file is absent or cannot be parsed.
    pub fn read(&self) -> Option<DeploymentDocument> {
        if !self.path.exists() {
            info!(
                "no deployments recorded at {}, deploy the contracts first",
                self.path.display()
            );
            return None;
        }

        match self.try_read() {
            Ok(document) => Some(document),
            Err(e) => {
                warn!("could not read {}: {}", self.path.display(), e);
                None
            }
        }
    }

    /// Read and parse the deployments file
    fn try_read(&self) -> Result<DeploymentDocument, ScriptError> {
        let contents = fs::read_to_string(&self.path)
            .map_err(|e| ScriptError::ReadDeployments(e.to_string()))?;

        serde_json::from_str(&contents).map_err(|e| ScriptError::ReadDeployments(e.to_string()))
    }

    /// Load the existing document, starting over from an empty one if the
    /// file is missing or malformed
    fn load_or_default(&self) -> DeploymentDocument {
        if !self.path.exists() {
            return DeploymentDocument::default();
        }

        self.try_read().unwrap_or_else(|e| {
            warn!(
                "could not read existing {} ({}), starting a new one",
                self.path.display(),
                e
            );
            DeploymentDocument::default()
        })
    }
}
