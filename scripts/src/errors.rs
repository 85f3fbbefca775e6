//! Definitions of errors that can occur during the execution of the deploy scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the deploy scripts
#[derive(Debug)]
pub enum ScriptError {
    /// Error initializing the RPC client
    ClientInitialization(String),
    /// Error reading or parsing a contract compilation artifact
    ArtifactParsing(String),
    /// Error deploying a contract
    ContractDeployment(String),
    /// Error reading the `deployments.json` file
    ReadDeployments(String),
    /// Error writing the `deployments.json` file
    WriteDeployments(String),
    /// Error reading the frontend contracts config
    ReadFrontendConfig(String),
    /// Error writing the frontend contracts config
    WriteFrontendConfig(String),
    /// Error building a placeholder pattern
    PatternConstruction(String),
    /// Error de/serializing deployment data
    Serde(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ClientInitialization(s) => write!(f, "error initializing client: {}", s),
            ScriptError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            ScriptError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            ScriptError::ReadDeployments(s) => write!(f, "error reading deployments: {}", s),
            ScriptError::WriteDeployments(s) => write!(f, "error writing deployments: {}", s),
            ScriptError::ReadFrontendConfig(s) => {
                write!(f, "error reading frontend config: {}", s)
            }
            ScriptError::WriteFrontendConfig(s) => {
                write!(f, "error writing frontend config: {}", s)
            }
            ScriptError::PatternConstruction(s) => {
                write!(f, "error building placeholder pattern: {}", s)
            }
            ScriptError::Serde(s) => write!(f, "error de/serializing deployments: {}", s),
        }
    }
}

impl Error for ScriptError {}
