//! Utilities for the deploy scripts.

use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use alloy::{
    network::EthereumWallet,
    primitives::{hex, Bytes},
    providers::{DynProvider, ProviderBuilder},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use alloy_sol_types::SolConstructor;
use serde::Deserialize;

use crate::{
    constants::{ARTIFACT_EXTENSION, SOL_EXTENSION},
    errors::ScriptError,
    solidity::BaseCampBadges,
    types::Contract,
};

/// Sets up the provider with which to deploy contracts, signing with the
/// given private key against the given RPC url.
pub fn setup_client(priv_key: &str, rpc_url: &str) -> Result<DynProvider, ScriptError> {
    let url = Url::parse(rpc_url).map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let signer = PrivateKeySigner::from_str(priv_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    let provider = ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer))
        .on_http(url);

    Ok(DynProvider::new(provider))
}

/// The subset of a Hardhat / Foundry compilation artifact used for deployment
#[derive(Deserialize)]
struct ContractArtifact {
    /// The creation bytecode of the contract
    bytecode: ArtifactBytecode,
}

/// Hardhat stores the bytecode as a hex string, Foundry nests it in an object
#[derive(Deserialize)]
#[serde(untagged)]
enum ArtifactBytecode {
    /// A bare hex string
    Hex(String),
    /// An object holding the hex string
    Object {
        /// The hex string
        object: String,
    },
}

impl ArtifactBytecode {
    /// The hex-encoded bytecode
    fn hex(&self) -> &str {
        match self {
            ArtifactBytecode::Hex(s) => s,
            ArtifactBytecode::Object { object } => object,
        }
    }
}

/// The path of the compilation artifact for `contract` under `artifacts_dir`,
/// i.e. `<artifacts_dir>/<Contract>.sol/<Contract>.json`
pub fn artifact_path(artifacts_dir: &Path, contract: Contract) -> PathBuf {
    artifacts_dir
        .join(Path::new(contract.name()).with_extension(SOL_EXTENSION))
        .join(Path::new(contract.name()).with_extension(ARTIFACT_EXTENSION))
}

/// Read the creation bytecode of `contract` from its compilation artifact
pub fn load_artifact_bytecode(
    artifacts_dir: &Path,
    contract: Contract,
) -> Result<Bytes, ScriptError> {
    let path = artifact_path(artifacts_dir, contract);
    let contents = fs::read_to_string(&path)
        .map_err(|e| ScriptError::ArtifactParsing(format!("{}: {}", path.display(), e)))?;

    parse_artifact_bytecode(&contents)
}

/// Parse the creation bytecode out of a compilation artifact
pub fn parse_artifact_bytecode(artifact: &str) -> Result<Bytes, ScriptError> {
    let artifact: ContractArtifact =
        serde_json::from_str(artifact).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

    let bytecode = hex::decode(artifact.bytecode.hex())
        .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;
    if bytecode.is_empty() {
        // Interfaces and abstract contracts compile to empty bytecode
        return Err(ScriptError::ArtifactParsing(
            "artifact has no creation bytecode".to_string(),
        ));
    }

    Ok(bytecode.into())
}

/// Encode the constructor arguments for `contract`
pub fn constructor_args(contract: Contract, badge_metadata_uri: &str) -> Vec<u8> {
    match contract {
        Contract::WalletAuth => vec![],
        Contract::BaseCampBadges => BaseCampBadges::constructorCall {
            metadataUri: badge_metadata_uri.to_string(),
        }
        .abi_encode(),
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use alloy::primitives::hex;

    use crate::{errors::ScriptError, types::Contract};

    use super::{artifact_path, constructor_args, parse_artifact_bytecode};

    #[test]
    fn test_artifact_path() {
        let path = artifact_path(Path::new("artifacts/contracts"), Contract::BaseCampBadges);
        assert_eq!(
            path,
            Path::new("artifacts/contracts/BaseCampBadges.sol/BaseCampBadges.json")
        );
    }

    #[test]
    fn test_parse_hardhat_artifact() {
        let artifact = r#"{"contractName": "WalletAuth", "abi": [], "bytecode": "0x6080604052"}"#;
        let bytecode = parse_artifact_bytecode(artifact).unwrap();
        assert_eq!(&bytecode[..], &[0x60, 0x80, 0x60, 0x40, 0x52]);
    }

    #[test]
    fn test_parse_foundry_artifact() {
        let artifact = r#"{"abi": [], "bytecode": {"object": "6080604052", "linkReferences": {}}}"#;
        let bytecode = parse_artifact_bytecode(artifact).unwrap();
        assert_eq!(bytecode.len(), 5);
    }

    #[test]
    fn test_parse_empty_bytecode() {
        let res = parse_artifact_bytecode(r#"{"bytecode": "0x"}"#);
        assert!(matches!(res, Err(ScriptError::ArtifactParsing(_))));
    }

    #[test]
    fn test_constructor_args() {
        assert!(constructor_args(Contract::WalletAuth, "ipfs://x").is_empty());

        let args = constructor_args(Contract::BaseCampBadges, "ipfs://x");
        // Offset word, length word, one padded data word
        assert_eq!(args.len(), 96);
        assert_eq!(args[31], 0x20);
        assert_eq!(args[63], 8);
        assert_eq!(&args[64..72], b"ipfs://x");
        assert_eq!(hex::encode(&args[72..96]), "00".repeat(24));
    }
}
