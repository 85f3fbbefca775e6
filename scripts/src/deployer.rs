//! The boundary between the scripts and the chain being deployed to

use std::path::PathBuf;

use alloy::{
    network::{ReceiptResponse, TransactionBuilder},
    primitives::{Address, Bytes},
    providers::{DynProvider, Provider},
    rpc::types::TransactionRequest,
};
use tracing::info;

use crate::{
    errors::ScriptError,
    types::{Contract, NetworkInfo},
    utils::{load_artifact_bytecode, setup_client},
};

/// Deploys contracts to a network
#[allow(async_fn_in_trait)]
pub trait ContractDeployer {
    /// The network deployments are made to
    async fn network(&self) -> Result<NetworkInfo, ScriptError>;

    /// Deploy `contract` with the given ABI-encoded constructor arguments,
    /// waiting for the deployment to be confirmed.
    ///
    /// Returns the address of the deployed contract.
    async fn deploy(
        &self,
        contract: Contract,
        constructor_args: Vec<u8>,
    ) -> Result<Address, ScriptError>;
}

/// Deploys compiled contract artifacts over JSON-RPC
pub struct RpcDeployer {
    /// The signing provider
    client: DynProvider,
    /// The network name to record deployments under, if configured
    network_name: Option<String>,
    /// The directory containing the compiled contract artifacts
    artifacts_dir: PathBuf,
}

impl RpcDeployer {
    /// Create a deployer signing with `priv_key` against `rpc_url`
    pub fn new(
        rpc_url: &str,
        priv_key: &str,
        network_name: Option<String>,
        artifacts_dir: impl Into<PathBuf>,
    ) -> Result<Self, ScriptError> {
        let client = setup_client(priv_key, rpc_url)?;
        Ok(Self {
            client,
            network_name,
            artifacts_dir: artifacts_dir.into(),
        })
    }
}

impl ContractDeployer for RpcDeployer {
    async fn network(&self) -> Result<NetworkInfo, ScriptError> {
        let chain_id = self
            .client
            .get_chain_id()
            .await
            .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

        Ok(NetworkInfo::new(self.network_name.clone(), chain_id))
    }

    async fn deploy(
        &self,
        contract: Contract,
        constructor_args: Vec<u8>,
    ) -> Result<Address, ScriptError> {
        let bytecode = load_artifact_bytecode(&self.artifacts_dir, contract)?;
        let deploy_code: Bytes = [&bytecode[..], constructor_args.as_slice()]
            .concat()
            .into();

        let tx = TransactionRequest::default().with_deploy_code(deploy_code);
        let pending = self
            .client
            .send_transaction(tx)
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;
        info!("{} deployment sent in {:#x}", contract, pending.tx_hash());

        let receipt = pending
            .get_receipt()
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;
        if !receipt.status() {
            return Err(ScriptError::ContractDeployment(format!(
                "{} deployment reverted in {:#x}",
                contract,
                receipt.transaction_hash()
            )));
        }

        receipt.contract_address().ok_or_else(|| {
            ScriptError::ContractDeployment(format!(
                "no contract address in {} deployment receipt",
                contract
            ))
        })
    }
}
