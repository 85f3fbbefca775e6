//! Implementations of the various deploy scripts

use itertools::Itertools;
use tracing::{error, info};

use crate::{
    cli::{DeployArgs, PatchFrontendArgs},
    deployer::{ContractDeployer, RpcDeployer},
    deployments::DeploymentStore,
    errors::ScriptError,
    frontend::FrontendPatcher,
    types::{Contract, NetworkInfo},
    utils::constructor_args,
};

/// Deploy the requested contracts, record them in the deployments file,
/// and point the frontend config at them
pub async fn deploy(
    args: DeployArgs,
    deployments_path: &str,
    frontend_config_path: &str,
) -> Result<(), ScriptError> {
    let deployer = RpcDeployer::new(
        &args.rpc_url,
        &args.priv_key,
        args.network,
        args.artifacts_dir,
    )?;

    let contracts = if args.contracts.is_empty() {
        Contract::ALL.to_vec()
    } else {
        args.contracts
    };
    let store = DeploymentStore::new(deployments_path);
    let patcher = (!args.skip_frontend).then(|| FrontendPatcher::new(frontend_config_path));

    run_deployments(
        &deployer,
        &contracts,
        &args.badge_metadata_uri,
        &store,
        patcher.as_ref(),
    )
    .await?;

    Ok(())
}

/// Deploy each contract in turn, then record the deployments.
///
/// Any deployment failure aborts the run before anything is recorded. Once
/// every contract is deployed, failures to record them are logged and do not
/// fail the run.
///
/// Returns the deployed contracts with their checksummed addresses.
pub async fn run_deployments(
    deployer: &impl ContractDeployer,
    contracts: &[Contract],
    badge_metadata_uri: &str,
    store: &DeploymentStore,
    patcher: Option<&FrontendPatcher>,
) -> Result<Vec<(Contract, String)>, ScriptError> {
    let network = deployer.network().await?;
    info!(
        "Deploying {} to {} (chain ID {})",
        contracts.iter().join(", "),
        network.name,
        network.chain_id
    );

    let mut deployed = Vec::with_capacity(contracts.len());
    for &contract in contracts {
        let args = constructor_args(contract, badge_metadata_uri);
        let address = deployer.deploy(contract, args).await?.to_checksum(None);
        info!("{} deployed to {}", contract, address);

        deployed.push((contract, address));
    }

    record_deployments(&network, &deployed, store, patcher);
    Ok(deployed)
}

/// Write the deployments to the deployments file and the frontend config
fn record_deployments(
    network: &NetworkInfo,
    deployed: &[(Contract, String)],
    store: &DeploymentStore,
    patcher: Option<&FrontendPatcher>,
) {
    let addresses = deployed
        .iter()
        .map(|(contract, address)| (contract.name(), address.as_str()));
    match store.persist(&network.name, network.chain_id, addresses) {
        Ok(_) => info!("Deployments saved to {}", store.path().display()),
        Err(e) => error!(
            "failed to save deployments to {}: {}",
            store.path().display(),
            e
        ),
    }

    if let Some(patcher) = patcher {
        for (contract, address) in deployed {
            if let Err(e) = patcher.patch(contract.name(), address, network.chain_id) {
                error!("failed to update frontend config for {}: {}", contract, e);
            }
        }
    }

    info!("Network: {}", network.name);
    info!("Chain ID: {}", network.chain_id);
    for (contract, address) in deployed {
        info!("\t{}: {}", contract, address);
    }
}

/// Print the recorded deployments as JSON
pub fn read_deployments(deployments_path: &str) -> Result<(), ScriptError> {
    if let Some(document) = DeploymentStore::new(deployments_path).read() {
        println!("{}", document.to_pretty_json()?);
    }

    Ok(())
}

/// Update a single frontend address constant
pub fn patch_frontend(
    args: PatchFrontendArgs,
    frontend_config_path: &str,
) -> Result<(), ScriptError> {
    FrontendPatcher::new(frontend_config_path).patch(
        &args.contract,
        &args.address,
        args.chain_id,
    )?;
    Ok(())
}
