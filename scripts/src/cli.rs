//! Definitions of CLI arguments and commands for deploy scripts

use clap::{Args, Parser, Subcommand};

use crate::{
    commands::{deploy, patch_frontend, read_deployments},
    constants::{
        DEFAULT_ARTIFACTS_DIR, DEFAULT_BADGE_METADATA_URI, DEFAULT_DEPLOYMENTS_PATH,
        DEFAULT_FRONTEND_CONFIG_PATH, DEFAULT_PKEY, DEFAULT_RPC_URL,
    },
    errors::ScriptError,
    types::Contract,
};

/// Deploy the Base Camp contracts and keep the deployment bookkeeping up to date
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the file deployments are recorded in
    #[arg(long, env = "DEPLOYMENTS_PATH", default_value = DEFAULT_DEPLOYMENTS_PATH, global = true)]
    pub deployments_path: String,

    /// Path to the frontend file holding the contract address constants
    #[arg(long, env = "FRONTEND_CONFIG_PATH", default_value = DEFAULT_FRONTEND_CONFIG_PATH, global = true)]
    pub frontend_config_path: String,

    /// The script to run
    #[command(subcommand)]
    pub command: Command,
}

/// The available scripts
#[derive(Subcommand)]
pub enum Command {
    /// Deploy contracts, record them, and update the frontend config
    Deploy(DeployArgs),
    /// Print the recorded deployments
    ReadDeployments,
    /// Update a frontend address constant without deploying
    PatchFrontend(PatchFrontendArgs),
}

impl Command {
    /// Run the command
    pub async fn run(
        self,
        deployments_path: &str,
        frontend_config_path: &str,
    ) -> Result<(), ScriptError> {
        match self {
            Command::Deploy(args) => deploy(args, deployments_path, frontend_config_path).await,
            Command::ReadDeployments => read_deployments(deployments_path),
            Command::PatchFrontend(args) => patch_frontend(args, frontend_config_path),
        }
    }
}

/// Deploy the contracts
#[derive(Args)]
pub struct DeployArgs {
    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Private key of the deployer
    #[arg(short, long, env = "PKEY", default_value = DEFAULT_PKEY, hide_env_values = true)]
    pub priv_key: String,

    /// The name to record the deployments under,
    /// derived from the chain ID when unset
    #[arg(short, long, env = "NETWORK")]
    pub network: Option<String>,

    /// Directory containing the compiled contract artifacts
    #[arg(long, env = "ARTIFACTS_DIR", default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts_dir: String,

    /// The contracts to deploy, all of them when unset
    #[arg(short, long, value_enum, value_delimiter = ',')]
    pub contracts: Vec<Contract>,

    /// The metadata URI the badges contract is deployed with
    #[arg(long, env = "BADGE_METADATA_URI", default_value = DEFAULT_BADGE_METADATA_URI)]
    pub badge_metadata_uri: String,

    /// Leave the frontend config untouched
    #[arg(long)]
    pub skip_frontend: bool,
}

/// Update a frontend address constant
#[derive(Args)]
pub struct PatchFrontendArgs {
    /// The name of the contract, e.g. `WalletAuth`
    #[arg(long)]
    pub contract: String,

    /// The address to set
    #[arg(short, long)]
    pub address: String,

    /// The chain the address is deployed on
    #[arg(long)]
    pub chain_id: u64,
}
