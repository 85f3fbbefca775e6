//! Type definitions used throughout the scripts

use std::fmt::{self, Display};

use clap::ValueEnum;

use crate::constants::{
    BASE_CAMP_BADGES_CONSTANT_PREFIX, BASE_MAINNET_CHAIN_ID, BASE_MAINNET_NETWORK_NAME,
    BASE_SEPOLIA_CHAIN_ID, BASE_SEPOLIA_NETWORK_NAME, HARDHAT_CHAIN_ID, LOCAL_CHAIN_ID,
    LOCAL_NETWORK_NAME, WALLET_AUTH_CONSTANT_PREFIX,
};

/// The contracts the scripts know how to deploy
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Contract {
    /// The wallet authentication contract
    WalletAuth,
    /// The Base Camp badges contract
    BaseCampBadges,
}

impl Contract {
    /// All deployable contracts, in deployment order
    pub const ALL: [Contract; 2] = [Contract::WalletAuth, Contract::BaseCampBadges];

    /// The contract name, as it appears in artifacts and in `deployments.json`
    pub fn name(&self) -> &'static str {
        match self {
            Contract::WalletAuth => "WalletAuth",
            Contract::BaseCampBadges => "BaseCampBadges",
        }
    }

    /// Look up a contract by its name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// The name of the frontend constant holding this contract's address,
    /// without the network suffix
    pub fn constant_prefix(&self) -> &'static str {
        match self {
            Contract::WalletAuth => WALLET_AUTH_CONSTANT_PREFIX,
            Contract::BaseCampBadges => BASE_CAMP_BADGES_CONSTANT_PREFIX,
        }
    }
}

impl Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The networks the frontend keeps a separate address constant for
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FrontendNetwork {
    /// A local devnet
    Local,
    /// Base Sepolia
    Sepolia,
    /// Base mainnet
    Mainnet,
}

impl FrontendNetwork {
    /// Map a chain ID onto the frontend network it is configured under
    pub fn from_chain_id(chain_id: u64) -> Option<Self> {
        match chain_id {
            LOCAL_CHAIN_ID | HARDHAT_CHAIN_ID => Some(FrontendNetwork::Local),
            BASE_SEPOLIA_CHAIN_ID => Some(FrontendNetwork::Sepolia),
            BASE_MAINNET_CHAIN_ID => Some(FrontendNetwork::Mainnet),
            _ => None,
        }
    }

    /// The suffix appended to the frontend constant name
    pub fn constant_suffix(&self) -> &'static str {
        match self {
            FrontendNetwork::Local => "LOCAL",
            FrontendNetwork::Sepolia => "SEPOLIA",
            FrontendNetwork::Mainnet => "MAINNET",
        }
    }
}

impl Display for FrontendNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrontendNetwork::Local => write!(f, "Local"),
            FrontendNetwork::Sepolia => write!(f, "Base Sepolia"),
            FrontendNetwork::Mainnet => write!(f, "Base Mainnet"),
        }
    }
}

/// The network a deployment is made against
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkInfo {
    /// The name the deployments are recorded under
    pub name: String,
    /// The numeric chain ID
    pub chain_id: u64,
}

impl NetworkInfo {
    /// Build the network info for a chain, falling back to a name derived
    /// from the chain ID when none is configured
    pub fn new(name: Option<String>, chain_id: u64) -> Self {
        let name = name.unwrap_or_else(|| default_network_name(chain_id));
        Self { name, chain_id }
    }
}

/// The name deployments on the given chain are recorded under by default
pub fn default_network_name(chain_id: u64) -> String {
    match chain_id {
        LOCAL_CHAIN_ID | HARDHAT_CHAIN_ID => LOCAL_NETWORK_NAME.to_string(),
        BASE_SEPOLIA_CHAIN_ID => BASE_SEPOLIA_NETWORK_NAME.to_string(),
        BASE_MAINNET_CHAIN_ID => BASE_MAINNET_NETWORK_NAME.to_string(),
        _ => format!("chain-{chain_id}"),
    }
}
