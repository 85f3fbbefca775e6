//! Constants used in the deploy scripts

/// The default RPC URL, a local Hardhat / Anvil node
pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";

/// The default private key, the first default account in a Hardhat / Anvil node
pub const DEFAULT_PKEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// The default path of the deployments file
pub const DEFAULT_DEPLOYMENTS_PATH: &str = "deployments.json";

/// The default path of the frontend contracts config
pub const DEFAULT_FRONTEND_CONFIG_PATH: &str = "../frontend/lib/contracts.ts";

/// The default directory containing compiled contract artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts/contracts";

/// The metadata URI the badges contract is deployed with when
/// `BADGE_METADATA_URI` is unset
pub const DEFAULT_BADGE_METADATA_URI: &str = "ipfs://basecamp-badges/{id}.json";

/// The extension of a Solidity source directory in the artifacts tree
pub const SOL_EXTENSION: &str = "sol";

/// The extension of a compiled contract artifact
pub const ARTIFACT_EXTENSION: &str = "json";

/// The chain ID of a local Ganache-style devnet
pub const LOCAL_CHAIN_ID: u64 = 1337;

/// The chain ID of a local Hardhat / Anvil devnet
pub const HARDHAT_CHAIN_ID: u64 = 31337;

/// The chain ID of Base Sepolia
pub const BASE_SEPOLIA_CHAIN_ID: u64 = 84532;

/// The chain ID of Base mainnet
pub const BASE_MAINNET_CHAIN_ID: u64 = 8453;

/// The network name recorded for local devnets
pub const LOCAL_NETWORK_NAME: &str = "localhost";

/// The network name recorded for Base Sepolia
pub const BASE_SEPOLIA_NETWORK_NAME: &str = "baseSepolia";

/// The network name recorded for Base mainnet
pub const BASE_MAINNET_NETWORK_NAME: &str = "base";

/// The frontend constant holding the `WalletAuth` address, less its network suffix
pub const WALLET_AUTH_CONSTANT_PREFIX: &str = "WALLET_AUTH_CONTRACT_ADDRESS";

/// The frontend constant holding the `BaseCampBadges` address, less its network suffix
pub const BASE_CAMP_BADGES_CONSTANT_PREFIX: &str = "BASE_CAMP_BADGES_CONTRACT_ADDRESS";
