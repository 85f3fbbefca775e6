//! Patching of the contract address constants in the frontend config.
//!
//! The frontend keeps one constant per (contract, network), declared as
//! `export const <PREFIX>_<SUFFIX> = "<address>";`. Any deviation from that
//! exact form is not matched and the file is left alone.

use std::{
    fs,
    path::{Path, PathBuf},
};

use regex::{NoExpand, Regex};
use tracing::{info, warn};

use crate::{
    errors::ScriptError,
    types::{Contract, FrontendNetwork},
};

/// The frontend constant a deployment updates
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatchRule {
    /// The contract the constant holds the address of
    pub contract: Contract,
    /// The network the constant is used on
    pub network: FrontendNetwork,
}

impl PatchRule {
    /// Look up the rule for a contract deployed on the given chain.
    ///
    /// Fails with [`PatchOutcome::UnknownContract`] or
    /// [`PatchOutcome::UnknownChain`] when the frontend has no such constant.
    pub fn lookup(contract_name: &str, chain_id: u64) -> Result<Self, PatchOutcome> {
        let contract = Contract::from_name(contract_name).ok_or(PatchOutcome::UnknownContract)?;
        let network =
            FrontendNetwork::from_chain_id(chain_id).ok_or(PatchOutcome::UnknownChain)?;
        Ok(Self { contract, network })
    }

    /// The full name of the constant
    pub fn constant_name(&self) -> String {
        format!(
            "{}_{}",
            self.contract.constant_prefix(),
            self.network.constant_suffix()
        )
    }

    /// The pattern matching the constant's current assignment
    pub fn pattern(&self) -> Result<Regex, ScriptError> {
        let pattern = format!(
            r#"export const {} = ".*";"#,
            regex::escape(&self.constant_name())
        );
        Regex::new(&pattern).map_err(|e| ScriptError::PatternConstruction(e.to_string()))
    }

    /// The assignment that replaces the matched one
    pub fn replacement(&self, address: &str) -> String {
        format!(r#"export const {} = "{}";"#, self.constant_name(), address)
    }
}

/// The result of a patch attempt
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The named constant was rewritten
    Patched(String),
    /// The frontend config does not exist
    MissingFile,
    /// The contract is not tracked in the frontend config
    UnknownContract,
    /// The chain has no constant in the frontend config
    UnknownChain,
    /// The file holds no assignment of the named constant
    PlaceholderNotFound(String),
}

/// The frontend contracts config file
#[derive(Clone, Debug)]
pub struct FrontendPatcher {
    /// The path of the config file
    path: PathBuf,
}

impl FrontendPatcher {
    /// Create a patcher for the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the config file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Point the frontend constant for `contract_name` on `chain_id` at
    /// `address`.
    ///
    /// Unknown contracts and chains, a missing file, and a missing
    /// placeholder are all logged and reported through the outcome without
    /// touching the file. Only I/O failures on an existing file are errors.
    pub fn patch(
        &self,
        contract_name: &str,
        address: &str,
        chain_id: u64,
    ) -> Result<PatchOutcome, ScriptError> {
        if !self.path.exists() {
            warn!("frontend config not found at {}", self.path.display());
            return Ok(PatchOutcome::MissingFile);
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| ScriptError::ReadFrontendConfig(e.to_string()))?;

        let rule = match PatchRule::lookup(contract_name, chain_id) {
            Ok(rule) => rule,
            Err(outcome) => {
                if outcome == PatchOutcome::UnknownContract {
                    warn!(
                        "{} is not tracked in the frontend config, update {} manually",
                        contract_name,
                        self.path.display()
                    );
                } else {
                    warn!(
                        "no frontend constant for chain {}, set the {} address manually in {}",
                        chain_id,
                        contract_name,
                        self.path.display()
                    );
                }
                return Ok(outcome);
            }
        };

        let constant = rule.constant_name();
        let pattern = rule.pattern()?;
        if !pattern.is_match(&content) {
            warn!(
                "`{}` not found in {}, update it manually",
                constant,
                self.path.display()
            );
            return Ok(PatchOutcome::PlaceholderNotFound(constant));
        }

        let replacement = rule.replacement(address);
        let patched = pattern.replacen(&content, 1, NoExpand(&replacement));
        fs::write(&self.path, patched.as_bytes())
            .map_err(|e| ScriptError::WriteFrontendConfig(e.to_string()))?;

        info!("{} address updated to {} ({})", rule.network, address, constant);
        Ok(PatchOutcome::Patched(constant))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::{FrontendPatcher, PatchOutcome, PatchRule};

    const CONFIG: &str = r#"// Contract addresses per network
export const WALLET_AUTH_CONTRACT_ADDRESS_LOCAL = "0x0";
export const WALLET_AUTH_CONTRACT_ADDRESS_SEPOLIA = "0x0";
export const WALLET_AUTH_CONTRACT_ADDRESS_MAINNET = "0x0";

export const BASE_CAMP_BADGES_CONTRACT_ADDRESS_LOCAL = "";
export const BASE_CAMP_BADGES_CONTRACT_ADDRESS_SEPOLIA = "";
export const BASE_CAMP_BADGES_CONTRACT_ADDRESS_MAINNET = "";
"#;

    fn patcher_with(dir: &TempDir, contents: &str) -> FrontendPatcher {
        let path = dir.path().join("contracts.ts");
        fs::write(&path, contents).unwrap();
        FrontendPatcher::new(path)
    }

    #[test]
    fn test_patch_sepolia() {
        let dir = TempDir::new().unwrap();
        let patcher = patcher_with(&dir, CONFIG);

        let outcome = patcher.patch("WalletAuth", "0xABC", 84532).unwrap();
        assert_eq!(
            outcome,
            PatchOutcome::Patched("WALLET_AUTH_CONTRACT_ADDRESS_SEPOLIA".to_string())
        );

        let expected = CONFIG.replace(
            r#"WALLET_AUTH_CONTRACT_ADDRESS_SEPOLIA = "0x0";"#,
            r#"WALLET_AUTH_CONTRACT_ADDRESS_SEPOLIA = "0xABC";"#,
        );
        assert_eq!(fs::read_to_string(patcher.path()).unwrap(), expected);
    }

    #[test]
    fn test_patch_local_chains() {
        let dir = TempDir::new().unwrap();
        let patcher = patcher_with(&dir, CONFIG);

        patcher.patch("BaseCampBadges", "0x1", 1337).unwrap();
        let contents = fs::read_to_string(patcher.path()).unwrap();
        assert!(contents.contains(r#"export const BASE_CAMP_BADGES_CONTRACT_ADDRESS_LOCAL = "0x1";"#));

        patcher.patch("BaseCampBadges", "0x2", 31337).unwrap();
        let contents = fs::read_to_string(patcher.path()).unwrap();
        assert!(contents.contains(r#"export const BASE_CAMP_BADGES_CONTRACT_ADDRESS_LOCAL = "0x2";"#));
        assert!(contents.contains(r#"export const BASE_CAMP_BADGES_CONTRACT_ADDRESS_MAINNET = "";"#));
    }

    #[test]
    fn test_patch_mainnet() {
        let dir = TempDir::new().unwrap();
        let patcher = patcher_with(&dir, CONFIG);

        patcher.patch("BaseCampBadges", "0xDEF", 8453).unwrap();
        let contents = fs::read_to_string(patcher.path()).unwrap();
        assert!(contents.contains(r#"export const BASE_CAMP_BADGES_CONTRACT_ADDRESS_MAINNET = "0xDEF";"#));
        assert!(contents.contains(r#"export const WALLET_AUTH_CONTRACT_ADDRESS_MAINNET = "0x0";"#));
    }

    #[test]
    fn test_unknown_chain_leaves_file() {
        let dir = TempDir::new().unwrap();
        let patcher = patcher_with(&dir, CONFIG);

        let outcome = patcher.patch("BaseCampBadges", "0xDEF", 99999).unwrap();
        assert_eq!(outcome, PatchOutcome::UnknownChain);
        assert_eq!(fs::read_to_string(patcher.path()).unwrap(), CONFIG);
    }

    #[test]
    fn test_unknown_contract_leaves_file() {
        let dir = TempDir::new().unwrap();
        let patcher = patcher_with(&dir, CONFIG);

        let outcome = patcher.patch("Treasury", "0xDEF", 8453).unwrap();
        assert_eq!(outcome, PatchOutcome::UnknownContract);
        assert_eq!(fs::read_to_string(patcher.path()).unwrap(), CONFIG);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let patcher = FrontendPatcher::new(dir.path().join("missing.ts"));

        let outcome = patcher.patch("WalletAuth", "0xABC", 84532).unwrap();
        assert_eq!(outcome, PatchOutcome::MissingFile);
        assert!(!patcher.path().exists());
    }

    #[test]
    fn test_reformatted_constant_not_matched() {
        let dir = TempDir::new().unwrap();
        let config = "export const WALLET_AUTH_CONTRACT_ADDRESS_SEPOLIA = '0x0';\n";
        let patcher = patcher_with(&dir, config);

        let outcome = patcher.patch("WalletAuth", "0xABC", 84532).unwrap();
        assert_eq!(
            outcome,
            PatchOutcome::PlaceholderNotFound("WALLET_AUTH_CONTRACT_ADDRESS_SEPOLIA".to_string())
        );
        assert_eq!(fs::read_to_string(patcher.path()).unwrap(), config);
    }

    #[test]
    fn test_only_first_occurrence_patched() {
        let dir = TempDir::new().unwrap();
        let config = concat!(
            "export const WALLET_AUTH_CONTRACT_ADDRESS_LOCAL = \"0x0\";\n",
            "export const WALLET_AUTH_CONTRACT_ADDRESS_LOCAL = \"0x0\";\n",
        );
        let patcher = patcher_with(&dir, config);

        patcher.patch("WalletAuth", "0x1", 31337).unwrap();
        assert_eq!(
            fs::read_to_string(patcher.path()).unwrap(),
            concat!(
                "export const WALLET_AUTH_CONTRACT_ADDRESS_LOCAL = \"0x1\";\n",
                "export const WALLET_AUTH_CONTRACT_ADDRESS_LOCAL = \"0x0\";\n",
            )
        );
    }

    #[test]
    fn test_rule_lookup() {
        let rule = PatchRule::lookup("BaseCampBadges", 84532).unwrap();
        assert_eq!(rule.constant_name(), "BASE_CAMP_BADGES_CONTRACT_ADDRESS_SEPOLIA");

        assert_eq!(
            PatchRule::lookup("Treasury", 84532),
            Err(PatchOutcome::UnknownContract)
        );
        assert_eq!(
            PatchRule::lookup("WalletAuth", 99999),
            Err(PatchOutcome::UnknownChain)
        );
        // An unknown contract is reported ahead of an unknown chain
        assert_eq!(
            PatchRule::lookup("Treasury", 99999),
            Err(PatchOutcome::UnknownContract)
        );
    }

    #[test]
    fn test_replacement_is_literal() {
        let rule = PatchRule::lookup("WalletAuth", 8453).unwrap();
        let dir = TempDir::new().unwrap();
        let patcher = patcher_with(&dir, CONFIG);

        patcher.patch("WalletAuth", "$0", 8453).unwrap();
        let contents = fs::read_to_string(patcher.path()).unwrap();
        assert!(contents.contains(&rule.replacement("$0")));
    }
}
