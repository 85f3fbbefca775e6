//! Definitions of Solidity constructors called during deployment

use alloy_sol_types::sol;

sol! {
    contract BaseCampBadges {
        constructor(string metadataUri);
    }
}
