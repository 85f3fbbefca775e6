//! Scripts for deploying the Base Camp contracts and recording their addresses.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod cli;
pub mod commands;
pub mod constants;
pub mod deployer;
pub mod deployments;
pub mod errors;
pub mod frontend;
mod solidity;
pub mod types;
pub mod utils;
