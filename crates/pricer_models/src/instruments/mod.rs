//! Option contract definitions.
//!
//! This module provides:
//! - [`OptionSide`]: call or put
//! - [`OptionContract`]: validated, immutable European option contract
//! - [`ContractTerms`]: the contract without a volatility
//! - [`ContractError`]: validation failures

pub mod contract;
pub mod error;
pub mod side;

pub use contract::{ContractTerms, OptionContract};
pub use error::{ContractError, ParseEnumError};
pub use side::OptionSide;
