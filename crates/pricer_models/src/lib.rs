//! # Pricer Models (L2: Business Logic)
//!
//! Option contracts and closed-form valuation models.
//!
//! This crate provides:
//! - Contract definitions ([`instruments::OptionContract`],
//!   [`instruments::ContractTerms`], [`instruments::OptionSide`])
//! - Pricing primitives: normal CDF/PDF and the `d1`/`d2` terms
//! - Black-Scholes, Black-76 and Garman-Kohlhagen formulas
//! - The [`models::ValuationModel`] trait with one unit struct per
//!   underlying, and [`models::ModelKind`] for runtime selection
//!
//! ## Design Principles
//!
//! - **Validated construction**: contracts reject NaN, Inf and non-positive
//!   inputs up front, so formulas never divide by zero
//! - **Immutable contracts**: bumped copies are built with `with_*` methods
//! - **Static dispatch**: models are `Copy` unit structs, no trait objects

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod models;
