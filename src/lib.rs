//! Pricing Engine for a martial-arts school
//!
//! This crate encodes the school's pricing policy: per-package session and
//! monthly fees, late payment fees, debt collection interest, late
//! cancellation fees, and the validation rules the booking flow applies to a
//! proposed payment. Every amount is an integer number of minor currency
//! units, and every operation is a pure function of its arguments and the
//! loaded configuration.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;

pub use engine::PricingEngine;
