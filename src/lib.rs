//! Provision a device identity from a cellular-network-authenticated
//! bootstrap context.
//!
//! The crate exchanges a single API call --the cellular bearer is the
//! credential, not a token in the request-- for a leaf X.509 certificate
//! and private key issued by a cloud IoT identity service, persists the
//! pair under a target directory and hands a [`provision::ProvisionResult`]
//! to whatever opens the mutually authenticated session afterwards.

pub mod cli;
pub mod config;
pub mod provision;
pub mod transport;
pub mod util;
