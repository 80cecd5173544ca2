//! Interface to the cloud message transport.
//!
//! The provisioning client does not talk to the hub itself; it only
//! guarantees the shape and validity of what it hands over. Concrete
//! implementations of [`Transport`] wrap a vendor SDK and are out of this
//! crate's scope.

use std::path::PathBuf;

use thiserror::Error;

use crate::provision::ProvisionResult;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("provisioning result has an empty `{0}` field")]
    EmptyField(&'static str),

    #[error("credential file does not exist: {0}")]
    MissingCredentialFile(PathBuf),

    #[error("session error: {0}")]
    Session(String),
}

/// Validated handoff from provisioning to the message transport.
///
/// Construction checks the guarantees a transport implementation relies
/// on: non-empty hostname and device id, and credential files that exist
/// on disk.
#[derive(Clone, Debug)]
pub struct DeviceIdentity {
    pub hub_hostname: String,
    pub device_id: String,
    pub certificate_path: PathBuf,
    pub private_key_path: PathBuf,
}

impl TryFrom<ProvisionResult> for DeviceIdentity {
    type Error = TransportError;

    fn try_from(result: ProvisionResult) -> Result<Self, Self::Error> {
        if result.hub_hostname.is_empty() {
            return Err(TransportError::EmptyField("hub_hostname"));
        }
        if result.device_id.is_empty() {
            return Err(TransportError::EmptyField("device_id"));
        }
        for path in [&result.certificate_path, &result.private_key_path] {
            if !path.is_file() {
                return Err(TransportError::MissingCredentialFile(path.clone()));
            }
        }

        Ok(Self {
            hub_hostname: result.hub_hostname,
            device_id: result.device_id,
            certificate_path: result.certificate_path,
            private_key_path: result.private_key_path,
        })
    }
}

/// Connection factory for the cloud message service.
pub trait Transport {
    type Session: Session;

    fn open(&self, identity: &DeviceIdentity) -> Result<Self::Session, TransportError>;
}

/// An open, mutually authenticated session with the message service.
pub trait Session {
    fn send(&mut self, message: &[u8]) -> Result<(), TransportError>;
    fn close(self) -> Result<(), TransportError>;
}
