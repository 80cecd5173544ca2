/*
This module is home to everything related to the registration authority
that issues this device's cloud identity.

It provides the client for the two-phase register/poll provisioning
exchange, the retry policy governing the status poll loop, and the
persistence of the issued credential pair.
*/

mod client;
mod retry;

pub use client::{
    PollError, ProvisionError, ProvisionResult, Provisioner, RegistrationError,
    CERTIFICATE_FILE, PRIVATE_KEY_FILE,
};
pub use retry::{FixedInterval, RetryPolicy};
