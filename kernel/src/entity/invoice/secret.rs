use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Token handed to the client to complete a payment with the processor.
#[derive(Debug, Clone, PartialEq, Eq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct ClientSecret(String);

impl ClientSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }
}
