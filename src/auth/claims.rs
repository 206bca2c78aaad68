use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims as issued by the identity provider.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub handle: String,
    pub exp: usize,
    pub iat: usize,
    pub iss: String,
    pub aud: String,
}
