//! Boundary to the external identity provider. Tokens are issued elsewhere;
//! this service only verifies them and consumes the authenticated identity.

mod claims;
pub(crate) mod extractors;

pub use extractors::AuthUser;
