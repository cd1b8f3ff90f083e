//! Bearer token encoding, decoding, and claims.

pub mod claims;
pub mod issuer;

pub use claims::Claims;
pub use issuer::TokenIssuer;
