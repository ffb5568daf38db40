//! # folderhub-auth
//!
//! Verification of the bearer tokens that identify the calling user.
//! Token issuance belongs to the surrounding application; the encoder
//! exists for tooling and tests that need to mint compatible tokens.

pub mod jwt;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
