//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Random keys and the base64url codec
//! - `Authorization: Bearer` header parsing

pub mod bearer;
pub mod crypto;
