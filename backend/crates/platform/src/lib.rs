//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256)
//! - Password hashing (Argon2id, zeroized plaintext)
//! - Cookie management

pub mod cookie;
pub mod crypto;
pub mod password;
