//! # Satchel Security
//!
//! JWT token issuance/verification and Argon2 password hashing.

pub mod jwt;
pub mod password;

pub use jwt::{Claims, TokenProvider};
pub use password::PasswordHasher;
