//! Concrete named-entity types
//!
//! Plain data types that each independently satisfy the `Named`
//! capability: a User carrying identity plus a nested address, and a
//! Professor carrying identity only. Neither knows about the dispatcher;
//! conformance is the whole contract.

use crate::traits::Named;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Street address nested inside a user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street number
    pub number: String,
    /// Street name
    pub street: String,
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number, self.street)
    }
}

/// A user: identity plus a nested address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Numeric identity
    pub id: u64,
    /// Display name
    pub name: String,
    /// Home address
    pub address: Address,
}

/// A professor: identity only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Professor {
    /// Numeric identity
    pub id: u64,
    /// Display name
    pub name: String,
}

impl Named for User {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Professor {
    fn name(&self) -> &str {
        &self.name
    }
}
