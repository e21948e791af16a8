//! Guest Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Guest entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub id: i64,
    pub name: String,
    pub phone: String,
}

impl Guest {
    pub fn new(id: i64, name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            phone: phone.into(),
        }
    }

    /// Exact, case-sensitive match on the (name, phone) lookup key
    pub fn matches(&self, name: &str, phone: &str) -> bool {
        self.name == name && self.phone == phone
    }
}

impl fmt::Display for Guest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Guest ID: {}, Name: {}, Phone: {}",
            self.id, self.name, self.phone
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest_matches_is_case_sensitive() {
        let guest = Guest::new(1, "Alice", "555-1111");
        assert!(guest.matches("Alice", "555-1111"));
        assert!(!guest.matches("alice", "555-1111"));
        assert!(!guest.matches("Alice", "555-1112"));
    }

    #[test]
    fn test_guest_display() {
        let guest = Guest::new(42, "Bob", "000");
        assert_eq!(guest.to_string(), "Guest ID: 42, Name: Bob, Phone: 000");
    }
}
