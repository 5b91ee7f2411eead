use std::fmt;

/// An unordered pair of spouses: `(A, B)` and `(B, A)` are the same couple.
///
/// The two identifiers are normalized into sorted order at construction, so
/// derived equality and hashing already treat the pair as unordered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Couple {
    left: String,
    right: String,
}

impl Couple {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            Self { left: a, right: b }
        } else {
            Self { left: b, right: a }
        }
    }

    pub fn left(&self) -> &str {
        &self.left
    }

    pub fn right(&self) -> &str {
        &self.right
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.left == identifier || self.right == identifier
    }

    /// Given one member of the couple, returns the other; `None` if the
    /// identifier is not part of the couple.
    pub fn other(&self, identifier: &str) -> Option<&str> {
        if identifier == self.left {
            Some(&self.right)
        } else if identifier == self.right {
            Some(&self.left)
        } else {
            None
        }
    }
}

impl fmt::Display for Couple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.left, self.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_order_independent_identity() {
        let ab = Couple::new("JD1993", "JJ1996");
        let ba = Couple::new("JJ1996", "JD1993");
        assert_eq!(ab, ba);

        let mut couples = HashSet::new();
        couples.insert(ab);
        assert!(!couples.insert(ba));
        assert_eq!(couples.len(), 1);
    }

    #[test]
    fn test_other() {
        let couple = Couple::new("JJ1996", "JD1993");
        assert_eq!(couple.other("JD1993"), Some("JJ1996"));
        assert_eq!(couple.other("JJ1996"), Some("JD1993"));
        assert_eq!(couple.other("XX0000"), None);
    }

    #[test]
    fn test_contains_and_display() {
        let couple = Couple::new("JJ1996", "JD1993");
        assert!(couple.contains("JD1993"));
        assert!(!couple.contains("XX0000"));
        // Display is the sorted pair
        assert_eq!(couple.to_string(), "JD1993 JJ1996");
    }
}
