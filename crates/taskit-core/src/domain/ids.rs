//! 識別子

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

/// Client-side id of one `execute` call, used to correlate log lines.
///
/// Unrelated to the execution id the remote backend returns, which is an
/// opaque string.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InvocationId(Ulid);

impl InvocationId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    pub fn as_ulid(&self) -> Ulid {
        self.0
    }
}

impl Default for InvocationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InvocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "inv-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_has_prefix() {
        let id = InvocationId::from_ulid(Ulid::nil());
        assert_eq!(id.to_string(), format!("inv-{}", Ulid::nil()));
    }

    #[test]
    fn ids_sort_by_creation() {
        let a = InvocationId::from_ulid(Ulid::from_parts(1, 0));
        let b = InvocationId::from_ulid(Ulid::from_parts(2, 0));
        assert!(a < b);
    }
}
