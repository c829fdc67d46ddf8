use serde::{Deserialize, Serialize};
use std::fmt;

/// Short hex id for log correlation.
pub fn new_correlation_id() -> String {
    let uuid = uuid::Uuid::new_v4();
    let bytes = uuid.as_bytes();
    format!(
        "{:02x}{:02x}{:02x}{:02x}",
        bytes[0], bytes[1], bytes[2], bytes[3]
    )
}

/// Identifies one in-flight backend request so its completion can be
/// matched back to the state that issued it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(String);

impl RequestId {
    pub fn new() -> Self {
        Self(new_correlation_id())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "req-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correlation_id_is_short_hex() {
        let cid = new_correlation_id();
        assert_eq!(cid.len(), 8);
        assert!(cid.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn request_id_display_is_prefixed() {
        let rid = RequestId::new();
        assert_eq!(rid.to_string(), format!("req-{}", rid.as_str()));
    }

    #[test]
    fn request_ids_differ() {
        assert_ne!(RequestId::new(), RequestId::new());
    }

    #[test]
    fn request_id_serialization() {
        let rid = RequestId::new();
        let json = serde_json::to_string(&rid).unwrap();
        let deserialized: RequestId = serde_json::from_str(&json).unwrap();
        assert_eq!(rid, deserialized);
    }
}
