//! Property owner records

use serde::{Deserialize, Serialize};

/// A property owner the agency remits transfers to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Envelope for the owner listing endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct OwnersResponse {
    pub data: Vec<Owner>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_owners() {
        let json = r#"{
            "data": [
                {"id": 4, "name": "Carlos Souza", "created_at": "2023-01-10T08:00:00", "updated_at": null}
            ],
            "error": null
        }"#;

        let response: OwnersResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data[0].id, 4);
        assert_eq!(response.data[0].name, "Carlos Souza");
        assert!(response.data[0].updated_at.is_none());
    }
}
