//! Content-based hashing for case IDs.

use sha2::{Digest, Sha256};
use tk_sizing::DesignRequest;

pub fn compute_case_id(request: &DesignRequest, engine_version: &str) -> String {
    let mut hasher = Sha256::new();

    // Plain struct of f64/u32/String fields: serialization cannot fail.
    let request_json = serde_json::to_string(request).unwrap_or_default();
    debug_assert!(!request_json.is_empty());
    hasher.update(request_json.as_bytes());

    hasher.update(engine_version.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(rate: f64) -> DesignRequest {
        DesignRequest::builder(rate, 7.0).build().unwrap()
    }

    #[test]
    fn hash_stability() {
        let hash1 = compute_case_id(&request(100.0), "v1");
        let hash2 = compute_case_id(&request(100.0), "v1");
        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn hash_covers_request_content() {
        let mut empty = Sha256::new();
        empty.update("v1".as_bytes());
        let empty_id = format!("{:x}", empty.finalize());
        assert_ne!(compute_case_id(&request(100.0), "v1"), empty_id);
    }

    #[test]
    fn hash_differs_for_different_inputs() {
        assert_ne!(
            compute_case_id(&request(100.0), "v1"),
            compute_case_id(&request(101.0), "v1")
        );
        assert_ne!(
            compute_case_id(&request(100.0), "v1"),
            compute_case_id(&request(100.0), "v2")
        );
    }
}
