//! Saved case data types.

use serde::{Deserialize, Serialize};
use tk_sizing::{DesignRequest, DesignResult};

pub type CaseId = String;

/// A design kept under a user-chosen name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedCase {
    pub name: String,
    /// Content hash of the request and engine version
    pub case_id: CaseId,
    /// RFC 3339, UTC
    pub timestamp: String,
    pub engine_version: String,
    pub request: DesignRequest,
    pub result: DesignResult,
}

impl SavedCase {
    pub fn new(
        name: impl Into<String>,
        request: DesignRequest,
        result: DesignResult,
        engine_version: &str,
    ) -> Self {
        Self {
            name: name.into(),
            case_id: crate::compute_case_id(&request, engine_version),
            timestamp: chrono::Utc::now().to_rfc3339(),
            engine_version: engine_version.to_string(),
            request,
            result,
        }
    }
}
