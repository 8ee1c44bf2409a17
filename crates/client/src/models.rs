//! Response envelopes specific to the portfolio API.

use serde::{Deserialize, Serialize};

use folio_core::portfolio::snapshot::PortfolioSnapshot;

/// Acknowledgement returned by every mutating endpoint:
/// `{"status": "success", "message": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationAck {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl MutationAck {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Envelope returned by `POST /snapshot` with the freshly captured
/// snapshot embedded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotCreated {
    pub status: String,
    pub snapshot: PortfolioSnapshot,
}
