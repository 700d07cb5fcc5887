use serde::{Deserialize, Serialize};

use crate::error::{ViewError, ViewResult};
use crate::render::Renderer;

use super::{ViewEngine, ViewSnapshot};

pub const VIEW_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ViewSnapshot,
}

impl ViewSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ViewResult<String> {
        let payload = ViewSnapshotJsonContractV1 {
            schema_version: VIEW_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ViewError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned v1 envelope.
    ///
    /// The parsed snapshot must describe a view the engine could have
    /// produced; see [`validate_consistency`](Self::validate_consistency).
    pub fn from_json_compat_str(input: &str) -> ViewResult<Self> {
        let snapshot = match serde_json::from_str::<ViewSnapshot>(input) {
            Ok(snapshot) => snapshot,
            Err(_) => {
                let payload: ViewSnapshotJsonContractV1 =
                    serde_json::from_str(input).map_err(|e| {
                        ViewError::InvalidData(format!(
                            "failed to parse snapshot json payload: {e}"
                        ))
                    })?;
                if payload.schema_version != VIEW_SNAPSHOT_JSON_SCHEMA_V1 {
                    return Err(ViewError::InvalidData(format!(
                        "unsupported snapshot schema version: {}",
                        payload.schema_version
                    )));
                }
                payload.snapshot
            }
        };
        snapshot.validate_consistency()?;
        Ok(snapshot)
    }

    /// Checks the invariants linking the state to its derived fields.
    ///
    /// Visible timestamps and the focused record lie inside the state window,
    /// and the detail time axis spans exactly that window.
    pub fn validate_consistency(&self) -> ViewResult<()> {
        let window = self.state.window();
        if self
            .visible_timestamps
            .windows(2)
            .any(|pair| pair[0] >= pair[1])
        {
            return Err(ViewError::InvalidData(
                "snapshot visible timestamps must be strictly ascending".to_owned(),
            ));
        }
        if let Some(outside) = self
            .visible_timestamps
            .iter()
            .find(|timestamp| !window.contains(**timestamp))
        {
            return Err(ViewError::InvalidData(format!(
                "snapshot visible record at {outside} lies outside the window"
            )));
        }
        if self.detail.time.window() != window {
            return Err(ViewError::InvalidData(
                "snapshot detail time axis does not span the state window".to_owned(),
            ));
        }
        if let Some(focused) = self.state.focused_timestamp() {
            if !window.contains(focused) {
                return Err(ViewError::InvalidData(format!(
                    "snapshot focused record at {focused} lies outside the window"
                )));
            }
        }
        if self.description != self.state.description() {
            return Err(ViewError::InvalidData(format!(
                "snapshot description `{}` does not match its label",
                self.description
            )));
        }
        Ok(())
    }
}

impl<R: Renderer> ViewEngine<R> {
    pub fn snapshot_json_contract_v1_pretty(&self) -> ViewResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
