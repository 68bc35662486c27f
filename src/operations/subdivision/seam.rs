use std::collections::{BTreeMap, HashMap};

use tracing::trace;

use crate::error::{Result, TopologyError};

/// Where a point near a base edge sits, in coordinates both faces sharing
/// the edge agree on: the weight on the edge corner with the smaller name,
/// and the weight on the corner opposite the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(super) struct SeamPosition {
    pub along: i64,
    pub depth: i64,
}

/// Nodes the first face to reach a base edge created just inside it,
/// ordered along the edge.
#[derive(Debug, Clone, Default)]
pub(super) struct SeamRecord {
    nodes: BTreeMap<SeamPosition, String>,
}

impl SeamRecord {
    pub(super) fn insert(&mut self, position: SeamPosition, key: String) {
        self.nodes.insert(position, key);
    }

    pub(super) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// The node the neighbouring face recorded at `position`.
    pub(super) fn lookup(&self, position: SeamPosition) -> Result<&str> {
        self.nodes.get(&position).map(String::as_str).ok_or_else(|| {
            TopologyError::SeamMismatch(format!(
                "no node recorded at along={} depth={}",
                position.along, position.depth
            ))
            .into()
        })
    }
}

/// Seam records of one subdivision pass, keyed by base edge key.
///
/// The first face to finish along a base edge records its side. The second
/// face finds the record and closes the small triangles spanning both.
#[derive(Debug, Default)]
pub(super) struct InterFaceConnections {
    records: HashMap<String, SeamRecord>,
}

impl InterFaceConnections {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn get(&self, edge_key: &str) -> Option<&SeamRecord> {
        self.records.get(edge_key)
    }

    /// Stores `record` unless the edge already has one.
    pub(super) fn register(&mut self, edge_key: String, record: SeamRecord) {
        if self.records.contains_key(&edge_key) {
            return;
        }
        trace!(edge = %edge_key, nodes = record.len(), "recorded seam");
        self.records.insert(edge_key, record);
    }

    pub(super) fn len(&self) -> usize {
        self.records.len()
    }
}
