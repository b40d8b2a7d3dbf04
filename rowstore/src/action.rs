use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One internal staff operation forwarded to the row-store's scripting
/// endpoint. The wire tag names are fixed by that endpoint.
///
/// The shared secret is never part of an `Action`; the client injects it
/// right before the request goes out, so it cannot round-trip through a
/// browser.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(tag = "action")]
pub enum Action {
    #[serde(rename = "lookup", rename_all = "camelCase")]
    Lookup { original_order_number: String },

    #[serde(rename = "update")]
    Update {
        row: u64,
        updates: BTreeMap<String, String>,
    },

    #[serde(rename = "assignInternalWarranty")]
    AssignInternalWarranty { row: u64 },

    #[serde(rename = "qcreasons")]
    QcReasons,

    #[serde(rename = "updateStatus", rename_all = "camelCase")]
    UpdateStatus {
        lookup_type: String,
        lookup_value: String,
        status: String,
        internal_notes: String,
    },
}
