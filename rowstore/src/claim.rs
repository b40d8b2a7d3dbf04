use serde::{Deserialize, Serialize};

/// One warranty submission and its processing state.
///
/// Every field is a plain string and defaults to empty on deserialization,
/// so a submission form may omit any of them. The row-store owns the claim's
/// identity; this service never assigns or caches row numbers.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Claim {
    pub source: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub original_order_number: String,
    pub original_order_date: String,
    pub original_warranty_number: String,
    pub previous_warranty_date: String,
    pub date_received: String,
    pub new_order_number: String,
    pub new_warranty_number: String,
    pub product: String,
    pub issue_description: String,
    pub upc: String,
    pub replacement_tracking: String,
    pub status: String,
    pub notes: String,
}

pub const STATUS_SUBMITTED: &str = "Submitted";
pub const STATUS_SHIPPED: &str = "Shipped";

/// Statuses accepted by the public status endpoint. Free-text staff values
/// go through the internal `update` action instead.
pub const ALLOWED_STATUSES: &[&str] =
    &["Submitted", "In Production", "Shipped", "Denied", "Closed"];

/// Spreadsheet columns written by internal staff tooling via `update`.
pub const COL_INTAKE_STAGE: &str = "Intake Stage";
pub const COL_PRODUCTION_STAGE: &str = "Production Stage";
pub const COL_QC_RESULT: &str = "QC Result";
pub const COL_QC_REASON_CODE: &str = "AE: QC Reason Code";
pub const COL_QC_FAILURE_NOTES: &str = "QC Failure Notes";

pub struct Column {
    pub header: &'static str,
    pub get: fn(&Claim) -> &str,
}

/// Ordered mapping from claim fields to sheet columns. The append payload is
/// built by walking this table, so the column order lives in exactly one
/// place.
pub const ROW_SCHEMA: &[Column] = &[
    Column { header: "Source", get: |c| &c.source },
    Column { header: "Customer Name", get: |c| &c.customer_name },
    Column { header: "Customer Email", get: |c| &c.customer_email },
    Column { header: "Customer Phone", get: |c| &c.customer_phone },
    Column { header: "Customer Address", get: |c| &c.customer_address },
    Column { header: "Original Order Number", get: |c| &c.original_order_number },
    Column { header: "Original Order Date", get: |c| &c.original_order_date },
    Column { header: "Original Warranty Number", get: |c| &c.original_warranty_number },
    Column { header: "Previous Warranty Date", get: |c| &c.previous_warranty_date },
    Column { header: "Date Received", get: |c| &c.date_received },
    Column { header: "New Order Number", get: |c| &c.new_order_number },
    Column { header: "New Warranty Number", get: |c| &c.new_warranty_number },
    Column { header: "Product", get: |c| &c.product },
    Column { header: "Issue Description", get: |c| &c.issue_description },
    Column { header: "UPC", get: |c| &c.upc },
    Column { header: "Replacement Tracking", get: |c| &c.replacement_tracking },
    Column { header: "Status", get: |c| &c.status },
    Column { header: "Notes", get: |c| &c.notes },
];

/// Flattens a claim into the ordered value list the row-store appends.
/// A claim arriving without a status is recorded as freshly submitted.
pub fn claim_row(claim: &Claim) -> Vec<String> {
    ROW_SCHEMA
        .iter()
        .map(|col| {
            let value = (col.get)(claim);
            if col.header == "Status" && value.is_empty() {
                STATUS_SUBMITTED.to_string()
            } else {
                value.to_string()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_become_empty_strings() {
        let claim: Claim = serde_json::from_str(
            r#"{"customerEmail": "a@b.com", "originalOrderNumber": "335508"}"#,
        )
        .unwrap();

        assert_eq!(claim.customer_email, "a@b.com");
        assert_eq!(claim.original_order_number, "335508");
        assert_eq!(claim.product, "");
        assert_eq!(claim.notes, "");

        let row = claim_row(&claim);
        assert_eq!(row.len(), ROW_SCHEMA.len());
        for value in &row {
            assert_ne!(value, "undefined");
            assert_ne!(value, "null");
        }
    }

    #[test]
    fn row_positions_follow_schema_order() {
        let claim = Claim {
            source: "web".into(),
            customer_email: "a@b.com".into(),
            original_order_number: "ORD1".into(),
            notes: "left blinker".into(),
            ..Default::default()
        };

        let row = claim_row(&claim);
        assert_eq!(row[0], "web");
        assert_eq!(row[2], "a@b.com");
        assert_eq!(row[5], "ORD1");
        assert_eq!(row[17], "left blinker");
        // Positions for omitted fields hold empty strings, not placeholders.
        assert_eq!(row[12], "");
    }

    #[test]
    fn empty_status_defaults_to_submitted() {
        let claim = Claim::default();
        let row = claim_row(&claim);
        assert_eq!(row[16], STATUS_SUBMITTED);

        let claim = Claim {
            status: "Shipped".into(),
            ..Default::default()
        };
        assert_eq!(claim_row(&claim)[16], "Shipped");
    }

    #[test]
    fn wire_names_are_camel_case() {
        let claim = Claim {
            original_order_number: "335508".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&claim).unwrap();
        assert_eq!(value["originalOrderNumber"], "335508");
        assert!(value.get("original_order_number").is_none());
    }
}
