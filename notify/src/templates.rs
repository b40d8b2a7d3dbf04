use crate::mailer::Email;
use rowstore::Claim;

/// Internal staff notice sent after every successful row append.
pub fn staff_notice(claim: &Claim, staff_mailbox: &str, row: Option<u64>) -> Email {
    let row_line = match row {
        Some(row) => format!("Sheet row: {row}\n"),
        None => String::new(),
    };

    Email {
        to: staff_mailbox.to_string(),
        subject: format!(
            "New Warranty Claim – Order {}",
            claim.original_order_number
        ),
        body: format!(
            "New warranty claim submitted\n\
             \n\
             Customer: {}\n\
             Email: {}\n\
             Phone: {}\n\
             \n\
             Source: {}\n\
             Order #: {}\n\
             Warranty #: {}\n\
             Product: {}\n\
             UPC: {}\n\
             \n\
             Issue:\n\
             {}\n\
             \n\
             Notes:\n\
             {}\n\
             {}",
            claim.customer_name,
            claim.customer_email,
            claim.customer_phone,
            claim.source,
            claim.original_order_number,
            claim.original_warranty_number,
            claim.product,
            claim.upc,
            claim.issue_description,
            claim.notes,
            row_line,
        ),
    }
}

/// Receipt sent to the customer right after intake.
pub fn customer_confirmation(claim: &Claim) -> Email {
    Email {
        to: claim.customer_email.clone(),
        subject: format!(
            "We received your warranty claim – Order {}",
            claim.original_order_number
        ),
        body: format!(
            "Hi {},\n\
             \n\
             We received your warranty claim for order {} and will be in\n\
             touch once it has been reviewed.\n\
             \n\
             Product: {}\n\
             Issue reported:\n\
             {}\n\
             \n\
             ACS Warranty Team\n",
            claim.customer_name,
            claim.original_order_number,
            claim.product,
            claim.issue_description,
        ),
    }
}

/// Sent when staff marks a claim as shipped.
pub fn shipped_notice(claim: &Claim) -> Email {
    let tracking_line = if claim.replacement_tracking.is_empty() {
        String::new()
    } else {
        format!("Tracking number: {}\n", claim.replacement_tracking)
    };

    Email {
        to: claim.customer_email.clone(),
        subject: format!(
            "Your warranty replacement has shipped – Order {}",
            claim.original_order_number
        ),
        body: format!(
            "Hi {},\n\
             \n\
             Your warranty replacement for order {} is on its way.\n\
             {}\n\
             ACS Warranty Team\n",
            claim.customer_name, claim.original_order_number, tracking_line,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_render_as_empty_not_placeholders() {
        let claim = Claim {
            customer_email: "a@b.com".into(),
            ..Default::default()
        };

        for email in [
            staff_notice(&claim, "staff@example.com", None),
            customer_confirmation(&claim),
            shipped_notice(&claim),
        ] {
            assert!(!email.body.contains("undefined"));
            assert!(!email.body.contains("null"));
            assert!(!email.subject.contains("undefined"));
        }
    }

    #[test]
    fn staff_notice_carries_claim_details_and_row() {
        let claim = Claim {
            customer_name: "Pat Doe".into(),
            customer_email: "pat@example.com".into(),
            original_order_number: "335508".into(),
            product: "LED tail light".into(),
            issue_description: "flickers when braking".into(),
            ..Default::default()
        };

        let email = staff_notice(&claim, "staff@example.com", Some(12));
        assert_eq!(email.to, "staff@example.com");
        assert!(email.subject.contains("335508"));
        assert!(email.body.contains("Pat Doe"));
        assert!(email.body.contains("flickers when braking"));
        assert!(email.body.contains("Sheet row: 12"));
    }

    #[test]
    fn shipped_notice_names_tracking_only_when_present() {
        let mut claim = Claim {
            customer_email: "pat@example.com".into(),
            original_order_number: "ORD1".into(),
            ..Default::default()
        };

        assert!(!shipped_notice(&claim).body.contains("Tracking number"));

        claim.replacement_tracking = "1Z999".into();
        assert!(shipped_notice(&claim).body.contains("Tracking number: 1Z999"));
    }

    #[test]
    fn templates_are_deterministic() {
        let claim = Claim {
            customer_email: "a@b.com".into(),
            original_order_number: "ORD1".into(),
            ..Default::default()
        };
        assert_eq!(customer_confirmation(&claim), customer_confirmation(&claim));
    }
}
