use crate::domain::field::Field;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    AuthOnly,
    AuthCapture,
    PriorAuthCapture,
    Void,
    Credit,
}

impl TransactionKind {
    /// The `x_type` value sent to the gateway.
    pub fn wire_name(&self) -> &'static str {
        match self {
            TransactionKind::AuthOnly => "AUTH_ONLY",
            TransactionKind::AuthCapture => "AUTH_CAPTURE",
            TransactionKind::PriorAuthCapture => "PRIOR_AUTH_CAPTURE",
            TransactionKind::Void => "VOID",
            TransactionKind::Credit => "CREDIT",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::AuthOnly => "Auth Only",
            TransactionKind::AuthCapture => "Auth Capture",
            TransactionKind::PriorAuthCapture => "Prior Auth Capture",
            TransactionKind::Void => "Void",
            TransactionKind::Credit => "Credit",
        };
        f.write_str(label)
    }
}

/// Address data sent when address verification is required.
#[derive(Debug, PartialEq, Clone)]
pub struct Avs {
    pub address: String,
    pub zip: String,
}

/// Validated fields of an authorization, with or without capture.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Authorization {
    pub card_num: String,
    pub exp_date: String,
    pub amount: String,
    pub avs: Option<Avs>,
    pub card_code: Option<String>,
    pub invoice_number: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub customer_id: Option<String>,
    pub description: Option<String>,
}

/// A transaction ready for submission.
///
/// Each variant carries only the fields its kind sends. Values have already
/// passed validation when one of these exists.
#[derive(Debug, PartialEq, Clone)]
pub enum Transaction {
    AuthOnly(Authorization),
    AuthCapture(Authorization),
    PriorAuthCapture {
        trans_id: String,
        /// `None` leaves the authorized amount untouched.
        amount: Option<String>,
    },
    Void {
        trans_id: String,
    },
    Credit {
        trans_id: String,
        card_num: String,
        amount: String,
    },
}

impl Transaction {
    pub fn kind(&self) -> TransactionKind {
        match self {
            Transaction::AuthOnly(_) => TransactionKind::AuthOnly,
            Transaction::AuthCapture(_) => TransactionKind::AuthCapture,
            Transaction::PriorAuthCapture { .. } => TransactionKind::PriorAuthCapture,
            Transaction::Void { .. } => TransactionKind::Void,
            Transaction::Credit { .. } => TransactionKind::Credit,
        }
    }

    /// Flattens the transaction into the ordered form fields the gateway reads,
    /// starting with `x_type`. Unset optional fields produce no entry at all.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("x_type", self.kind().wire_name().to_string())];
        match self {
            Transaction::AuthOnly(auth) | Transaction::AuthCapture(auth) => {
                auth.push_fields(&mut fields);
            }
            Transaction::PriorAuthCapture { trans_id, amount } => {
                fields.push((Field::TransactionId.wire_name(), trans_id.clone()));
                if let Some(amount) = amount {
                    fields.push((Field::Amount.wire_name(), amount.clone()));
                }
            }
            Transaction::Void { trans_id } => {
                fields.push((Field::TransactionId.wire_name(), trans_id.clone()));
            }
            Transaction::Credit {
                trans_id,
                card_num,
                amount,
            } => {
                fields.push((Field::TransactionId.wire_name(), trans_id.clone()));
                fields.push((Field::CardNum.wire_name(), card_num.clone()));
                fields.push((Field::Amount.wire_name(), amount.clone()));
            }
        }
        fields
    }
}

impl Authorization {
    fn push_fields(&self, fields: &mut Vec<(&'static str, String)>) {
        fields.push((Field::CardNum.wire_name(), self.card_num.clone()));
        fields.push((Field::ExpDate.wire_name(), self.exp_date.clone()));
        fields.push((Field::Amount.wire_name(), self.amount.clone()));

        if let Some(avs) = &self.avs {
            fields.push((Field::Address.wire_name(), avs.address.clone()));
            fields.push((Field::Zip.wire_name(), avs.zip.clone()));
        }
        if let Some(card_code) = &self.card_code {
            fields.push((Field::CardCode.wire_name(), card_code.clone()));
        }

        let metadata = [
            ("x_invoice_num", &self.invoice_number),
            ("x_first_name", &self.first_name),
            ("x_last_name", &self.last_name),
            ("x_customer_id", &self.customer_id),
            ("x_description", &self.description),
        ];
        for (name, value) in metadata {
            if let Some(value) = value {
                fields.push((name, value.clone()));
            }
        }
    }
}
