use crate::domain::payment::PaymentDetails;
use crate::error::{PaymentError, Result};
use serde::Deserialize;
use std::io::Read;

/// Operation requested by one CSV row.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    AuthOnly,
    AuthCapture,
    PriorAuthCapture,
    Void,
    Credit,
    VoidOrCredit,
}

/// One row of a batch input file. Empty cells and missing trailing columns
/// are unset.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct TransactionRequest {
    pub r#type: RequestType,
    #[serde(default)]
    pub transaction: Option<String>,
    #[serde(default)]
    pub card_num: Option<String>,
    #[serde(default)]
    pub exp_date: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub card_code: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub invoice_number: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl TransactionRequest {
    /// Copies the row's fields into `details`, leaving its flags alone.
    pub fn apply_to(self, details: &mut PaymentDetails) {
        details.transaction = self.transaction;
        details.card_num = self.card_num;
        details.exp_date = self.exp_date;
        details.amount = self.amount;
        details.card_code = self.card_code;
        details.address = self.address;
        details.zip = self.zip;
        details.invoice_number = self.invoice_number;
        details.first_name = self.first_name;
        details.last_name = self.last_name;
        details.customer_id = self.customer_id;
        details.description = self.description;
    }
}

/// Batch input: one gateway request per CSV row, keyed by the header.
///
/// Cells are trimmed and rows may stop after the last column they need, so a
/// `void` row can be just `void,123123`.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Yields requests in row order. A bad row is an `Err` and does not end the batch.
    pub fn requests(self) -> impl Iterator<Item = Result<TransactionRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PaymentError::from))
    }
}
