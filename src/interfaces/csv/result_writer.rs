use crate::domain::response::GatewayResponse;
use crate::domain::transaction::TransactionKind;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    /// Approved by the gateway.
    Processed,
    /// Submitted but not approved.
    Declined,
    /// Built successfully; not submitted.
    Validated,
}

/// One output row per handled request.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct TransactionResult {
    pub row: usize,
    pub r#type: TransactionKind,
    pub status: ResultStatus,
    pub response_code: Option<String>,
    pub reason_code: Option<String>,
    pub reason_text: Option<String>,
    pub approval_code: Option<String>,
    pub avs_response: Option<String>,
    pub trans_id: Option<String>,
    pub ccv_response: Option<String>,
}

impl TransactionResult {
    pub fn validated(row: usize, kind: TransactionKind) -> Self {
        Self {
            row,
            r#type: kind,
            status: ResultStatus::Validated,
            response_code: None,
            reason_code: None,
            reason_text: None,
            approval_code: None,
            avs_response: None,
            trans_id: None,
            ccv_response: None,
        }
    }

    pub fn submitted(row: usize, kind: TransactionKind, response: GatewayResponse) -> Self {
        let status = if response.is_processed() {
            ResultStatus::Processed
        } else {
            ResultStatus::Declined
        };
        Self {
            row,
            r#type: kind,
            status,
            response_code: Some(response.response_code),
            reason_code: Some(response.reason_code),
            reason_text: Some(response.reason_text),
            approval_code: Some(response.approval_code),
            avs_response: Some(response.avs_response),
            trans_id: Some(response.trans_id),
            ccv_response: response.ccv_response,
        }
    }
}

/// Writes batch results as CSV.
pub struct ResultWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ResultWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_result(&mut self, result: &TransactionResult) -> Result<()> {
        self.writer.serialize(result)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
