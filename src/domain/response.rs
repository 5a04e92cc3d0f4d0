use crate::error::{PaymentError, Result};
use serde::Serialize;

const RESPONSE_CODE: usize = 0;
const REASON_CODE: usize = 2;
const REASON_TEXT: usize = 3;
const APPROVAL_CODE: usize = 4;
const AVS_RESPONSE: usize = 5;
const TRANS_ID: usize = 6;
const CCV_RESPONSE: usize = 39;

/// Response code the gateway uses for an approved transaction.
pub const APPROVED: &str = "1";

/// Outcome of one submission, read from the gateway's delimited response line.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct GatewayResponse {
    pub response_code: String,
    pub reason_code: String,
    pub reason_text: String,
    pub approval_code: String,
    pub avs_response: String,
    pub trans_id: String,
    pub ccv_response: Option<String>,
    #[serde(skip)]
    pub fields: Vec<String>,
}

impl GatewayResponse {
    /// Splits `body` on `delimiter` and picks the positional fields.
    ///
    /// Bodies with fewer than seven fields are rejected; the card code
    /// response at position 39 is optional.
    pub fn parse(body: &str, delimiter: char) -> Result<Self> {
        let fields: Vec<String> = body
            .trim_end_matches(['\r', '\n'])
            .split(delimiter)
            .map(str::to_string)
            .collect();

        if fields.len() <= TRANS_ID {
            return Err(PaymentError::MalformedResponse {
                fields: fields.len(),
            });
        }

        Ok(Self {
            response_code: fields[RESPONSE_CODE].clone(),
            reason_code: fields[REASON_CODE].clone(),
            reason_text: fields[REASON_TEXT].clone(),
            approval_code: fields[APPROVAL_CODE].clone(),
            avs_response: fields[AVS_RESPONSE].clone(),
            trans_id: fields[TRANS_ID].clone(),
            ccv_response: fields.get(CCV_RESPONSE).cloned(),
            fields,
        })
    }

    /// True only when the gateway approved the transaction.
    pub fn is_processed(&self) -> bool {
        self.response_code == APPROVED
    }
}
