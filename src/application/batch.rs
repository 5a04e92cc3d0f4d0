use crate::application::processor::PaymentProcessor;
use crate::error::Result;
use crate::interfaces::csv::request_reader::{RequestType, TransactionRequest};
use crate::interfaces::csv::result_writer::TransactionResult;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionMode {
    /// Submit every successfully built transaction.
    Live,
    /// Build and validate only; the transport is never called.
    DryRun,
}

/// Runs batch requests one at a time through a single [`PaymentProcessor`].
///
/// The processor is reset before every row so no field leaks from one
/// request into the next.
pub struct BatchRunner {
    processor: PaymentProcessor,
    mode: SubmissionMode,
}

impl BatchRunner {
    pub fn new(processor: PaymentProcessor, mode: SubmissionMode) -> Self {
        Self { processor, mode }
    }

    pub fn mode(&self) -> SubmissionMode {
        self.mode
    }

    /// Handles one request. Validation and transport failures are returned to
    /// the caller; nothing is submitted for a request that fails to build.
    pub async fn run(
        &mut self,
        row: usize,
        request: TransactionRequest,
    ) -> Result<TransactionResult> {
        let request_type = request.r#type;
        self.processor.reset();
        request.apply_to(&mut self.processor.details);
        debug!(row, ?request_type, "handling request");

        if request_type == RequestType::VoidOrCredit && self.mode == SubmissionMode::Live {
            let outcome = self.processor.process_void_or_credit().await?;
            return Ok(TransactionResult::submitted(
                row,
                outcome.kind,
                outcome.response,
            ));
        }

        let kind = match request_type {
            RequestType::AuthOnly => self.processor.auth_only()?.kind(),
            RequestType::AuthCapture => self.processor.auth_and_capture()?.kind(),
            RequestType::PriorAuthCapture => self.processor.prior_auth_capture()?.kind(),
            RequestType::Void | RequestType::VoidOrCredit => self.processor.void()?.kind(),
            RequestType::Credit => self.processor.credit()?.kind(),
        };

        match self.mode {
            SubmissionMode::DryRun => Ok(TransactionResult::validated(row, kind)),
            SubmissionMode::Live => {
                let response = self.processor.process().await?;
                Ok(TransactionResult::submitted(row, kind, response))
            }
        }
    }
}
