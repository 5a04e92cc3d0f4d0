use crate::domain::gateway::{GatewayConfig, GatewayRequest};
use crate::domain::payment::PaymentDetails;
use crate::domain::ports::GatewayTransportBox;
use crate::domain::response::GatewayResponse;
use crate::domain::transaction::{Transaction, TransactionKind};
use crate::error::{PaymentError, Result, ValidationError};
use tracing::{debug, info, warn};

/// Result of [`PaymentProcessor::process_void_or_credit`].
#[derive(Debug, Clone, PartialEq)]
pub struct VoidOrCredit {
    pub processed: bool,
    /// The kind whose submission produced `response`.
    pub kind: TransactionKind,
    pub response: GatewayResponse,
}

/// Builds transactions from [`PaymentDetails`] and submits them.
///
/// One processor models one transaction attempt at a time. Each build
/// replaces the pending transaction; a failed build clears it so nothing
/// stale can be submitted afterwards.
pub struct PaymentProcessor {
    config: GatewayConfig,
    pub details: PaymentDetails,
    pending: Option<Transaction>,
    transport: GatewayTransportBox,
}

impl PaymentProcessor {
    /// Creates a new `PaymentProcessor` instance.
    ///
    /// # Arguments
    ///
    /// * `config` - Merchant credentials and protocol settings.
    /// * `transport` - Where built requests are sent.
    pub fn new(config: GatewayConfig, transport: GatewayTransportBox) -> Self {
        Self {
            config,
            details: PaymentDetails::default(),
            pending: None,
            transport,
        }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// The transaction the next [`process`](Self::process) call will submit.
    pub fn pending(&self) -> Option<&Transaction> {
        self.pending.as_ref()
    }

    /// Clears all transaction data, keeping the AVS/CCV flags.
    pub fn reset(&mut self) {
        self.details = PaymentDetails {
            is_avs_required: self.details.is_avs_required,
            is_ccv_required: self.details.is_ccv_required,
            ..Default::default()
        };
        self.pending = None;
    }

    pub fn auth_only(&mut self) -> std::result::Result<&Transaction, ValidationError> {
        self.build(PaymentDetails::auth_only)
    }

    pub fn auth_and_capture(&mut self) -> std::result::Result<&Transaction, ValidationError> {
        self.build(PaymentDetails::auth_and_capture)
    }

    pub fn prior_auth_capture(&mut self) -> std::result::Result<&Transaction, ValidationError> {
        self.build(PaymentDetails::prior_auth_capture)
    }

    pub fn void(&mut self) -> std::result::Result<&Transaction, ValidationError> {
        self.build(PaymentDetails::void)
    }

    pub fn credit(&mut self) -> std::result::Result<&Transaction, ValidationError> {
        self.build(PaymentDetails::credit)
    }

    fn build(
        &mut self,
        builder: fn(&PaymentDetails) -> std::result::Result<Transaction, ValidationError>,
    ) -> std::result::Result<&Transaction, ValidationError> {
        self.pending = None;
        let transaction = builder(&self.details).inspect_err(|e| {
            debug!(field = %e.field, "transaction build rejected");
        })?;
        debug!(kind = %transaction.kind(), "transaction built");
        Ok(self.pending.insert(transaction))
    }

    /// Submits the pending transaction and returns the gateway's answer.
    ///
    /// Fails with [`PaymentError::NoPendingTransaction`] when nothing has been
    /// built, or the last build failed.
    pub async fn process(&self) -> Result<GatewayResponse> {
        let transaction = self
            .pending
            .as_ref()
            .ok_or(PaymentError::NoPendingTransaction)?;
        let request = GatewayRequest::new(&self.config, transaction);

        let body = self.transport.send(&request).await?;
        let response = GatewayResponse::parse(&body, self.config.delimiter())?;

        info!(
            kind = %request.kind,
            response_code = %response.response_code,
            reason_code = %response.reason_code,
            trans_id = %response.trans_id,
            "transaction submitted"
        );
        Ok(response)
    }

    /// Voids the referenced transaction, issuing a full credit instead when
    /// the gateway refuses the void.
    pub async fn process_void_or_credit(&mut self) -> Result<VoidOrCredit> {
        self.void()?;
        let response = self.process().await?;
        if response.is_processed() {
            return Ok(VoidOrCredit {
                processed: true,
                kind: TransactionKind::Void,
                response,
            });
        }

        warn!(
            reason_code = %response.reason_code,
            reason_text = %response.reason_text,
            "void refused, falling back to credit"
        );
        self.credit()?;
        let response = self.process().await?;
        Ok(VoidOrCredit {
            processed: response.is_processed(),
            kind: TransactionKind::Credit,
            response,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::field::Field;
    use crate::infrastructure::in_memory::ScriptedTransport;

    fn processor(transport: &ScriptedTransport) -> PaymentProcessor {
        PaymentProcessor::new(
            GatewayConfig::new("login", "key"),
            Box::new(transport.clone()),
        )
    }

    #[tokio::test]
    async fn test_process_without_build_fails() {
        let transport = ScriptedTransport::new();
        let processor = processor(&transport);
        let result = processor.process().await;
        assert!(matches!(result, Err(PaymentError::NoPendingTransaction)));
        assert!(transport.requests().await.is_empty());
    }

    #[tokio::test]
    async fn test_failed_build_clears_pending() {
        let transport = ScriptedTransport::new();
        let mut processor = processor(&transport);
        processor.details.transaction = Some("100".to_string());
        processor.void().unwrap();
        assert!(processor.pending().is_some());

        processor.details.transaction = Some("x".to_string());
        let err = processor.void().unwrap_err();
        assert_eq!(err.field, Field::TransactionId);
        assert!(processor.pending().is_none());
        assert!(matches!(
            processor.process().await,
            Err(PaymentError::NoPendingTransaction)
        ));
    }

    #[tokio::test]
    async fn test_rebuild_replaces_pending() {
        let transport = ScriptedTransport::new();
        let mut processor = processor(&transport);
        processor.details.transaction = Some("100".to_string());
        processor.void().unwrap();
        processor.prior_auth_capture().unwrap();
        assert_eq!(
            processor.pending().map(Transaction::kind),
            Some(TransactionKind::PriorAuthCapture)
        );
    }

    #[tokio::test]
    async fn test_reset_keeps_flags() {
        let transport = ScriptedTransport::new();
        let mut processor = processor(&transport);
        processor.details.is_avs_required = true;
        processor.details.card_num = Some("4111111111111111".to_string());
        processor.details.transaction = Some("1".to_string());
        processor.void().unwrap();

        processor.reset();
        assert!(processor.details.is_avs_required);
        assert_eq!(processor.details.card_num, None);
        assert!(processor.pending().is_none());
    }

    #[tokio::test]
    async fn test_void_approved_does_not_credit() {
        let transport = ScriptedTransport::new();
        transport.push_approved("100").await;
        let mut processor = processor(&transport);
        processor.details.transaction = Some("100".to_string());

        let outcome = processor.process_void_or_credit().await.unwrap();
        assert!(outcome.processed);
        assert_eq!(outcome.kind, TransactionKind::Void);
        assert_eq!(transport.requests().await.len(), 1);
    }

    #[tokio::test]
    async fn test_credit_fallback_validation_error_propagates() {
        let transport = ScriptedTransport::new();
        transport.push_declined("100").await;
        let mut processor = processor(&transport);
        processor.details.transaction = Some("100".to_string());

        let result = processor.process_void_or_credit().await;
        assert!(matches!(
            result,
            Err(PaymentError::Validation(ValidationError {
                field: Field::CardNum,
                ..
            }))
        ));
        assert_eq!(transport.requests().await.len(), 1);
    }
}
