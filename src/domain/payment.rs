use crate::domain::transaction::{Authorization, Avs, Transaction};
use crate::domain::validation;
use crate::error::ValidationError;

/// Caller-supplied data for one transaction attempt.
///
/// Every field is optional; `None` and an empty string both mean "unset".
/// The two flags decide whether address verification and card code fields
/// are mandatory for authorizations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentDetails {
    pub is_avs_required: bool,
    pub is_ccv_required: bool,
    pub transaction: Option<String>,
    pub card_num: Option<String>,
    pub exp_date: Option<String>,
    pub amount: Option<String>,
    pub card_code: Option<String>,
    pub address: Option<String>,
    pub zip: Option<String>,
    pub invoice_number: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub customer_id: Option<String>,
    pub description: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

impl PaymentDetails {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an authorization-only transaction.
    pub fn auth_only(&self) -> Result<Transaction, ValidationError> {
        Ok(Transaction::AuthOnly(self.authorization()?))
    }

    /// Builds an authorization with immediate capture.
    pub fn auth_and_capture(&self) -> Result<Transaction, ValidationError> {
        Ok(Transaction::AuthCapture(self.authorization()?))
    }

    /// Builds a capture of a previously authorized transaction.
    ///
    /// The amount is only sent when one is set.
    pub fn prior_auth_capture(&self) -> Result<Transaction, ValidationError> {
        let trans_id = validation::transaction_id(self.transaction.as_deref())?;
        let amount = match non_empty(&self.amount) {
            Some(amount) => Some(validation::amount(Some(amount.as_str()))?),
            None => None,
        };
        Ok(Transaction::PriorAuthCapture { trans_id, amount })
    }

    pub fn void(&self) -> Result<Transaction, ValidationError> {
        let trans_id = validation::transaction_id(self.transaction.as_deref())?;
        Ok(Transaction::Void { trans_id })
    }

    /// Builds a credit against a settled transaction.
    pub fn credit(&self) -> Result<Transaction, ValidationError> {
        Ok(Transaction::Credit {
            trans_id: validation::transaction_id(self.transaction.as_deref())?,
            card_num: validation::card_num(self.card_num.as_deref())?,
            amount: validation::amount(self.amount.as_deref())?,
        })
    }

    fn authorization(&self) -> Result<Authorization, ValidationError> {
        let card_num = validation::card_num(self.card_num.as_deref())?;
        let exp_date = validation::exp_date(self.exp_date.as_deref())?;
        let amount = validation::amount(self.amount.as_deref())?;

        let avs = if self.is_avs_required {
            Some(Avs {
                address: validation::address(self.address.as_deref())?,
                zip: validation::zip(self.zip.as_deref())?,
            })
        } else {
            None
        };

        let card_code = if self.is_ccv_required {
            Some(validation::card_code(self.card_code.as_deref())?)
        } else {
            None
        };

        Ok(Authorization {
            card_num,
            exp_date,
            amount,
            avs,
            card_code,
            invoice_number: non_empty(&self.invoice_number),
            first_name: non_empty(&self.first_name),
            last_name: non_empty(&self.last_name),
            customer_id: non_empty(&self.customer_id),
            description: non_empty(&self.description),
        })
    }
}
