use crate::domain::transaction::{Transaction, TransactionKind};
use crate::error::Result;
use std::fmt;

pub const LIVE_POST_URL: &str = "https://secure.authorize.net/gateway/transact.dll";
pub const API_VERSION: &str = "3.1";
pub const DEFAULT_DELIMITER: char = '|';

/// Merchant credentials and protocol settings shared by every request.
///
/// Requests run in test mode unless production is enabled explicitly with
/// [`GatewayConfig::with_test_request`].
#[derive(Clone)]
pub struct GatewayConfig {
    login: String,
    tran_key: String,
    test_request: bool,
    post_url: String,
    delimiter: char,
}

impl GatewayConfig {
    pub fn new(login: impl Into<String>, tran_key: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            tran_key: tran_key.into(),
            test_request: true,
            post_url: LIVE_POST_URL.to_string(),
            delimiter: DEFAULT_DELIMITER,
        }
    }

    pub fn with_test_request(mut self, test_request: bool) -> Self {
        self.test_request = test_request;
        self
    }

    pub fn with_post_url(mut self, post_url: impl Into<String>) -> Self {
        self.post_url = post_url.into();
        self
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn test_request(&self) -> bool {
        self.test_request
    }

    pub fn post_url(&self) -> &str {
        &self.post_url
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Static form fields sent ahead of the transaction fields.
    fn fields(&self) -> Vec<(&'static str, String)> {
        let flag = |b: bool| if b { "TRUE" } else { "FALSE" }.to_string();
        vec![
            ("x_login", self.login.clone()),
            ("x_tran_key", self.tran_key.clone()),
            ("x_version", API_VERSION.to_string()),
            ("x_relay_response", flag(false)),
            ("x_delim_data", flag(true)),
            ("x_delim_char", self.delimiter.to_string()),
            ("x_method", "CC".to_string()),
            ("x_test_request", flag(self.test_request)),
        ]
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("login", &self.login)
            .field("tran_key", &"<redacted>")
            .field("test_request", &self.test_request)
            .field("post_url", &self.post_url)
            .field("delimiter", &self.delimiter)
            .finish()
    }
}

/// One form POST ready for a transport.
#[derive(Debug, Clone)]
pub struct GatewayRequest {
    pub url: String,
    pub kind: TransactionKind,
    config_fields: Vec<(&'static str, String)>,
    transaction_fields: Vec<(&'static str, String)>,
}

impl GatewayRequest {
    pub fn new(config: &GatewayConfig, transaction: &Transaction) -> Self {
        Self {
            url: config.post_url.clone(),
            kind: transaction.kind(),
            config_fields: config.fields(),
            transaction_fields: transaction.fields(),
        }
    }

    pub fn transaction_fields(&self) -> &[(&'static str, String)] {
        &self.transaction_fields
    }

    /// Looks up a field by wire name, configuration first.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.config_fields
            .iter()
            .chain(&self.transaction_fields)
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    /// URL-encoded body: configuration fields, then transaction fields.
    pub fn encode(&self) -> Result<String> {
        let config = serde_urlencoded::to_string(&self.config_fields)?;
        let transaction = serde_urlencoded::to_string(&self.transaction_fields)?;
        Ok(format!("{config}&{transaction}"))
    }
}
