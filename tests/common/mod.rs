#![allow(dead_code)]

use authnet_aim::application::processor::PaymentProcessor;
use authnet_aim::domain::gateway::GatewayConfig;
use authnet_aim::infrastructure::in_memory::ScriptedTransport;
use std::io::Write;
use tempfile::NamedTempFile;

pub const HEADER: &str = "type,transaction,card_num,exp_date,amount,card_code,address,zip,invoice_number,first_name,last_name,customer_id,description";

/// A processor with a valid card, a future expiration date and an amount,
/// wired to `transport`.
pub fn card_processor(transport: &ScriptedTransport) -> PaymentProcessor {
    let config = GatewayConfig::new("test login", "test key")
        .with_post_url("https://test.authorize.net/gateway/transact.dll");
    let mut processor = PaymentProcessor::new(config, Box::new(transport.clone()));
    processor.details.card_num = Some("4111111111111111".to_string());
    processor.details.exp_date = Some("12/2099".to_string());
    processor.details.amount = Some("1.00".to_string());
    processor
}

/// Writes a batch input file with the standard header and `rows`.
pub fn batch_file(rows: &[&str]) -> NamedTempFile {
    let mut csv = NamedTempFile::new().unwrap();
    writeln!(csv, "{HEADER}").unwrap();
    for row in rows {
        writeln!(csv, "{row}").unwrap();
    }
    csv
}
