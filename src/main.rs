use authnet_aim::application::batch::{BatchRunner, SubmissionMode};
use authnet_aim::application::processor::PaymentProcessor;
use authnet_aim::domain::gateway::{GatewayConfig, LIVE_POST_URL};
use authnet_aim::domain::ports::GatewayTransportBox;
use authnet_aim::infrastructure::in_memory::ScriptedTransport;
use authnet_aim::interfaces::csv::request_reader::RequestReader;
use authnet_aim::interfaces::csv::result_writer::ResultWriter;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input transaction requests CSV file
    input: PathBuf,

    /// Merchant API login id
    #[arg(long, env = "AUTHNET_LOGIN", default_value = "")]
    login: String,

    /// Merchant transaction key
    #[arg(long, env = "AUTHNET_TRAN_KEY", default_value = "", hide_env_values = true)]
    tran_key: String,

    /// Send production requests instead of test requests
    #[arg(long)]
    live: bool,

    /// Gateway endpoint
    #[arg(long, default_value = LIVE_POST_URL)]
    post_url: String,

    /// Require address verification fields on authorizations
    #[arg(long)]
    avs: bool,

    /// Require the card code on authorizations
    #[arg(long)]
    ccv: bool,

    /// Validate requests without submitting them
    #[arg(long)]
    dry_run: bool,

    /// Seconds to wait for the gateway before giving up
    #[cfg_attr(not(feature = "transport-http"), allow(dead_code))]
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = GatewayConfig::new(cli.login.clone(), cli.tran_key.clone())
        .with_test_request(!cli.live)
        .with_post_url(cli.post_url.clone());

    let (transport, mode) = select_transport(&cli)?;
    let mut processor = PaymentProcessor::new(config, transport);
    processor.details.is_avs_required = cli.avs;
    processor.details.is_ccv_required = cli.ccv;
    let mut runner = BatchRunner::new(processor, mode);
    tracing::info!(mode = ?runner.mode(), input = %cli.input.display(), "processing batch");

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = RequestReader::new(file);
    let stdout = io::stdout();
    let mut writer = ResultWriter::new(stdout.lock());

    for (index, request) in reader.requests().enumerate() {
        let row = index + 1;
        match request {
            Ok(request) => match runner.run(row, request).await {
                Ok(result) => writer.write_result(&result).into_diagnostic()?,
                Err(e) => eprintln!("Error processing transaction on row {row}: {e}"),
            },
            Err(e) => eprintln!("Error reading transaction on row {row}: {e}"),
        }
    }
    writer.flush().into_diagnostic()?;

    Ok(())
}

#[cfg(feature = "transport-http")]
fn select_transport(cli: &Cli) -> Result<(GatewayTransportBox, SubmissionMode)> {
    use authnet_aim::infrastructure::http::HttpTransport;
    use std::time::Duration;

    if cli.dry_run {
        return Ok((offline_transport(), SubmissionMode::DryRun));
    }
    if cli.login.is_empty() || cli.tran_key.is_empty() {
        miette::bail!(
            "--login and --tran-key (or AUTHNET_LOGIN / AUTHNET_TRAN_KEY) are required to submit"
        );
    }
    let transport =
        HttpTransport::new(Duration::from_secs(cli.timeout_secs)).into_diagnostic()?;
    Ok((Box::new(transport), SubmissionMode::Live))
}

#[cfg(not(feature = "transport-http"))]
fn select_transport(cli: &Cli) -> Result<(GatewayTransportBox, SubmissionMode)> {
    if !cli.dry_run {
        eprintln!(
            "WARNING: Live submission requested, but 'transport-http' feature is not enabled. Falling back to dry-run validation."
        );
    }
    Ok((offline_transport(), SubmissionMode::DryRun))
}

/// Dry runs never reach the transport; an empty script makes any stray call fail loudly.
fn offline_transport() -> GatewayTransportBox {
    Box::new(ScriptedTransport::new())
}
