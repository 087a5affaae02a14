// Zengin Gateway - CLI
// Validates one transfer request from key=value arguments against a
// reference-data directory and prints the JSON response envelope.
//
// Usage:
//   zengin-gateway [--data <dir>] bank_code=1 branch_code=1 account_number=1234567 \
//                  account_type=普通 account_holder_kana=ﾀﾞﾉｸ amount=1000

use anyhow::Result;
use simple_logger::SimpleLogger;
use std::collections::HashMap;
use std::env;
use std::process::ExitCode;
use zengin_gateway::{
    validate_and_format, FileStore, ReceivedParameters, TransferRequest, TransferResponse,
};

fn main() -> Result<ExitCode> {
    SimpleLogger::new().env().init()?;

    let (data_dir, params) = parse_args(env::args().skip(1));
    log::debug!("Reference data directory: {}", data_dir);

    let store = FileStore::new(&data_dir);
    let received = received_parameters(&params);
    let request = build_request(&params);

    let response = match validate_and_format(&store, &request) {
        Ok(result) => TransferResponse::ok(received, result),
        Err(e) => {
            log::debug!("Validation failed: {}", e);
            TransferResponse::failure(e.to_string(), received)
        }
    };

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(if response.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Split arguments into the data directory and the key=value request fields.
fn parse_args(args: impl Iterator<Item = String>) -> (String, HashMap<String, String>) {
    let mut data_dir = "data".to_string();
    let mut params = HashMap::new();
    let mut args = args.peekable();

    while let Some(arg) = args.next() {
        if arg == "--data" {
            if let Some(dir) = args.next() {
                data_dir = dir;
            }
        } else if let Some((key, value)) = arg.split_once('=') {
            params.insert(key.to_string(), value.to_string());
        } else {
            log::warn!("Ignoring argument without '=': {}", arg);
        }
    }

    (data_dir, params)
}

fn received_parameters(params: &HashMap<String, String>) -> ReceivedParameters {
    ReceivedParameters {
        bank_code: params.get("bank_code").cloned(),
        branch_code: params.get("branch_code").cloned(),
        account_type: params.get("account_type").cloned(),
        account_number: params.get("account_number").cloned(),
        account_holder_kana: params.get("account_holder_kana").cloned(),
        amount: params.get("amount").map(|v| parse_amount(v)),
    }
}

fn build_request(params: &HashMap<String, String>) -> TransferRequest {
    let field = |key: &str| params.get(key).cloned().unwrap_or_default();

    TransferRequest {
        bank_code: field("bank_code"),
        branch_code: field("branch_code"),
        account_type: field("account_type"),
        account_number: field("account_number"),
        account_holder_kana: field("account_holder_kana"),
        amount: params.get("amount").map(|v| parse_amount(v)).unwrap_or(0),
    }
}

/// Non-numeric amounts coerce to 0, matching the reference deployment's
/// integer cast.
fn parse_amount(value: &str) -> u64 {
    value.trim().parse().unwrap_or(0)
}
