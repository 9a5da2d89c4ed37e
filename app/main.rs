use std::process::ExitCode;

use amf_formats::{Value, amf0::Reader};
use clap::Parser;
use tracing::{self, Dispatch};
use tracing_subscriber::{self, EnvFilter, filter::LevelFilter};

use crate::{
    cli::{AppCli, Command, OutputFormat},
    errors::AppResult,
    util::{decode_hex, encode_hex, parse_log_level, read_input, write_output},
};

mod cli;
mod errors;
mod json;
mod util;

fn init_tracing(log_level: Option<&str>) -> AppResult<()> {
    let level = log_level
        .map(parse_log_level)
        .transpose()?
        .unwrap_or(tracing::Level::WARN);
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::from_level(level).into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .finish();
    let _ = tracing::dispatcher::set_global_default(Dispatch::new(subscriber));
    Ok(())
}

fn decode(input: &[u8], format: OutputFormat) -> AppResult<String> {
    let mut reader = Reader::new(input);
    let mut output = String::new();
    while !reader.is_empty() {
        let start = reader.position();
        let value = reader.read()?;
        tracing::debug!(
            "decoded {:?} at [{}, {})",
            value.kind(),
            start,
            reader.position()
        );
        let rendered = match format {
            OutputFormat::Debug => format!("{:#?}", value),
            OutputFormat::Json => serde_json::to_string_pretty(&json::to_json(&value))?,
        };
        output.push_str(&rendered);
        output.push('\n');
    }
    tracing::info!("decoded {} bytes", reader.position());
    Ok(output)
}

fn encode(input: &[u8], ecma: bool) -> AppResult<Vec<u8>> {
    let document: serde_json::Value = serde_json::from_slice(input)?;
    let value = match json::from_json(&document) {
        Value::Object(entries) if ecma => Value::ecma_array(entries),
        value => value,
    };
    let bytes = value.write_to_vec()?;
    tracing::info!("encoded {:?} into {} bytes", value.kind(), bytes.len());
    Ok(bytes)
}

fn run(cli: AppCli) -> AppResult<()> {
    match cli.command {
        Command::Decode { input, format, hex } => {
            let mut data = read_input(&input)?;
            if hex {
                data = decode_hex(&data)?;
            }
            let output = decode(&data, format)?;
            write_output(None, output.as_bytes())
        }
        Command::Encode {
            input,
            output,
            ecma,
            hex,
        } => {
            let mut bytes = encode(&read_input(&input)?, ecma)?;
            if hex {
                bytes = encode_hex(&bytes);
            }
            write_output(output.as_deref(), &bytes)
        }
    }
}

fn main() -> ExitCode {
    let cli = AppCli::parse();
    if let Err(err) = init_tracing(cli.log_level.as_deref()) {
        eprintln!("{}", err);
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("amf0-dump failed: {}", err);
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
