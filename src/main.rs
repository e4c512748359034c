mod invocation;
mod source;
mod storage;
#[cfg(test)]
mod test_utils;
mod transfer;

use flexi_logger::{
    Cleanup, Criterion, Duplicate, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming,
};
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use uuid::Uuid;

use invocation::{EnvInitializer, handle_invocation};
use transfer::LogObserver;

/// Lambda forwards stderr to CloudWatch. A local run also keeps rotated log files.
fn init_logger(local: bool) -> Result<LoggerHandle, FlexiLoggerError> {
    let logger = Logger::try_with_env_or_str("info")?
        .use_utc()
        .format(flexi_logger::detailed_format);

    if local {
        logger
            .log_to_file(
                FileSpec::default()
                    .directory(".logs")
                    .basename("imdb-mirror")
                    .suffix("log"),
            )
            .duplicate_to_stdout(Duplicate::All)
            .rotate(
                Criterion::Size(10_000_000),
                Naming::Numbers,
                Cleanup::KeepLogFiles(7),
            )
            .start()
    } else {
        logger.log_to_stderr().start()
    }
}

async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let observer = LogObserver::new(Uuid::new_v4());
    let summary = handle_invocation(&event.payload, &EnvInitializer, &observer).await;
    Ok(summary.to_response()?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let local = std::env::args().any(|arg| arg == "--local");
    let _logger = init_logger(local)?;

    if local {
        log::info!("Running a single local transfer.");
        let observer = LogObserver::new(Uuid::new_v4());
        let summary = handle_invocation(&Value::Null, &EnvInitializer, &observer).await;
        println!("{}", summary.to_response()?);
        if !summary.is_success() {
            return Err(format!(
                "transfer failed with status {}: {}",
                summary.get_status_code(),
                summary.get_message()
            )
            .into());
        }
        return Ok(());
    }

    log::info!("Starting Lambda runtime.");
    lambda_runtime::run(service_fn(function_handler)).await
}
