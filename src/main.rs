use lambda_runtime::{Error, run, service_fn};
use sheetbrief::worker::handler::function_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    sheetbrief::setup_logging();
    run(service_fn(function_handler)).await
}
