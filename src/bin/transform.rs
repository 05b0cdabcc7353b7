use lambda_runtime::{run, service_fn, tracing, Error, LambdaEvent};
use rust_etl_lambda::handler::transform;
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    run(service_fn(|event: LambdaEvent<Value>| async move {
        transform(event.payload).map_err(Error::from)
    }))
    .await
}
