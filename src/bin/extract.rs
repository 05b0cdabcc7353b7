use lambda_runtime::{run, service_fn, tracing, Error, LambdaEvent};
use rust_etl_lambda::handler::extract;
use rust_etl_lambda::storage::S3ObjectStore;
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let store = S3ObjectStore::new(aws_sdk_s3::Client::new(&aws_config));

    let store = &store;
    run(service_fn(move |event: LambdaEvent<Value>| async move {
        extract(store, event.payload).await.map_err(Error::from)
    }))
    .await
}
