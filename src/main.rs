use lambda_runtime::{run, service_fn, tracing, Error, LambdaEvent};
use rust_etl_lambda::pipeline::run_pipeline;
use rust_etl_lambda::storage::{DynamoTable, S3ObjectStore};
use rust_etl_lambda::EtlConfig;
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    // Clients and settings are built once per container and shared by every invocation
    let config = EtlConfig::from_env()?;
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let store = S3ObjectStore::new(aws_sdk_s3::Client::new(&aws_config));
    let table = DynamoTable::new(
        aws_sdk_dynamodb::Client::new(&aws_config),
        config.table_name.clone(),
    );

    let (store, table, record_id) = (&store, &table, config.record_id.as_str());
    run(service_fn(move |event: LambdaEvent<Value>| async move {
        run_pipeline(store, table, record_id, event.payload)
            .await
            .map_err(Error::from)
    }))
    .await
}
