use lambda_runtime::{run, service_fn, tracing, Error, LambdaEvent};
use rust_etl_lambda::handler::load;
use rust_etl_lambda::storage::DynamoTable;
use rust_etl_lambda::EtlConfig;
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let config = EtlConfig::from_env()?;
    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let table = DynamoTable::new(
        aws_sdk_dynamodb::Client::new(&aws_config),
        config.table_name.clone(),
    );

    let (table, record_id) = (&table, config.record_id.as_str());
    run(service_fn(move |event: LambdaEvent<Value>| async move {
        load(table, record_id, event.payload)
            .await
            .map_err(Error::from)
    }))
    .await
}
