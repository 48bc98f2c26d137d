use crate::core::config::DatabaseConfig;
use mongodb::{bson::doc, Client, Database};

/// Connect to MongoDB and verify the deployment with a ping on the `admin`
/// database before handing out the database handle.
///
/// The client is created once and shared for the process lifetime; the driver
/// keeps its own connection pool behind the handle.
pub async fn connect(config: &DatabaseConfig) -> Result<Database, mongodb::error::Error> {
    let client = Client::with_uri_str(&config.uri).await?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await?;

    tracing::info!("Pinged your deployment. You successfully connected to MongoDB!");

    Ok(client.database(&config.name))
}
