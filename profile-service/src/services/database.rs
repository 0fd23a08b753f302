use crate::models::Profile;
use mongodb::{bson::doc, Client as MongoClient, Collection, Database};
use service_core::error::AppError;

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    /// Connects to MongoDB and pings the deployment.
    ///
    /// A failed ping is logged but not fatal: the driver establishes
    /// connections lazily, so routes still register and individual requests
    /// surface their own errors. Only an unparseable connection string is
    /// returned as an error.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Invalid MongoDB connection string {}: {}", uri, e);
            AppError::ConfigError(anyhow::Error::new(e))
        })?;
        let db = client.database(database);
        let handle = Self { client, db };

        match handle.ping().await {
            Ok(()) => {
                tracing::info!(database = %database, "Pinged your deployment. You successfully connected to MongoDB!");
            }
            Err(e) => {
                tracing::error!(database = %database, "Ping failed. Connection unsuccessful: {}", e);
            }
        }

        Ok(handle)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await?;
        Ok(())
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.ping().await.map_err(|e| {
            tracing::error!("MongoDB health check failed: {}", e);
            e
        })
    }

    pub fn profiles(&self) -> Collection<Profile> {
        self.db.collection("profiles")
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}
