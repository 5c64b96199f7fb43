use crate::client::RestClient;
use query_catalog::Query;
use workload_core::Document;
use workload_engine::{Database, DatabaseError};

/// Key-value operations through `kv`, queries through the query service.
pub struct TuqDatabase<D: Database> {
    client: RestClient,
    kv: D,
    bucket: String,
}

impl<D: Database> TuqDatabase<D> {
    pub fn new(client: RestClient, kv: D, bucket: impl Into<String>) -> Self {
        Self {
            client,
            kv,
            bucket: bucket.into(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn kv(&self) -> &D {
        &self.kv
    }
}

#[async_trait::async_trait]
impl<D: Database> Database for TuqDatabase<D> {
    async fn create(&self, key: &str, value: &Document) -> Result<(), DatabaseError> {
        self.kv.create(key, value).await
    }

    async fn read(&self, key: &str) -> Result<(), DatabaseError> {
        self.kv.read(key).await
    }

    async fn update(&self, key: &str, value: &Document) -> Result<(), DatabaseError> {
        self.kv.update(key, value).await
    }

    async fn delete(&self, key: &str) -> Result<(), DatabaseError> {
        self.kv.delete(key).await
    }

    async fn query(&self, query: &Query) -> Result<(), DatabaseError> {
        let statement = query.render(&self.bucket);
        self.client.execute(&statement).await?;
        Ok(())
    }
}
