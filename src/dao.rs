use crate::config::ClientConfig;
use crate::models::{ItemEnvelope, ItemList, ToDoItem};
use reqwest::{Client, Response, StatusCode};
use std::future::Future;
use thiserror::Error;
use tracing::{debug, error};

#[derive(Debug, Error)]
pub enum DaoError {
    #[error("failed to retrieve items from the server (status {0})")]
    Retrieval(StatusCode),
    #[error("failed to insert item (status {0})")]
    Insert(StatusCode),
    #[error("failed to update item (status {0})")]
    Update(StatusCode),
    #[error("request to the to-do service failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Reads and writes to-do items held by a remote service.
pub trait ToDoRepository {
    fn list_all(&self) -> impl Future<Output = Result<Vec<ToDoItem>, DaoError>> + Send;

    fn insert(&self, item: &ToDoItem) -> impl Future<Output = Result<bool, DaoError>> + Send;

    /// `Ok(false)` when the service answers with a failure status. Only
    /// transport failures are returned as errors.
    fn remove_by_id(&self, id: u64) -> impl Future<Output = Result<bool, DaoError>> + Send;

    fn get_item(&self, id: u64) -> impl Future<Output = Result<ToDoItem, DaoError>> + Send;

    fn update(&self, item: &ToDoItem) -> impl Future<Output = Result<bool, DaoError>> + Send;
}

#[derive(Debug, Clone)]
pub struct ToDoItemDao {
    client: Client,
    base_url: String,
}

impl ToDoItemDao {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &ClientConfig) -> Self {
        Self {
            client,
            base_url: config.base_url(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

impl ToDoRepository for ToDoItemDao {
    async fn list_all(&self) -> Result<Vec<ToDoItem>, DaoError> {
        let url = self.url("list");
        debug!(%url, "listing items");
        let response = self.client.get(&url).send().await?;

        if response.status().is_success() {
            return Ok(response.json::<ItemList>().await?.items);
        }
        let status = log_failure("list", response).await;
        Err(DaoError::Retrieval(status))
    }

    async fn insert(&self, item: &ToDoItem) -> Result<bool, DaoError> {
        let url = self.url("add");
        debug!(%url, description = %item.description, "inserting item");
        let response = self.client.post(&url).json(item).send().await?;

        if response.status().is_success() {
            return Ok(true);
        }
        let status = log_failure("insert", response).await;
        Err(DaoError::Insert(status))
    }

    async fn remove_by_id(&self, id: u64) -> Result<bool, DaoError> {
        let url = self.url(&format!("remove/{id}"));
        debug!(%url, "removing item");
        let response = self.client.get(&url).send().await?;

        if response.status().is_success() {
            return Ok(true);
        }
        log_failure("remove", response).await;
        Ok(false)
    }

    async fn get_item(&self, id: u64) -> Result<ToDoItem, DaoError> {
        let url = self.url(&format!("item/{id}"));
        debug!(%url, "fetching item");
        let response = self.client.get(&url).send().await?;

        if response.status().is_success() {
            return Ok(response.json::<ItemEnvelope>().await?.item);
        }
        let status = log_failure("get", response).await;
        Err(DaoError::Retrieval(status))
    }

    async fn update(&self, item: &ToDoItem) -> Result<bool, DaoError> {
        let url = self.url("update");
        debug!(%url, id = ?item.id, "updating item");
        let response = self.client.post(&url).json(item).send().await?;

        if response.status().is_success() {
            return Ok(true);
        }
        let status = log_failure("update", response).await;
        Err(DaoError::Update(status))
    }
}

async fn log_failure(operation: &str, response: Response) -> StatusCode {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    error!(operation, %status, body, "to-do service rejected the request");
    status
}
