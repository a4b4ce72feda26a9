use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::{Deserialize, Serialize};

use backend_domain::{Document, DocumentStore, RemoteStoreConfig, StoredDocument};

/// REST/JSON document store client.
///
/// `GET {base}/{collection}` lists, `GET|PUT|PATCH {base}/{collection}/{key}`
/// reads, sets and updates one document, `POST {base}/{collection}` adds one,
/// `GET {base}/{collection}?field=F&value=V` runs an equality query and
/// `GET {base}/health` answers pings.
pub struct HttpDocumentStore {
    client: Client,
    base: Url,
    token: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireDocument {
    id: String,
    data: Document,
}

#[derive(Debug, Deserialize)]
struct AddResponse {
    id: String,
}

impl HttpDocumentStore {
    pub fn new(config: &RemoteStoreConfig) -> Result<Self> {
        let url = config
            .url
            .as_deref()
            .ok_or_else(|| anyhow!("remote store url not configured"))?;
        let base = Url::parse(url)?;
        if base.cannot_be_a_base() {
            return Err(anyhow!("remote store url '{}' cannot be a base", url));
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.max(1)))
            .build()?;
        Ok(Self {
            client,
            base,
            token: config.token.clone(),
        })
    }

    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| anyhow!("remote store url cannot be a base"))?;
            path.pop_if_empty();
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.header(AUTHORIZATION, format!("Bearer {}", token)),
            None => request,
        }
    }
}

#[async_trait]
impl DocumentStore for HttpDocumentStore {
    async fn list(&self, collection: &str) -> Result<Vec<StoredDocument>> {
        let url = self.url(&[collection])?;
        let docs: Vec<WireDocument> = self
            .authorized(self.client.get(url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(docs.into_iter().map(into_stored).collect())
    }

    async fn get(&self, collection: &str, key: &str) -> Result<Option<Document>> {
        let url = self.url(&[collection, key])?;
        let response = self.authorized(self.client.get(url)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let doc: WireDocument = response.error_for_status()?.json().await?;
        Ok(Some(doc.data))
    }

    async fn set(&self, collection: &str, key: &str, data: &Document) -> Result<()> {
        let url = self.url(&[collection, key])?;
        self.authorized(self.client.put(url))
            .json(data)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn add(&self, collection: &str, data: &Document) -> Result<String> {
        let url = self.url(&[collection])?;
        let created: AddResponse = self
            .authorized(self.client.post(url))
            .json(data)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(created.id)
    }

    async fn query_eq(&self, collection: &str, field: &str, value: &str) -> Result<Vec<StoredDocument>> {
        let url = self.url(&[collection])?;
        let docs: Vec<WireDocument> = self
            .authorized(self.client.get(url))
            .query(&[("field", field), ("value", value)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(docs.into_iter().map(into_stored).collect())
    }

    async fn update(&self, collection: &str, key: &str, data: &Document) -> Result<()> {
        let url = self.url(&[collection, key])?;
        let response = self
            .authorized(self.client.patch(url))
            .json(data)
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            anyhow::bail!("document {}/{} does not exist", collection, key);
        }
        response.error_for_status()?;
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        let url = self.url(&["health"])?;
        let response = self.authorized(self.client.get(url)).send().await?;
        if !response.status().is_success() {
            anyhow::bail!("remote store responded {}", response.status());
        }
        Ok(())
    }
}

fn into_stored(doc: WireDocument) -> StoredDocument {
    StoredDocument {
        key: doc.id,
        data: doc.data,
    }
}
