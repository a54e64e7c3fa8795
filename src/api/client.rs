//! Note transport
//!
//! The six remote note operations plus vault listing, over HTTP+JSON.
//! The client is stateless: it issues exactly the requests it is given,
//! never retries, and neither coalesces nor orders concurrent calls.
//! Callers are responsible for keeping at most one in-flight save or
//! delete per (vault, path) pair; callers needing ordering must await one
//! acknowledgement before issuing the next mutation.

use crate::api::models::{
    DeleteNoteRequest, Envelope, HistoryPage, NoteDetail, NoteHistoryDetail, NoteListPayload,
    NotePage, PageRequest, SaveAck, SaveNoteRequest, SaveOptions, Vault,
};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

/// Typed client for the note synchronization API.
#[derive(Debug, Clone)]
pub struct NoteClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl NoteClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("vaultnotes/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, config })
    }

    /// List the account's vaults, in server order.
    pub async fn list_vaults(&self) -> Result<Vec<Vault>> {
        tracing::debug!("Listing vaults");

        self.execute(self.get("/api/vaults")).await
    }

    /// List notes in a vault.
    ///
    /// With `page` unset, no pagination parameters are sent and the legacy
    /// bare-array response shape is accepted. `keyword` is a server-side
    /// filter; the client never filters locally.
    pub async fn list_notes(
        &self,
        vault: &str,
        page: Option<PageRequest>,
        keyword: Option<&str>,
    ) -> Result<NotePage> {
        tracing::debug!("Listing notes in vault: {}", vault);

        let mut req = self.get("/api/notes").query(&[("vault", vault)]);
        if let Some(p) = page {
            req = req.query(&[
                ("page", p.page.to_string()),
                ("pageSize", p.page_size.to_string()),
            ]);
        }
        if let Some(keyword) = keyword.filter(|k| !k.is_empty()) {
            req = req.query(&[("keyword", keyword)]);
        }

        let payload: NoteListPayload = self.execute(req).await?;
        Ok(payload.normalize(page))
    }

    /// Fetch one note with its full content. Fails if the note does not
    /// exist; the failure is surfaced, not retried.
    pub async fn get_note(&self, vault: &str, path: &str) -> Result<NoteDetail> {
        tracing::debug!("Fetching note: {}/{}", vault, path);

        let req = self.get("/api/note").query(&[("vault", vault), ("path", path)]);
        self.execute(req).await
    }

    /// Save a note, creating it if it does not exist.
    ///
    /// Repeating an identical save is safe: the request is always sent and
    /// the server may collapse an unchanged `contentHash` into a no-op, but
    /// that optimization is not client-observable.
    pub async fn save_note(
        &self,
        vault: &str,
        path: &str,
        content: &str,
        options: SaveOptions,
    ) -> Result<SaveAck> {
        tracing::info!("Saving note: {}/{}", vault, path);

        let body = SaveNoteRequest { vault, path, content, options };
        let req = self.request(Method::POST, "/api/note").json(&body);
        self.execute_ack(req).await
    }

    /// Delete a note. Deletion is soft at the server; from here it is a
    /// single request with no local undo.
    pub async fn delete_note(
        &self,
        vault: &str,
        path: &str,
        path_hash: Option<&str>,
    ) -> Result<SaveAck> {
        tracing::info!("Deleting note: {}/{}", vault, path);

        let body = DeleteNoteRequest { vault, path, path_hash };
        let req = self.request(Method::DELETE, "/api/note").json(&body);
        self.execute_ack(req).await
    }

    /// List history snapshots for a note, preserving server ordering.
    pub async fn list_note_histories(
        &self,
        vault: &str,
        path: &str,
        path_hash: Option<&str>,
        page: PageRequest,
    ) -> Result<HistoryPage> {
        tracing::debug!("Listing history: {}/{}", vault, path);

        let mut req = self
            .get("/api/note/histories")
            .query(&[("vault", vault), ("path", path)])
            .query(&[
                ("page", page.page.to_string()),
                ("pageSize", page.page_size.to_string()),
            ]);
        if let Some(hash) = path_hash {
            req = req.query(&[("path_hash", hash)]);
        }

        self.execute(req).await
    }

    /// Fetch one immutable history snapshot plus its diff against the
    /// prior retained version.
    pub async fn get_note_history(&self, vault: &str, id: i64) -> Result<NoteHistoryDetail> {
        tracing::debug!("Fetching history entry {} in vault: {}", id, vault);

        let req = self
            .get("/api/note/history")
            .query(&[("vault", vault)])
            .query(&[("id", id)]);
        self.execute(req).await
    }

    fn request(&self, method: Method, route: &str) -> RequestBuilder {
        self.http
            .request(method, self.config.endpoint(route))
            .header("Domain", &self.config.domain)
            .header("Token", &self.config.token)
            .header("Lang", &self.config.lang)
    }

    fn get(&self, route: &str) -> RequestBuilder {
        // Timestamp query parameter defeats intermediary caches.
        self.request(Method::GET, route)
            .query(&[("_t", chrono::Utc::now().timestamp_millis().to_string())])
    }

    async fn execute<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T> {
        let envelope: Envelope<T> = self.roundtrip(req).await?;
        envelope.into_result()
    }

    /// Variant for mutations, where success carries no meaningful payload
    /// and the server's message is the acknowledgement.
    async fn execute_ack(&self, req: RequestBuilder) -> Result<SaveAck> {
        let envelope: Envelope<serde_json::Value> = self.roundtrip(req).await?;
        if envelope.is_success() {
            Ok(SaveAck { code: envelope.code, message: envelope.message })
        } else {
            Err(Error::Api {
                code: envelope.code,
                message: envelope.display_message(),
            })
        }
    }

    async fn roundtrip<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<Envelope<T>> {
        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Request failed with HTTP {}", status);
            return Err(Error::Status(status));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
