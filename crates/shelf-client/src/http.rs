use async_trait::async_trait;
use reqwest::Method;
use reqwest::header::AUTHORIZATION;
use serde::Serialize;
use shelf_api_types::{Book, BookId, DeleteBookRequest, NewBook, routes};
use shelf_session::Session;
use tracing::debug;

use crate::{BookStore, ClientConfig, FetchFailure};

/// `BookStore` backed by the Books REST API.
///
/// Every request carries the session token verbatim in `Authorization`.
/// Without a token the request is still sent and left to the server to reject.
pub struct HttpBookStore {
    config: ClientConfig,
    session: Session,
    http: reqwest::Client,
}

impl HttpBookStore {
    pub fn new(config: ClientConfig, session: Session) -> Self {
        Self {
            config,
            session,
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&(impl Serialize + ?Sized)>,
    ) -> Result<(String, reqwest::Response), FetchFailure> {
        let url = self.config.endpoint(path);
        debug!(
            "{} {} (authorized: {})",
            method,
            url,
            self.session.is_authenticated()
        );

        let mut builder = self.http.request(method, &url);
        if let Some(token) = self.session.authorization() {
            builder = builder.header(AUTHORIZATION, token);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|err| FetchFailure::Transport {
            url: url.clone(),
            message: err.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchFailure::Status {
                url,
                status: status.as_u16(),
                body,
            });
        }

        Ok((url, response))
    }
}

#[async_trait(?Send)]
impl BookStore for HttpBookStore {
    async fn list(&self) -> Result<Vec<Book>, FetchFailure> {
        let (url, response) = self.send(Method::GET, routes::LIST, None::<&()>).await?;
        let text = response.text().await.map_err(|err| FetchFailure::Transport {
            url: url.clone(),
            message: err.to_string(),
        })?;
        serde_json::from_str(&text).map_err(|err| FetchFailure::Decode {
            url,
            message: err.to_string(),
        })
    }

    async fn create(&self, book: &NewBook) -> Result<(), FetchFailure> {
        self.send(Method::POST, routes::CREATE, Some(book)).await?;
        Ok(())
    }

    async fn update(&self, book: &Book) -> Result<(), FetchFailure> {
        self.send(Method::PUT, routes::UPDATE, Some(book)).await?;
        Ok(())
    }

    async fn delete(&self, id: &BookId) -> Result<(), FetchFailure> {
        let body = DeleteBookRequest { id: id.clone() };
        self.send(Method::DELETE, routes::DELETE, Some(&body)).await?;
        Ok(())
    }
}
