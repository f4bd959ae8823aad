//! Delivery of chat requests to the assistant webhook.

use std::future::Future;

use futures::future::{Either, select};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde_json::Value;
use thiserror::Error;

use super::types::ChatRequest;

/// Why a webhook round trip produced no usable body.
#[derive(Debug, Error)]
pub enum ChatError {
	#[error("request failed: {0}")]
	Network(String),
	#[error("reply was not JSON: {0}")]
	Decode(String),
	#[error("no reply within {0} ms")]
	Timeout(u32),
}

/// Sends one chat turn and yields the parsed reply body.
pub trait ChatTransport {
	fn send(&self, request: &ChatRequest) -> impl Future<Output = Result<Value, ChatError>>;
}

/// `fetch`-backed transport used in the browser.
#[derive(Clone, Debug)]
pub struct FetchTransport {
	endpoint: String,
	timeout_ms: u32,
}

impl FetchTransport {
	pub fn new(endpoint: impl Into<String>, timeout_ms: u32) -> Self {
		Self {
			endpoint: endpoint.into(),
			timeout_ms,
		}
	}

	async fn post(&self, request: &ChatRequest) -> Result<Value, ChatError> {
		let response = Request::post(&self.endpoint)
			.header("Content-Type", "application/json")
			.header("Accept", "application/json")
			.json(request)
			.map_err(|e| ChatError::Network(e.to_string()))?
			.send()
			.await
			.map_err(|e| ChatError::Network(e.to_string()))?;
		if !response.ok() {
			// The body may still carry a usable reply, so it is parsed regardless.
			log::debug!("forge-site: chat webhook answered {}", response.status());
		}
		response
			.json::<Value>()
			.await
			.map_err(|e| ChatError::Decode(e.to_string()))
	}
}

impl ChatTransport for FetchTransport {
	async fn send(&self, request: &ChatRequest) -> Result<Value, ChatError> {
		if self.timeout_ms == 0 {
			return self.post(request).await;
		}
		let post = Box::pin(self.post(request));
		match select(post, TimeoutFuture::new(self.timeout_ms)).await {
			Either::Left((result, _)) => result,
			Either::Right(((), _)) => Err(ChatError::Timeout(self.timeout_ms)),
		}
	}
}
