//! HTTP 传输层
//!
//! 基于 `gloo-net` 的 fetch 实现，接入核心库的 `HttpClient` 抽象。

use gloo_net::http::{Method, RequestBuilder};
use trekhub::request::{HttpClient, HttpMethod, HttpRequest, HttpResponse, TransportError};

fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// 浏览器 fetch 客户端
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserHttpClient;

#[async_trait::async_trait(?Send)]
impl HttpClient for BrowserHttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = RequestBuilder::new(&req.url).method(to_method(req.method));
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| TransportError(format!("Request build error: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError(format!("Response body error: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}
