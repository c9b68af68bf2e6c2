//! HTTP plumbing for the timer service.
//!
//! Requests are described as plain [`ApiRequest`] values so the command logic
//! can be checked without a browser; [`ApiClient`] turns them into `fetch` calls.

use serde::de::DeserializeOwned;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::error::{ClientError, InputError};
use crate::model::{Ack, PointsInfo, PointsUpdate, parse_points_input};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    PointsInfo,
    StartTimer,
    StopTimer,
    ResetTimer,
    AddPoints,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::PointsInfo => "/points_info",
            Endpoint::StartTimer => "/start_timer",
            Endpoint::StopTimer => "/stop_timer",
            Endpoint::ResetTimer => "/reset_timer",
            Endpoint::AddPoints => "/add_points",
        }
    }

    pub fn method(self) -> &'static str {
        match self {
            Endpoint::PointsInfo => "GET",
            _ => "POST",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub endpoint: Endpoint,
    /// JSON body, if any.
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn new(endpoint: Endpoint) -> Self {
        Self { endpoint, body: None }
    }

    pub fn add_points(amount: f64) -> Self {
        Self {
            endpoint: Endpoint::AddPoints,
            body: Some(serde_json::json!({ "points": amount }).to_string()),
        }
    }

    /// Builds the add-points request from raw prompt input; invalid input yields no request.
    pub fn add_points_from_input(input: Option<&str>) -> Result<Self, InputError> {
        parse_points_input(input).map(Self::add_points)
    }

    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.endpoint.path())
    }
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    base: Rc<str>,
}

impl ApiClient {
    pub fn new(base: &str) -> Self {
        Self { base: Rc::from(base) }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub async fn points_info(&self) -> Result<PointsInfo, ClientError> {
        self.send(&ApiRequest::new(Endpoint::PointsInfo)).await
    }

    pub async fn start_timer(&self) -> Result<Ack, ClientError> {
        self.send(&ApiRequest::new(Endpoint::StartTimer)).await
    }

    pub async fn stop_timer(&self) -> Result<Ack, ClientError> {
        self.send(&ApiRequest::new(Endpoint::StopTimer)).await
    }

    pub async fn reset_timer(&self) -> Result<Ack, ClientError> {
        self.send(&ApiRequest::new(Endpoint::ResetTimer)).await
    }

    pub async fn add_points(&self, req: &ApiRequest) -> Result<PointsUpdate, ClientError> {
        self.send(req).await
    }

    async fn send<T: DeserializeOwned>(&self, req: &ApiRequest) -> Result<T, ClientError> {
        let window = web_sys::window().ok_or(ClientError::NoWindow)?;

        let opts = RequestInit::new();
        opts.set_method(req.endpoint.method());
        opts.set_mode(RequestMode::Cors);
        if let Some(body) = &req.body {
            opts.set_body(&JsValue::from_str(body));
        }
        let request = Request::new_with_str_and_init(&req.url(&self.base), &opts)
            .map_err(|e| ClientError::from_js(&e))?;
        if req.body.is_some() {
            request
                .headers()
                .set("Content-Type", "application/json")
                .map_err(|e| ClientError::from_js(&e))?;
        }

        let resp = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| ClientError::from_js(&e))?;
        let resp: Response = resp.dyn_into().map_err(|e| ClientError::from_js(&e))?;
        if !resp.ok() {
            return Err(ClientError::Status { status: resp.status() });
        }
        let text = JsFuture::from(resp.text().map_err(|e| ClientError::from_js(&e))?)
            .await
            .map_err(|e| ClientError::from_js(&e))?;
        let text = text.as_string().unwrap_or_default();
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_with_or_without_trailing_slash() {
        let req = ApiRequest::new(Endpoint::PointsInfo);
        assert_eq!(req.url("http://localhost:8000"), "http://localhost:8000/points_info");
        assert_eq!(req.url("http://localhost:8000/"), "http://localhost:8000/points_info");
    }

    #[test]
    fn only_points_info_is_a_read() {
        assert_eq!(Endpoint::PointsInfo.method(), "GET");
        for ep in [Endpoint::StartTimer, Endpoint::StopTimer, Endpoint::ResetTimer, Endpoint::AddPoints] {
            assert_eq!(ep.method(), "POST");
        }
        assert_eq!(ApiRequest::new(Endpoint::ResetTimer).body, None);
    }

    #[test]
    fn add_points_body() {
        let req = ApiRequest::add_points_from_input(Some("25.5")).unwrap();
        assert_eq!(req.endpoint, Endpoint::AddPoints);
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({ "points": 25.5 }));
    }

    #[test]
    fn non_numeric_input_builds_no_request() {
        assert!(matches!(
            ApiRequest::add_points_from_input(Some("twelve")),
            Err(InputError::NotANumber(_))
        ));
        assert_eq!(ApiRequest::add_points_from_input(None), Err(InputError::Cancelled));
    }
}
