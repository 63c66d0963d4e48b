use async_trait::async_trait;
use builtwith::prelude::*;
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// One GET request as seen by the mock transport.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub endpoint: String,
    pub query: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Mock ApiTransport for testing
///
/// Answers from canned responses: queries carrying `UPDATE=1` get the
/// update-metadata response, everything else gets the lookup response.
/// The request log is shared across clones, so tests keep a clone as a
/// probe after handing the transport to the client.
#[derive(Clone)]
pub struct MockTransport {
    update_response: Option<Value>,
    lookup_response: Option<Value>,
    should_fail: bool,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            update_response: None,
            lookup_response: None,
            should_fail: false,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_update_response(mut self, response: Value) -> Self {
        self.update_response = Some(response);
        self
    }

    pub fn with_lookup_response(mut self, response: Value) -> Self {
        self.lookup_response = Some(response);
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ApiTransport for MockTransport {
    async fn get_json(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Value> {
        self.requests.lock().unwrap().push(RecordedRequest {
            endpoint: endpoint.to_string(),
            query: query
                .iter()
                .map(|(n, v)| (n.to_string(), v.to_string()))
                .collect(),
        });

        if self.should_fail {
            anyhow::bail!("Mock transport failure");
        }

        let is_update = query.iter().any(|(n, v)| *n == "UPDATE" && *v == "1");
        let response = if is_update {
            &self.update_response
        } else {
            &self.lookup_response
        };

        match response {
            Some(value) => Ok(value.clone()),
            None => anyhow::bail!("Mock transport has no response configured"),
        }
    }
}
