//! Recording transport stub shared by the façade tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use soundtouch_api::{ClientConfig, SoundTouchClient, Transport, TransportError};

/// One request seen by the stub
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Get(String),
    Post { path: String, body: Option<String> },
}

/// Mock transport for testing
///
/// GETs answer with the canned body or error registered for the path; a path
/// with nothing registered answers with a connection error. POSTs succeed
/// unless an error is registered for the path. Every call is recorded.
/// Clones share the same recording.
#[derive(Debug, Clone, Default)]
pub struct RecordingTransport {
    calls: Arc<Mutex<Vec<Call>>>,
    responses: Arc<Mutex<HashMap<String, Result<String, TransportError>>>>,
    post_errors: Arc<Mutex<HashMap<String, TransportError>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, path: &str, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), Ok(body.to_string()));
        self
    }

    pub fn with_get_error(self, path: &str, error: TransportError) -> Self {
        self.responses.lock().unwrap().insert(path.to_string(), Err(error));
        self
    }

    pub fn with_post_error(self, path: &str, error: TransportError) -> Self {
        self.post_errors.lock().unwrap().insert(path.to_string(), error);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Bodies of all POSTs, in order
    pub fn posted(&self) -> Vec<(String, String)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Post { path, body } => Some((path, body.unwrap_or_default())),
                Call::Get(_) => None,
            })
            .collect()
    }

    /// Client with default configuration for host 192.0.2.1 using this stub
    pub fn client(&self) -> SoundTouchClient {
        SoundTouchClient::with_transport(ClientConfig::new("192.0.2.1"), self.clone())
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn get(&self, path: &str) -> Result<String, TransportError> {
        self.calls.lock().unwrap().push(Call::Get(path.to_string()));
        self.responses
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .unwrap_or_else(|| Err(TransportError::Connection(format!("no canned response for {}", path))))
    }

    async fn post(&self, path: &str, body: Option<&str>) -> Result<(), TransportError> {
        self.calls.lock().unwrap().push(Call::Post {
            path: path.to_string(),
            body: body.map(str::to_string),
        });
        match self.post_errors.lock().unwrap().get(path) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

/// `<key>` body the device expects for `name`
pub fn key_body(name: &str) -> String {
    format!(r#"<key state="press" sender="Gabbo">{}</key>"#, name)
}

pub fn now_playing_with_status(status: &str) -> String {
    format!(
        r#"<nowPlaying deviceID="689E19B8BB8A" source="INTERNET_RADIO">
            <ContentItem source="INTERNET_RADIO" location="4712" isPresetable="true"><itemName>Radio</itemName></ContentItem>
            <track>Song</track>
            <artist>Artist</artist>
            <playStatus>{}</playStatus>
        </nowPlaying>"#,
        status
    )
}
