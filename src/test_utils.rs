//! Shared test utilities for samarth
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use crate::api::{ApiEndpoint, ApiRequest, ApiResponse, Location, QueryResult, Source};
    use crate::app::App;
    use crate::config::Config;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use serde_json::json;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc::{self, Receiver, Sender};
    use std::thread::JoinHandle;

    /// Helper to create App with default config and no worker attached
    pub fn test_app() -> App {
        App::new(
            &Config::default(),
            ApiEndpoint::select(&Location::local_file()),
        )
    }

    /// App wired to in-memory channels instead of a worker thread
    ///
    /// Returns the receiving end of the request channel (to observe what the app
    /// sends) and the sending end of the response channel (to play the worker).
    pub fn app_with_channels() -> (App, Receiver<ApiRequest>, Sender<ApiResponse>) {
        let mut app = test_app();
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        app.api.set_channels(request_tx, response_rx);
        (app, request_rx, response_tx)
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Replace the question field contents
    pub fn type_query(app: &mut App, text: &str) {
        app.input.set_text(text);
    }

    /// The rainfall scenario payload: one source without a period
    pub fn rainfall_result() -> QueryResult {
        QueryResult {
            success: true,
            answer: "42mm".to_string(),
            sources: vec![Source {
                dataset: "RainDB".to_string(),
                region: "X".to_string(),
                file: "x.csv".to_string(),
                period: None,
                description: "annual rainfall".to_string(),
            }],
            raw_data: json!({"value": 42}),
            error: None,
        }
    }

    /// Run a future to completion on a fresh current-thread runtime
    pub fn run_async<F: std::future::Future>(f: F) -> F::Output {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to create tokio runtime");
        rt.block_on(f)
    }

    /// Serve exactly one HTTP response on a loopback port
    ///
    /// Returns the base URL and a handle yielding the raw request text.
    pub fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let base_url = format!("http://{}", listener.local_addr().expect("local addr"));
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );

        let handle = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept");
            let request = read_request(&mut stream);
            stream.write_all(response.as_bytes()).expect("write response");
            stream.flush().expect("flush response");
            request
        });

        (base_url, handle)
    }

    fn read_request(stream: &mut impl Read) -> String {
        let mut data = Vec::new();
        let mut buf = [0u8; 1024];

        loop {
            let n = stream.read(&mut buf).expect("read request");
            if n == 0 {
                break;
            }
            data.extend_from_slice(&buf[..n]);

            let text = String::from_utf8_lossy(&data);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if data.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }

        String::from_utf8_lossy(&data).into_owned()
    }

    /// A loopback URL nothing is listening on
    pub fn unused_local_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);
        format!("http://{}", addr)
    }
}
