#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use jiff::civil::date;
use sprout_core::{
    InMemoryGateway, ManagerBuilder, PlantType, Project, ProjectFields, ProjectId, ProjectManager,
};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
};

/// Helper function to create a project with a fixed start date
pub fn project(id: &str, name: &str, plant_type: PlantType, description: &str) -> Project {
    Project::new(
        ProjectId::from(id),
        ProjectFields {
            name: name.to_string(),
            description: description.to_string(),
            plant_type,
            start_date: date(2024, 3, 1),
        },
    )
}

/// Helper function to create a loaded manager over an in-memory store
pub async fn create_test_manager(seed: Vec<Project>) -> (Arc<InMemoryGateway>, ProjectManager) {
    let gateway = Arc::new(InMemoryGateway::with_projects(seed));
    let manager = ManagerBuilder::new()
        .with_gateway(gateway.clone())
        .build()
        .await
        .expect("Failed to create manager");
    (gateway, manager)
}

/// A request received by [`StubServer`].
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub body: String,
}

/// Minimal HTTP server answering each connection with the next canned
/// response and recording what it was asked.
pub struct StubServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl StubServer {
    /// Start serving `responses` (status, JSON body) in order, one per
    /// connection.
    pub async fn start(responses: Vec<(u16, &'static str)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub server");
        let addr = listener.local_addr().expect("Failed to read local addr");
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = requests.clone();
        tokio::spawn(async move {
            for (status, body) in responses {
                let Ok((mut stream, _)) = listener.accept().await else {
                    return;
                };
                if let Some(request) = read_request(&mut stream).await {
                    recorded.lock().unwrap().push(request);
                }
                let response = format!(
                    "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

async fn read_request(stream: &mut TcpStream) -> Option<Recorded> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buffer.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buffer.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buffer[..header_end]).to_string();
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buffer.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..n]);
    }

    let mut request_line = head.lines().next()?.split_whitespace();
    Some(Recorded {
        method: request_line.next()?.to_string(),
        path: request_line.next()?.to_string(),
        body: String::from_utf8_lossy(&buffer[header_end..]).to_string(),
    })
}
