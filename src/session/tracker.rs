//! Request Tracker
//!
//! Axum middleware that tags every request with a tracking token.
//! A client supplied `X-Request-Id` header wins; otherwise a token is generated from
//! the per-client segment and a process-wide sequence number.

use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::Next;
use axum::response::Response;
use dashmap::DashMap;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

const SEGMENT_LEN: usize = 10;

/// The tracking token attached to a request's extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

pub struct RequestTracker {
    name: String,
    fallback_segment: String,
    segments: DashMap<IpAddr, String>,
    sequence: AtomicU64,
}

impl RequestTracker {
    pub fn new(name: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            fallback_segment: random_segment(),
            segments: DashMap::new(),
            sequence: AtomicU64::new(0),
        })
    }

    /// Issues the next token for a client.
    ///
    /// Clients are told apart by IP address. Requests without connection info
    /// share the process-wide fallback segment.
    pub fn next_token(&self, peer: Option<IpAddr>) -> String {
        let segment = match peer {
            Some(ip) => self.segment_for(ip),
            None => self.fallback_segment.clone(),
        };
        let seq = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;

        format!("{}/{}-{:06}", self.name, segment, seq)
    }

    fn segment_for(&self, ip: IpAddr) -> String {
        let known = self.segments.get(&ip).map(|segment| segment.value().clone());
        if let Some(segment) = known {
            return segment;
        }

        // shard guards must be dropped before len() locks every shard
        let segment = self
            .segments
            .entry(ip)
            .or_insert_with(random_segment)
            .value()
            .clone();
        tracing::debug!("New client {} ({} known)", ip, self.client_count());
        segment
    }

    /// Number of distinct clients seen so far.
    pub fn client_count(&self) -> usize {
        self.segments.len()
    }
}

// uuid simple form is lowercase hex, so the segment never contains '-'
fn random_segment() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..SEGMENT_LEN].to_string()
}

pub async fn track_requests(
    State(tracker): State<Arc<RequestTracker>>,
    mut req: Request,
    next: Next,
) -> Response {
    let supplied = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_string);

    let token = match supplied {
        Some(token) => token,
        None => {
            let peer = req
                .extensions()
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip());
            tracker.next_token(peer)
        }
    };

    req.extensions_mut().insert(RequestId(token));
    next.run(req).await
}
