use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::{
    Router,
    extract::{ConnectInfo, Request, State},
    http::{HeaderName, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
};
use tracing::warn;

const LIMIT_HEADER: HeaderName = HeaderName::from_static("ratelimit-limit");
const REMAINING_HEADER: HeaderName = HeaderName::from_static("ratelimit-remaining");
const RESET_HEADER: HeaderName = HeaderName::from_static("ratelimit-reset");

const RATE_LIMITED_BODY: &str = "Too many requests, please try again later.";

/// Fixed-window counter per client IP. State is process-wide and resets on
/// restart, like the Store.
pub(crate) struct RateLimiter {
    window: Duration,
    max_requests: u32,
    windows: Mutex<HashMap<IpAddr, Window>>,
}

struct Window {
    started_at: Instant,
    count: u32,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct RateLimitDecision {
    pub(crate) allowed: bool,
    pub(crate) limit: u32,
    pub(crate) remaining: u32,
    pub(crate) reset_after_secs: u64,
}

impl RateLimiter {
    pub(crate) fn new(window: Duration, max_requests: u32) -> Self {
        Self {
            window,
            max_requests,
            windows: Mutex::new(HashMap::new()),
        }
    }

    pub(crate) fn check(&self, ip: IpAddr, now: Instant) -> RateLimitDecision {
        let mut windows = match self.windows.lock() {
            Ok(windows) => windows,
            // a poisoned limiter fails open rather than blocking traffic
            Err(poisoned) => poisoned.into_inner(),
        };

        let window = windows.entry(ip).or_insert(Window {
            started_at: now,
            count: 0,
        });
        if now.duration_since(window.started_at) >= self.window {
            window.started_at = now;
            window.count = 0;
        }

        let allowed = window.count < self.max_requests;
        if allowed {
            window.count += 1;
        }

        let elapsed = now.duration_since(window.started_at);
        RateLimitDecision {
            allowed,
            limit: self.max_requests,
            remaining: self.max_requests.saturating_sub(window.count),
            reset_after_secs: self.window.saturating_sub(elapsed).as_secs(),
        }
    }
}

fn client_ip(request: &Request) -> IpAddr {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|connect_info| connect_info.0.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST))
}

fn stamp_headers(response: &mut Response, decision: &RateLimitDecision) {
    let headers = response.headers_mut();
    headers.insert(LIMIT_HEADER, HeaderValue::from(decision.limit));
    headers.insert(REMAINING_HEADER, HeaderValue::from(decision.remaining));
    headers.insert(RESET_HEADER, HeaderValue::from(decision.reset_after_secs));
}

pub(crate) async fn rate_limit_middleware(
    State(limiter): State<Arc<RateLimiter>>,
    request: Request,
    next: Next,
) -> Response {
    let ip = client_ip(&request);
    let decision = limiter.check(ip, Instant::now());

    if !decision.allowed {
        warn!("rate limit exceeded for {ip}");
        let mut response =
            (StatusCode::TOO_MANY_REQUESTS, RATE_LIMITED_BODY).into_response();
        stamp_headers(&mut response, &decision);
        return response;
    }

    let mut response = next.run(request).await;
    stamp_headers(&mut response, &decision);
    response
}

pub(crate) fn apply_rate_limit(router: Router, limiter: Arc<RateLimiter>) -> Router {
    router.layer(middleware::from_fn_with_state(
        limiter,
        rate_limit_middleware,
    ))
}
