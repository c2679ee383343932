//! Security middleware for enforcing HTTPS and transport-level policies.
//!
//! In production this middleware rejects plain-HTTP requests (honoring
//! `X-Forwarded-Proto` from trusted proxies), validates the Origin header
//! shape, and stamps standard security headers onto every response. In
//! development it stays out of the way.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::{ErrorBadRequest, ErrorForbidden},
    http::header::{self, HeaderValue},
    Error,
};
use futures_util::future::LocalBoxFuture;
use std::{
    env,
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

/// Security middleware factory
pub struct SecurityMiddleware {
    /// Whether to enforce HTTPS (disabled in development)
    enforce_https: bool,
    /// Whether to add security headers
    add_security_headers: bool,
    /// List of trusted proxies for X-Forwarded-* headers
    trusted_proxies: Vec<String>,
}

impl SecurityMiddleware {
    /// Creates a new security middleware with environment-based configuration
    pub fn new() -> Self {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        let enforce_https = environment == "production";
        let add_security_headers = environment == "production";

        let trusted_proxies = env::var("TRUSTED_PROXIES")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        log::info!(
            "Security middleware configured: enforce_https={}, add_headers={}, trusted_proxies={:?}",
            enforce_https, add_security_headers, trusted_proxies
        );

        Self {
            enforce_https,
            add_security_headers,
            trusted_proxies,
        }
    }

    /// Creates a security middleware for development (no HTTPS enforcement)
    pub fn development() -> Self {
        Self {
            enforce_https: false,
            add_security_headers: false,
            trusted_proxies: vec!["127.0.0.1".to_string(), "::1".to_string()],
        }
    }

    /// Creates a security middleware for production (full security)
    pub fn production() -> Self {
        Self {
            enforce_https: true,
            add_security_headers: true,
            trusted_proxies: vec![],
        }
    }

    /// Adds a trusted proxy to the whitelist
    pub fn with_trusted_proxy(mut self, proxy: String) -> Self {
        self.trusted_proxies.push(proxy);
        self
    }
}

impl Default for SecurityMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, B> Transform<S, ServiceRequest> for SecurityMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SecurityMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SecurityMiddlewareService {
            service: Rc::new(service),
            enforce_https: self.enforce_https,
            add_security_headers: self.add_security_headers,
            trusted_proxies: self.trusted_proxies.clone(),
        }))
    }
}

/// Security middleware service implementation
pub struct SecurityMiddlewareService<S> {
    service: Rc<S>,
    enforce_https: bool,
    add_security_headers: bool,
    trusted_proxies: Vec<String>,
}

impl<S, B> Service<ServiceRequest> for SecurityMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let enforce_https = self.enforce_https;
        let add_security_headers = self.add_security_headers;
        let trusted_proxies = self.trusted_proxies.clone();

        Box::pin(async move {
            if enforce_https && !is_secure_request(&req, &trusted_proxies) {
                log::warn!(
                    "Insecure request blocked: {} {}",
                    req.method(),
                    req.path()
                );
                return Err(ErrorForbidden("HTTPS required"));
            }

            if let Some(origin) = req.headers().get(header::ORIGIN) {
                if !is_valid_origin(origin) {
                    log::warn!(
                        "Invalid origin blocked: {:?} for {} {}",
                        origin,
                        req.method(),
                        req.path()
                    );
                    return Err(ErrorBadRequest("Invalid request origin"));
                }
            }

            let mut response = service.call(req).await?;

            if add_security_headers {
                add_security_response_headers(&mut response);
            }

            Ok(response)
        })
    }
}

/// Checks if the request is secure (HTTPS or from a trusted source)
fn is_secure_request(req: &ServiceRequest, trusted_proxies: &[String]) -> bool {
    let conn_info = req.connection_info();
    if conn_info.scheme() == "https" {
        return true;
    }

    // X-Forwarded-Proto is only believed when the peer is a trusted proxy
    if let Some(forwarded_proto) = req.headers().get("x-forwarded-proto") {
        if let Ok(proto) = forwarded_proto.to_str() {
            let peer_addr = conn_info.peer_addr().unwrap_or("");
            if is_trusted_proxy(peer_addr, trusted_proxies) && proto == "https" {
                return true;
            }
        }
    }

    let host = conn_info.host();
    if host == "localhost" || host.starts_with("127.0.0.1") || host.starts_with("[::1]") {
        return true;
    }

    false
}

/// Checks if the given IP address is in the trusted proxy list
fn is_trusted_proxy(peer_addr: &str, trusted_proxies: &[String]) -> bool {
    // Peer address may arrive as "ip:port"
    let ip = peer_addr.split(':').next().unwrap_or(peer_addr);

    trusted_proxies.iter().any(|trusted| {
        trusted == ip || trusted == peer_addr
    })
}

/// Validates the Origin header shape; full origin checks stay with CORS
fn is_valid_origin(origin: &HeaderValue) -> bool {
    if let Ok(origin_str) = origin.to_str() {
        if origin_str.starts_with("http://") || origin_str.starts_with("https://") {
            return true;
        }
    }

    false
}

/// Adds security headers to the response
fn add_security_response_headers<B>(response: &mut ServiceResponse<B>) {
    let headers = response.headers_mut();

    // Strict Transport Security (HSTS), 1 year including subdomains
    headers.insert(
        header::HeaderName::from_static("strict-transport-security"),
        HeaderValue::from_static("max-age=31536000; includeSubDomains"),
    );

    // Prevent MIME type sniffing
    headers.insert(
        header::HeaderName::from_static("x-content-type-options"),
        HeaderValue::from_static("nosniff"),
    );

    // Prevent clickjacking
    headers.insert(
        header::HeaderName::from_static("x-frame-options"),
        HeaderValue::from_static("DENY"),
    );

    // XSS filtering for older browsers
    headers.insert(
        header::HeaderName::from_static("x-xss-protection"),
        HeaderValue::from_static("1; mode=block"),
    );

    headers.insert(
        header::HeaderName::from_static("referrer-policy"),
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    // API responses embed nothing and may not be framed
    headers.insert(
        header::HeaderName::from_static("content-security-policy"),
        HeaderValue::from_static("default-src 'none'; frame-ancestors 'none';"),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_trusted_proxy() {
        let proxies = vec!["10.0.0.1".to_string()];

        assert!(is_trusted_proxy("10.0.0.1:4431", &proxies));
        assert!(is_trusted_proxy("10.0.0.1", &proxies));
        assert!(!is_trusted_proxy("10.0.0.2:80", &proxies));
    }

    #[test]
    fn test_is_valid_origin() {
        assert!(is_valid_origin(&HeaderValue::from_static("https://app.bitelog.io")));
        assert!(is_valid_origin(&HeaderValue::from_static("http://localhost:3000")));
        assert!(!is_valid_origin(&HeaderValue::from_static("file:///etc/passwd")));
        assert!(!is_valid_origin(&HeaderValue::from_static("not a url")));
    }
}
