use std::convert::Infallible;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;

/// Origin address of the caller.
///
/// The first `X-Forwarded-For` entry when present, else the TCP peer
/// address, else `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientAddr(pub Option<String>);

impl<S> FromRequestParts<S> for ClientAddr
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let forwarded = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_owned);

        let peer = || {
            parts
                .extensions
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip().to_string())
        };

        Ok(Self(forwarded.or_else(peer)))
    }
}

#[cfg(test)]
mod test {
    use axum::http::Request;

    use super::*;

    async fn extract(req: Request<()>) -> Option<String> {
        let (mut parts, _) = req.into_parts();
        let ClientAddr(addr) = ClientAddr::from_request_parts(&mut parts, &()).await.unwrap();
        addr
    }

    #[tokio::test]
    async fn forwarded_for_first_entry_wins() {
        let mut req = Request::builder()
            .header("x-forwarded-for", " 198.51.100.4 , 10.0.0.1")
            .body(())
            .unwrap();
        req.extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([127, 0, 0, 1], 4000))));
        assert_eq!(extract(req).await.as_deref(), Some("198.51.100.4"));
    }

    #[tokio::test]
    async fn peer_address_without_header() {
        let mut req = Request::builder().body(()).unwrap();
        req.extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([192, 0, 2, 9], 4000))));
        assert_eq!(extract(req).await.as_deref(), Some("192.0.2.9"));
    }

    #[tokio::test]
    async fn unknown_without_header_or_peer() {
        let req = Request::builder().body(()).unwrap();
        assert_eq!(extract(req).await, None);
    }
}
