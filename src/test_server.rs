//! In-process HTTP/1.1 server for exercising probes without leaving the machine.
//!
//! Routes:
//! - `/status/<code>` answers with `<code>` and the fingerprint headers below
//! - `/bare` answers 200 without fingerprint headers
//! - `/multi` answers 200 with two `Set-Cookie` values
//! - `/slow` answers 200 after two seconds
//!
//! Every response echoes the request method in `x-echo-method`.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::time::Duration;

use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

pub const SERVER: &str = "test-server/1.0";
pub const POWERED_BY: &str = "hyper";
pub const MAX_FORWARDS: &str = "10";

async fn handle(req: Request<Incoming>) -> Result<Response<String>, Infallible> {
    let path = req.uri().path().to_string();
    let builder = Response::builder().header("x-echo-method", req.method().as_str());

    let response = match path.as_str() {
        "/bare" => builder.status(StatusCode::OK),
        "/multi" => builder
            .status(StatusCode::OK)
            .header("set-cookie", "first=1")
            .header("set-cookie", "second=2"),
        "/slow" => {
            tokio::time::sleep(Duration::from_secs(2)).await;
            builder.status(StatusCode::OK)
        }
        _ => {
            let status = path
                .strip_prefix("/status/")
                .and_then(|code| code.parse::<u16>().ok())
                .unwrap_or(200u16);
            builder
                .status(status)
                .header("server", SERVER)
                .header("x-powered-by", POWERED_BY)
                .header("max-forwards", MAX_FORWARDS)
        }
    };

    Ok(response.body(String::new()).expect("valid response"))
}

/// Start a server on an ephemeral localhost port and return its address.
pub async fn spawn() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            tokio::spawn(async move {
                let _ = http1::Builder::new()
                    .serve_connection(TokioIo::new(stream), service_fn(handle))
                    .await;
            });
        }
    });

    addr
}

/// An address nothing is listening on.
pub async fn unused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    listener.local_addr().expect("local addr")
}
