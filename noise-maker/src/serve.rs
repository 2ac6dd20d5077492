use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    sync::Arc,
};

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderValue, Response, header},
    response::IntoResponse,
    routing::get,
};
use tokio::{net::TcpListener, signal};

#[derive(Clone)]
struct Weblog(Arc<String>);

pub async fn serve(log: String, port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)), port);
    let listener = TcpListener::bind(addr).await?;
    println!("Serving {} bytes at http://{addr}/weblog.csv", log.len());
    axum::serve(listener, router(Weblog(Arc::new(log))))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

fn router(log: Weblog) -> Router {
    Router::new()
        .route("/up", get(up))
        .route("/weblog.csv", get(weblog))
        .with_state(log)
}

async fn weblog(State(Weblog(log)): State<Weblog>) -> Response<Body> {
    (
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/csv; charset=utf-8"),
        )],
        log.as_ref().clone(),
    )
        .into_response()
}

async fn up() -> Response<Body> {
    ().into_response()
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
