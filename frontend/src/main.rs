//! Weave directory entry point.

use frontend::app::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use axum::{extract::Request, middleware::Next};
        use dioxus::logger::tracing;
        use dioxus::server::axum;

        let api_config = backend::config::api_config();
        tracing::info!(
            "forwarding profile requests to {} (timeout {:?})",
            api_config.base_url, api_config.timeout
        );

        Ok(dioxus::server::router(App)
            .layer(axum::middleware::from_fn(
                |request: Request, next: Next| async move {
                    let method = request.method().clone();
                    let path = request.uri().path().to_string();
                    let res = next.run(request).await;
                    tracing::debug!("{} {} -> {}", method, path, res.status());
                    res
                },
            )))
    });
}
