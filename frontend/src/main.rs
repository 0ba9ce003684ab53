//! Frontend application entry point.

use frontend::app::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use axum::{extract::Request, middleware::Next};
        use dioxus::logger::tracing;
        use dioxus::server::axum;

        match backend::config::ApiConfig::from_env() {
            Ok(config) => tracing::info!("restaurant API at {}", config.base_url),
            Err(e) => tracing::error!("invalid restaurant API configuration: {e:#}"),
        }

        Ok(dioxus::server::router(App)
            .layer(axum::middleware::from_fn(
                |request: Request, next: Next| async move {
                    let method = request.method().clone();
                    let path = request.uri().path().to_string();
                    let res = next.run(request).await;
                    tracing::info!("{} {} {}", method, path, res.status());
                    res
                },
            )))
    });
}
