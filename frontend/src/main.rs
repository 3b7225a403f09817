//! Frontend application entry point.

use frontend::app::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use axum::{extract::Request, middleware::Next};
        use backend::foodbook_utils::foodbook_client::FoodbookClient;
        use dioxus::server::axum;

        let foodbook = FoodbookClient::shared().expect("Foodbook client misconfigured!").clone();

        Ok(dioxus::server::router(App)
            // product sheets, auth status and the generic Foodbook proxy
            .merge(backend::server_extra::router(foodbook))
            .layer(axum::middleware::from_fn(
                |request: Request, next: Next| async move {
                    let path = request.uri().path().to_string();
                    let res = next.run(request).await;
                    dioxus::logger::tracing::debug!("{} {}", res.status(), path);
                    res
                },
            )))
    });
}
