use songkick_api::{ClientConfig, Songkick};
use url::Url;
use wiremock::MockServer;

pub const TEST_KEY: &str = "test-key";

/// Client pointed at `{server}/api/3.0/`.
pub fn mock_client(server: &MockServer) -> Songkick {
    let base = Url::parse(&format!("{}/api/3.0/", server.uri())).expect("mock server uri");
    let config = ClientConfig::builder().with_base_url(base).build();
    Songkick::with_config(TEST_KEY, config).expect("client should build")
}

/// Client pointed at a local port nothing listens on.
pub fn unreachable_client() -> Songkick {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);

    let base = Url::parse(&format!("http://127.0.0.1:{port}/api/3.0/")).expect("base url");
    let config = ClientConfig::builder().with_base_url(base).build();
    Songkick::with_config(TEST_KEY, config).expect("client should build")
}

/// Client for the real service.
///
/// Panics when `SONGKICK_API_KEY` is unset: live tests should not silently
/// pass without a key.
pub fn live_client() -> Songkick {
    Songkick::from_env().unwrap_or_else(|e| {
        panic!(
            "\n\nLive tests need an API key: {e}\n\
             Export one and re-run:\n  \
             SONGKICK_API_KEY=... cargo test --test integration -- --ignored\n\n"
        )
    })
}
