// Shared one-time server bootstrapping across integration tests.
use std::{
    path::PathBuf,
    sync::{Arc, OnceLock},
    time::Duration,
};

// Base URL published once the server has bound its port.
static SERVER_URL: OnceLock<String> = OnceLock::new();
static SERVER_READY: OnceLock<()> = OnceLock::new();

pub const INDEX_HTML: &str = "<!doctype html><title>shooter</title>";

// Ensure the test server is running and return the shared base URL.
pub fn ensure_server() -> &'static str {
    SERVER_READY.get_or_init(|| {
        let root = build_static_root();
        let published_url = Arc::new(OnceLock::<String>::new());
        let published_url_thread = Arc::clone(&published_url);
        // OS thread so the server outlives individual `#[tokio::test]` runtimes.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("test runtime");
            runtime.block_on(async move {
                // Ephemeral port to avoid collisions with local services.
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral test port");
                let addr = listener.local_addr().expect("get local addr");
                let _ = published_url_thread.set(format!("http://{}", addr));
                asset_server::run(listener, asset_server::AppState::with_static_root(root))
                    .await
                    .expect("server failed");
            });
        });
        wait_for_server_url_and_readiness(published_url);
    });

    SERVER_URL
        .get()
        .expect("server url should be initialized")
        .as_str()
}

// Static root with an index page and one sprite, unique per test binary run.
fn build_static_root() -> PathBuf {
    let root = std::env::temp_dir().join(format!("asset-server-it-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(root.join("assets")).expect("create static root");
    std::fs::write(root.join("index.html"), INDEX_HTML).expect("write index");
    std::fs::write(root.join("assets").join("bullet6.png"), [0x89, b'P', b'N', b'G'])
        .expect("write sprite");
    root
}

fn wait_for_server_url_and_readiness(published_url: Arc<OnceLock<String>>) {
    let base_url = loop {
        if let Some(url) = published_url.get() {
            break url.clone();
        }
        std::thread::sleep(Duration::from_millis(10));
    };

    let _ = SERVER_URL.set(base_url.clone());

    let addr = base_url
        .strip_prefix("http://")
        .expect("base url should use http://");

    // Retry for a short period to avoid racing server bind/accept.
    for _ in 0..100 {
        if std::net::TcpStream::connect(addr).is_ok() {
            return;
        }
        std::thread::sleep(Duration::from_millis(20));
    }

    panic!("server did not become ready in time");
}
