use std::process::{Child, Command, Stdio};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;

static SERVER: OnceLock<Option<TestServer>> = OnceLock::new();

pub struct TestServer {
    pub base_url: String,
    #[allow(dead_code)]
    child: Child,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let docs_path = std::env::temp_dir().join(format!("openapi-{}.json", port));

        let mut cmd = Command::new(env!("CARGO_BIN_EXE_coffee-addiction-api"));
        cmd.env("PORT", port.to_string())
            .env("OPENAPI_PATH", docs_path)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        // Tests that exercise tokens need a known secret unless one is set
        if std::env::var("JWT_SECRET").is_err() {
            cmd.env("JWT_SECRET", "integration-test-secret");
        }

        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK
                    || resp.status() == StatusCode::SERVICE_UNAVAILABLE
                {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!(
            "server did not become ready on {} within {:?}",
            self.base_url,
            timeout
        )
    }
}

/// Spawn (once) and return the shared test server, or `None` when no
/// database is configured, in which case the caller should skip.
pub async fn server() -> Result<Option<&'static TestServer>> {
    let server = SERVER.get_or_init(|| {
        if std::env::var("DATABASE_URL").is_err() {
            eprintln!("DATABASE_URL not set; skipping integration tests");
            return None;
        }
        Some(TestServer::spawn().expect("failed to spawn server binary"))
    });

    match server {
        Some(server) => {
            server.wait_ready(Duration::from_secs(10)).await?;
            Ok(Some(server))
        }
        None => Ok(None),
    }
}

/// Unique username for a test run.
pub fn unique_username(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .subsec_nanos();
    format!("{}_{}_{}", prefix, std::process::id(), nanos)
}

/// Sign up a fresh user and return (username, token).
pub async fn signup_user(base_url: &str, prefix: &str, password: &str) -> Result<(String, String)> {
    let client = reqwest::Client::new();
    let username = unique_username(prefix);

    let res = client
        .post(format!("{}/auth/signup", base_url))
        .json(&serde_json::json!({ "username": username, "password": password }))
        .send()
        .await?;
    anyhow::ensure!(res.status() == StatusCode::OK, "signup failed: {}", res.status());

    let body = res.json::<serde_json::Value>().await?;
    let token = body["token"]
        .as_str()
        .context("signup response missing token")?
        .to_string();

    Ok((username, token))
}
