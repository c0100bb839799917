use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use uuid::Uuid;

use intake::config::{Config, SmtpConfig};

/// A running test server instance with a dedicated test database and a
/// captive SMTP sink.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: PgPool,
    pub client: Client,
    pub db_name: String,
    pub smtp: MockSmtp,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Post a contact form submission, return (body, status).
    pub async fn submit(&self, form: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/contact"))
            .json(form)
            .send()
            .await
            .expect("submit request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn get(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn submission_count(&self) -> i64 {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM contact_submissions")
            .fetch_one(&self.pool)
            .await
            .expect("count query failed");
        row.0
    }
}

/// Minimal plaintext SMTP sink. Speaks just enough of the protocol for
/// lettre's `none` TLS mode: greeting, EHLO with AUTH PLAIN, and a DATA
/// phase whose payload is captured for assertions.
pub struct MockSmtp {
    pub port: u16,
    pub messages: Arc<Mutex<Vec<String>>>,
}

impl MockSmtp {
    pub async fn spawn() -> MockSmtp {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock SMTP port");
        let port = listener.local_addr().unwrap().port();
        let messages: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

        let captured = messages.clone();
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let captured = captured.clone();
                tokio::spawn(async move {
                    let _ = serve_smtp(stream, captured).await;
                });
            }
        });

        MockSmtp { port, messages }
    }

    pub fn received(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

async fn serve_smtp(
    stream: tokio::net::TcpStream,
    messages: Arc<Mutex<Vec<String>>>,
) -> std::io::Result<()> {
    let (read_half, mut write_half) = stream.into_split();
    let mut reader = BufReader::new(read_half);

    write_half.write_all(b"220 mock.test ESMTP ready\r\n").await?;

    let mut line = String::new();
    let mut in_data = false;
    let mut body = String::new();

    loop {
        line.clear();
        if reader.read_line(&mut line).await? == 0 {
            break;
        }

        if in_data {
            if line.trim_end() == "." {
                in_data = false;
                messages.lock().unwrap().push(std::mem::take(&mut body));
                write_half
                    .write_all(b"250 2.0.0 Ok: queued as mock-0001\r\n")
                    .await?;
            } else {
                body.push_str(&line);
            }
            continue;
        }

        let cmd = line.trim_end().to_ascii_uppercase();
        if cmd.starts_with("EHLO") || cmd.starts_with("HELO") {
            write_half
                .write_all(b"250-mock.test\r\n250-AUTH PLAIN\r\n250 8BITMIME\r\n")
                .await?;
        } else if cmd.starts_with("AUTH") {
            write_half
                .write_all(b"235 2.7.0 Authentication successful\r\n")
                .await?;
        } else if cmd.starts_with("DATA") {
            in_data = true;
            write_half
                .write_all(b"354 End data with <CR><LF>.<CR><LF>\r\n")
                .await?;
        } else if cmd.starts_with("QUIT") {
            write_half.write_all(b"221 2.0.0 Bye\r\n").await?;
            break;
        } else {
            write_half.write_all(b"250 2.0.0 Ok\r\n").await?;
        }
    }

    Ok(())
}

/// Spawn a test app wired to a working mock SMTP sink.
pub async fn spawn_app() -> TestApp {
    let smtp = MockSmtp::spawn().await;
    let port = smtp.port;
    spawn_app_with_smtp_port(smtp, port).await
}

/// Spawn a test app whose SMTP port has nothing listening on it, so every
/// send fails at connect time.
pub async fn spawn_app_with_dead_smtp() -> TestApp {
    let smtp = MockSmtp::spawn().await;

    // Grab a port that was live once and is now closed.
    let doomed = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind throwaway port");
    let dead_port = doomed.local_addr().unwrap().port();
    drop(doomed);

    spawn_app_with_smtp_port(smtp, dead_port).await
}

async fn spawn_app_with_smtp_port(smtp: MockSmtp, smtp_port: u16) -> TestApp {
    let _ = dotenvy::dotenv();

    let base_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");

    // Create a unique test database
    let db_name = format!("intake_test_{}", Uuid::now_v7().to_string().replace('-', ""));

    let admin_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.clone());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url)
        .await
        .expect("Failed to connect to postgres for test DB creation");

    sqlx::query(&format!("CREATE DATABASE \"{db_name}\""))
        .execute(&admin_pool)
        .await
        .expect("Failed to create test database");

    admin_pool.close().await;

    let test_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/{db_name}"))
        .unwrap_or_else(|| base_url.clone());

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&test_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations on test database");

    let config = Config {
        database_url: test_url,
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to a random port
        max_body_size: 1_048_576,
        log_level: "warn".to_string(),
        smtp: SmtpConfig {
            host: "127.0.0.1".to_string(),
            port: smtp_port,
            user: "mock-user".to_string(),
            pass: "mock-pass".to_string(),
            from: "intake@test.com".to_string(),
            tls_mode: "none".to_string(),
        },
        admin_email: "admin@test.com".to_string(),
    };

    let (app, _state) = intake::build_app(pool.clone(), config);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        addr,
        pool,
        client,
        db_name,
        smtp,
    }
}

/// Drop the test database after tests complete.
pub async fn cleanup(app: TestApp) {
    let db_name = app.db_name.clone();
    app.pool.close().await;

    let base_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");
    let admin_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.clone());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url)
        .await
        .expect("Failed to connect for cleanup");

    let _ = sqlx::query(&format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE)"))
        .execute(&admin_pool)
        .await;

    admin_pool.close().await;
}
