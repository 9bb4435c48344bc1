//! Test helpers: an app wired to a temp SQLite file and a recording mailer.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use contact_desk::{AppState, router};
use contact_desk_contact::ContactStore;
use contact_desk_notification::{Email, EmailConfig, Mailer, Notifier};
use http_body_util::BodyExt;
use temp_dir::TempDir;
use tower::ServiceExt;

#[derive(Default)]
pub struct Recorded {
    pub verified: usize,
    pub sent: Vec<Email>,
}

/// Mailer double that records calls and can be told to fail.
#[derive(Clone, Default)]
pub struct RecordingMailer {
    pub recorded: Arc<Mutex<Recorded>>,
    pub refuse_session: bool,
    pub reject_message: bool,
}

impl RecordingMailer {
    pub fn refusing_session() -> Self {
        Self {
            refuse_session: true,
            ..Default::default()
        }
    }

    pub fn rejecting_message() -> Self {
        Self {
            reject_message: true,
            ..Default::default()
        }
    }

    pub fn verified(&self) -> usize {
        self.recorded.lock().unwrap().verified
    }

    pub fn sent(&self) -> Vec<Email> {
        self.recorded.lock().unwrap().sent.clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn verify(&self) -> anyhow::Result<()> {
        self.recorded.lock().unwrap().verified += 1;
        if self.refuse_session {
            anyhow::bail!("535 5.7.8 Username and Password not accepted");
        }
        Ok(())
    }

    async fn send(&self, email: Email) -> anyhow::Result<()> {
        if self.reject_message {
            anyhow::bail!("554 5.7.0 message rejected");
        }
        email.to_message()?;
        self.recorded.lock().unwrap().sent.push(email);
        Ok(())
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: ContactStore,
    pub mailer: RecordingMailer,
    pub dir: TempDir,
}

pub fn email_config() -> EmailConfig {
    EmailConfig {
        smtp_host: "localhost".to_owned(),
        smtp_port: 1025,
        smtp_username: "desk@example.com".to_owned(),
        smtp_password: "app-password".to_owned(),
        contact_address: "owner@example.com".to_owned(),
        ..Default::default()
    }
}

pub async fn setup(mailer: RecordingMailer) -> anyhow::Result<TestApp> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let store = ContactStore::connect_lazy(&format!("sqlite:{}", path.display()))?;
    store.ensure_schema().await?;

    setup_with_store(store, mailer, dir)
}

pub fn setup_with_store(
    store: ContactStore,
    mailer: RecordingMailer,
    dir: TempDir,
) -> anyhow::Result<TestApp> {
    let public_dir = dir.child("public");
    std::fs::create_dir_all(&public_dir)?;

    let notifier = Notifier::new(&email_config(), Arc::new(mailer.clone()));
    let state = AppState {
        store: store.clone(),
        notifier,
    };

    Ok(TestApp {
        router: router(state, public_dir),
        store,
        mailer,
        dir,
    })
}

pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn post_json(
    router: &Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let (status, body) = send(router, request).await;

    (status, serde_json::from_str(&body).unwrap())
}

pub async fn post_form(
    router: &Router,
    uri: &str,
    fields: &[(&str, &str)],
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(serde_urlencoded::to_string(fields).unwrap()))
        .unwrap();

    let (status, body) = send(router, request).await;

    (status, serde_json::from_str(&body).unwrap())
}

pub async fn count_rows(store: &ContactStore) -> anyhow::Result<i64> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM contact_messages")
        .fetch_one(store.pool())
        .await?;

    Ok(count)
}
