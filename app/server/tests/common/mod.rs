//! In-process Esplora stand-in for integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

pub const ADDR: &str = "bc1q2ld78maaw2qkc8usgqtcpvq2ua6x47lt3u0lsu";

#[derive(Clone)]
pub struct Canned {
    pub status: StatusCode,
    pub body: String,
}

impl Canned {
    pub fn ok(body: &str) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.to_string(),
        }
    }

    pub fn status(status: StatusCode) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }
}

pub struct MockExplorer {
    pub base_url: String,
    info_hits: Arc<AtomicUsize>,
    txs_hits: Arc<AtomicUsize>,
    paths: Arc<Mutex<Vec<String>>>,
}

impl MockExplorer {
    pub fn info_hits(&self) -> usize {
        self.info_hits.load(Ordering::SeqCst)
    }

    pub fn txs_hits(&self) -> usize {
        self.txs_hits.load(Ordering::SeqCst)
    }

    pub fn total_hits(&self) -> usize {
        self.info_hits() + self.txs_hits()
    }

    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

pub fn funded(funded: u64, spent: u64) -> Canned {
    Canned::ok(&format!(
        r#"{{"address":"x","chain_stats":{{"funded_txo_count":1,"funded_txo_sum":{},"spent_txo_count":1,"spent_txo_sum":{},"tx_count":2}},"mempool_stats":{{"funded_txo_sum":0,"spent_txo_sum":0}}}}"#,
        funded, spent
    ))
}

pub fn one_confirmed_tx() -> Canned {
    Canned::ok(r#"[{"txid":"abc","version":2,"status":{"confirmed":true,"block_height":817000,"block_time":1700000000}}]"#)
}

pub async fn spawn_explorer(info: Canned, txs: Canned) -> MockExplorer {
    spawn_explorer_with_delay(info, txs, |_| Duration::ZERO).await
}

/// Like [`spawn_explorer`], but every response for an address waits
/// `delay(address)` first.
pub async fn spawn_explorer_with_delay(
    info: Canned,
    txs: Canned,
    delay: fn(&str) -> Duration,
) -> MockExplorer {
    let info_hits = Arc::new(AtomicUsize::new(0));
    let txs_hits = Arc::new(AtomicUsize::new(0));
    let paths = Arc::new(Mutex::new(Vec::new()));

    let app = Router::new()
        .route(
            "/api/address/:addr",
            get({
                let hits = info_hits.clone();
                let paths = paths.clone();
                move |Path(addr): Path<String>| async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    paths.lock().unwrap().push(format!("/address/{}", addr));
                    tokio::time::sleep(delay(&addr)).await;
                    respond(&info)
                }
            }),
        )
        .route(
            "/api/address/:addr/txs",
            get({
                let hits = txs_hits.clone();
                let paths = paths.clone();
                move |Path(addr): Path<String>| async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    paths.lock().unwrap().push(format!("/address/{}/txs", addr));
                    tokio::time::sleep(delay(&addr)).await;
                    respond(&txs)
                }
            }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let local = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockExplorer {
        base_url: format!("http://{}/api", local),
        info_hits,
        txs_hits,
        paths,
    }
}

fn respond(canned: &Canned) -> axum::response::Response {
    (
        canned.status,
        [(header::CONTENT_TYPE, "application/json")],
        canned.body.clone(),
    )
        .into_response()
}

/// A base URL nothing is listening on.
pub async fn dead_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let local = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api", local)
}
