//! Integration test: local HTTP server publishing a sticker and its checksum,
//! checked and refreshed through the real curl client.

mod common;

use sticker_core::checksum;
use sticker_core::http::{CurlClient, HttpGet, HttpOptions};
use sticker_core::installer::{temp_path, StickerInstaller};
use sticker_core::staleness::{self, StickerCheck};
use sticker_core::update;
use sticker_core::{Sticker, StickerContext, StickerUpdateStatus, Theme};
use std::time::Duration;
use tempfile::tempdir;

const STICKER_V1: &[u8] = b"\x89PNG sticker v1";
const STICKER_V2: &[u8] = b"\x89PNG sticker v2, redrawn";

fn zero_two() -> Theme {
    Theme {
        id: "zero-two-dark".into(),
        name: "Zero Two Dark".into(),
        sticker: Sticker {
            path: "franxx\\zero_two_dark.png".into(),
            name: "zero_two_dark.png".into(),
        },
    }
}

fn client() -> CurlClient {
    CurlClient::new(HttpOptions {
        connect_timeout: Duration::from_secs(2),
        timeout: Duration::from_secs(5),
    })
}

fn publish(server: &common::asset_server::AssetServer, body: &[u8]) {
    server.put("/stickers/franxx/zero_two_dark.png", body);
    let digest = format!("{}\n", checksum::checksum_bytes(body));
    server.put(
        "/stickers/franxx/zero_two_dark.png.checksum.txt",
        digest.as_bytes(),
    );
}

#[test]
fn missing_sticker_is_downloaded_then_current() {
    let server = common::asset_server::start();
    publish(&server, STICKER_V1);
    let storage = tempdir().unwrap();
    let ctx = StickerContext::new(storage.path(), format!("{}/stickers", server.base_url()));
    let theme = zero_two();
    let http = client();
    let installer = StickerInstaller::new(client());

    let first = update::attempt_to_update_sticker(&theme, &ctx, &http, &installer).unwrap();
    assert!(first.is_stale());

    let local = ctx.local_sticker_path(&theme);
    assert_eq!(std::fs::read(&local).unwrap(), STICKER_V1);
    assert!(!temp_path(&local).exists());

    let second = update::attempt_to_update_sticker(&theme, &ctx, &http, &installer).unwrap();
    assert!(matches!(second, StickerCheck::Current));
    assert!(!staleness::is_sticker_not_current(
        &http,
        &ctx.assets_url,
        &theme,
        &local
    ));
}

#[test]
fn republished_sticker_is_refreshed() {
    let server = common::asset_server::start();
    publish(&server, STICKER_V1);
    let storage = tempdir().unwrap();
    let ctx = StickerContext::new(storage.path(), format!("{}/stickers/", server.base_url()));
    let theme = zero_two();
    let http = client();
    let installer = StickerInstaller::new(client());

    update::attempt_to_update_sticker(&theme, &ctx, &http, &installer).unwrap();
    publish(&server, STICKER_V2);

    let local = ctx.local_sticker_path(&theme);
    assert!(staleness::is_sticker_not_current(
        &http,
        &ctx.assets_url,
        &theme,
        &local
    ));
    let check = update::attempt_to_update_sticker(&theme, &ctx, &http, &installer).unwrap();
    assert_eq!(check.status(), StickerUpdateStatus::Stale);
    assert_eq!(std::fs::read(&local).unwrap(), STICKER_V2);
}

#[test]
fn missing_checksum_file_leaves_cache_alone() {
    let server = common::asset_server::start();
    let storage = tempdir().unwrap();
    let ctx = StickerContext::new(storage.path(), format!("{}/stickers", server.base_url()));
    let theme = zero_two();

    let check =
        update::attempt_to_update_sticker(&theme, &ctx, &client(), &StickerInstaller::new(client()))
            .unwrap();
    assert_eq!(check.status(), StickerUpdateStatus::NotChecked);
    assert!(!ctx.local_sticker_path(&theme).exists());
    assert_eq!(
        server.hits(),
        vec!["/stickers/franxx/zero_two_dark.png.checksum.txt".to_string()]
    );
}

#[test]
fn unreachable_host_is_not_stale() {
    // Bind then drop to get a port nothing listens on.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let storage = tempdir().unwrap();
    let ctx = StickerContext::new(storage.path(), format!("http://127.0.0.1:{}/stickers", port));
    let theme = zero_two();
    let local = ctx.local_sticker_path(&theme);

    assert!(!local.exists());
    assert!(!staleness::is_sticker_not_current(
        &client(),
        &ctx.assets_url,
        &theme,
        &local
    ));
}

#[test]
fn curl_client_reports_http_status() {
    let server = common::asset_server::start();
    let err = client()
        .get_text(&format!("{}/nope.txt", server.base_url()))
        .unwrap_err();
    assert!(err.to_string().contains("404"), "got: {}", err);
}

#[tokio::test]
async fn update_runs_on_blocking_pool() {
    let server = common::asset_server::start();
    publish(&server, STICKER_V1);
    let storage = tempdir().unwrap();
    let ctx = StickerContext::new(storage.path(), format!("{}/stickers", server.base_url()));

    let task_ctx = ctx.clone();
    let check = tokio::task::spawn_blocking(move || {
        update::attempt_to_update_sticker(
            &zero_two(),
            &task_ctx,
            &client(),
            &StickerInstaller::new(client()),
        )
    })
    .await
    .expect("join")
    .expect("update");

    assert!(check.is_stale());
    assert_eq!(
        std::fs::read(ctx.local_sticker_path(&zero_two())).unwrap(),
        STICKER_V1
    );
}
