use chorecast::cache::Cache;
use chorecast::qr;
use chorecast::slideshow::{ImageEntry, ImageStore};
use mockito::Server;

#[tokio::test]
async fn test_list_images_builds_media_urls() {
    let mut server = Server::new_async().await;
    let url = server.url();

    let mock = server
        .mock("GET", "/o")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"items":[{"name":"photos/cat 1.jpg"},{"name":"dog.png"}]}"#)
        .create_async()
        .await;

    let store = ImageStore::new(&format!("{}/o", url)).unwrap();
    let entries = store.list_images().await.unwrap();

    mock.assert();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name, "photos/cat 1.jpg");
    assert_eq!(
        entries[0].url,
        format!("{}/o/photos%2Fcat%201.jpg?alt=media", url)
    );
    assert_eq!(entries[1].url, format!("{}/o/dog.png?alt=media", url));
}

#[tokio::test]
async fn test_empty_listing_is_not_an_error() {
    let mut server = Server::new_async().await;

    server
        .mock("GET", "/o")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{}"#)
        .create_async()
        .await;

    let store = ImageStore::new(&format!("{}/o", server.url())).unwrap();
    let entries = store.list_images().await.unwrap();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn test_offline_store_cannot_list() {
    let store = ImageStore::new("").unwrap();
    let err = store.list_images().await.unwrap_err();
    assert_eq!(err, "Offline");
}

#[tokio::test]
async fn test_fallback_serves_cached_listing() {
    let mut server = Server::new_async().await;
    let list_url = format!("{}/o", server.url());

    server
        .mock("GET", "/o")
        .with_status(500)
        .create_async()
        .await;

    // A previous successful run left a listing in the cache.
    let seeded = vec![ImageEntry {
        name: "stale.jpg".to_string(),
        url: format!("{}/stale.jpg?alt=media", list_url),
    }];
    Cache::save_images(&list_url, &seeded).unwrap();

    let store = ImageStore::new(&list_url).unwrap();
    let (entries, warning) = store.list_with_fallback().await;

    assert_eq!(entries, seeded);
    assert!(warning.is_some(), "fallback must warn about offline mode");
}

#[tokio::test]
async fn test_successful_listing_refreshes_cache() {
    let mut server = Server::new_async().await;
    let list_url = format!("{}/o", server.url());

    server
        .mock("GET", "/o")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"items":[{"name":"fresh.png"}]}"#)
        .create_async()
        .await;

    let store = ImageStore::new(&list_url).unwrap();
    let (entries, warning) = store.list_with_fallback().await;

    assert!(warning.is_none());
    assert_eq!(entries.len(), 1);
    assert_eq!(Cache::load_images(&list_url).unwrap(), entries);
}

#[test]
fn test_qr_url_encodes_upload_link() {
    let url = qr::qr_image_url("https://example.web.app/upload.html", 200);
    assert_eq!(
        url,
        "https://api.qrserver.com/v1/create-qr-code/?size=200x200&data=https%3A%2F%2Fexample.web.app%2Fupload.html%3Fv%3Dv1"
    );
}

#[tokio::test]
async fn test_fetch_bytes_returns_body() {
    let mut server = Server::new_async().await;
    let body: &[u8] = b"\x89PNG fake";

    let mock = server
        .mock("GET", "/qr.png")
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;

    let store = ImageStore::new(&server.url()).unwrap();
    let bytes = store
        .fetch_bytes(&format!("{}/qr.png", server.url()))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(bytes, body);
}
