use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use reqwest::redirect::Policy;
use reqwest::StatusCode;
use tempfile::TempDir;

use bookshelf::api::create_router;
use bookshelf::catalog::models::Book;
use bookshelf::catalog::{CatalogStore, JsonCatalog};
use bookshelf::config::Config;
use bookshelf::file_store::{FileStore, LocalStore};
use bookshelf::AppState;

const ADMIN_PASSWORD: &str = "book25";
const PDF_BYTES: &[u8] = b"%PDF-1.4\nfake whale content\n%%EOF";

struct TestApp {
    base_url: String,
    catalog: Arc<dyn CatalogStore>,
    upload_dir: std::path::PathBuf,
    _dir: TempDir,
}

async fn spawn_app() -> TestApp {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let catalog_path = dir.path().join("books.json");
    let upload_dir = dir.path().join("uploads");

    let config = Config {
        admin_password: ADMIN_PASSWORD.to_string(),
        catalog_path: catalog_path.to_string_lossy().into_owned(),
        max_upload_size: 50 * 1024 * 1024,
        port: 0,
        upload_dir: upload_dir.to_string_lossy().into_owned(),
    };

    let catalog: Arc<dyn CatalogStore> = Arc::new(JsonCatalog::open(&catalog_path).unwrap());
    let files: Arc<dyn FileStore> = Arc::new(LocalStore::new(&upload_dir).unwrap());

    let state = Arc::new(AppState {
        config,
        catalog: Arc::clone(&catalog),
        files,
    });

    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp {
        base_url: format!("http://{addr}"),
        catalog,
        upload_dir,
        _dir: dir,
    }
}

fn client() -> reqwest::Client {
    // Redirects are asserted on directly, never followed.
    reqwest::Client::builder()
        .redirect(Policy::none())
        .build()
        .unwrap()
}

fn pdf_form(title: Option<&str>, password: &str) -> Form {
    let part = Part::bytes(PDF_BYTES.to_vec())
        .file_name("whale.pdf")
        .mime_str("application/pdf")
        .unwrap();
    let mut form = Form::new().text("password", password.to_string());
    if let Some(title) = title {
        form = form.text("title", title.to_string());
    }
    form.part("bookFile", part)
}

fn upload_dir_entries(app: &TestApp) -> Vec<String> {
    std::fs::read_dir(&app.upload_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

#[tokio::test]
async fn test_upload_appends_record_and_stores_file() {
    let app = spawn_app().await;
    let client = client();

    let resp = client
        .post(format!("{}/upload", app.base_url))
        .multipart(pdf_form(Some("Moby Dick"), ADMIN_PASSWORD))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()["location"], "/");

    let books = app.catalog.load().await.unwrap();
    assert_eq!(books.len(), 1);
    let book: &Book = &books[0];
    assert_eq!(book.title, "Moby Dick");
    assert!(book.id.chars().all(|c| c.is_ascii_digit()));
    assert!(book.filename.ends_with(".pdf"));
    assert!(book.filename.contains('-'));

    // The recorded storage name resolves to the original bytes.
    let resp = client
        .get(format!("{}/uploads/{}", app.base_url, book.filename))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["content-type"], "application/pdf");
    assert_eq!(resp.bytes().await.unwrap().as_ref(), PDF_BYTES);
}

#[tokio::test]
async fn test_upload_title_defaults_to_original_filename() {
    let app = spawn_app().await;
    let client = client();

    let resp = client
        .post(format!("{}/upload", app.base_url))
        .multipart(pdf_form(None, ADMIN_PASSWORD))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let books = app.catalog.load().await.unwrap();
    assert_eq!(books[0].title, "whale.pdf");
}

#[tokio::test]
async fn test_upload_empty_title_defaults_to_original_filename() {
    let app = spawn_app().await;
    let client = client();

    let resp = client
        .post(format!("{}/upload", app.base_url))
        .multipart(pdf_form(Some(""), ADMIN_PASSWORD))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let books = app.catalog.load().await.unwrap();
    assert_eq!(books[0].title, "whale.pdf");
}

#[tokio::test]
async fn test_upload_with_wrong_password_changes_nothing() {
    let app = spawn_app().await;
    let client = client();

    let resp = client
        .post(format!("{}/upload", app.base_url))
        .multipart(pdf_form(Some("Moby Dick"), "wrong"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(resp.text().await.unwrap(), "Invalid admin password.");

    assert!(app.catalog.load().await.unwrap().is_empty());
    assert!(upload_dir_entries(&app).is_empty());
}

#[tokio::test]
async fn test_upload_with_non_pdf_content_type_is_rejected() {
    let app = spawn_app().await;
    let client = client();

    let part = Part::bytes(b"plain text".to_vec())
        .file_name("notes.txt")
        .mime_str("text/plain")
        .unwrap();
    let form = Form::new()
        .text("title", "Notes")
        .text("password", ADMIN_PASSWORD)
        .part("bookFile", part);

    let resp = client
        .post(format!("{}/upload", app.base_url))
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        resp.text().await.unwrap(),
        "No file uploaded or invalid file type."
    );

    assert!(app.catalog.load().await.unwrap().is_empty());
    assert!(upload_dir_entries(&app).is_empty());
}

#[tokio::test]
async fn test_upload_without_file_is_rejected() {
    let app = spawn_app().await;
    let client = client();

    let form = Form::new()
        .text("title", "No file")
        .text("password", ADMIN_PASSWORD);

    let resp = client
        .post(format!("{}/upload", app.base_url))
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(app.catalog.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_removes_record_and_file() {
    let app = spawn_app().await;
    let client = client();

    client
        .post(format!("{}/upload", app.base_url))
        .multipart(pdf_form(Some("Moby Dick"), ADMIN_PASSWORD))
        .send()
        .await
        .unwrap();
    let book = app.catalog.load().await.unwrap().remove(0);

    let resp = client
        .post(format!("{}/delete/{}", app.base_url, book.id))
        .form(&[("password", ADMIN_PASSWORD)])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()["location"], "/admin");

    assert!(app.catalog.load().await.unwrap().is_empty());
    assert!(upload_dir_entries(&app).is_empty());
}

#[tokio::test]
async fn test_delete_with_wrong_password_changes_nothing() {
    let app = spawn_app().await;
    let client = client();

    client
        .post(format!("{}/upload", app.base_url))
        .multipart(pdf_form(Some("Moby Dick"), ADMIN_PASSWORD))
        .send()
        .await
        .unwrap();
    let book = app.catalog.load().await.unwrap().remove(0);

    let resp = client
        .post(format!("{}/delete/{}", app.base_url, book.id))
        .form(&[("password", "wrong")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(resp.text().await.unwrap(), "Invalid admin password.");

    assert_eq!(app.catalog.load().await.unwrap().len(), 1);
    assert_eq!(upload_dir_entries(&app).len(), 1);
}

#[tokio::test]
async fn test_delete_unknown_id_is_not_found() {
    let app = spawn_app().await;
    let client = client();

    let resp = client
        .post(format!("{}/delete/999", app.base_url))
        .form(&[("password", ADMIN_PASSWORD)])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(resp.text().await.unwrap(), "Book not found");
}

#[tokio::test]
async fn test_serving_unknown_filename_is_not_found() {
    let app = spawn_app().await;
    let client = client();

    let resp = client
        .get(format!("{}/uploads/1700000000000-42.pdf", app.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_pages_render_catalog_titles() {
    let app = spawn_app().await;
    let client = client();

    client
        .post(format!("{}/upload", app.base_url))
        .multipart(pdf_form(Some("Moby Dick"), ADMIN_PASSWORD))
        .send()
        .await
        .unwrap();

    let public = client
        .get(format!("{}/", app.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(public.status(), StatusCode::OK);
    let body = public.text().await.unwrap();
    assert!(body.contains("Moby Dick"));
    assert!(body.contains("/uploads/"));

    let admin = client
        .get(format!("{}/admin", app.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(admin.status(), StatusCode::OK);
    let body = admin.text().await.unwrap();
    assert!(body.contains("Moby Dick"));
    assert!(body.contains("action=\"/upload\""));
    assert!(body.contains("/delete/"));
}

#[tokio::test]
async fn test_health_reports_ok() {
    let app = spawn_app().await;

    let resp = reqwest::get(format!("{}/_internal/health", app.base_url))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}
