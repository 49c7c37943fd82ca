use anyhow::Result;

use super::DocumentInfoResponse;
use super::HttpRemote;
use crate::domain::models::Remote;

impl HttpRemote {
    fn with_url(url: String) -> HttpRemote {
        return HttpRemote {
            url,
            timeout: "200".to_string(),
        };
    }
}

#[tokio::test]
async fn it_fetches_document_metadata() -> Result<()> {
    let body = serde_json::to_string(&DocumentInfoResponse {
        document_id: "doc-1".to_string(),
        display_name: None,
        extracted_title: Some("Q3 Financials".to_string()),
        filename: Some("report.pdf".to_string()),
    })?;

    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/documents/doc-1")
        .with_status(200)
        .with_body(body)
        .create();

    let remote = HttpRemote::with_url(server.url());
    let metadata = remote.fetch_metadata("doc-1").await?;

    assert_eq!(metadata.id, "doc-1");
    assert_eq!(metadata.display_name, "Q3 Financials");
    assert_eq!(metadata.filename, Some("report.pdf".to_string()));
    mock.assert();

    return Ok(());
}

#[tokio::test]
async fn it_fails_fetching_missing_documents() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/documents/doc-404")
        .with_status(404)
        .create();

    let remote = HttpRemote::with_url(server.url());
    let res = remote.fetch_metadata("doc-404").await;

    assert!(res.is_err());
    mock.assert();
}

#[tokio::test]
async fn it_renames_documents() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("PUT", "/documents/doc-1/rename")
        .match_body(r#"{"document_id":"doc-1","new_display_name":"New Name"}"#)
        .with_status(200)
        .with_body(r#"{"success":true}"#)
        .create();

    let remote = HttpRemote::with_url(server.url());
    remote.rename("doc-1", "New Name").await?;

    mock.assert();
    return Ok(());
}

#[tokio::test]
async fn it_fails_renames_rejected_by_the_backend() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("PUT", "/documents/doc-1/rename")
        .with_status(500)
        .create();

    let remote = HttpRemote::with_url(server.url());
    let res = remote.rename("doc-1", "New Name").await;

    assert!(res.is_err());
    mock.assert();
}
