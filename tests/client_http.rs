//! End-to-end client tests against a local mock server.

use mockito::Matcher;
use nfhub_nfce::{Cnpj, FilePart, NfceClient, NfceError};
use serde_json::json;

fn cnpj() -> Cnpj {
    Cnpj::new("12345678000190").unwrap()
}

fn client_for(server: &mockito::ServerGuard) -> NfceClient {
    NfceClient::builder(server.url())
        .bearer_token("test-token")
        .build()
        .unwrap()
}

#[tokio::test]
async fn fetch_danfce_returns_pdf_bytes_unmodified() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/invoice-customers/42/danfce")
        .match_header("company-cnpj", "12345678000190")
        .with_status(200)
        .with_header("content-type", "application/pdf")
        .with_body("%PDF-1.4 binary content")
        .create_async()
        .await;

    let client = client_for(&server);
    let resp = client.fetch_danfce(&cnpj(), 42, &[]).await.unwrap();

    assert_eq!(resp.status, 200);
    assert_eq!(resp.into_bytes().unwrap(), b"%PDF-1.4 binary content");
}

#[tokio::test]
async fn transmit_error_list_is_joined_line_by_line() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/invoice-customers")
        .with_status(422)
        .with_header("content-type", "application/json")
        .with_body(r#"{"errors":["cnpj invalid","date required"]}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .transmit_invoice(&cnpj(), json!({"serie": 1}), &[])
        .await
        .unwrap_err();

    match err {
        NfceError::ApiError { status, message, .. } => {
            assert_eq!(status, 422);
            assert_eq!(message, "cnpj invalid\r\ndate required");
        }
        other => panic!("expected ApiError, got: {other:?}"),
    }
}

#[tokio::test]
async fn backend_message_field_is_surfaced_verbatim() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/invoice-customers/9")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"invoice 9 not found"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.fetch_invoice(&cnpj(), 9, &[]).await.unwrap_err();

    match err {
        NfceError::ApiError { status, message, .. } => {
            assert_eq!(status, 404);
            assert_eq!(message, "invoice 9 not found");
        }
        other => panic!("expected ApiError, got: {other:?}"),
    }
}

#[tokio::test]
async fn opaque_failure_serializes_the_whole_envelope() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/invoice-customers/calculate")
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(r#"{"trace":"abc123"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .calculate_invoice(&cnpj(), json!({}), &[])
        .await
        .unwrap_err();

    let NfceError::ApiError { message, .. } = err else {
        panic!("expected ApiError");
    };
    let envelope: serde_json::Value = serde_json::from_str(&message).unwrap();
    assert_eq!(envelope["status"], 500);
    assert_eq!(envelope["body"]["trace"], "abc123");
}

#[tokio::test]
async fn bearer_token_and_tenant_header_reach_the_wire() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/invoice-customers/1")
        .match_header("authorization", "Bearer test-token")
        .match_header("company-cnpj", "12345678000190")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":1}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let resp = client.fetch_invoice(&cnpj(), 1, &[]).await.unwrap();
    assert_eq!(resp.json().unwrap()["id"], 1);
}

#[tokio::test]
async fn import_posts_multipart_and_decodes_json_reply() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("POST", "/invoices/import")
        .match_header(
            "content-type",
            Matcher::Regex("multipart/form-data.*".to_string()),
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"imported":2}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let xmls = vec![
        FilePart::new("xmls[]", "a.xml", b"<a/>".to_vec()),
        FilePart::new("xmls[]", "b.xml", b"<b/>".to_vec()),
    ];
    let resp = client.import_xml(&cnpj(), xmls, &[]).await.unwrap();
    assert_eq!(resp.json().unwrap()["imported"], 2);
}

#[tokio::test]
async fn bytes_mode_does_not_leak_into_the_next_call() {
    let mut server = mockito::Server::new_async().await;
    let _xml = server
        .mock("GET", "/invoice-customers/3/xml")
        .with_status(200)
        .with_header("content-type", "application/xml")
        .with_body("<NFe>doc</NFe>")
        .create_async()
        .await;
    let _json = server
        .mock("GET", "/invoice-customers/3")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":3,"status":"authorized"}"#)
        .create_async()
        .await;

    let client = client_for(&server);

    let xml = client.fetch_xml(&cnpj(), 3, &[]).await.unwrap();
    assert_eq!(xml.bytes(), Some(&b"<NFe>doc</NFe>"[..]));

    let invoice = client.fetch_invoice(&cnpj(), 3, &[]).await.unwrap();
    assert_eq!(invoice.json().unwrap()["status"], "authorized");
}

#[tokio::test]
async fn query_parameters_reach_the_wire() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/invoice-customers/6")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("serie".into(), "1".into()),
            Matcher::UrlEncoded("ambiente".into(), "2".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create_async()
        .await;

    let client = client_for(&server);
    let resp = client
        .fetch_invoice(&cnpj(), 6, &[("serie", "1"), ("ambiente", "2")])
        .await
        .unwrap();
    assert_eq!(resp.status, 200);
}

#[tokio::test]
async fn cancellation_flow_round_trip() {
    let mut server = mockito::Server::new_async().await;
    let _cancel = server
        .mock("POST", "/invoice-customers/8/cancel")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"cancelled"}"#)
        .create_async()
        .await;
    let _pdf = server
        .mock("GET", "/invoice-customers/8/cancel/pdf")
        .with_status(200)
        .with_header("content-type", "application/pdf")
        .with_body("%PDF-1.4 cancellation")
        .create_async()
        .await;

    let client = client_for(&server);

    let cancelled = client
        .cancel_invoice(&cnpj(), 8, json!({"justification": "wrong recipient"}), &[])
        .await
        .unwrap();
    assert_eq!(cancelled.json().unwrap()["status"], "cancelled");

    let pdf = client.fetch_cancellation_pdf(&cnpj(), 8, &[]).await.unwrap();
    assert_eq!(pdf.bytes(), Some(&b"%PDF-1.4 cancellation"[..]));
}
