//! Integration tests for user data

use super::*;
use integrations_watson_discovery::prelude::*;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_delete_user_data() {
    let server = setup_mock_server().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/user_data"))
        .and(query_param("customer_id", "customer-1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .user_data()
        .delete_user_data(&DeleteUserDataOptions::new("customer-1"))
        .await
        .unwrap();

    assert_eq!(response.status_code, 200);
    assert!(response.result.is_none());
}

#[tokio::test]
async fn test_delete_user_data_requires_customer_id() {
    let server = setup_mock_server().await;
    let client = client_for(&server);

    let error = client
        .user_data()
        .delete_user_data(&DeleteUserDataOptions::new(""))
        .await
        .unwrap_err();

    assert!(error.is_local());
    assert!(server.received_requests().await.unwrap().is_empty());
}
