use super::*;

#[test]
fn users_endpoint_joins_base_url() {
    assert_eq!(users_endpoint("http://localhost:3001"), "http://localhost:3001/users");
}

#[test]
fn workspaces_endpoint_joins_base_url() {
    assert_eq!(
        workspaces_endpoint("http://localhost:3001"),
        "http://localhost:3001/workspaces"
    );
}

#[test]
fn api_error_messages_name_the_failure() {
    assert_eq!(
        ApiError::Request("timeout".to_owned()).to_string(),
        "request failed: timeout"
    );
    assert_eq!(ApiError::Status(502).to_string(), "unexpected status: 502");
    assert_eq!(
        ApiError::Decode("expected array".to_owned()).to_string(),
        "malformed response: expected array"
    );
}
