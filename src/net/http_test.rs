use super::*;
use crate::net::types::AuthTokens;

#[test]
fn first_send_with_success_delivers() {
    assert_eq!(next_step(SendPhase::Sent, 200), SendStep::Deliver);
    assert_eq!(next_step(SendPhase::Sent, 204), SendStep::Deliver);
}

#[test]
fn first_send_with_unauthorized_refreshes() {
    assert_eq!(next_step(SendPhase::Sent, 401), SendStep::Refresh);
}

#[test]
fn non_auth_errors_deliver_unmodified() {
    assert_eq!(next_step(SendPhase::Sent, 404), SendStep::Deliver);
    assert_eq!(next_step(SendPhase::Sent, 422), SendStep::Deliver);
    assert_eq!(next_step(SendPhase::Sent, 500), SendStep::Deliver);
}

#[test]
fn retried_send_never_refreshes_again() {
    // The only transition out of Retried on a 401 is Fail, so a second
    // refresh for the same request is unrepresentable.
    assert_eq!(next_step(SendPhase::Retried, 401), SendStep::Fail);
    assert_eq!(next_step(SendPhase::Retried, 200), SendStep::Deliver);
    assert_eq!(next_step(SendPhase::Retried, 500), SendStep::Deliver);
}

#[test]
fn refresh_action_reuses_token_rotated_by_concurrent_caller() {
    assert_eq!(refresh_action(Some("A1"), Some("A2")), RefreshAction::UseStored);
}

#[test]
fn refresh_action_calls_refresh_when_store_is_unchanged() {
    assert_eq!(refresh_action(Some("A1"), Some("A1")), RefreshAction::CallRefresh);
    assert_eq!(refresh_action(None, Some("A1")), RefreshAction::CallRefresh);
    assert_eq!(refresh_action(Some("A1"), None), RefreshAction::CallRefresh);
    assert_eq!(refresh_action(None, None), RefreshAction::CallRefresh);
}

#[test]
fn bearer_header_absent_without_token() {
    assert_eq!(bearer_header(None), None);
    assert_eq!(bearer_header(Some("A1")).as_deref(), Some("Bearer A1"));
}

#[test]
fn invalidate_session_clears_store_and_signals_expiry() {
    session::store_tokens(&AuthTokens {
        access_token: "A1".to_owned(),
        refresh_token: "R1".to_owned(),
    });
    let err = invalidate_session();
    assert_eq!(err, ApiError::SessionExpired);
    assert_eq!(session::access_token(), None);
    assert_eq!(session::refresh_token(), None);
}

#[test]
fn error_from_body_surfaces_4xx_backend_message_verbatim() {
    let err = error_from_body(400, r#"{"message":"Email already in use"}"#);
    assert_eq!(
        err,
        ApiError::Api {
            status: 400,
            message: "Email already in use".to_owned(),
        }
    );
}

#[test]
fn error_from_body_falls_back_when_4xx_has_no_message() {
    let err = error_from_body(422, "not json");
    assert_eq!(
        err,
        ApiError::Api {
            status: 422,
            message: "request failed: 422".to_owned(),
        }
    );
}

#[test]
fn error_from_body_keeps_5xx_generic_even_with_message() {
    let err = error_from_body(503, r#"{"message":"db pool exhausted"}"#);
    let ApiError::Api { status, message } = err else {
        panic!("expected Api error");
    };
    assert_eq!(status, 503);
    assert!(!message.contains("db pool"));
}

#[test]
fn display_messages_are_user_facing() {
    assert_eq!(ApiError::Network.to_string(), "network error, please try again");
    assert_eq!(
        ApiError::SessionExpired.to_string(),
        "your session has expired, please sign in again"
    );
    assert_eq!(
        ApiError::Api {
            status: 400,
            message: "Invalid date".to_owned()
        }
        .to_string(),
        "Invalid date"
    );
    assert_eq!(
        ApiError::Decode("missing field".to_owned()).to_string(),
        "unexpected response from the server"
    );
}

#[test]
fn join_base_handles_trailing_slash() {
    assert_eq!(join_base("", "/auth/login"), "/auth/login");
    assert_eq!(join_base("https://api.busline.dev", "/search"), "https://api.busline.dev/search");
    assert_eq!(join_base("https://api.busline.dev/", "/search"), "https://api.busline.dev/search");
}

#[test]
fn request_builders_set_method_path_and_auth_mode() {
    let req = ApiRequest::get("/operator/buses");
    assert_eq!(req.method, HttpMethod::Get);
    assert_eq!(req.path, "/operator/buses");
    assert!(req.auth);

    let req = ApiRequest::post("/auth/login", serde_json::json!({"email":"e"})).public();
    assert_eq!(req.method, HttpMethod::Post);
    assert!(!req.auth);
    assert!(req.body.is_some());

    let req = ApiRequest::post_form("/auth/forgot-password", "email=a%40b.com".to_owned()).public();
    assert_eq!(req.form.as_deref(), Some("email=a%40b.com"));
    assert!(req.body.is_none());

    let req = ApiRequest::delete("/operator/buses/b1");
    assert_eq!(req.method, HttpMethod::Delete);
}
