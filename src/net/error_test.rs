use super::*;

#[test]
fn success_statuses_map_to_none() {
    assert_eq!(ApiError::from_status(200), None);
    assert_eq!(ApiError::from_status(201), None);
    assert_eq!(ApiError::from_status(204), None);
}

#[test]
fn unauthorized_maps_to_auth() {
    assert_eq!(ApiError::from_status(401), Some(ApiError::Auth));
    assert!(ApiError::Auth.is_auth());
}

#[test]
fn other_failures_map_to_server_with_status() {
    assert_eq!(ApiError::from_status(404), Some(ApiError::Server(404)));
    assert_eq!(ApiError::from_status(500), Some(ApiError::Server(500)));
    assert!(!ApiError::Server(500).is_auth());
}

#[test]
fn display_includes_status() {
    let err = ApiError::Server(503);
    assert_eq!(err.to_string(), "server responded with status 503");
}

#[test]
fn display_includes_network_detail() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.to_string(), "network error: connection refused");
}
