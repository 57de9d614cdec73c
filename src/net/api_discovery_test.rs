use super::*;

#[test]
fn search_endpoint_carries_query_parameter() {
    assert_eq!(search_endpoint("rust%20wasm"), "/search?q=rust%20wasm");
}
