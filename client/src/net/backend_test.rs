use super::*;

fn client() -> BackendClient {
    BackendClient::new(BackendConfig::new("https://db.fleet.test/", "anon"))
}

#[test]
fn config_trims_trailing_slash() {
    assert_eq!(client().endpoint(), "https://db.fleet.test");
}

#[test]
fn count_url_without_filter() {
    assert_eq!(client().count_url("vehicles", None), "https://db.fleet.test/rest/v1/vehicles?select=id&limit=1");
}

#[test]
fn count_url_appends_filter() {
    assert_eq!(
        client().count_url("rentals", Some("status=eq.active")),
        "https://db.fleet.test/rest/v1/rentals?select=id&limit=1&status=eq.active"
    );
}

#[test]
fn content_range_total_parses_ranges() {
    assert_eq!(parse_content_range_total("0-0/150"), Some(150));
    assert_eq!(parse_content_range_total("*/0"), Some(0));
    assert_eq!(parse_content_range_total(" 0-24/3 "), Some(3));
}

#[test]
fn content_range_total_rejects_unknown_total() {
    assert_eq!(parse_content_range_total("0-24/*"), None);
    assert_eq!(parse_content_range_total("garbage"), None);
}

#[test]
fn count_failed_message_formats_status() {
    assert_eq!(count_failed_message("payments", 503), "payments: count request failed: 503");
}

#[test]
fn build_env_config_has_endpoint() {
    assert!(!BackendConfig::from_build_env().url.is_empty());
}
