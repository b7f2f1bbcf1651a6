use super::*;

#[test]
fn default_is_same_origin_with_five_second_banner() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.api_base, "");
    assert_eq!(cfg.banner_duration_ms, 5_000);
}

#[test]
fn from_raw_without_values_matches_default() {
    assert_eq!(ClientConfig::from_raw(None, None), ClientConfig::default());
}

#[test]
fn from_raw_trims_trailing_slashes_and_whitespace() {
    let cfg = ClientConfig::from_raw(Some("  https://school.example/api//  "), None);
    assert_eq!(cfg.api_base, "https://school.example/api");
}

#[test]
fn from_raw_root_slash_means_same_origin() {
    assert_eq!(ClientConfig::from_raw(Some("/"), None).api_base, "");
}

#[test]
fn from_raw_parses_banner_duration() {
    assert_eq!(ClientConfig::from_raw(None, Some(" 2500 ")).banner_duration_ms, 2_500);
}

#[test]
fn from_raw_invalid_or_zero_banner_duration_falls_back() {
    assert_eq!(ClientConfig::from_raw(None, Some("soon")).banner_duration_ms, DEFAULT_BANNER_DURATION_MS);
    assert_eq!(ClientConfig::from_raw(None, Some("0")).banner_duration_ms, DEFAULT_BANNER_DURATION_MS);
    assert_eq!(ClientConfig::from_raw(None, Some("-5")).banner_duration_ms, DEFAULT_BANNER_DURATION_MS);
}
