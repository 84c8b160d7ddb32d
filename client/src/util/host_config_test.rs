use super::*;

#[test]
fn config_element_id_matches_host_shell() {
    assert_eq!(CONFIG_ELEMENT_ID, "quotemark-config");
}

#[cfg(not(feature = "csr"))]
#[test]
fn read_off_the_browser_reports_missing_element() {
    assert_eq!(read(), Err(ConfigError::Missing("quotemark-config")));
}
