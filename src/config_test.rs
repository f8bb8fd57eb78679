use std::collections::HashMap;

use super::*;

fn site_addr() -> SocketAddr {
    "127.0.0.1:3000".parse().unwrap()
}

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn from_lookup_defaults_to_site_addr() {
    let cfg = ServerConfig::from_lookup(lookup(&[]), site_addr()).unwrap();
    assert_eq!(cfg.addr, site_addr());
}

#[test]
fn from_lookup_overrides_port() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "8080")]), site_addr()).unwrap();
    assert_eq!(cfg.addr, "127.0.0.1:8080".parse().unwrap());
}

#[test]
fn from_lookup_overrides_host() {
    let cfg = ServerConfig::from_lookup(lookup(&[("HOST", "0.0.0.0"), ("PORT", " 4000 ")]), site_addr()).unwrap();
    assert_eq!(cfg.addr, "0.0.0.0:4000".parse().unwrap());
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")]), site_addr()).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("eighty".to_owned()));
}

#[test]
fn from_lookup_rejects_out_of_range_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "70000")]), site_addr()).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("70000".to_owned()));
}

#[test]
fn from_lookup_rejects_bad_host() {
    let err = ServerConfig::from_lookup(lookup(&[("HOST", "localhost:1")]), site_addr()).unwrap_err();
    assert_eq!(err, ConfigError::InvalidHost("localhost:1".to_owned()));
}
