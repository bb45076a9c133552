//! Tests for content fingerprinting.

use crate::fingerprint;

#[test]
fn stable_across_calls() {
    let a = fingerprint("CREATE TABLE t (id INT);");
    let b = fingerprint("CREATE TABLE t (id INT);");
    assert_eq!(a, b);
}

#[test]
fn differs_for_different_content() {
    let a = fingerprint("CREATE TABLE t (id INT);");
    let b = fingerprint("CREATE TABLE t (id BIGINT);");
    assert_ne!(a, b);
}

#[test]
fn crlf_normalized_to_lf() {
    let unix = fingerprint("CREATE TABLE t (\n  id INT\n);");
    let windows = fingerprint("CREATE TABLE t (\r\n  id INT\r\n);");
    assert_eq!(unix, windows);
}

#[test]
fn bare_cr_is_not_normalized() {
    // Only CRLF pairs are rewritten; a lone CR is content.
    let lf = fingerprint("a\nb");
    let cr = fingerprint("a\rb");
    assert_ne!(lf, cr);
}

#[test]
fn format_is_hyphenated_hex_groups() {
    let re = regex::Regex::new(
        r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$",
    )
    .unwrap();
    for content in ["", "SELECT 1;", "CREATE TABLE t (id INT);\n", "日本語"] {
        let fp = fingerprint(content);
        assert!(re.is_match(&fp), "Unexpected fingerprint shape: {fp}");
    }
}

#[test]
fn fits_ledger_hash_column() {
    assert_eq!(fingerprint("SELECT 1;").len(), 36);
}
