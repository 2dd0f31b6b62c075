//! Integration test: extracted features against reference values and a
//! regex count of special characters.

use phishscan_core::features::{extract, PathTokenMetric, FEATURE_NAMES};
use phishscan_core::FeatureExtractor;
use regex::Regex;

fn assert_features(url: &str, expected: [f64; 12], entropy: f64) {
    let v = extract(url, PathTokenMetric::SegmentRatio);
    let names: Vec<&str> = v.names().collect();
    assert_eq!(names, FEATURE_NAMES, "{url}");
    for (name, want) in FEATURE_NAMES[..12].iter().zip(expected) {
        assert_eq!(v.get(name), Some(want), "{url}: {name}");
    }
    let got = v.get("Entropy_Domain").unwrap();
    assert!((got - entropy).abs() < 1e-12, "{url}: entropy {got}");
}

#[test]
fn lookalike_domain_reference_values() {
    assert_features(
        "https://login.secure-paypa1.com.evil.io/x/y/z.php?session=9f8e7d",
        [5.0, 1.0, 64.0, 31.0, 0.21875, 5.0, 4.0, 31.0, 4.0, 5.0, 3.0, 26.0 / 31.0],
        3.9779168746936358,
    );
}

#[test]
fn ip_host_with_port_reference_values() {
    assert_features(
        "http://192.168.0.1:8080/admin/panel.html",
        [4.0, 1.0, 40.0, 16.0, 0.0, 4.0, 12.0, 16.0, 9.0, 10.0, 2.0, 0.75],
        2.811278124459133,
    );
}

#[test]
fn uppercase_scheme_and_fragment_reference_values() {
    assert_features(
        "HTTP://Sub.Example.co.uk/a/b/c/d/e.htm#frag",
        [4.0, 1.0, 43.0, 17.0, 0.0, 4.0, 0.0, 17.0, 4.0, 5.0, 2.0, 14.0 / 17.0],
        3.6901165175936654,
    );
}

#[test]
fn unicode_number_forms_reference_values() {
    assert_features(
        "http://x.com/½Ⅻ²/कि",
        [2.0, 1.0, 19.0, 5.0, 0.0, 1.0, 1.0, 5.0, 1.0, 3.0, 6.0, 0.8],
        2.321928094887362,
    );
    assert_features(
        "http://कि①.com/a",
        [2.0, 1.0, 16.0, 7.0, 0.0, 1.0, 1.0, 7.0, 1.0, 1.0, 4.0, 5.0 / 7.0],
        1.604202812604345,
    );
}

#[test]
fn special_chars_match_regex_count() {
    let re = Regex::new("[^A-Za-z0-9./-]").unwrap();
    for url in [
        "http://ex ample.com?a=1",
        "http://example.com/path?a=1&b=2",
        "https://user:pw@host.io:443/~me/%20x;p?q=1#f",
        "",
        "ftp://файлы.рф/документ",
        "javascript:alert(1)",
    ] {
        let got = FeatureExtractor::new(url).domain_features().get("spcharUrl");
        assert_eq!(got, Some(re.find_iter(url).count() as f64), "{url}");
    }
    // ':' ' ' '?' '='
    let v = extract("http://ex ample.com?a=1", PathTokenMetric::SegmentRatio);
    assert_eq!(v.get("spcharUrl"), Some(4.0));
}

#[test]
fn sub_vectors_partition_the_full_vector() {
    let ex = FeatureExtractor::new("http://example.com/path?a=1&b=2");
    let mut merged = ex.domain_features();
    merged.merge(ex.number_features());
    merged.merge(ex.entropy_features());
    assert_eq!(merged, ex.all_features());
}
