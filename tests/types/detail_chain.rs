use error_detail::traits::Render;
use error_detail::{Detail, DetailChain, DetailError, DetailValue};

#[derive(Debug)]
struct Handle(u64);

#[test]
fn later_pair_shadows_earlier_one() {
    let chain = DetailChain::from_pairs([("k", "v1"), ("k", "v2")]);

    assert_eq!(chain.lookup(&DetailValue::from("k")), Some(&DetailValue::from("v2")));
    assert_eq!(chain.len(), 2);
}

#[test]
fn lookup_misses_on_empty_chain_and_absent_key() {
    let empty = DetailChain::new();
    assert!(empty.is_empty());
    assert_eq!(empty.lookup(&DetailValue::from("k")), None);

    let chain = DetailChain::from_pairs([("k", "v")]);
    assert_eq!(chain.lookup(&DetailValue::from("other")), None);
}

#[test]
fn nil_key_is_a_valid_lookup_key() {
    let chain = DetailChain::from_pairs([Detail::note("v"), Detail::new("k", "w")]);

    assert_eq!(chain.lookup(&DetailValue::nil()), Some(&DetailValue::from("v")));
}

#[test]
fn render_lists_newest_first() {
    let chain = DetailChain::from_pairs([("K1", "V1"), ("K2", "V2")]);

    assert_eq!(chain.render(), "K2 : V2\nK1 : V1\n");
}

#[test]
fn render_omits_silent_pairs_and_separator() {
    let chain = DetailChain::from_pairs([
        Detail::new(1_u8, 2_u8),
        Detail::new("only key", false),
        Detail::new(7_i32, "only value"),
    ]);

    assert_eq!(chain.render(), "only value\nonly key\n");
}

#[test]
fn shadowed_pairs_still_render() {
    let chain = DetailChain::from_pairs([("attempt", "1"), ("attempt", "2")]);

    assert_eq!(chain.render(), "attempt : 2\nattempt : 1\n");
}

#[test]
fn every_unique_key_found_by_lookup_renders_once() {
    let pairs = [("alpha", "1"), ("beta", "2"), ("gamma", "3")];
    let chain = DetailChain::from_pairs(pairs);
    let rendered = chain.render();

    for (key, value) in pairs {
        assert_eq!(chain.lookup(&DetailValue::from(key)), Some(&DetailValue::from(value)));
        let line = format!("{} : {}\n", key, value);
        assert_eq!(rendered.matches(&line).count(), 1);
    }
}

#[test]
fn push_rejects_keys_without_equality() {
    let chain = DetailChain::new();
    let err = chain.push(Detail::new(DetailValue::opaque(Handle(9)), "v")).unwrap_err();

    assert!(matches!(err, DetailError::InvalidKeyKind { .. }));
    assert!(err.to_string().contains("Handle"));
}

#[test]
fn opaque_values_are_fine_as_values() {
    let chain = DetailChain::from_pairs([Detail::new("handle", DetailValue::opaque(Handle(9)))]);

    let value = chain.lookup(&DetailValue::from("handle")).unwrap();
    assert_eq!(value.downcast_ref::<Handle>().map(|h| h.0), Some(9));
    assert_eq!(value.render(), None);
}

#[test]
fn try_from_pairs_stops_at_first_bad_key() {
    let result = DetailChain::try_from_pairs([
        Detail::new("ok", "1"),
        Detail::new(DetailValue::opaque(Handle(1)), "2"),
    ]);

    assert!(result.is_err());
}

#[test]
#[should_panic(expected = "does not support equality comparison")]
fn from_pairs_panics_on_bad_key() {
    let _ = DetailChain::from_pairs([Detail::new(DetailValue::opaque(Handle(1)), "v")]);
}

#[test]
fn push_shares_the_existing_chain() {
    let base = DetailChain::from_pairs([("shared", "yes")]);
    let left = base.push(Detail::new("side", "left")).unwrap();
    let right = base.push(Detail::new("side", "right")).unwrap();

    assert_eq!(base.len(), 1);
    assert_eq!(left.render(), "side : left\nshared : yes\n");
    assert_eq!(right.render(), "side : right\nshared : yes\n");
    assert_eq!(left.lookup(&DetailValue::from("shared")), Some(&DetailValue::from("yes")));
}

#[test]
fn chains_from_equal_pairs_are_equal() {
    let left = DetailChain::from_pairs([("a", 1_i32), ("b", 2_i32)]);
    let right = DetailChain::from_pairs([("a", 1_i32), ("b", 2_i32)]);

    assert_eq!(left, right);
    assert_ne!(left, DetailChain::from_pairs([("a", 1_i32)]));
}

#[test]
fn iter_runs_newest_to_oldest() {
    let chain = DetailChain::from_pairs([("a", "1"), ("b", "2")]);
    let keys: Vec<_> = chain.iter().filter_map(|detail| detail.key.render()).collect();

    assert_eq!(keys, ["b", "a"]);
}
