use crate::operation::Arguments;
use proptest::prelude::*;

#[test]
fn empty_arguments_render_nothing() {
    assert_eq!(Arguments::new().to_graphql_string(), "");
    assert_eq!(Arguments::default().to_string(), "");
}

#[test]
fn arguments_render_in_insertion_order() {
    let args = Arguments::new().with("b", 1).with("a", 2);

    assert_eq!(args.to_graphql_string(), " (b: 1, a: 2)");
}

#[test]
fn literals_render_as_json() {
    let args = Arguments::from([
        ("query", serde_json::json!("snowboard \"pro\"")),
        ("first", serde_json::json!(10)),
        ("ratio", serde_json::json!(0.5)),
        ("reverse", serde_json::json!(true)),
        ("after", serde_json::Value::Null),
        ("ids", serde_json::json!(["a", "b"])),
    ]);

    assert_eq!(
        args.to_string(),
        r#" (query: "snowboard \"pro\"", first: 10, ratio: 0.5, reverse: true, after: null, ids: ["a","b"])"#,
    );
}

#[test]
fn whole_floats_keep_their_fraction() {
    let args = Arguments::new().with("first", 10.0).with("last", 10);

    assert_eq!(args.to_graphql_string(), " (first: 10.0, last: 10)");
}

#[test]
fn reinserting_a_key_keeps_its_position() {
    let mut args = Arguments::from([("first", 10), ("last", 5)]);
    let previous = args.insert("first", 20);

    assert_eq!(previous, Some(serde_json::json!(10)));
    assert_eq!(args.len(), 2);
    assert_eq!(args.get("first"), Some(&serde_json::json!(20)));
    assert_eq!(args.to_graphql_string(), " (first: 20, last: 5)");
}

#[test]
fn collects_from_an_iterator() {
    let args: Arguments = vec![("handle", "snowboard"), ("locale", "en")].into_iter().collect();

    assert_eq!(
        args.iter().map(|(name, _)| name).collect::<Vec<_>>(),
        vec!["handle", "locale"],
    );
    assert_eq!(args.to_graphql_string(), r#" (handle: "snowboard", locale: "en")"#);
}

proptest! {
    #[test]
    fn rendered_argument_order_matches_insertion_order(
        names in prop::collection::hash_set("[a-z]{1,8}", 1..8)
            .prop_map(|names| names.into_iter().collect::<Vec<_>>())
            .prop_shuffle(),
    ) {
        let args: Arguments =
            names.iter()
                .enumerate()
                .map(|(idx, name)| (name.as_str(), idx))
                .collect();

        let expected_pairs =
            names.iter()
                .enumerate()
                .map(|(idx, name)| format!("{name}: {idx}"))
                .collect::<Vec<_>>()
                .join(", ");

        prop_assert_eq!(args.to_graphql_string(), format!(" ({expected_pairs})"));
    }
}
