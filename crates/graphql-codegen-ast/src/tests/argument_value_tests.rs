use crate::ArgumentValue;
use crate::operation::Argument;
use crate::types::TypeRef;
use indexmap::IndexMap;
use serde_json::json;

fn decode(json: serde_json::Value) -> ArgumentValue {
    serde_json::from_value(json).unwrap()
}

#[test]
fn decodes_scalar_values() {
    assert_eq!(decode(json!(null)), ArgumentValue::Null);
    assert_eq!(decode(json!(true)), ArgumentValue::Bool(true));
    assert_eq!(decode(json!(10)), ArgumentValue::Int(10));
    assert_eq!(decode(json!(-3)), ArgumentValue::Int(-3));
    assert_eq!(decode(json!(1.5)), ArgumentValue::Float(1.5));
    assert_eq!(decode(json!("JEDI")), ArgumentValue::String("JEDI".to_string()));
}

#[test]
fn integers_beyond_i64_are_rejected() {
    let err = serde_json::from_value::<ArgumentValue>(json!(18446744073709551615u64))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "number `18446744073709551615` cannot be represented as an integer or \
        float without losing precision",
    );

    assert_eq!(decode(json!(i64::MAX)), ArgumentValue::Int(i64::MAX));
    assert_eq!(decode(json!(i64::MIN)), ArgumentValue::Int(i64::MIN));
    assert_eq!(decode(json!(1.8e19)), ArgumentValue::Float(1.8e19));
}

#[test]
fn duplicate_object_keys_are_rejected() {
    let err = serde_json::from_str::<ArgumentValue>(
        r#"{ "review": { "stars": 1, "commentary": "Meh", "stars": 10 } }"#,
    ).unwrap_err();
    assert!(
        err.to_string().contains("object has more than one entry with key `stars`"),
        "unexpected error: {err}",
    );
}

#[test]
fn decodes_object_in_document_order() {
    let value = decode(json!({
        "stars": 10,
        "commentary": "This is awesome!",
        "favorite_color": { "red": 255, "green": 0, "blue": 0 },
    }));

    let entries = value.as_object().unwrap();
    let keys: Vec<_> = entries.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["stars", "commentary", "favorite_color"]);
    assert_eq!(entries["stars"].as_i64(), Some(10));
    assert_eq!(entries["commentary"].as_str(), Some("This is awesome!"));
    assert_eq!(
        entries["favorite_color"].as_object().map(IndexMap::len),
        Some(3),
    );
}

#[test]
fn object_equality_ignores_key_order() {
    let a = decode(json!({ "stars": 10, "commentary": "This is awesome!" }));
    let b = decode(json!({ "commentary": "This is awesome!", "stars": 10 }));
    assert_eq!(a, b);
    assert_ne!(a, decode(json!({ "stars": 9, "commentary": "This is awesome!" })));
}

#[test]
fn decodes_lists() {
    let value = decode(json!(["NEWHOPE", "EMPIRE", null]));
    assert_eq!(
        value.as_list(),
        Some(&[
            ArgumentValue::String("NEWHOPE".to_string()),
            ArgumentValue::String("EMPIRE".to_string()),
            ArgumentValue::Null,
        ][..]),
    );
    assert!(value.as_list().unwrap()[2].is_null());
}

#[test]
fn variable_reference_is_kept_as_an_object() {
    let argument: Argument = serde_json::from_value(json!({
        "name": "episode",
        "value": { "kind": "Variable", "variableName": "episode" },
        "typeNode": {
            "kind": "NamedType",
            "name": { "kind": "Name", "value": "Episode" },
        },
    })).unwrap();

    assert_eq!(argument.name(), "episode");
    assert_eq!(argument.type_node(), &TypeRef::named("Episode"));
    let entries = argument.value().as_object().unwrap();
    assert_eq!(entries["kind"].as_str(), Some("Variable"));
    assert_eq!(entries["variableName"].as_str(), Some("episode"));
}

#[test]
fn display_and_serialize() {
    let value = decode(json!({ "stars": 10, "tags": ["a", true], "note": null }));
    assert_eq!(value.to_string(), r#"{stars: 10, tags: ["a", true], note: null}"#);
    assert_eq!(
        serde_json::to_value(&value).unwrap(),
        json!({ "stars": 10, "tags": ["a", true], "note": null }),
    );
}
