use crate::OptionalBoolExt;
use crate::RequiredExt;
use crate::UnwrapError;
use crate::operation::Selection;
use crate::operation::SelectionKind;
use crate::operation::SelectionSet;
use crate::types::TypeRef;
use serde_json::json;

fn named_type(name: &str) -> serde_json::Value {
    json!({
        "kind": "NamedType",
        "name": { "kind": "Name", "value": name },
    })
}

fn non_null_named_type(name: &str) -> serde_json::Value {
    json!({ "kind": "NonNullType", "type": named_type(name) })
}

#[test]
fn field_selection_defines_only_field_values() {
    let selection: Selection = serde_json::from_value(json!({
        "kind": "Field",
        "responseKey": "stars",
        "name": "stars",
        "typeNode": non_null_named_type("Int"),
        "description": "The number of stars this review gave, 1-5",
        "isDeprecated": false,
    })).unwrap();

    assert_eq!(selection.kind(), SelectionKind::Field);
    assert_eq!(selection.name(), Some("stars"));
    assert_eq!(selection.response_key(), Some("stars"));
    assert_eq!(selection.type_node(), Some(&TypeRef::non_null_named("Int")));
    assert_eq!(
        selection.description(),
        Some("The number of stars this review gave, 1-5"),
    );
    assert_eq!(selection.is_deprecated(), Some(false));
    assert!(selection.args().is_none());
    assert!(selection.selection_set().is_none());

    assert_eq!(selection.fragment_name(), None);
    assert_eq!(selection.is_conditional(), None);
    assert_eq!(selection.variable_name(), None);
    assert_eq!(selection.inverted(), None);
}

#[test]
fn field_selection_ignores_values_of_other_kinds() {
    let selection: Selection = serde_json::from_value(json!({
        "kind": "Field",
        "name": "hero",
        "typeNode": named_type("Character"),
        "variableName": "includeName",
        "inverted": "not even a boolean",
        "fragmentName": 42,
    })).unwrap();

    assert_eq!(selection.kind(), SelectionKind::Field);
    assert_eq!(selection.variable_name(), None);
    assert_eq!(selection.inverted(), None);
    assert_eq!(selection.fragment_name(), None);
}

#[test]
fn boolean_condition_defines_only_condition_values() {
    let selection: Selection = serde_json::from_value(json!({
        "kind": "BooleanCondition",
        "variableName": "skipName",
        "inverted": true,
        "responseKey": "name",
        "name": "name",
        "args": [],
        "selectionSet": {
            "possibleTypes": ["Human", "Droid"],
            "selections": [{
                "kind": "Field",
                "responseKey": "name",
                "name": "name",
                "typeNode": non_null_named_type("String"),
                "description": "The name of the character",
                "isDeprecated": false,
            }],
        },
    })).unwrap();

    assert_eq!(selection.kind(), SelectionKind::BooleanCondition);
    assert_eq!(selection.variable_name(), Some("skipName"));
    assert_eq!(selection.inverted(), Some(true));
    assert_eq!(selection.response_key(), None);
    assert_eq!(selection.name(), None);
    assert!(selection.args().is_none());
    assert!(selection.type_node().is_none());

    let selection_set = selection.selection_set().unwrap();
    let possible_types: Vec<_> =
        selection_set.possible_types().iter().map(String::as_str).collect();
    assert_eq!(possible_types, vec!["Human", "Droid"]);
    assert_eq!(selection_set.selections().len(), 1);
}

#[test]
fn fragment_spread_defines_only_spread_values() {
    let selection: Selection = serde_json::from_value(json!({
        "kind": "FragmentSpread",
        "fragmentName": "HeroDetails",
        "isConditional": false,
        "typeNode": named_type("Character"),
    })).unwrap();

    assert_eq!(selection.kind(), SelectionKind::FragmentSpread);
    assert_eq!(selection.fragment_name(), Some("HeroDetails"));
    assert_eq!(selection.is_conditional(), Some(false));
    assert_eq!(selection.type_node(), None);
    assert_eq!(selection.name(), None);
    assert_eq!(selection.variable_name(), None);
}

#[test]
fn type_condition_defines_type_node() {
    let selection: Selection = serde_json::from_value(json!({
        "kind": "TypeCondition",
        "typeNode": named_type("Droid"),
        "selectionSet": {
            "possibleTypes": ["Droid"],
            "selections": [{
                "kind": "Field",
                "responseKey": "primaryFunction",
                "name": "primaryFunction",
                "typeNode": named_type("String"),
                "description": "This droid's primary function",
                "isDeprecated": false,
            }],
        },
    })).unwrap();

    assert_eq!(selection.kind(), SelectionKind::TypeCondition);
    assert_eq!(selection.type_node(), Some(&TypeRef::named("Droid")));
    assert_eq!(selection.type_node().unwrap().render().unwrap(), "Droid?");
    assert_eq!(selection.name(), None);
    assert_eq!(selection.fragment_name(), None);

    let nested = &selection.selection_set().unwrap().selections()[0];
    assert_eq!(nested.name(), Some("primaryFunction"));
    assert_eq!(nested.description(), Some("This droid's primary function"));
}

#[test]
fn missing_kind_is_rejected() {
    let err = serde_json::from_value::<Selection>(json!({
        "name": "hero",
        "typeNode": named_type("Character"),
    })).unwrap_err();
    assert_eq!(
        err.to_string(),
        "`Selection` node is missing required field `kind`",
    );
}

#[test]
fn unknown_kind_is_rejected() {
    let result = serde_json::from_value::<Selection>(json!({
        "kind": "InlineFragment",
        "typeNode": named_type("Character"),
    }));
    assert!(result.is_err());
}

#[test]
fn missing_required_field_names_kind_and_field() {
    let err = serde_json::from_value::<Selection>(json!({
        "kind": "Field",
        "responseKey": "hero",
        "name": "hero",
    })).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("`Field`"), "unexpected error: {message}");
    assert!(message.contains("typeNode"), "unexpected error: {message}");
}

#[test]
fn invalid_nested_type_node_reports_its_path() {
    let err = serde_json::from_value::<Selection>(json!({
        "kind": "Field",
        "name": "hero",
        "typeNode": { "kind": "ListType" },
    })).unwrap_err();
    let message = err.to_string();
    assert!(
        message.contains("invalid `Field` selection at `typeNode`"),
        "unexpected error: {message}",
    );
}

#[test]
fn selection_order_is_preserved() {
    let selection_set: SelectionSet = serde_json::from_value(json!({
        "possibleTypes": ["Review"],
        "selections": [
            {
                "kind": "Field",
                "responseKey": "__typename",
                "name": "__typename",
                "typeNode": non_null_named_type("String"),
            },
            {
                "kind": "Field",
                "responseKey": "stars",
                "name": "stars",
                "typeNode": non_null_named_type("Int"),
            },
            {
                "kind": "Field",
                "responseKey": "commentary",
                "name": "commentary",
                "typeNode": named_type("String"),
            },
        ],
    })).unwrap();

    let names: Vec<_> =
        selection_set.selections().iter().filter_map(Selection::name).collect();
    assert_eq!(names, vec!["__typename", "stars", "commentary"]);
}

#[test]
fn fragment_spread_names_recurse_in_document_order() {
    let selection_set: SelectionSet = serde_json::from_value(json!({
        "possibleTypes": ["Query"],
        "selections": [{
            "kind": "Field",
            "name": "hero",
            "typeNode": named_type("Character"),
            "selectionSet": {
                "possibleTypes": ["Human", "Droid"],
                "selections": [
                    { "kind": "FragmentSpread", "fragmentName": "HeroDetails" },
                    {
                        "kind": "BooleanCondition",
                        "variableName": "includeFriends",
                        "inverted": false,
                        "selectionSet": {
                            "possibleTypes": ["Human", "Droid"],
                            "selections": [
                                { "kind": "FragmentSpread", "fragmentName": "FriendsNames" },
                                { "kind": "FragmentSpread", "fragmentName": "HeroDetails" },
                            ],
                        },
                    },
                ],
            },
        }],
    })).unwrap();

    let names: Vec<_> = selection_set.fragment_spread_names().into_iter().collect();
    assert_eq!(names, vec!["HeroDetails", "FriendsNames"]);
}

#[test]
fn aliased_field_selected_name() {
    let selection: Selection = serde_json::from_value(json!({
        "kind": "Field",
        "responseKey": "r2",
        "name": "hero",
        "typeNode": named_type("Character"),
    })).unwrap();
    let field = selection.as_field().unwrap();
    assert_eq!(field.selected_name(), "r2");
    assert_eq!(field.name(), "hero");

    let selection: Selection = serde_json::from_value(json!({
        "kind": "Field",
        "name": "hero",
        "typeNode": named_type("Character"),
    })).unwrap();
    assert_eq!(selection.as_field().unwrap().selected_name(), "hero");
}

#[test]
fn tri_state_helpers() {
    let field: Selection = serde_json::from_value(json!({
        "kind": "Field",
        "name": "__typename",
        "typeNode": non_null_named_type("String"),
    })).unwrap();
    let spread: Selection = serde_json::from_value(json!({
        "kind": "FragmentSpread",
        "fragmentName": "HeroDetails",
        "isConditional": true,
    })).unwrap();

    assert!(!field.is_deprecated().bool_value());
    assert!(!field.is_conditional().bool_value());
    assert!(spread.is_conditional().bool_value());

    assert_eq!(field.name().required("field name"), Ok("__typename"));
    assert_eq!(
        spread.name().required("field name"),
        Err(UnwrapError::UnexpectedNone { what: "field name" }),
    );
    assert_eq!(
        field.is_deprecated().required("isDeprecated").unwrap_err().to_string(),
        "Expected isDeprecated to be present, but it was absent.",
    );
}

#[test]
fn possible_types_order_is_significant() {
    let human_first: SelectionSet = serde_json::from_value(json!({
        "possibleTypes": ["Human", "Droid"],
        "selections": [],
    })).unwrap();
    let droid_first: SelectionSet = serde_json::from_value(json!({
        "possibleTypes": ["Droid", "Human"],
        "selections": [],
    })).unwrap();

    assert_ne!(human_first, droid_first);
    assert_eq!(human_first, human_first.clone());
}

#[test]
fn duplicate_argument_object_key_is_rejected() {
    let err = serde_json::from_str::<Selection>(r#"{
        "kind": "Field",
        "name": "createReview",
        "typeNode": { "kind": "NamedType", "name": { "kind": "Name", "value": "Review" } },
        "args": [{
            "name": "review",
            "value": { "stars": 1, "stars": 10 },
            "typeNode": { "kind": "NamedType", "name": { "kind": "Name", "value": "ReviewInput" } }
        }]
    }"#).unwrap_err();

    assert!(
        err.to_string().contains("object has more than one entry with key `stars`"),
        "unexpected error: {err}",
    );
}

#[test]
fn duplicate_selection_key_is_rejected() {
    let err = serde_json::from_str::<Selection>(r#"{
        "kind": "Field",
        "name": "hero",
        "name": "villain",
        "typeNode": { "kind": "NamedType", "name": { "kind": "Name", "value": "Character" } }
    }"#).unwrap_err();

    assert!(
        err.to_string().contains("more than one entry with key `name`"),
        "unexpected error: {err}",
    );
}

#[test]
fn deeply_nested_selections_decode() {
    let mut selection = json!({
        "kind": "Field",
        "name": "name",
        "typeNode": non_null_named_type("String"),
    });
    for _ in 0..32 {
        selection = json!({
            "kind": "Field",
            "name": "friends",
            "typeNode": { "kind": "ListType", "type": named_type("Character") },
            "selectionSet": {
                "possibleTypes": ["Human", "Droid"],
                "selections": [selection],
            },
        });
    }

    let mut selection: Selection = serde_json::from_value(selection).unwrap();
    let mut depth = 0;
    while let Some(nested) = selection.selection_set() {
        selection = nested.selections()[0].clone();
        depth += 1;
    }
    assert_eq!(depth, 32);
    assert_eq!(selection.name(), Some("name"));
}
