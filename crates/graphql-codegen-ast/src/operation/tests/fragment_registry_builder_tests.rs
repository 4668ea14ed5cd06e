use crate::DecodeError;
use crate::named_ref::DerefByNameError;
use crate::operation::Fragment;
use crate::operation::FragmentRef;
use crate::operation::FragmentRegistryBuilder;
use crate::operation::Selection;
use serde_json::json;

fn fragment(name: &str, file_path: &str) -> Fragment {
    serde_json::from_value(json!({
        "fragmentName": name,
        "filePath": file_path,
        "source": format!("fragment {name} on Character {{\n  name\n}}"),
        "selectionSet": {
            "possibleTypes": ["Human", "Droid"],
            "selections": [{
                "kind": "Field",
                "responseKey": "name",
                "name": "name",
                "typeNode": {
                    "kind": "NonNullType",
                    "type": {
                        "kind": "NamedType",
                        "name": { "kind": "Name", "value": "String" },
                    },
                },
            }],
        },
    })).unwrap()
}

#[test]
fn empty_registry_creation() {
    let registry = FragmentRegistryBuilder::new().build();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
}

#[test]
fn fragments_keep_insertion_order() {
    let mut builder = FragmentRegistryBuilder::new();
    builder.add_fragment(fragment("HeroDetails", "file:///HeroDetails.graphql")).unwrap();
    builder.add_fragment(fragment("FriendsNames", "file:///FriendsNames.graphql")).unwrap();
    builder.add_fragment(fragment("DroidDetails", "file:///DroidDetails.graphql")).unwrap();
    let registry = builder.build();

    let names: Vec<_> = registry.iter().map(Fragment::name).collect();
    assert_eq!(names, vec!["HeroDetails", "FriendsNames", "DroidDetails"]);
    assert_eq!(
        registry.get("FriendsNames").map(Fragment::file_path),
        Some("file:///FriendsNames.graphql"),
    );
    assert!(registry.fragments().contains_key("DroidDetails"));
}

#[test]
fn duplicate_fragment_name_is_rejected() {
    let mut builder = FragmentRegistryBuilder::new();
    builder.add_fragment(fragment("HeroDetails", "file:///a.graphql")).unwrap();

    let result = builder.add_fragment(fragment("HeroDetails", "file:///b.graphql"));
    assert_eq!(
        result,
        Err(DecodeError::DuplicateFragmentName {
            fragment_name: "HeroDetails".to_string(),
            first_file_path: "file:///a.graphql".to_string(),
            second_file_path: "file:///b.graphql".to_string(),
        }),
    );
}

#[test]
fn fragment_spread_resolves_through_registry() {
    let mut builder = FragmentRegistryBuilder::new();
    builder.add_fragment(fragment("HeroDetails", "file:///HeroDetails.graphql")).unwrap();
    let registry = builder.build();

    let selection: Selection = serde_json::from_value(json!({
        "kind": "FragmentSpread",
        "fragmentName": "HeroDetails",
        "isConditional": false,
    })).unwrap();
    let Selection::FragmentSpread(spread) = selection else {
        panic!("Expected a FragmentSpread selection");
    };

    let resolved = spread.fragment(&registry).unwrap();
    assert_eq!(resolved.name(), "HeroDetails");
    assert!(std::ptr::eq(resolved, registry.get("HeroDetails").unwrap()));
}

#[test]
fn dangling_fragment_spread_fails_to_resolve() {
    let registry = FragmentRegistryBuilder::new().build();
    let fragment_ref = FragmentRef::new("Missing");

    assert_eq!(fragment_ref.name(), "Missing");
    assert_eq!(
        fragment_ref.deref(&registry),
        Err(DerefByNameError::DanglingReference("Missing".to_string())),
    );
}
