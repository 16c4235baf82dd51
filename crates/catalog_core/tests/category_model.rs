use catalog_core::{
    Category, CategoryInput, CategoryValidator, Entity, EntityId, EntityValidationError,
    FieldErrors, FieldValidator,
};
use serde_json::{json, Value};
use std::str::FromStr;

const FIXED_ID: &str = "00000000-0000-4000-8000-000000000001";

fn input(name: &str) -> CategoryInput {
    CategoryInput {
        name: name.to_string(),
        ..CategoryInput::default()
    }
}

#[test]
fn entity_id_preserves_the_given_seed() {
    let id = EntityId::parse(FIXED_ID).unwrap();
    assert_eq!(id.as_str(), FIXED_ID);
    assert_eq!(id.to_string(), FIXED_ID);

    let uppercase = FIXED_ID.to_uppercase();
    let id = EntityId::parse(uppercase.as_str()).unwrap();
    assert_eq!(id.as_str(), uppercase);
}

#[test]
fn entity_id_rejects_malformed_seeds() {
    let error = EntityId::parse("not-a-uuid").unwrap_err();
    assert_eq!(error.value(), "not-a-uuid");
    assert!(error.to_string().contains("invalid entity id"));

    assert!(EntityId::from_str("").is_err());
    assert!(EntityId::parse("00000000-0000-4000-8000").is_err());
}

#[test]
fn entity_id_generates_distinct_valid_values() {
    let first = EntityId::new();
    let second = EntityId::new();
    assert_ne!(first, second);
    assert!(EntityId::parse(first.as_str()).is_ok());
}

#[test]
fn entity_id_default_is_a_fresh_generated_identity() {
    let id = EntityId::default();
    assert!(EntityId::parse(id.as_str()).is_ok());
    assert_ne!(id, EntityId::default());
}

#[test]
fn entity_id_equality_follows_the_string_value() {
    let left = EntityId::parse(FIXED_ID).unwrap();
    let right = EntityId::parse(FIXED_ID).unwrap();
    assert_eq!(left, right);
}

#[test]
fn category_construction_applies_declared_defaults() {
    let category = Category::new(input("Movie")).unwrap();
    assert_eq!(category.name(), "Movie");
    assert_eq!(category.description(), None);
    assert!(category.is_active());
    assert!(category.created_at() > 0);
    assert!(EntityId::parse(category.id()).is_ok());
}

#[test]
fn category_with_id_keeps_identity_and_explicit_fields() {
    let identity = EntityId::parse(FIXED_ID).unwrap();
    let category = Category::with_id(
        identity,
        CategoryInput {
            name: "Movie".to_string(),
            description: Some("all movies".to_string()),
            is_active: Some(false),
            created_at: Some(1_700_000_000_000),
        },
    )
    .unwrap();

    assert_eq!(category.id(), FIXED_ID);
    assert_eq!(category.description(), Some("all movies"));
    assert!(!category.is_active());
    assert_eq!(category.created_at(), 1_700_000_000_000);
}

#[test]
fn category_to_map_renders_id_and_every_field() {
    let identity = EntityId::parse(FIXED_ID).unwrap();
    let category = Category::with_id(identity, input("Movie")).unwrap();
    let map = category.to_map();

    assert_eq!(map["id"], FIXED_ID);
    assert_eq!(map["name"], "Movie");
    assert_eq!(map["description"], Value::Null);
    assert_eq!(map["is_active"], true);
    assert!(map["created_at"].is_i64());
    assert!(!map.contains_key("identity"));
    assert_eq!(map.len(), 5);
}

#[test]
fn category_update_replaces_fields_and_keeps_the_original_value() {
    let original = Category::new(input("Movie")).unwrap();
    let updated = original
        .update("Documentary", Some("non-fiction".to_string()))
        .unwrap();

    assert_eq!(updated.id(), original.id());
    assert_eq!(updated.name(), "Documentary");
    assert_eq!(updated.description(), Some("non-fiction"));
    assert_eq!(original.name(), "Movie");
    assert_eq!(original.description(), None);
}

#[test]
fn category_update_rejects_invalid_names() {
    let category = Category::new(input("Movie")).unwrap();

    let blank = category.update("", None).unwrap_err();
    assert_eq!(blank.field("name"), ["This field may not be blank."]);

    let long = category.update("a".repeat(256), None).unwrap_err();
    assert_eq!(
        long.field("name"),
        ["Ensure this field has no more than 255 characters."]
    );

    assert!(category.update("a".repeat(255), None).is_ok());
}

#[test]
fn category_activate_and_deactivate_flip_only_the_flag() {
    let category = Category::new(input("Movie")).unwrap();

    let inactive = category.deactivate();
    assert!(!inactive.is_active());
    assert_eq!(inactive.id(), category.id());
    assert_eq!(inactive.name(), category.name());

    let active = inactive.activate();
    assert!(active.is_active());
}

#[test]
fn category_field_setters_return_modified_copies() {
    let category = Category::new(input("Movie")).unwrap();

    let renamed = category.with_name("Series");
    assert_eq!(renamed.name(), "Series");
    assert_eq!(category.name(), "Movie");

    let described = category.with_description(Some("catalog".to_string()));
    assert_eq!(described.description(), Some("catalog"));

    let relocated = category.with_created_at(42);
    assert_eq!(relocated.created_at(), 42);
    assert_eq!(relocated.id(), category.id());
}

#[test]
fn category_declared_defaults_are_queryable() {
    assert_eq!(Category::default_of("is_active"), Some(Value::Bool(true)));
    assert_eq!(Category::default_of("description"), Some(Value::Null));
    assert_eq!(Category::default_of("name"), None);
    assert_eq!(Category::default_of("created_at"), None);
    assert_eq!(Category::default_of("unknown"), None);
}

#[test]
fn category_construction_rejects_blank_and_overlong_names() {
    let blank = Category::new(input("")).unwrap_err();
    assert_eq!(blank.field("name"), ["This field may not be blank."]);

    let spaces = Category::new(input("   ")).unwrap_err();
    assert_eq!(spaces.field("name"), ["This field may not be blank."]);

    let long = Category::new(input(&"a".repeat(256))).unwrap_err();
    assert_eq!(
        long.field("name"),
        ["Ensure this field has no more than 255 characters."]
    );
}

#[test]
fn validator_reports_missing_and_mistyped_fields() {
    let empty = json!({});
    let errors = CategoryValidator
        .validate(empty.as_object().unwrap())
        .unwrap_err();
    assert_eq!(errors["name"], ["This field is required."]);

    let mistyped = json!({
        "name": null,
        "description": 7,
        "is_active": "yes",
        "created_at": "today",
    });
    let errors = CategoryValidator
        .validate(mistyped.as_object().unwrap())
        .unwrap_err();
    assert_eq!(errors["name"], ["This field may not be null."]);
    assert_eq!(errors["description"], ["Not a valid string."]);
    assert_eq!(errors["is_active"], ["Must be a valid boolean."]);
    assert_eq!(errors["created_at"], ["A valid integer is required."]);
}

#[test]
fn validator_rejects_null_for_non_nullable_fields() {
    let nulled = json!({
        "name": "Movie",
        "is_active": null,
        "created_at": null,
    });
    let errors = CategoryValidator
        .validate(nulled.as_object().unwrap())
        .unwrap_err();
    assert_eq!(errors["is_active"], ["This field may not be null."]);
    assert_eq!(errors["created_at"], ["This field may not be null."]);
    assert!(!errors.contains_key("name"));
}

#[test]
fn validator_returns_the_accepted_field_set() {
    let fields = json!({
        "id": FIXED_ID,
        "name": "Movie",
        "description": null,
        "is_active": true,
        "created_at": 1_700_000_000_000_i64,
    });
    let validated = CategoryValidator
        .validate(fields.as_object().unwrap())
        .unwrap();
    assert_eq!(validated["name"], "Movie");
}

#[test]
fn validation_error_display_lists_fields_and_messages() {
    let error = Category::new(input("")).unwrap_err();
    let rendered = error.to_string();
    assert!(rendered.contains("entity validation failed"));
    assert!(rendered.contains("name=[This field may not be blank.]"));
}

#[test]
fn validation_error_display_orders_fields_by_name() {
    let mut errors = FieldErrors::new();
    errors.insert(
        "name".to_string(),
        vec!["This field is required.".to_string()],
    );
    errors.insert(
        "is_active".to_string(),
        vec!["Must be a valid boolean.".to_string()],
    );

    let error = EntityValidationError::new(errors);
    assert_eq!(
        error.to_string(),
        "entity validation failed: is_active=[Must be a valid boolean.] \
         name=[This field is required.]"
    );
    assert!(error.field("unknown").is_empty());
}

#[test]
fn category_serde_shape_matches_to_map() {
    let identity = EntityId::parse(FIXED_ID).unwrap();
    let category = Category::with_id(
        identity,
        CategoryInput {
            name: "Movie".to_string(),
            created_at: Some(1_700_000_000_000),
            ..CategoryInput::default()
        },
    )
    .unwrap();

    let wire = serde_json::to_value(&category).unwrap();
    assert_eq!(wire["id"], FIXED_ID);
    assert_eq!(wire["name"], "Movie");
    assert_eq!(wire["created_at"], 1_700_000_000_000_i64);

    let decoded: Category = serde_json::from_value(wire).unwrap();
    assert_eq!(decoded, category);
}

#[test]
fn category_deserialization_rejects_malformed_ids() {
    let wire = json!({
        "id": "not-a-uuid",
        "name": "Movie",
        "description": null,
        "is_active": true,
        "created_at": 1_700_000_000_000_i64,
    });
    assert!(serde_json::from_value::<Category>(wire).is_err());
}
