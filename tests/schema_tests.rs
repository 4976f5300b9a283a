use entity_engine::{Entity, FieldType, RecordSchema, Schema};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn sample_schema() -> RecordSchema {
    RecordSchema::new()
        .field("str", FieldType::String)
        .optional("optStr", FieldType::String)
}

fn entity(value: Value) -> Entity {
    value.as_object().cloned().unwrap()
}

// ── Full parse: root-level failures ──────────────────────────────

#[test]
fn absent_input_is_required() {
    let err = sample_schema().parse_full(None).unwrap_err();
    assert_eq!(err.errors, vec!["Required"]);
    assert!(err.fields.is_empty());
}

#[test]
fn null_input_is_type_mismatch() {
    let err = sample_schema().parse_full(Some(&Value::Null)).unwrap_err();
    assert_eq!(err.errors, vec!["Expected object, received null"]);
}

#[test]
fn primitive_input_is_type_mismatch() {
    let schema = sample_schema();
    let err = schema.parse_full(Some(&json!(42))).unwrap_err();
    assert_eq!(err.errors, vec!["Expected object, received number"]);
    let err = schema.parse_full(Some(&json!("x"))).unwrap_err();
    assert_eq!(err.errors, vec!["Expected object, received string"]);
    let err = schema.parse_full(Some(&json!([1, 2]))).unwrap_err();
    assert_eq!(err.errors, vec!["Expected object, received array"]);
}

// ── Full parse: field failures ───────────────────────────────────

#[test]
fn missing_required_field_is_reported_by_name() {
    let err = sample_schema()
        .parse_full(Some(&json!({"id": "a"})))
        .unwrap_err();
    assert!(err.errors.is_empty());
    assert_eq!(err.fields["str"].errors, vec!["Required"]);
}

#[test]
fn field_type_mismatch_names_both_types() {
    let err = sample_schema()
        .parse_full(Some(&json!({"id": "a", "str": 42})))
        .unwrap_err();
    assert_eq!(
        err.fields["str"].errors,
        vec!["Expected string, received number"]
    );
}

#[test]
fn missing_id_is_reported() {
    let err = sample_schema()
        .parse_full(Some(&json!({"str": "x"})))
        .unwrap_err();
    assert_eq!(err.fields["id"].errors, vec!["Required"]);
}

#[test]
fn non_string_id_is_reported() {
    let err = sample_schema()
        .parse_full(Some(&json!({"id": 7, "str": "x"})))
        .unwrap_err();
    assert_eq!(
        err.fields["id"].errors,
        vec!["Expected string, received number"]
    );
}

#[test]
fn multiple_failures_collected_in_one_tree() {
    let err = sample_schema()
        .parse_full(Some(&json!({"id": 7, "optStr": true})))
        .unwrap_err();
    assert_eq!(err.fields.len(), 3); // id, str, optStr
    assert_eq!(err.fields["str"].errors, vec!["Required"]);
    assert_eq!(
        err.fields["optStr"].errors,
        vec!["Expected string, received boolean"]
    );
}

// ── Full parse: success ──────────────────────────────────────────

#[test]
fn conforming_input_parses_to_itself() {
    let input = json!({"id": "a", "str": "x", "optStr": "y"});
    let parsed = sample_schema().parse_full(Some(&input)).unwrap();
    assert_eq!(parsed, entity(input));
}

#[test]
fn optional_field_may_be_absent() {
    let input = json!({"id": "a", "str": "x"});
    let parsed = sample_schema().parse_full(Some(&input)).unwrap();
    assert_eq!(parsed, entity(input));
}

#[test]
fn optional_field_present_is_type_checked() {
    let err = sample_schema()
        .parse_full(Some(&json!({"id": "a", "str": "x", "optStr": null})))
        .unwrap_err();
    assert_eq!(
        err.fields["optStr"].errors,
        vec!["Expected string, received null"]
    );
}

#[test]
fn unknown_fields_are_stripped() {
    let parsed = sample_schema()
        .parse_full(Some(&json!({"id": "a", "str": "x", "extra": 1})))
        .unwrap();
    assert_eq!(parsed, entity(json!({"id": "a", "str": "x"})));
}

// ── Partial parse ────────────────────────────────────────────────

#[test]
fn partial_requires_only_id() {
    let parsed = sample_schema()
        .parse_partial(Some(&json!({"id": "a"})))
        .unwrap();
    assert_eq!(parsed, entity(json!({"id": "a"})));
}

#[test]
fn partial_still_requires_id() {
    let err = sample_schema()
        .parse_partial(Some(&json!({"str": "x"})))
        .unwrap_err();
    assert_eq!(err.fields["id"].errors, vec!["Required"]);
}

#[test]
fn partial_type_checks_present_fields() {
    let err = sample_schema()
        .parse_partial(Some(&json!({"id": "a", "str": 42})))
        .unwrap_err();
    assert_eq!(
        err.fields["str"].errors,
        vec!["Expected string, received number"]
    );
}

#[test]
fn partial_rejects_non_object_input() {
    let err = sample_schema().parse_partial(Some(&Value::Null)).unwrap_err();
    assert_eq!(err.errors, vec!["Expected object, received null"]);
}

// ── Nested records ───────────────────────────────────────────────

fn nested_schema() -> RecordSchema {
    RecordSchema::new().field(
        "address",
        FieldType::Record(
            RecordSchema::new()
                .field("city", FieldType::String)
                .optional("zip", FieldType::String),
        ),
    )
}

#[test]
fn nested_record_failures_nest_in_the_tree() {
    let err = nested_schema()
        .parse_full(Some(&json!({"id": "a", "address": {"city": 5}})))
        .unwrap_err();
    assert_eq!(
        err.fields["address"].fields["city"].errors,
        vec!["Expected string, received number"]
    );
}

#[test]
fn nested_record_parses_recursively() {
    let input = json!({"id": "a", "address": {"city": "Oslo", "zip": "0150"}});
    let parsed = nested_schema().parse_full(Some(&input)).unwrap();
    assert_eq!(parsed, entity(input));
}

#[test]
fn nested_record_is_fully_validated_inside_partial() {
    // Partial-ness applies to top-level fields only; a nested object that is
    // present must conform completely.
    let err = nested_schema()
        .parse_partial(Some(&json!({"id": "a", "address": {}})))
        .unwrap_err();
    assert_eq!(err.fields["address"].fields["city"].errors, vec!["Required"]);
}

#[test]
fn nested_unknown_fields_are_stripped() {
    let parsed = nested_schema()
        .parse_full(Some(&json!({"id": "a", "address": {"city": "Oslo", "noise": 1}})))
        .unwrap();
    assert_eq!(parsed, entity(json!({"id": "a", "address": {"city": "Oslo"}})));
}

// ── Other field types ────────────────────────────────────────────

#[test]
fn number_bool_and_array_fields() {
    let schema = RecordSchema::new()
        .field("count", FieldType::Number)
        .field("done", FieldType::Bool)
        .field("tags", FieldType::Array);
    let input = json!({"id": "a", "count": 3.5, "done": false, "tags": ["x"]});
    assert_eq!(schema.parse_full(Some(&input)).unwrap(), entity(input));

    let err = schema
        .parse_full(Some(&json!({"id": "a", "count": "3", "done": 0, "tags": {}})))
        .unwrap_err();
    assert_eq!(
        err.fields["count"].errors,
        vec!["Expected number, received string"]
    );
    assert_eq!(
        err.fields["done"].errors,
        vec!["Expected boolean, received number"]
    );
    assert_eq!(
        err.fields["tags"].errors,
        vec!["Expected array, received object"]
    );
}
