//! Translation between syntaxes.

use cspops::{Operations, Status};
use rstest::rstest;
use serde_json::{Value, json};

use crate::helpers::envelope_assertions::assert_error;
use crate::helpers::source_fixtures::{
    BLOCK_SCALAR_DUMMY, BLOCK_SCALAR_YAML, PLANT_DUMMY, PLANT_JSON, PLANT_YAML,
};
use crate::helpers::stub_reasoner::StubReasoner;

fn ops() -> Operations<StubReasoner> {
    Operations::new(StubReasoner::accepting())
}

fn translated(source: &str, destination: &str, content: &str) -> String {
    let envelope = ops().translate(source, destination, content);
    assert_eq!(envelope.status, Status::Ok, "{envelope:?}");
    assert_eq!(
        envelope.message.as_deref(),
        Some("The content has been translated")
    );
    match envelope.data {
        Some(Value::String(text)) => text,
        other => panic!("expected translated text, got {other:?}"),
    }
}

#[test]
fn test_unsupported_destination_message() {
    let envelope = ops().translate("dummy", "csv", "solve satisfy;");

    assert_eq!(
        serde_json::to_value(&envelope).unwrap(),
        json!({
            "status": "ERROR",
            "message": "It is not possible to translate from yaml to csv",
            "data": null,
            "annotations": []
        })
    );
}

#[rstest]
#[case("yaml", "yaml")]
#[case("json", "json")]
#[case("dummy", "dummy")]
fn test_identity_pairs_are_unsupported(#[case] source: &str, #[case] destination: &str) {
    let envelope = ops().translate(source, destination, PLANT_YAML);

    assert_eq!(
        assert_error(&envelope),
        format!("It is not possible to translate from yaml to {destination}")
    );
}

#[test]
fn test_empty_content_has_nothing_to_translate() {
    let envelope = ops().translate("yaml", "json", "");

    assert_eq!(envelope.status, Status::Ok);
    assert_eq!(envelope.message.as_deref(), Some("Nothing to translate"));
    assert_eq!(envelope.data, None);
}

#[test]
fn test_dummy_to_json_uses_four_space_indent() {
    let text = translated("dummy", "json", "var bool: b;\nsolve satisfy;\n");

    assert_eq!(
        text,
        r#"{
    "variables": [
        {
            "id": "b",
            "type": "bool"
        }
    ],
    "goal": {
        "id": "satisfy"
    }
}"#
    );
}

#[rstest]
#[case("yaml", PLANT_YAML)]
#[case("json", PLANT_JSON)]
fn test_to_dummy_writes_one_statement_per_line(#[case] source: &str, #[case] content: &str) {
    assert_eq!(translated(source, "dummy", content), PLANT_DUMMY);
}

#[test]
fn test_yaml_json_yaml_preserves_model() {
    let json_text = translated("yaml", "json", PLANT_YAML);
    let yaml_text = translated("json", "yaml", &json_text);

    let original: Value = serde_yaml::from_str(PLANT_YAML).unwrap();
    let round_tripped: Value = serde_yaml::from_str(&yaml_text).unwrap();
    assert_eq!(original, round_tripped);
}

#[test]
fn test_dummy_yaml_dummy_preserves_statements() {
    let yaml_text = translated("dummy", "yaml", PLANT_DUMMY);

    assert_eq!(translated("yaml", "dummy", &yaml_text), PLANT_DUMMY);
}

#[test]
fn test_unparseable_source_is_error() {
    let envelope = ops().translate("json", "yaml", "{\"goal\": ");

    let message = assert_error(&envelope);
    assert!(message.starts_with("Error while translating: "), "{message}");
}

#[test]
fn test_non_model_json_cannot_become_dummy() {
    let envelope = ops().translate("json", "dummy", r#"{"goal": "satisfy"}"#);

    assert!(assert_error(&envelope).starts_with("Error while translating: "));
}

#[test]
fn test_translation_never_reports_annotations() {
    let envelope = ops().translate("yaml", "json", "a: 1\n  b: 2\n");

    assert_eq!(envelope.status, Status::Error);
    assert!(envelope.annotations().is_empty());
}

#[test]
fn test_block_scalar_expression_becomes_one_line() {
    let dummy = translated("yaml", "dummy", BLOCK_SCALAR_YAML);
    assert_eq!(dummy, BLOCK_SCALAR_DUMMY);

    let yaml = translated("dummy", "yaml", &dummy);
    assert_eq!(translated("yaml", "dummy", &yaml), BLOCK_SCALAR_DUMMY);
}

#[test]
fn test_hyphenated_ids_survive_dummy_round_trip() {
    let dummy = "int: max-load = 7;\nvar 0..9: load;\nconstraint under-max: load <= max-load;\n";

    let json_text = translated("dummy", "json", dummy);

    assert_eq!(translated("json", "dummy", &json_text), dummy);
}

#[test]
fn test_int_variable_with_fractional_bound_cannot_become_dummy() {
    let envelope = ops().translate(
        "json",
        "dummy",
        r#"{"variables": [{"id": "x", "type": "int", "range": {"min": 0.5, "max": 3}}]}"#,
    );

    assert_eq!(
        assert_error(&envelope),
        "Error while translating: variable 'x': range 0.5..3 does not fit type int"
    );
}
