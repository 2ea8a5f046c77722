//! Consistency checking through the operation surface.

use cspops::{Annotation, Operations, ReasonerOutcome};
use rstest::rstest;

use crate::helpers::envelope_assertions::{assert_error, assert_ok, assert_problems};
use crate::helpers::source_fixtures::{
    BLOCK_SCALAR_DUMMY, BLOCK_SCALAR_YAML, PLANT_DUMMY, PLANT_JSON, PLANT_YAML,
};
use crate::helpers::stub_reasoner::StubReasoner;

#[rstest]
#[case("yaml", PLANT_YAML)]
#[case("json", PLANT_JSON)]
#[case("dummy", PLANT_DUMMY)]
#[tokio::test]
async fn test_accepted_model_is_ok(#[case] syntax: &str, #[case] content: &str) {
    let ops = Operations::new(StubReasoner::accepting());

    let envelope = ops.check_consistency(syntax, content).await;

    assert_ok(&envelope);
    assert_eq!(ops.reasoner().calls(), 1);
}

#[rstest]
#[case("yaml")]
#[case("json")]
#[case("dummy")]
#[tokio::test]
async fn test_empty_content_skips_reasoner(#[case] syntax: &str) {
    let ops = Operations::new(StubReasoner::rejecting("model.dummy:1: boom"));

    assert_ok(&ops.check_consistency(syntax, "").await);
    assert_eq!(ops.reasoner().calls(), 0);
}

#[tokio::test]
async fn test_reasoner_receives_one_statement_per_line() {
    let ops = Operations::new(StubReasoner::accepting());

    ops.check_consistency("yaml", PLANT_YAML).await;
    ops.check_consistency("json", PLANT_JSON).await;

    assert_eq!(ops.reasoner().documents(), vec![PLANT_DUMMY, PLANT_DUMMY]);
}

#[tokio::test]
async fn test_dummy_error_row_is_reported_line() {
    let ops = Operations::new(StubReasoner::rejecting(
        "path/model.dummy:4: dummy: bad constraint\n\n",
    ));

    let envelope = ops.check_consistency("dummy", PLANT_DUMMY).await;

    assert_eq!(
        assert_problems(&envelope),
        &[Annotation::error(3, 0, "bad constraint")]
    );
}

#[tokio::test]
async fn test_two_blocks_map_to_yaml_lines_in_order() {
    let stderr = "\
/tmp/csp_files/1f0e/model.dummy:5:
Dummy: type error: overtime must be bool

/tmp/csp_files/1f0e/model.dummy:4:
Dummy: constraint within_capacity is never satisfied
";
    let ops = Operations::new(StubReasoner::rejecting(stderr));

    let envelope = ops.check_consistency("yaml", PLANT_YAML).await;

    assert_eq!(
        assert_problems(&envelope),
        &[
            Annotation::error(15, 0, "type error: overtime must be bool"),
            Annotation::error(13, 0, "constraint within_capacity is never satisfied"),
        ]
    );
}

#[tokio::test]
async fn test_json_rows_use_first_line_containing_id() {
    // "output" first appears in the goal line, before its declaration.
    let ops = Operations::new(StubReasoner::rejecting(
        "model.dummy:2: dummy: output has an empty domain\n\nmodel.dummy:4: dummy: unsatisfiable",
    ));

    let envelope = ops.check_consistency("json", PLANT_JSON).await;

    assert_eq!(
        assert_problems(&envelope),
        &[
            Annotation::error(1, 0, "output has an empty domain"),
            Annotation::error(5, 0, "unsatisfiable"),
        ]
    );
}

#[tokio::test]
async fn test_goal_error_maps_to_goal_line() {
    let ops = Operations::new(StubReasoner::rejecting("model.dummy:6: dummy: cannot maximize"));

    let envelope = ops.check_consistency("yaml", PLANT_YAML).await;

    assert_eq!(
        assert_problems(&envelope),
        &[Annotation::error(18, 0, "cannot maximize")]
    );
}

/// The goal directive is spelled with an escape, so "satisfy" never appears
/// in the submitted text.
const ESCAPED_GOAL_JSON: &str = r#"{
    "constraints": [{ "id": "c1", "expression": "x > 1" }],
    "goal": { "id": "s\u0061tisfy" }
}"#;

#[tokio::test]
async fn test_identifier_absent_from_original_contributes_nothing() {
    let stderr = "model.dummy:2: dummy: goal rejected\n\nmodel.dummy:1: dummy: c1 rejected";
    let ops = Operations::new(StubReasoner::rejecting(stderr));

    let envelope = ops.check_consistency("json", ESCAPED_GOAL_JSON).await;

    assert_eq!(
        assert_problems(&envelope),
        &[Annotation::error(1, 0, "c1 rejected")]
    );
    assert_eq!(
        ops.reasoner().documents(),
        vec!["constraint c1: x > 1;\nsolve satisfy;\n"]
    );
}

#[tokio::test]
async fn test_no_located_block_falls_back_to_origin() {
    let ops = Operations::new(StubReasoner::rejecting(
        "model.dummy:2: dummy: goal rejected\n\nmodel.dummy:9: dummy: past the end",
    ));

    let envelope = ops.check_consistency("json", ESCAPED_GOAL_JSON).await;

    assert_eq!(
        assert_problems(&envelope),
        &[Annotation::error(0, 0, "goal rejected\n\npast the end")]
    );
}

#[tokio::test]
async fn test_parameter_error_maps_to_declaration() {
    let ops = Operations::new(StubReasoner::rejecting(
        "model.dummy:1: dummy: capacity is negative",
    ));

    let envelope = ops.check_consistency("yaml", PLANT_YAML).await;

    assert_eq!(
        assert_problems(&envelope),
        &[Annotation::error(1, 0, "capacity is negative")]
    );
}

#[tokio::test]
async fn test_unparseable_stderr_yields_single_fallback() {
    let stderr = "Dummy: internal solver failure\n\nsecond paragraph";
    let ops = Operations::new(StubReasoner::rejecting(stderr));

    let envelope = ops.check_consistency("yaml", PLANT_YAML).await;

    assert_eq!(
        assert_problems(&envelope),
        &[Annotation::error(
            0,
            0,
            "internal solver failure\n\nsecond paragraph"
        )]
    );
}

#[tokio::test]
async fn test_empty_stderr_falls_back_to_error_message() {
    let ops = Operations::new(StubReasoner::with_outcome(ReasonerOutcome::failure(
        "could not start reasoner 'dummy': No such file or directory (os error 2)",
        "",
    )));

    let envelope = ops.check_consistency("dummy", PLANT_DUMMY).await;

    let annotations = assert_problems(&envelope);
    assert_eq!(annotations.len(), 1);
    assert_eq!((annotations[0].row, annotations[0].column), (0, 0));
    assert!(annotations[0].text.starts_with("could not start reasoner"));
}

#[tokio::test]
async fn test_yaml_syntax_error_is_single_annotation() {
    let ops = Operations::new(StubReasoner::accepting());

    let envelope = ops.check_consistency("yaml", "a: 1\n  b: 2\n").await;

    assert_eq!(assert_problems(&envelope).len(), 1);
    assert_eq!(ops.reasoner().calls(), 0);
}

#[tokio::test]
async fn test_missing_field_is_error() {
    let ops = Operations::new(StubReasoner::accepting());

    let envelope = ops
        .check_consistency("json", r#"{"constraints": [{"id": "c1"}]}"#)
        .await;

    let message = assert_error(&envelope);
    assert!(message.contains("missing field `expression`"), "{message}");
    assert_eq!(ops.reasoner().calls(), 0);
}

#[tokio::test]
async fn test_unknown_syntax_is_error() {
    let ops = Operations::new(StubReasoner::accepting());

    let envelope = ops.check_consistency("toml", "a = 1").await;

    assert_eq!(assert_error(&envelope), "Unsupported syntax: toml");
}

#[tokio::test]
async fn test_block_scalar_expression_keeps_line_numbers() {
    let stderr = "model.dummy:3: dummy: c2 is unsatisfiable\n\nmodel.dummy:2: dummy: c1 is weak";
    let ops = Operations::new(StubReasoner::rejecting(stderr));

    let envelope = ops.check_consistency("yaml", BLOCK_SCALAR_YAML).await;

    assert_eq!(ops.reasoner().documents(), vec![BLOCK_SCALAR_DUMMY]);
    assert_eq!(
        assert_problems(&envelope),
        &[
            Annotation::error(9, 0, "c2 is unsatisfiable"),
            Annotation::error(5, 0, "c1 is weak"),
        ]
    );
}

#[rstest]
#[case("c-1")]
#[case("solve")]
#[tokio::test]
async fn test_unusual_constraint_id_maps_to_its_row(#[case] id: &str) {
    let yaml = format!(
        "variables:\n  - id: x\n    type: int\nconstraints:\n  - id: {id}\n    expression: x > 1\n"
    );
    let ops = Operations::new(StubReasoner::rejecting("model.dummy:2: dummy: bad"));

    let envelope = ops.check_consistency("yaml", &yaml).await;

    assert_eq!(
        assert_problems(&envelope),
        &[Annotation::error(4, 0, "bad")]
    );
}

#[tokio::test]
async fn test_model_without_intermediate_form_is_error() {
    let ops = Operations::new(StubReasoner::accepting());
    let yaml = "variables:\n  - id: b\n    type: bool\n    range: { min: 0, max: 1 }\n";

    let envelope = ops.check_consistency("yaml", yaml).await;

    assert_eq!(
        assert_error(&envelope),
        "Error while checking consistency: variable 'b': bool variables take no range"
    );
    assert_eq!(ops.reasoner().calls(), 0);
}
