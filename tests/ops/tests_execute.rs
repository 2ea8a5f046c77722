//! Solving YAML models.

use cspops::{ExecuteFormat, ExecuteResponse, Operations, ReasonerOutcome, Status};
use serde_json::{Value, json};

use crate::helpers::envelope_assertions::{assert_error, assert_problems};
use crate::helpers::source_fixtures::{PLANT_DUMMY, PLANT_YAML};
use crate::helpers::stub_reasoner::StubReasoner;

const SOLUTION: &str = "capacity = 40;\noutput = 40;\novertime = false;\n----------\n";

#[tokio::test]
async fn test_html_wraps_stdout() {
    let ops = Operations::new(StubReasoner::with_outcome(ReasonerOutcome::success(
        SOLUTION, true,
    )));

    let response = ops.execute(PLANT_YAML, ExecuteFormat::Html).await;

    let ExecuteResponse::Envelope(envelope) = response else {
        panic!("expected an envelope, got {response:?}");
    };
    assert_eq!(envelope.status, Status::Ok);
    assert_eq!(
        envelope.message.as_deref(),
        Some(format!("<pre>{SOLUTION}</pre>").as_str())
    );
    assert_eq!(envelope.data, Some(Value::String(PLANT_YAML.to_string())));
    assert_eq!(envelope.annotations, None);
    assert_eq!(ops.reasoner().documents(), vec![PLANT_DUMMY]);
}

#[tokio::test]
async fn test_json_format_returns_report() {
    let ops = Operations::new(StubReasoner::with_outcome(ReasonerOutcome::success(
        "=====UNSATISFIABLE=====\n",
        false,
    )));

    let response = ops.execute(PLANT_YAML, ExecuteFormat::Json).await;

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({
            "error": null,
            "stdout": "=====UNSATISFIABLE=====\n",
            "stderr": "",
            "isSatisfiable": false,
            "document": PLANT_DUMMY
        })
    );
}

#[tokio::test]
async fn test_reasoner_error_returns_report_for_any_format() {
    let ops = Operations::new(StubReasoner::rejecting("model.dummy:4: dummy: unsatisfiable"));

    let response = ops.execute(PLANT_YAML, ExecuteFormat::Html).await;

    let ExecuteResponse::Report(report) = response else {
        panic!("expected a report, got {response:?}");
    };
    assert_eq!(report.outcome.error.as_deref(), Some("exit status: 1"));
    assert_eq!(report.outcome.stderr, "model.dummy:4: dummy: unsatisfiable");
    assert_eq!(report.document, PLANT_DUMMY);
}

#[tokio::test]
async fn test_unparseable_yaml_is_reported_before_solving() {
    let ops = Operations::new(StubReasoner::accepting());

    let response = ops.execute("a: 1\n  b: 2\n", ExecuteFormat::Html).await;

    let ExecuteResponse::Envelope(envelope) = response else {
        panic!("expected an envelope, got {response:?}");
    };
    assert_eq!(assert_problems(&envelope)[0].row, 1);
    assert_eq!(ops.reasoner().calls(), 0);
}

#[tokio::test]
async fn test_non_model_yaml_is_error() {
    let ops = Operations::new(StubReasoner::accepting());

    let response = ops.execute("goal: satisfy\n", ExecuteFormat::Json).await;

    let ExecuteResponse::Envelope(envelope) = response else {
        panic!("expected an envelope, got {response:?}");
    };
    assert!(assert_error(&envelope).starts_with("Error while executing: "));
    assert_eq!(ops.reasoner().calls(), 0);
}
