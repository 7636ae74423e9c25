use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use trip_planner_rs::{
    FieldLabels, Generation, GenerationClient, Planner, PlannerError, Result, TripRequest,
    TripSession,
};

#[derive(Debug)]
struct ScriptedClient {
    text: String,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl GenerationClient for ScriptedClient {
    async fn generate(&self, _request: &TripRequest) -> Result<Generation> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Generation {
            raw_text: self.text.clone(),
            citations: Vec::new(),
        })
    }
}

#[derive(Debug)]
struct FailingClient;

#[async_trait]
impl GenerationClient for FailingClient {
    async fn generate(&self, _request: &TripRequest) -> Result<Generation> {
        Err(PlannerError::Generation("connection reset".to_string()))
    }
}

#[test]
fn test_planner_parses_client_output() {
    let calls = Arc::new(AtomicUsize::new(0));
    let planner = Planner::new(ScriptedClient {
        text: "## Day 1: x\n- **Temple**\n- Estimasi Biaya: IDR 20.000".to_string(),
        calls: Arc::clone(&calls),
    });
    let request = TripRequest::new("Bali", 1, "temples").unwrap();

    let plan = tokio_test::block_on(planner.plan(&request)).unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(plan.itinerary[0].activities[0].estimated_cost, "IDR 20.000");
}

#[test]
fn test_planner_with_english_labels() {
    let planner = Planner::new(ScriptedClient {
        text: "## Day 1: x\n- **Museum**\n- Estimated Cost: EUR 15".to_string(),
        calls: Arc::new(AtomicUsize::new(0)),
    })
    .with_labels(FieldLabels::english());
    let request = TripRequest::new("Paris", 1, "art").unwrap();

    let plan = tokio_test::block_on(planner.plan(&request)).unwrap();
    assert_eq!(plan.itinerary[0].activities[0].estimated_cost, "EUR 15");
}

#[test]
fn test_new_submission_replaces_previous_plan() {
    let first = Planner::new(ScriptedClient {
        text: "## Day 1: a\n- **One**\n## Day 2: b".to_string(),
        calls: Arc::new(AtomicUsize::new(0)),
    });
    let second = Planner::new(ScriptedClient {
        text: "## Day 1: c\n- **Two**".to_string(),
        calls: Arc::new(AtomicUsize::new(0)),
    });
    let mut session = TripSession::new();

    tokio_test::block_on(session.submit(&first, &TripRequest::new("A", 2, "x").unwrap()))
        .unwrap();
    session.set_actual_cost(1, 0, Some(10.0)).unwrap();

    tokio_test::block_on(session.submit(&second, &TripRequest::new("B", 1, "y").unwrap()))
        .unwrap();

    assert_eq!(session.itinerary().len(), 1);
    assert_eq!(session.itinerary()[0].activities[0].name, "Two");
    assert_eq!(session.budget().total_actual, 0.0);
    assert_eq!(session.duration_days(), 1);
}

#[test]
fn test_failure_propagates_from_client() {
    let planner = Planner::new(FailingClient);
    let request = TripRequest::new("Bali", 1, "temples").unwrap();

    let err = tokio_test::block_on(planner.plan(&request)).unwrap_err();
    assert_eq!(
        err.user_message(),
        "Failed to generate itinerary: connection reset"
    );
}
