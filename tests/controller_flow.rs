// File: tests/controller_flow.rs
use goalpost::context::TestContext;
use goalpost::controller::{ActionOutcome, GoalController};
use goalpost::store::GoalStore;
use std::sync::Arc;

fn make_controller() -> (Arc<TestContext>, GoalController) {
    let ctx = Arc::new(TestContext::new());
    let store = GoalStore::load(ctx.clone()).unwrap();
    (ctx, GoalController::new(store))
}

#[test]
fn submit_with_empty_name_is_silently_ignored() {
    let (_ctx, mut c) = make_controller();

    assert!(c.submit("", "2026-01-01").unwrap().is_none());
    assert!(c.submit("   ", "2026-01-01").unwrap().is_none());
    assert!(c.store.is_empty());
}

#[test]
fn submit_with_empty_deadline_is_silently_ignored() {
    let (_ctx, mut c) = make_controller();

    assert!(c.submit("Run a marathon", "").unwrap().is_none());
    assert!(c.submit("Run a marathon", "  ").unwrap().is_none());
    assert!(c.store.is_empty());
}

#[test]
fn submit_trims_and_creates_a_pending_goal() {
    let (_ctx, mut c) = make_controller();

    let goal = c.submit("  Learn Go  ", " 2025-12-31 ").unwrap().unwrap();
    assert_eq!(goal.name, "Learn Go");
    assert_eq!(goal.deadline, "2025-12-31");
    assert!(!goal.completed);
    assert_eq!(c.store.len(), 1);
}

#[test]
fn toggle_and_remove_report_not_found_for_stale_ids() {
    let (_ctx, mut c) = make_controller();

    let goal = c.submit("Ephemeral", "2026-01-01").unwrap().unwrap();
    assert!(matches!(
        c.remove(&goal.uid).unwrap(),
        ActionOutcome::Applied(_)
    ));

    // The id is stale now; both actions degrade to NotFound, never a fault.
    assert_eq!(c.toggle(&goal.uid).unwrap(), ActionOutcome::NotFound);
    assert_eq!(c.remove(&goal.uid).unwrap(), ActionOutcome::NotFound);
}

#[test]
fn controller_scenario_add_toggle_remove() {
    let (_ctx, mut c) = make_controller();

    let a = c.submit("A", "2026-01-01").unwrap().unwrap();
    let b = c.submit("B", "2026-02-01").unwrap().unwrap();

    match c.toggle(&a.uid).unwrap() {
        ActionOutcome::Applied(g) => assert!(g.completed),
        other => panic!("expected Applied, got {:?}", other),
    }

    c.remove(&a.uid).unwrap();
    assert_eq!(c.store.len(), 1);
    assert_eq!(c.store.goals()[0].uid, b.uid);
    assert_eq!(c.store.position_of(&b.uid), Some(0));
}
