// File: tests/persistence.rs
// The persistence invariant: after any mutating operation, the on-disk file
// deserializes to exactly the in-memory list.
use goalpost::context::{AppContext, TestContext};
use goalpost::model::Goal;
use goalpost::storage::LocalStorage;
use goalpost::store::GoalStore;
use std::fs;
use std::sync::Arc;

fn assert_disk_matches(ctx: &TestContext, store: &GoalStore) {
    let on_disk = LocalStorage::load(ctx).unwrap();
    assert_eq!(on_disk, store.goals().to_vec());
}

#[test]
fn every_mutation_is_mirrored_to_disk() {
    let ctx = Arc::new(TestContext::new());
    let mut store = GoalStore::load(ctx.clone()).unwrap();

    let a = Goal::new("A", "2026-03-01");
    let b = Goal::new("B", "2026-04-01");
    let (uid_a, uid_b) = (a.uid.clone(), b.uid.clone());

    store.add_goal(a).unwrap();
    assert_disk_matches(&ctx, &store);

    store.add_goal(b).unwrap();
    assert_disk_matches(&ctx, &store);

    store.toggle_goal(&uid_b).unwrap();
    assert_disk_matches(&ctx, &store);

    store.remove_goal(&uid_a).unwrap();
    assert_disk_matches(&ctx, &store);

    store.toggle_goal(&uid_b).unwrap();
    assert_disk_matches(&ctx, &store);
}

#[test]
fn fresh_store_sees_previous_session() {
    let ctx = Arc::new(TestContext::new());

    {
        let mut store = GoalStore::load(ctx.clone()).unwrap();
        let mut goal = Goal::new("Survive restart", "2026-06-01");
        goal.completed = false;
        let uid = goal.uid.clone();
        store.add_goal(goal).unwrap();
        store.toggle_goal(&uid).unwrap();
    }

    // Simulates process restart: a brand-new store over the same context.
    let store = GoalStore::load(ctx.clone()).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.goals()[0].name, "Survive restart");
    assert!(store.goals()[0].completed);
}

#[test]
fn corrupt_file_starts_session_empty_but_writable() {
    let ctx = Arc::new(TestContext::new());
    let path = ctx.get_goals_path().unwrap();
    fs::write(&path, "not even close to json").unwrap();

    let mut store = GoalStore::load(ctx.clone()).unwrap();
    assert!(store.is_empty());

    // The session continues normally; mutations persist to a fresh file.
    store.add_goal(Goal::new("post-corruption", "2026-07-01")).unwrap();
    assert_disk_matches(&ctx, &store);
}

#[test]
fn noop_mutations_do_not_touch_the_file() {
    let ctx = Arc::new(TestContext::new());
    let mut store = GoalStore::load(ctx.clone()).unwrap();
    store.add_goal(Goal::new("only", "2026-01-01")).unwrap();

    let path = ctx.get_goals_path().unwrap();
    let before = fs::metadata(&path).unwrap().modified().unwrap();

    store.remove_goal("missing").unwrap();
    store.toggle_goal("missing").unwrap();

    let after = fs::metadata(&path).unwrap().modified().unwrap();
    assert_eq!(before, after);
    assert_disk_matches(&ctx, &store);
}
