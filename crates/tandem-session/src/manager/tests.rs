//! Lifecycle tests against the recording backend.

use super::*;
use crate::registry::LoadOutcome;
use crate::testing::FakeBackend;

fn sid(raw: u32) -> SessionId {
    SessionId::new(raw).unwrap()
}

fn manager_in(dir: &tempfile::TempDir) -> SessionManager<FakeBackend> {
    let registry = SessionRegistry::new(dir.path().join("sessions.json"));
    let mut manager =
        SessionManager::new(FakeBackend::default(), registry, SidebarLayout::new(120.0));
    manager.set_viewport(Size::new(1200.0, 800.0));
    manager
}

fn write_state(dir: &tempfile::TempDir, contents: &str) {
    std::fs::write(dir.path().join("sessions.json"), contents).unwrap();
}

fn persisted(manager: &SessionManager<FakeBackend>) -> LoadOutcome {
    SessionRegistry::new(manager.registry.path()).load()
}

fn visible_ids(manager: &SessionManager<FakeBackend>) -> Vec<SessionId> {
    manager
        .views()
        .filter(|(_, v)| v.visible.get())
        .map(|(id, _)| id)
        .collect()
}

// -- Listing --

#[test]
fn list_reads_persisted_ids_in_order() {
    let dir = tempfile::tempdir().unwrap();
    write_state(&dir, r#"{"ids":[3,7]}"#);
    let manager = manager_in(&dir);
    assert_eq!(manager.list(), vec![sid(3), sid(7)]);
}

#[test]
fn list_of_missing_empty_or_malformed_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let manager = manager_in(&dir);
    assert!(manager.list().is_empty());

    for contents in ["", "{\"ids\":", "{\"ids\":{}}"] {
        write_state(&dir, contents);
        assert!(manager.list().is_empty(), "{contents:?}");
    }
}

// -- Creation --

#[test]
fn add_after_three_and_seven_assigns_eight() {
    let dir = tempfile::tempdir().unwrap();
    write_state(&dir, r#"{"ids":[3,7]}"#);
    let mut manager = manager_in(&dir);
    manager.restore();

    let id = manager.add().unwrap();
    assert_eq!(id, sid(8));
    assert_eq!(manager.active(), Some(sid(8)));
    assert_eq!(manager.ids(), vec![sid(3), sid(7), sid(8)]);
}

#[test]
fn add_on_empty_pool_assigns_one() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = manager_in(&dir);
    assert_eq!(manager.add().unwrap(), sid(1));
}

#[test]
fn get_or_create_persists_only_new_views() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = manager_in(&dir);

    manager.get_or_create(sid(2)).unwrap();
    assert_eq!(persisted(&manager), LoadOutcome::Loaded(vec![sid(2)]));

    // Clobber the file; an existing view must not rewrite it.
    write_state(&dir, r#"{"ids":[]}"#);
    manager.get_or_create(sid(2)).unwrap();
    assert_eq!(persisted(&manager), LoadOutcome::Loaded(vec![]));
    assert_eq!(manager.backend().created, vec![sid(2)]);
}

#[test]
fn created_views_start_detached_at_session_bounds() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = manager_in(&dir);
    let view = manager.get_or_create(sid(5)).unwrap();
    assert!(!view.visible.get());
    assert_eq!(view.bounds.get(), Rect::new(120.0, 0.0, 1080.0, 800.0));
}

#[test]
fn failed_creation_registers_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = manager_in(&dir);
    manager.backend_mut().fail_for = Some(sid(4));

    let err = manager.activate(sid(4)).unwrap_err();
    assert!(matches!(err, SessionError::ViewCreation { .. }));
    assert!(manager.is_empty());
    assert_eq!(manager.active(), None);
    assert_eq!(persisted(&manager), LoadOutcome::Missing);
}

// -- Switching --

#[test]
fn activating_twice_keeps_one_view_attached() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = manager_in(&dir);

    manager.activate(sid(1)).unwrap();
    manager.activate(sid(1)).unwrap();

    assert_eq!(manager.len(), 1);
    assert_eq!(manager.backend().created, vec![sid(1)]);
    assert_eq!(visible_ids(&manager), vec![sid(1)]);
}

#[test]
fn switching_detaches_previous_view() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = manager_in(&dir);

    manager.activate(sid(1)).unwrap();
    manager.activate(sid(2)).unwrap();
    assert_eq!(visible_ids(&manager), vec![sid(2)]);
    assert_eq!(manager.active(), Some(sid(2)));

    manager.activate(sid(1)).unwrap();
    assert_eq!(visible_ids(&manager), vec![sid(1)]);
}

#[test]
fn activation_fits_view_beside_sidebar() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = manager_in(&dir);
    manager.set_viewport(Size::new(1000.0, 700.0));
    manager.activate(sid(3)).unwrap();

    let view = manager.view(sid(3)).unwrap();
    assert_eq!(view.bounds.get(), Rect::new(120.0, 0.0, 880.0, 700.0));
}

// -- Resize --

#[test]
fn viewport_change_refits_only_active_view() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = manager_in(&dir);
    manager.activate(sid(1)).unwrap();
    manager.activate(sid(2)).unwrap();

    manager.set_viewport(Size::new(1600.0, 900.0));

    let active = manager.view(sid(2)).unwrap().bounds.get();
    let inactive = manager.view(sid(1)).unwrap().bounds.get();
    assert_eq!(active, Rect::new(120.0, 0.0, 1480.0, 900.0));
    assert_eq!(inactive, Rect::new(120.0, 0.0, 1080.0, 800.0));
}

#[test]
fn resize_without_active_view_is_noop() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = manager_in(&dir);
    manager.get_or_create(sid(1)).unwrap();

    manager.set_viewport(Size::new(500.0, 500.0));
    let bounds = manager.view(sid(1)).unwrap().bounds.get();
    assert_eq!(bounds, Rect::new(120.0, 0.0, 1080.0, 800.0));
}

// -- Removal --

#[test]
fn removing_active_leaves_nothing_attached() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = manager_in(&dir);
    manager.activate(sid(1)).unwrap();
    manager.activate(sid(2)).unwrap();

    assert!(manager.remove(sid(2)));
    assert_eq!(manager.active(), None);
    assert!(visible_ids(&manager).is_empty());

    manager.activate(sid(1)).unwrap();
    assert_eq!(manager.active(), Some(sid(1)));
}

#[test]
fn removing_inactive_keeps_active() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = manager_in(&dir);
    manager.activate(sid(1)).unwrap();
    manager.activate(sid(2)).unwrap();

    assert!(manager.remove(sid(1)));
    assert_eq!(manager.active(), Some(sid(2)));
    assert_eq!(visible_ids(&manager), vec![sid(2)]);
}

#[test]
fn removal_releases_view() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = manager_in(&dir);
    manager.activate(sid(6)).unwrap();

    manager.remove(sid(6));
    assert_eq!(*manager.backend().released.borrow(), vec![sid(6)]);
    assert!(manager.view(sid(6)).is_none());
}

#[test]
fn removing_unknown_id_is_noop() {
    let dir = tempfile::tempdir().unwrap();
    write_state(&dir, r#"{"ids":[3,7]}"#);
    let before = std::fs::read_to_string(dir.path().join("sessions.json")).unwrap();
    let mut manager = manager_in(&dir);

    assert!(!manager.remove(sid(42)));

    let after = std::fs::read_to_string(dir.path().join("sessions.json")).unwrap();
    assert_eq!(before, after);
    assert!(manager.backend().released.borrow().is_empty());
}

#[test]
fn removed_id_can_start_fresh() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = manager_in(&dir);
    manager.activate(sid(1)).unwrap();
    manager.remove(sid(1));

    manager.activate(sid(1)).unwrap();
    assert_eq!(manager.backend().created, vec![sid(1), sid(1)]);
    assert_eq!(manager.ids(), vec![sid(1)]);
}

// -- Persistence invariant --

#[test]
fn persisted_set_tracks_pool_after_every_mutation() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = manager_in(&dir);

    manager.add().unwrap();
    assert_eq!(persisted(&manager), LoadOutcome::Loaded(manager.ids()));
    manager.add().unwrap();
    manager.activate(sid(9)).unwrap();
    assert_eq!(persisted(&manager), LoadOutcome::Loaded(manager.ids()));
    manager.remove(sid(1));
    assert_eq!(persisted(&manager), LoadOutcome::Loaded(manager.ids()));
    manager.add().unwrap();
    assert_eq!(manager.ids(), vec![sid(2), sid(9), sid(10)]);
    assert_eq!(persisted(&manager), LoadOutcome::Loaded(manager.ids()));
    manager.remove(sid(2));
    manager.remove(sid(9));
    manager.remove(sid(10));
    assert_eq!(persisted(&manager), LoadOutcome::Loaded(vec![]));
}

// -- Startup / shutdown --

#[test]
fn restore_recreates_all_and_activates_first() {
    let dir = tempfile::tempdir().unwrap();
    write_state(&dir, r#"{"ids":[4,2,9]}"#);
    let mut manager = manager_in(&dir);

    assert_eq!(manager.restore(), Some(sid(4)));
    assert_eq!(manager.ids(), vec![sid(4), sid(2), sid(9)]);
    assert_eq!(visible_ids(&manager), vec![sid(4)]);
    assert_eq!(persisted(&manager), LoadOutcome::Loaded(manager.ids()));
}

#[test]
fn restore_skips_views_that_fail() {
    let dir = tempfile::tempdir().unwrap();
    write_state(&dir, r#"{"ids":[4,2]}"#);
    let mut manager = manager_in(&dir);
    manager.backend_mut().fail_for = Some(sid(4));

    assert_eq!(manager.restore(), Some(sid(2)));
    assert_eq!(manager.ids(), vec![sid(2)]);
}

#[test]
fn restore_keeps_sessions_that_failed_to_build() {
    let dir = tempfile::tempdir().unwrap();
    write_state(&dir, r#"{"ids":[4,2]}"#);
    let mut manager = manager_in(&dir);
    manager.backend_mut().fail_for = Some(sid(4));

    manager.restore();
    assert_eq!(manager.unbuilt(), &[sid(4)]);
    assert_eq!(persisted(&manager), LoadOutcome::Loaded(vec![sid(4), sid(2)]));

    // A later mutation still carries the unbuilt id.
    manager.add().unwrap();
    assert_eq!(
        persisted(&manager),
        LoadOutcome::Loaded(vec![sid(2), sid(5), sid(4)])
    );

    // Once the view builds, it joins the pool.
    manager.backend_mut().fail_for = None;
    manager.activate(sid(4)).unwrap();
    assert!(manager.unbuilt().is_empty());
    assert_eq!(manager.ids(), vec![sid(2), sid(5), sid(4)]);
    assert_eq!(persisted(&manager), LoadOutcome::Loaded(manager.ids()));
}

#[test]
fn deferred_restore_keeps_saved_sessions() {
    let dir = tempfile::tempdir().unwrap();
    write_state(&dir, r#"{"ids":[3,7]}"#);
    let mut manager = manager_in(&dir);

    assert_eq!(manager.defer_restore(), 2);
    assert!(manager.is_empty());

    // Opening the first listed account builds only that view.
    let first = manager.list()[0];
    manager.activate(first).unwrap();
    assert_eq!(manager.backend().created, vec![sid(3)]);
    assert_eq!(persisted(&manager), LoadOutcome::Loaded(vec![sid(3), sid(7)]));

    assert_eq!(manager.add().unwrap(), sid(8));
    assert_eq!(
        persisted(&manager),
        LoadOutcome::Loaded(vec![sid(3), sid(8), sid(7)])
    );
}

#[test]
fn removing_unopened_session_forgets_it() {
    let dir = tempfile::tempdir().unwrap();
    write_state(&dir, r#"{"ids":[3,7]}"#);
    let mut manager = manager_in(&dir);
    manager.defer_restore();

    assert!(manager.remove(sid(7)));
    assert_eq!(persisted(&manager), LoadOutcome::Loaded(vec![sid(3)]));
    assert!(manager.backend().released.borrow().is_empty());
    assert!(!manager.remove(sid(7)));
}

#[test]
fn add_fails_when_largest_id_is_taken() {
    let dir = tempfile::tempdir().unwrap();
    write_state(&dir, r#"{"ids":[4294967295]}"#);
    let mut manager = manager_in(&dir);
    manager.restore();

    let err = manager.add().unwrap_err();
    assert!(matches!(err, SessionError::IdsExhausted));
    assert_eq!(manager.ids(), vec![sid(u32::MAX)]);
    assert_eq!(manager.backend().created, vec![sid(u32::MAX)]);
    assert_eq!(manager.active(), Some(sid(u32::MAX)));
}

#[test]
fn restore_with_nothing_saved_is_none() {
    let dir = tempfile::tempdir().unwrap();
    write_state(&dir, "garbage");
    let mut manager = manager_in(&dir);
    assert_eq!(manager.restore(), None);
    assert!(manager.is_empty());
}

#[test]
fn release_all_keeps_registry() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = manager_in(&dir);
    manager.activate(sid(1)).unwrap();
    manager.activate(sid(2)).unwrap();

    manager.release_all();

    assert!(manager.is_empty());
    assert_eq!(manager.active(), None);
    assert_eq!(manager.backend().released.borrow().len(), 2);
    assert_eq!(manager.list(), vec![sid(1), sid(2)]);
}
