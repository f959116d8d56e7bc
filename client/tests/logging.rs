//! Runs in its own binary so the global subscriber stays out of unit tests.

#[test]
fn init_installs_once() {
    assert!(portal_client::logging::init());
    assert!(!portal_client::logging::init());
}
