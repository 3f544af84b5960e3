use super::*;

#[test]
fn keys_are_namespaced_with_the_portal_prefix() {
    assert_eq!(scoped("tutorialStep"), "zelda_portal_tutorialStep");
    assert_eq!(scoped("lastContactForm"), "zelda_portal_lastContactForm");
}

#[test]
fn load_without_a_browser_is_none() {
    // Native builds have no localStorage; the stub must degrade silently.
    assert_eq!(load::<usize>("tutorialStep"), None);
}
