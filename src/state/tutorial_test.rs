use super::*;

fn step(n: u32, gated: bool) -> Step {
    Step {
        step_number: n,
        title: format!("Step {n}"),
        description: "Push the block.".to_owned(),
        image_url: None,
        image_alt: None,
        success_message: None,
        congratulations: None,
        requires_ball_and_chain: gated,
    }
}

/// Ten steps, the last four gated (warning boundary at index 6).
fn steps() -> Vec<Step> {
    (1..=10).map(|n| step(n, n >= 7)).collect()
}

// =============================================================
// Initialization resolution order
// =============================================================

#[test]
fn init_defaults_to_zero() {
    let nav = StepNavigator::new(steps(), None, None);
    assert_eq!(nav.current(), 0);
}

#[test]
fn init_url_param_is_one_based() {
    let nav = StepNavigator::new(steps(), Some("5"), None);
    assert_eq!(nav.current(), 4);
}

#[test]
fn init_url_param_wins_over_persisted() {
    let nav = StepNavigator::new(steps(), Some("3"), Some(8));
    assert_eq!(nav.current(), 2);
}

#[test]
fn init_out_of_range_url_falls_back_to_persisted() {
    let nav = StepNavigator::new(steps(), Some("999"), Some(4));
    assert_eq!(nav.current(), 4);
}

#[test]
fn init_out_of_range_url_without_persisted_is_zero() {
    let nav = StepNavigator::new(steps(), Some("999"), None);
    assert_eq!(nav.current(), 0);
}

#[test]
fn init_unparseable_url_is_discarded() {
    let nav = StepNavigator::new(steps(), Some("banana"), Some(2));
    assert_eq!(nav.current(), 2);
}

#[test]
fn init_url_zero_is_invalid() {
    // "step=0" has no zero-based equivalent; fall through.
    let nav = StepNavigator::new(steps(), Some("0"), Some(3));
    assert_eq!(nav.current(), 3);
}

#[test]
fn init_out_of_range_persisted_is_discarded() {
    let nav = StepNavigator::new(steps(), None, Some(10));
    assert_eq!(nav.current(), 0);
}

// =============================================================
// Advance / retreat clamping
// =============================================================

#[test]
fn advance_increments_everywhere_below_last() {
    for i in 0..9 {
        let mut nav = StepNavigator::new(steps(), None, Some(i));
        assert_eq!(nav.advance(), i + 1);
    }
}

#[test]
fn advance_is_noop_at_last() {
    let mut nav = StepNavigator::new(steps(), None, Some(9));
    assert_eq!(nav.advance(), 9);
    assert_eq!(nav.current(), 9);
}

#[test]
fn retreat_decrements_everywhere_above_first() {
    for i in 1..10 {
        let mut nav = StepNavigator::new(steps(), None, Some(i));
        assert_eq!(nav.retreat(), i - 1);
    }
}

#[test]
fn retreat_is_noop_at_first() {
    let mut nav = StepNavigator::new(steps(), None, None);
    assert_eq!(nav.retreat(), 0);
}

#[test]
fn boundary_flags_track_index() {
    let mut nav = StepNavigator::new(steps(), None, None);
    assert!(nav.at_first());
    assert!(!nav.at_last());
    nav.advance();
    assert!(!nav.at_first());
    for _ in 0..20 {
        nav.advance();
    }
    assert!(nav.at_last());
}

// =============================================================
// Reset
// =============================================================

#[test]
fn reset_returns_to_first_step() {
    let mut nav = StepNavigator::new(steps(), Some("7"), None);
    assert_eq!(nav.current(), 6);
    assert_eq!(nav.reset(), 0);
    assert_eq!(nav.current(), 0);
}

// =============================================================
// Progress
// =============================================================

#[test]
fn progress_at_index_two_of_ten_is_exactly_thirty() {
    let nav = StepNavigator::new(steps(), None, Some(2));
    assert_eq!(nav.progress_percent(), 30.0);
}

#[test]
fn progress_spans_first_to_last() {
    let nav = StepNavigator::new(steps(), None, None);
    assert_eq!(nav.progress_percent(), 10.0);
    let nav = StepNavigator::new(steps(), None, Some(9));
    assert_eq!(nav.progress_percent(), 100.0);
}

#[test]
fn progress_of_empty_navigator_is_zero() {
    let nav = StepNavigator::new(Vec::new(), None, None);
    assert_eq!(nav.progress_percent(), 0.0);
}

// =============================================================
// Gating warning
// =============================================================

#[test]
fn warning_index_is_first_gated_after_ungated() {
    let nav = StepNavigator::new(steps(), None, None);
    assert_eq!(nav.warning_index(), Some(6));
}

#[test]
fn warning_visible_only_at_boundary_step() {
    for i in 0..10 {
        let nav = StepNavigator::new(steps(), None, Some(i));
        assert_eq!(nav.warning_visible(), i == 6, "index {i}");
    }
}

#[test]
fn no_warning_without_gated_steps() {
    let list: Vec<Step> = (1..=5).map(|n| step(n, false)).collect();
    let nav = StepNavigator::new(list, None, None);
    assert_eq!(nav.warning_index(), None);
    assert!(!nav.warning_visible());
}

#[test]
fn no_warning_when_first_step_is_gated() {
    // A tutorial that is gated from the start has no part-two boundary.
    let list: Vec<Step> = (1..=5).map(|n| step(n, true)).collect();
    let nav = StepNavigator::new(list, None, None);
    assert_eq!(nav.warning_index(), None);
}

#[test]
fn warning_does_not_affect_progress_denominator() {
    let nav = StepNavigator::new(steps(), None, Some(6));
    assert!(nav.warning_visible());
    assert_eq!(nav.progress_percent(), 70.0);
}

// =============================================================
// Current step access
// =============================================================

#[test]
fn step_returns_the_active_record() {
    let mut nav = StepNavigator::new(steps(), None, None);
    assert_eq!(nav.step().map(|s| s.step_number), Some(1));
    nav.advance();
    assert_eq!(nav.step().map(|s| s.step_number), Some(2));
}

#[test]
fn empty_navigator_has_no_step() {
    let mut nav = StepNavigator::new(Vec::new(), Some("1"), Some(0));
    assert!(nav.step().is_none());
    assert_eq!(nav.advance(), 0);
    assert_eq!(nav.retreat(), 0);
}
