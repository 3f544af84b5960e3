use super::*;

// =============================================================
// Step wire format
// =============================================================

#[test]
fn step_parses_camel_case_document() {
    let raw = serde_json::json!({
        "stepNumber": 7,
        "title": "Break the ice blocks",
        "description": "Swing the Ball and Chain at the frozen wall.",
        "imageUrl": "images/ball.png",
        "imageAlt": "Ball and Chain weapon",
        "requiresBallAndChain": true
    });
    let step: Step = serde_json::from_value(raw).expect("step");
    assert_eq!(step.step_number, 7);
    assert_eq!(step.image_url.as_deref(), Some("images/ball.png"));
    assert!(step.requires_ball_and_chain);
    assert!(step.success_message.is_none());
}

#[test]
fn step_optional_fields_default() {
    let raw = serde_json::json!({
        "stepNumber": 1,
        "title": "Enter the ruins",
        "description": "Walk through the main door."
    });
    let step: Step = serde_json::from_value(raw).expect("step");
    assert!(!step.requires_ball_and_chain);
    assert!(step.image_url.is_none());
    assert!(step.congratulations.is_none());
}

#[test]
fn tutorial_data_wraps_a_step_list() {
    let raw = r#"{"steps":[{"stepNumber":1,"title":"t","description":"d"}]}"#;
    let data: TutorialData = serde_json::from_str(raw).expect("document");
    assert_eq!(data.steps.len(), 1);
}

// =============================================================
// ContactSubmission wire format
// =============================================================

#[test]
fn submission_round_trips_through_json() {
    let snap = ContactSubmission {
        name: "Zelda".to_owned(),
        email: "zelda@hyrule.net".to_owned(),
        subject: "general".to_owned(),
        message: "The portal looks wonderful.".to_owned(),
        newsletter: false,
        timestamp: "2026-08-30T12:00:00.000Z".to_owned(),
    };
    let json = serde_json::to_string(&snap).expect("encode");
    let back: ContactSubmission = serde_json::from_str(&json).expect("decode");
    assert_eq!(back, snap);
}
