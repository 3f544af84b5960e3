//! Renders the active tutorial step.

use leptos::prelude::*;

use crate::net::types::Step;

/// The currently displayed tutorial step: heading, description, optional
/// illustration, and optional success/congratulations text.
#[component]
pub fn StepCard(step: Step) -> impl IntoView {
    let Step {
        step_number,
        title,
        description,
        image_url,
        image_alt,
        success_message,
        congratulations,
        ..
    } = step;

    view! {
        <div class="step step--active">
            <h2>{format!("Step {step_number}: {title}")}</h2>
            <p>{description}</p>
            {image_url.map(|src| {
                let alt = image_alt.unwrap_or_default();
                view! { <img src=src alt=alt class="step__image"/> }
            })}
            {success_message.map(|text| {
                view! {
                    <p class="step__success">
                        "\u{1f389} " <strong>{text}</strong> " \u{1f389}"
                    </p>
                }
            })}
            {congratulations.map(|text| view! { <p>{text}</p> })}
        </div>
    }
}
