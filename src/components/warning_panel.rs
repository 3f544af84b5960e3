//! Interstitial warning shown at the gated second part of the tutorial.

use leptos::prelude::*;

/// Prerequisite warning panel, rendered above the first step that requires
/// the Ball and Chain while that step is current.
#[component]
pub fn WarningPanel() -> impl IntoView {
    view! {
        <div class="warning-box">
            <h2>"\u{26a0}\u{fe0f} Part 2: Ball and Chain Required"</h2>
            <p class="warning-box__lead">
                <strong>"STOP HERE if you don't have the Ball and Chain weapon yet!"</strong>
            </p>
            <p>
                "You must obtain the Ball and Chain weapon before continuing with Part 2 of this puzzle. The Ball and Chain is needed to break ice blocks."
            </p>
            <p>"Once you have the weapon, continue to the next step."</p>
            <img src="/images/ball.png" alt="Ball and Chain weapon" class="step__image"/>
        </div>
    }
}
