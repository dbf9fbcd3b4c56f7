// templates/pages/result.rs

use crate::optimizer::Outcome;
use crate::templates::components::{error_alert, notice_alert, success_alert};
use maud::{html, Markup};

pub const DEGRADED_NOTICE: &str =
    "Comparable listings were unavailable; the ad was optimized without templates.";

/// Fragment swapped into `#result`, or embedded in the full page.
pub fn result_panel(outcome: &Outcome) -> Markup {
    match outcome {
        Outcome::Rejected(err) => error_alert(&err.to_string()),

        Outcome::Failed(err) => html! {
            (error_alert(err.user_message()))
            p class="error-detail" { small { (err.to_string()) } }
        },

        Outcome::Optimized(done) => html! {
            @if done.degraded {
                (notice_alert(DEGRADED_NOTICE))
            }
            section class="card" {
                h2 { "Your optimized ad" }
                div class="rewrite" { (done.text) }
                p {
                    small {
                        "Based on " (done.comparables_used) " fast-selling comparable listing"
                        @if done.comparables_used != 1 { "s" }
                        "."
                    }
                }
            }
            (success_alert("Done!"))
        },
    }
}
