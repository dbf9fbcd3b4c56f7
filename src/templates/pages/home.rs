// templates/pages/home.rs

use crate::templates::{
    components::{ad_form, FormVm},
    desktop_layout,
};
use maud::{html, Markup};

/// The form page. `result` is the outcome panel from a non-htmx submit.
pub fn home_page(form: &FormVm, result: Option<Markup>) -> Markup {
    desktop_layout(
        "Property ad optimizer",
        html! {
            main {
                h1 { "Property ad optimizer" }
                p {
                    "Add your property " code { "description" } ", a few data points and zap! "
                    "We will optimize your ad based on the ads that helped the fastest sold homes near you."
                }

                (ad_form(form))

                div id="result" {
                    @if let Some(panel) = result {
                        (panel)
                    }
                }
            }
        },
    )
}
