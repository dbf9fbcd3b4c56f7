use crate::domain::submission::{
    RawSubmission, MIN_AD_TEXT_CHARS, ROOMS_MAX, ROOMS_MIN, ZIP_CHARS,
};
use maud::{html, Markup};

/// What the form shows: either blanks or the user's last submission.
#[derive(Debug, Clone, PartialEq)]
pub struct FormVm {
    pub ad_text: String,
    pub zip: String,
    pub beds: u8,
    pub baths: u8,
    pub pool: bool,
}

impl Default for FormVm {
    fn default() -> Self {
        Self {
            ad_text: String::new(),
            zip: String::new(),
            beds: ROOMS_MIN,
            baths: ROOMS_MIN,
            pool: false,
        }
    }
}

impl From<&RawSubmission> for FormVm {
    fn from(raw: &RawSubmission) -> Self {
        let rooms = |s: &str| {
            s.trim()
                .parse::<u8>()
                .unwrap_or(ROOMS_MIN)
                .clamp(ROOMS_MIN, ROOMS_MAX)
        };
        Self {
            ad_text: raw.ad_text.clone(),
            zip: raw.zip.clone(),
            beds: rooms(&raw.beds),
            baths: rooms(&raw.baths),
            pool: raw.pool,
        }
    }
}

pub fn ad_form(vm: &FormVm) -> Markup {
    html! {
        form
            method="post"
            action="/optimize"
            hx-post="/optimize"
            hx-target="#result"
            hx-swap="innerHTML"
            hx-indicator="#busy"
            hx-disabled-elt="button"
            id="property_form"
        {
            // Length is checked server side in chars; the browser counts UTF-16 units.
            label for="ad_text" { "Please enter the ad you want to optimize (at least " (MIN_AD_TEXT_CHARS) " characters)" }
            textarea id="ad_text" name="ad_text" rows="12" required { (vm.ad_text) }

            label for="zip" { "What is property zipcode?" }
            input
                type="text"
                id="zip"
                name="zip"
                maxlength=(ZIP_CHARS)
                minlength=(ZIP_CHARS)
                inputmode="numeric"
                value=(vm.zip)
                required;

            div class="row" {
                div {
                    label for="beds" { "How many beds?" }
                    input type="number" id="beds" name="beds" min=(ROOMS_MIN) max=(ROOMS_MAX) value=(vm.beds);
                }
                div {
                    label for="baths" { "How many baths?" }
                    input type="number" id="baths" name="baths" min=(ROOMS_MIN) max=(ROOMS_MAX) value=(vm.baths);
                }
            }

            div class="checkbox" {
                input type="checkbox" id="pool" name="pool" checked[vm.pool];
                " "
                label for="pool" { "Has a pool?" }
            }

            button type="submit" class="primary" {
                "Generate"
                span id="busy" class="spinner" aria-hidden="true" { "Processing…" }
            }
        }
    }
}
