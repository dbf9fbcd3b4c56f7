use maud::{html, Markup};

pub fn error_alert(message: &str) -> Markup {
    html! {
        div class="alert alert-error" role="alert" { (message) }
    }
}

pub fn success_alert(message: &str) -> Markup {
    html! {
        div class="alert alert-success" role="status" { (message) }
    }
}

pub fn notice_alert(message: &str) -> Markup {
    html! {
        div class="alert alert-notice" role="status" { (message) }
    }
}
