use maud::{html, Markup, PreEscaped, DOCTYPE};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

const BASE_CSS: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 760px; margin: 0 auto; padding: 0 1rem 3rem; color: #1f2937; }
header { display: flex; align-items: center; gap: .75rem; padding: .75rem 0; border-bottom: 1px solid #e5e7eb; margin-bottom: 1.5rem; }
label { display: block; font-weight: 600; margin: 1rem 0 .25rem; }
textarea, input[type=text], input[type=number] { width: 100%; padding: .5rem; font-size: 1rem; box-sizing: border-box; }
.row { display: flex; gap: 1rem; }
.row > div { flex: 1; }
.checkbox label { display: inline; font-weight: 400; }
button.primary { margin-top: 1.25rem; padding: .6rem 1.4rem; font-size: 1rem; cursor: pointer; }
.spinner { display: none; margin-left: .5rem; }
.htmx-request .spinner, .htmx-request.spinner { display: inline; }
.alert { padding: .75rem 1rem; border-radius: 6px; margin: 1rem 0; }
.alert-error { background: #fee2e2; color: #991b1b; }
.alert-success { background: #dcfce7; color: #166534; }
.alert-notice { background: #fef9c3; color: #854d0e; }
.rewrite { white-space: pre-wrap; background: #f9fafb; border: 1px solid #e5e7eb; border-radius: 6px; padding: 1rem; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(BASE_CSS)) }
                script src=(HTMX_SRC) defer {}
            }
            body {
                header {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#524ed2"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    {
                        path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                        path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                        path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                        path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                    }
                    h3 { "Property ad optimizer" }
                }
                (content)
            }
        }
    }
}
