use super::super::{Model, RunOutcome};
use yew::prelude::*;

/// Renders the result region for the last finished run. The report text is
/// interpolated as text, so markup coming back from the service is shown
/// escaped rather than injected into the page.
pub fn render_result(model: &Model) -> Html {
    html! {
        <div id="result">
            {
                match &model.outcome {
                    None => html! {},
                    Some(RunOutcome::Success { report_text }) => html! {
                        <>
                            <h2>{"✅ דוח נוצר בהצלחה"}</h2>
                            <pre style="white-space: pre-wrap; text-align: right;">
                                { report_text }
                            </pre>
                        </>
                    },
                    Some(RunOutcome::Failure { message }) => html! {
                        <p style="color:red;">{ format!("❌ שגיאה: {message}") }</p>
                    },
                    Some(RunOutcome::ConnectionError { message }) => html! {
                        <p>{ format!("⚠️ שגיאה בחיבור לשרת: {message}") }</p>
                    },
                }
            }
        </div>
    }
}
