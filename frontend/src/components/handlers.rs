use super::super::{Model, Msg, RunOutcome};
use super::questionnaire::FieldRefs;
use super::utils::{flag_from_select, input_value, parse_int_value, select_value};
use gloo_net::http::Request;
use shared::{BusinessProfile, RunRequest, RunResult, RunStatus};
use wasm_bindgen_futures::spawn_local;
use yew::events::SubmitEvent;
use yew::prelude::*;

pub fn handle_submit(model: &mut Model, ctx: &Context<Model>, event: SubmitEvent) -> bool {
    event.prevent_default();

    let config = ctx.props();
    let request = RunRequest {
        profile: collect_profile(&model.refs),
        source_doc_path: config.source_doc_path.clone(),
        output_dir: config.output_dir.clone(),
    };

    // Disable the submit button before the request leaves; it stays
    // disabled until RunFinished arrives on any path.
    model.running = true;
    send_run_request(ctx, config.run_endpoint(), request);
    true
}

pub fn handle_run_finished(model: &mut Model, outcome: RunOutcome) -> bool {
    model.running = false;
    model.outcome = Some(outcome);
    true
}

/// Assembles the profile from the bound form elements. Values are
/// forwarded as read: an unparseable number stays `None` and a select
/// contributes `true` only for the literal value `"true"`.
pub fn collect_profile(refs: &FieldRefs) -> BusinessProfile {
    BusinessProfile {
        business_name: input_value(&refs.business_name),
        area_sqm: parse_int_value(&input_value(&refs.area_sqm)),
        num_seats: parse_int_value(&input_value(&refs.num_seats)),
        uses_gas: flag_from_select(&select_value(&refs.uses_gas)),
        delivers: flag_from_select(&select_value(&refs.delivers)),
        has_meat: flag_from_select(&select_value(&refs.has_meat)),
        uses_fryer: flag_from_select(&select_value(&refs.uses_fryer)),
        has_alcohol: flag_from_select(&select_value(&refs.has_alcohol)),
        serves_dairy: flag_from_select(&select_value(&refs.serves_dairy)),
        has_seating: flag_from_select(&select_value(&refs.has_seating)),
        is_open_air: flag_from_select(&select_value(&refs.is_open_air)),
        uses_gas_grill: flag_from_select(&select_value(&refs.uses_gas_grill)),
        is_kosher: flag_from_select(&select_value(&refs.is_kosher)),
    }
}

fn send_run_request(ctx: &Context<Model>, endpoint: String, request: RunRequest) {
    spawn_local({
        let link = ctx.link().clone();

        async move {
            let outcome = match run_pipeline(&endpoint, &request).await {
                Ok(outcome) => outcome,
                Err(err) => {
                    gloo_console::error!(format!("Pipeline request failed: {err:?}"));
                    RunOutcome::ConnectionError {
                        message: err.to_string(),
                    }
                }
            };

            link.send_message(Msg::RunFinished(outcome));
        }
    });
}

async fn run_pipeline(
    endpoint: &str,
    request: &RunRequest,
) -> Result<RunOutcome, gloo_net::Error> {
    let response = Request::post(endpoint).json(request)?.send().await?;

    // The pipeline service reports failures inside the payload, so the
    // body is decoded regardless of the HTTP status code.
    let body = response.json::<serde_json::Value>().await?;
    Ok(interpret_response(body))
}

/// Maps a decoded response body onto a UI outcome: `status == "success"`
/// shows the report, anything else shows `detail` or, failing that, the
/// whole body serialized back to text.
pub fn interpret_response(body: serde_json::Value) -> RunOutcome {
    let result: RunResult = serde_json::from_value(body.clone()).unwrap_or_default();
    log::debug!("Pipeline responded with status {}", result.status);

    if result.status == RunStatus::Success {
        RunOutcome::Success {
            report_text: result.report_text.unwrap_or_default(),
        }
    } else {
        let message = match result.detail {
            Some(detail) => detail,
            None => body.to_string(),
        };
        RunOutcome::Failure { message }
    }
}
