use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Business questionnaire answers sent to the pipeline service.
///
/// The numeric fields mirror the browser form: an empty or non-numeric
/// input parses to `None` and goes over the wire as JSON `null`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BusinessProfile {
    pub business_name: String,
    pub area_sqm: Option<i64>,
    pub num_seats: Option<i64>,
    pub uses_gas: bool,
    pub delivers: bool,
    pub has_meat: bool,
    pub uses_fryer: bool,
    pub has_alcohol: bool,
    pub serves_dairy: bool,
    pub has_seating: bool,
    pub is_open_air: bool,
    pub uses_gas_grill: bool,
    pub is_kosher: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RunRequest {
    pub profile: BusinessProfile,
    pub source_doc_path: String,
    pub output_dir: String,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RunStatus {
    Success,
    Error,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Pipeline run response. Only `status`, `report_text` and `detail` drive
/// the UI; `report_path` is carried for completeness.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct RunResult {
    #[serde(default)]
    pub status: RunStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_profile() -> BusinessProfile {
        BusinessProfile {
            business_name: "מסעדת הדוגמה".to_string(),
            area_sqm: Some(50),
            num_seats: Some(20),
            uses_gas: true,
            delivers: true,
            has_meat: true,
            uses_fryer: true,
            has_alcohol: true,
            serves_dairy: true,
            has_seating: true,
            is_open_air: true,
            uses_gas_grill: true,
            is_kosher: true,
        }
    }

    #[test]
    fn run_request_matches_wire_schema() {
        let request = RunRequest {
            profile: sample_profile(),
            source_doc_path: "data/rew/18-07-2022_4.2A.pdf".to_string(),
            output_dir: "output/".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["source_doc_path"], "data/rew/18-07-2022_4.2A.pdf");
        assert_eq!(value["output_dir"], "output/");
        assert_eq!(value["profile"]["area_sqm"], 50);
        assert_eq!(value["profile"]["num_seats"], 20);
        for flag in [
            "uses_gas",
            "delivers",
            "has_meat",
            "uses_fryer",
            "has_alcohol",
            "serves_dairy",
            "has_seating",
            "is_open_air",
            "uses_gas_grill",
            "is_kosher",
        ] {
            assert_eq!(value["profile"][flag], true, "flag {flag}");
        }
    }

    #[test]
    fn unparsed_numbers_serialize_as_null() {
        let mut profile = sample_profile();
        profile.area_sqm = None;
        profile.num_seats = None;
        let value = serde_json::to_value(&profile).unwrap();

        assert!(value["area_sqm"].is_null());
        assert!(value["num_seats"].is_null());
    }

    #[test]
    fn success_response_decodes() {
        let result: RunResult = serde_json::from_value(json!({
            "status": "success",
            "report_path": "/tmp/report.md",
            "report_text": "דוח",
            "profile": { "business_name": "x" }
        }))
        .unwrap();

        assert_eq!(result.status, RunStatus::Success);
        assert_eq!(result.report_text.as_deref(), Some("דוח"));
        assert_eq!(result.detail, None);
    }

    #[test]
    fn unknown_status_falls_through() {
        let result: RunResult =
            serde_json::from_value(json!({ "status": "queued" })).unwrap();
        assert_eq!(result.status, RunStatus::Unknown);

        let result: RunResult = serde_json::from_value(json!({})).unwrap();
        assert_eq!(result.status, RunStatus::Unknown);
    }

    #[test]
    fn error_detail_decodes() {
        let result: RunResult = serde_json::from_value(json!({
            "status": "error",
            "detail": "bad input"
        }))
        .unwrap();

        assert_eq!(result.status, RunStatus::Error);
        assert_eq!(result.detail.as_deref(), Some("bad input"));
    }

    #[test]
    fn status_display_is_lowercase() {
        assert_eq!(RunStatus::Success.to_string(), "success");
        assert_eq!(RunStatus::Error.to_string(), "error");
    }
}
