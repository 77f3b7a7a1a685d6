use yew::Properties;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
pub const DEFAULT_SOURCE_DOC_PATH: &str = "data/rew/18-07-2022_4.2A.pdf";
pub const DEFAULT_OUTPUT_DIR: &str = "output/";

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_source_doc_path() -> String {
    DEFAULT_SOURCE_DOC_PATH.to_string()
}

fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

/// Request constants for a pipeline run. Passed to the root component as
/// properties, so every value can be overridden at mount time without
/// touching the submit handler.
#[derive(Properties, Clone, Debug, PartialEq)]
pub struct RunConfig {
    #[prop_or_else(default_api_base)]
    pub api_base: String,
    #[prop_or_else(default_source_doc_path)]
    pub source_doc_path: String,
    #[prop_or_else(default_output_dir)]
    pub output_dir: String,
}

impl RunConfig {
    pub fn run_endpoint(&self) -> String {
        format!("{}/api/v1/pipeline/run_json", self.api_base)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            source_doc_path: default_source_doc_path(),
            output_dir: default_output_dir(),
        }
    }
}
