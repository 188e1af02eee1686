pub mod request;
pub mod response;

pub use request::LoadBaselineRequest;
pub use response::LoadBaselineResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct LoadBaseline;

impl UseCaseMetadata for LoadBaseline {
    fn usecase_index() -> &'static str {
        "u102"
    }

    fn usecase_name() -> &'static str {
        "load_baseline"
    }

    fn display_name() -> &'static str {
        "Load baseline data"
    }

    fn description() -> &'static str {
        "Decode a non-promotion sales export and suggest a baseline window"
    }
}
