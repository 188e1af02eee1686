pub mod request;
pub mod response;

pub use request::ExtraSalesRequest;
pub use response::ExtraSalesResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct CalculateExtraSales;

impl UseCaseMetadata for CalculateExtraSales {
    fn usecase_index() -> &'static str {
        "u103"
    }

    fn usecase_name() -> &'static str {
        "calculate_extra_sales"
    }

    fn display_name() -> &'static str {
        "Calculate extra sales"
    }

    fn description() -> &'static str {
        "Estimate per-promotion uplift against a scaled baseline period"
    }
}
