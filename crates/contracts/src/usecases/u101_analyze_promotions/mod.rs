pub mod request;
pub mod response;

pub use request::AnalyzeRequest;
pub use response::AnalyzeResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct AnalyzePromotions;

impl UseCaseMetadata for AnalyzePromotions {
    fn usecase_index() -> &'static str {
        "u101"
    }

    fn usecase_name() -> &'static str {
        "analyze_promotions"
    }

    fn display_name() -> &'static str {
        "Analyze promotions"
    }

    fn description() -> &'static str {
        "Aggregate a transaction export into promotion and store summaries"
    }
}
