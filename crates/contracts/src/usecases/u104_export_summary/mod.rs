pub mod request;
pub mod response;

pub use request::ExportRequest;
pub use response::ExportResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct ExportSummary;

impl UseCaseMetadata for ExportSummary {
    fn usecase_index() -> &'static str {
        "u104"
    }

    fn usecase_name() -> &'static str {
        "export_summary"
    }

    fn display_name() -> &'static str {
        "Export promotion review"
    }

    fn description() -> &'static str {
        "Write the promotion summary table to a spreadsheet file"
    }
}
