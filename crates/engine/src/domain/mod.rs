pub mod resolve;
pub mod session;

pub use resolve::resolve_record;
pub use session::AnalysisSession;
