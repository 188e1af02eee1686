pub mod common;

pub mod u101_analyze_promotions;
pub mod u102_load_baseline;
pub mod u103_calculate_extra_sales;
pub mod u104_export_summary;
