use contracts::usecases::u101_analyze_promotions::AnalyzeRequest;
use contracts::usecases::u102_load_baseline::LoadBaselineRequest;
use contracts::usecases::u103_calculate_extra_sales::ExtraSalesRequest;
use contracts::usecases::u104_export_summary::ExportRequest;
use engine::shared::config;
use engine::shared::dates;
use engine::shared::format::{
    format_amount, format_number, format_percent, format_qty, format_signed_qty,
};
use engine::usecases::{
    u101_analyze_promotions, u102_load_baseline, u103_calculate_extra_sales, u104_export_summary,
};

#[derive(Debug, Default)]
struct Args {
    promotion_file: Option<String>,
    baseline_file: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    export: bool,
    export_path: Option<String>,
    promotion_filter: Option<String>,
    search: Option<String>,
}

fn parse_args() -> Args {
    let mut args = Args::default();
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--baseline" => args.baseline_file = it.next(),
            "--start" => args.start_date = it.next(),
            "--end" => args.end_date = it.next(),
            "--export" => args.export = true,
            "--export-path" => {
                args.export = true;
                args.export_path = it.next();
            }
            "--promotion" => args.promotion_filter = it.next(),
            "--search" => args.search = it.next(),
            _ if args.promotion_file.is_none() => args.promotion_file = Some(arg),
            _ => {}
        }
    }
    args
}

fn print_usage() {
    println!("Usage: engine <promotion-file.csv> [options]");
    println!();
    println!("Options:");
    println!("  --baseline <file.csv>   baseline (non-promotion) export");
    println!("  --start <date>          baseline window start (defaults to suggested)");
    println!("  --end <date>            baseline window end (defaults to suggested)");
    println!("  --promotion <id>        filter member/store views to one promotion");
    println!("  --search <term>         filter the summary table");
    println!("  --export                write the nine-column review file");
    println!("  --export-path <file>    write the review file to an explicit path");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Log directory next to the build artifacts
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file_path = log_dir.join("engine.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    let config = config::load_config()?;
    let args = parse_args();

    let Some(promotion_file) = args.promotion_file.clone() else {
        // Input-missing: prompt, no computation attempted.
        println!("Please select a file first");
        println!();
        print_usage();
        return Ok(());
    };

    // 1. Aggregate the primary dataset into a fresh session.
    let session = match u101_analyze_promotions::run(&AnalyzeRequest {
        file_path: promotion_file,
    })
    .await
    {
        Ok(session) => session,
        Err(err) => {
            println!("{}", err.message);
            return Ok(());
        }
    };

    print_summary(&session, &args, &config);

    // 2. Optional baseline pass: load, pick a window, calculate uplift.
    if let Some(baseline_file) = args.baseline_file.clone() {
        let loaded = u102_load_baseline::run(&LoadBaselineRequest {
            file_path: baseline_file,
        })
        .await;

        match loaded {
            Ok((batch, info)) => {
                println!();
                println!("Baseline data loaded: {} records", info.record_count);
                if let Some(headers) = &info.available_headers {
                    println!(
                        "Date column not found. Available columns: {}",
                        headers.join(", ")
                    );
                }
                if let (Some(window), Some(days)) = (info.suggested_window, info.suggested_days) {
                    println!(
                        "Baseline period: {} days ({} - {})",
                        days,
                        dates::format_iso(window.start),
                        dates::format_iso(window.end)
                    );
                }

                // Explicit bounds win; otherwise fall back to the
                // suggestion derived from the baseline data.
                let request = ExtraSalesRequest {
                    start_date: args.start_date.clone().unwrap_or_else(|| {
                        info.suggested_window
                            .map(|w| dates::format_iso(w.start))
                            .unwrap_or_default()
                    }),
                    end_date: args.end_date.clone().unwrap_or_else(|| {
                        info.suggested_window
                            .map(|w| dates::format_iso(w.end))
                            .unwrap_or_default()
                    }),
                };

                match u103_calculate_extra_sales::run(&session, &batch, &request) {
                    Ok(response) => print_extra_sales(&response),
                    Err(err) => println!("{}", err.message),
                }
            }
            Err(err) => println!("Error: {}", err.message),
        }
    }

    // 3. Optional export of the review table.
    if args.export {
        let request = ExportRequest {
            output_path: args.export_path.clone(),
        };
        match u104_export_summary::run(&session, &request, &config) {
            Ok(response) => {
                println!();
                println!("Exported {} rows to {}", response.row_count, response.path);
            }
            Err(err) => println!("{}", err.message),
        }
    }

    Ok(())
}

fn print_summary(
    session: &engine::domain::AnalysisSession,
    args: &Args,
    config: &config::Config,
) {
    let totals = session.totals();
    println!("Processing complete!");
    println!();
    println!("Total promotions:   {}", format_number(totals.promotion_count));
    println!(
        "Total transactions: {}",
        format_number(totals.transaction_count)
    );
    println!("Total revenue:      {}", format_amount(totals.total_revenue));
    println!("Total discount:     {}", format_amount(totals.total_discount));

    let filter = args.promotion_filter.as_deref();
    let split = session.member_split(filter);
    println!();
    println!(
        "Members: {} new ({}), {} existing ({})",
        format_number(split.new_members),
        format_percent(split.new_percent()),
        format_number(split.existing_members),
        format_percent(split.existing_percent())
    );

    let stores = session.store_performance(filter, config.display.top_stores);
    if !stores.is_empty() {
        println!();
        println!("Top stores:");
        for store in &stores {
            println!(
                "  {:<12} {:>14}  {:>8} txns  qty {}",
                store.store_code,
                format_amount(store.revenue),
                format_number(store.usage),
                format_qty(store.qty_sold)
            );
        }
    }

    let promotions = match args.search.as_deref() {
        Some(term) => session.search(term),
        None => session.promotions.iter().collect(),
    };
    println!();
    println!(
        "{:<14} {:<30} {:>5} {:>9} {:>6} {:>8} {:>12} {:>11} {:>7}",
        "Promotion", "Description", "New", "Existing", "Total", "Qty", "Revenue", "Discount", "Disc%"
    );
    for promo in promotions {
        println!(
            "{:<14} {:<30} {:>5} {:>9} {:>6} {:>8} {:>12} {:>11} {:>7}",
            promo.promotion_id,
            truncate(&promo.description, 30),
            format_number(promo.new_member_count),
            format_number(promo.existing_member_count),
            format_number(promo.total_customers),
            format_qty(promo.qty_sold),
            format_amount(promo.revenue),
            format_amount(promo.discount),
            format_percent(promo.discount_percent)
        );
    }
}

fn print_extra_sales(response: &contracts::usecases::u103_calculate_extra_sales::ExtraSalesResponse) {
    let totals = &response.totals;
    println!();
    println!(
        "Baseline period: {} days, promotion period: {} days",
        totals.baseline_days, totals.promo_days
    );
    println!("Daily baseline:    {}", format_amount(totals.daily_baseline));
    println!(
        "Scaled baseline:   {} ({} days)",
        format_amount(totals.scaled_baseline),
        totals.promo_days
    );
    println!("Promotion revenue: {}", format_amount(totals.promo_revenue));
    println!("Extra sales:       {}", format_amount(totals.extra_sales));
    println!("Uplift:            {}", format_percent(totals.uplift_percent));

    println!();
    println!(
        "{:<14} {:>8} {:>10} {:>8} {:>12} {:>12} {:>12} {:>8} {:>8}",
        "Promotion", "Qty", "Base qty", "Extra q", "Revenue", "Baseline", "Extra", "Uplift", "ROI"
    );
    for row in &response.by_promotion {
        println!(
            "{:<14} {:>8} {:>10} {:>8} {:>12} {:>12} {:>12} {:>8} {:>8}",
            row.promotion_id,
            format_qty(row.qty_sold),
            format_qty(row.baseline_qty),
            format_signed_qty(row.extra_qty),
            format_amount(row.revenue),
            format_amount(row.baseline_revenue),
            format_amount(row.extra_sales),
            format_percent(row.uplift_percent),
            format_percent(row.roi_percent)
        );
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{}...", cut)
    }
}
