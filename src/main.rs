use clap::Parser;
use news_rating::{cli, config, error, export, logging, runner, workbook};
use cli::{Cli, Commands, TimeAction};
use config::Config;
use error::Result;
use news_rating_common::{
    duration_between, normalize_time, seconds_to_time, time_to_seconds, StructuredLayout,
};
use std::path::PathBuf;
use workbook::SheetSelector;

fn main() {
    if let Err(e) = run() {
        eprintln!("오류: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    logging::init(&config.log_filter, cli.verbose);

    match cli.command {
        Commands::Ratings { workbook, date, paid_sheet, demo_sheet, output, format, trace } => {
            let paid = SheetSelector::parse(paid_sheet.as_deref().unwrap_or(&config.paid_sheet));
            let demo = SheetSelector::parse(demo_sheet.as_deref().unwrap_or(&config.demo_sheet));

            let outcome = runner::run_ratings(&workbook, date.as_deref(), &paid, &demo)?;

            // 표와 로그는 stderr, JSON 은 stdout
            eprintln!("{}", runner::format_ratings_table(&outcome.report));

            if trace {
                eprintln!("\n=== 프로그램 검색 상세 로그 ===");
                eprintln!("{}", runner::format_trace(&outcome.events));
            }

            match output {
                Some(output) => {
                    let format = format.unwrap_or(config.output_format);
                    let title = format!("시청률_{}", outcome.report.date);
                    let written = export::export_reports(
                        std::slice::from_ref(&outcome.report),
                        format,
                        &output,
                        &title,
                    )?;
                    for path in written {
                        println!("✔ 저장: {}", path.display());
                    }
                }
                None => {
                    println!("{}", export::json::to_json(std::slice::from_ref(&outcome.report))?);
                }
            }
        }

        Commands::Structure { workbook, sheet, layout } => {
            let sheet = SheetSelector::parse(sheet.as_deref().unwrap_or(&config.structured_sheet));
            let layout = match layout {
                Some(path) => StructuredLayout::from_json(&std::fs::read_to_string(&path)?)?,
                None => StructuredLayout::default(),
            };

            let outcome = runner::run_structure(&workbook, &sheet, &layout)?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }

        Commands::Batch { folder, output, format } => {
            let paid = SheetSelector::parse(&config.paid_sheet);
            let demo = SheetSelector::parse(&config.demo_sheet);

            println!("📊 news-rating - 일괄 처리\n");
            let outcome = runner::run_batch(&folder, &paid, &demo, true)?;
            println!("✔ {}건 처리, {}건 실패\n", outcome.reports.len(), outcome.failures.len());

            for (file_name, message) in &outcome.failures {
                println!("  ✘ {}: {}", file_name, message);
            }

            if !outcome.reports.is_empty() {
                let output_dir: PathBuf = output.unwrap_or_else(|| folder.clone());
                let format = format.unwrap_or(config.output_format);
                let written = export::export_reports(&outcome.reports, format, &output_dir, "시청률_일괄")?;
                for path in written {
                    println!("✔ 저장: {}", path.display());
                }
            }
        }

        Commands::Time { action } => match action {
            TimeAction::Normalize { values } => {
                for value in values {
                    println!("{}", normalize_time(&value));
                }
            }
            TimeAction::Seconds { values } => {
                for value in values {
                    match time_to_seconds(&value) {
                        Some(secs) => println!("{}", secs),
                        None => println!("{}: 해석할 수 없음", value),
                    }
                }
            }
            TimeAction::Format { values } => {
                for value in values {
                    println!("{}", seconds_to_time(value));
                }
            }
            TimeAction::Duration { start, end } => match duration_between(&start, &end) {
                Some(secs) => println!("{}", seconds_to_time(secs)),
                None => println!("해석할 수 없음: {} ~ {}", start, end),
            },
        },

        Commands::Config { set, show } => {
            let mut config = config;

            if !set.is_empty() {
                for assignment in &set {
                    config.set(assignment)?;
                }
                config.save()?;
                println!("✔ 설정을 저장했습니다: {}", Config::config_path()?.display());
            }

            if show || set.is_empty() {
                println!("설정:");
                println!("  유료가구 시트: {}", config.paid_sheet);
                println!("  20-49 시트: {}", config.demo_sheet);
                println!("  구조 탐색 시트: {}", config.structured_sheet);
                println!("  출력 형식: {}", config.output_format);
                println!("  로그 필터: {}", config.log_filter);
            }
        }
    }

    Ok(())
}
