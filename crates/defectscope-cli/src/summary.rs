use std::path::Path;

use console::Style;
use defectscope_core::report::DefectReport;
use defectscope_core::{AnalysisConfig, DefectscopeError};

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    clean: Style,
    defect: Style,
    error: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            clean: Style::new().green(),
            defect: Style::new().yellow().bold(),
            error: Style::new().red().bold(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_analysis_summary(config: &AnalysisConfig, file_count: usize) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Defect Report"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(13)));
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Files"),
        s.value.apply_to(file_count)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Threshold"),
        s.value.apply_to(format!("{} (inverted)", config.threshold))
    );
    if config.min_area > 0.0 {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Min area"),
            s.value.apply_to(config.min_area)
        );
    }
    println!();
}

pub fn print_report(path: &Path, report: &DefectReport, quiet: bool) {
    let s = Styles::new();

    let count = if report.is_empty() {
        s.clean.apply_to("no defects".to_string())
    } else {
        s.defect.apply_to(format!(
            "{} defect(s), total area {:.1}",
            report.len(),
            report.total_area()
        ))
    };
    println!("  {}  {}", s.path.apply_to(path.display()), count);

    if quiet {
        return;
    }
    for line in report.to_string().lines() {
        println!("    {line}");
    }
    println!();
}

pub fn print_failure(path: &Path, err: &DefectscopeError) {
    let s = Styles::new();
    eprintln!(
        "  {}  {}",
        s.path.apply_to(path.display()),
        s.error.apply_to(format!("ERROR: {err}"))
    );
}
