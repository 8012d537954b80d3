use evreg_core::analysis::{GrowthReport, KeyAverage, TopBottom};
use evreg_core::model::{FileSummary, IngestOutcome, ParsedReport, ReportDate};

fn date_or_dash(date: Option<ReportDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_else(|| "-".into())
}

fn found(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "MISSING"
    }
}

/// Per-file quality table for an ingestion run.
pub fn print_ingest(outcome: &IngestOutcome) {
    if outcome.files.is_empty() {
        println!("No reports ingested.");
        return;
    }

    let width = outcome
        .files
        .iter()
        .map(|f| f.source_file.len())
        .max()
        .unwrap_or(10)
        .max(4);

    println!(
        "  {:<width$}  {:<10}  {:>7}  {:>7}",
        "File", "As of", "County", "Zip",
        width = width
    );
    for file in &outcome.files {
        print_file_row(file, width);
    }
    println!();

    let no_county: Vec<_> = outcome.files_without_county().collect();
    let no_zip: Vec<_> = outcome.files_without_zip().collect();
    if !no_county.is_empty() || !no_zip.is_empty() {
        println!(
            "  {} file(s) without county records, {} without zip records",
            no_county.len(),
            no_zip.len()
        );
        for file in outcome
            .files
            .iter()
            .filter(|f| f.county_records == 0 || f.zip_records == 0)
        {
            println!("    {file}");
        }
        println!();
    }
}

fn print_file_row(file: &FileSummary, width: usize) {
    let count_or_missing = |section_found: bool, records: usize| {
        if section_found {
            records.to_string()
        } else {
            found(false).to_string()
        }
    };
    let county = count_or_missing(file.county_section_found, file.county_records);
    let zip = count_or_missing(file.zip_section_found, file.zip_records);
    println!(
        "  {:<width$}  {:<10}  {:>7}  {:>7}",
        file.source_file,
        date_or_dash(file.date),
        county,
        zip,
        width = width
    );
}

/// Records parsed from a single report.
pub fn print_parsed(report: &ParsedReport) {
    println!("=== {} ===\n", report.source_file);
    println!("  As of:          {}", date_or_dash(report.date));
    println!("  County section: {}", found(report.county_section_found));
    println!("  Zip section:    {}\n", found(report.zip_section_found));

    if !report.county.is_empty() {
        let width = report
            .county
            .iter()
            .map(|r| r.county_name.len())
            .max()
            .unwrap_or(10);
        println!("  County totals ({})", report.county.len());
        for r in &report.county {
            println!("    {:<width$}  {:>8}", r.county_name, r.count, width = width);
        }
        println!();
    }

    if !report.zip.is_empty() {
        let width = report
            .zip
            .iter()
            .map(|r| r.city_name.len())
            .max()
            .unwrap_or(10);
        println!("  Zip code totals ({})", report.zip.len());
        for r in &report.zip {
            println!(
                "    {:<width$}  {}  {:>8}",
                r.city_name,
                r.zip_code,
                r.count,
                width = width
            );
        }
        println!();
    }
}

fn print_averages(label: &str, rows: &[KeyAverage]) {
    println!("  {label}");
    let width = rows.iter().map(|r| r.key.len()).max().unwrap_or(10);
    for r in rows {
        println!("    {:<width$}  {:>10.1}", r.key, r.average, width = width);
    }
}

pub fn print_top_bottom(title: &str, tb: &TopBottom) {
    println!("=== {title} ===\n");
    print_averages(&format!("Top {}", tb.top.len()), &tb.top);
    print_averages(&format!("Bottom {}", tb.bottom.len()), &tb.bottom);
    println!();
}

pub fn print_zero(label: &str, rows: &[KeyAverage]) {
    if rows.is_empty() {
        return;
    }
    println!("  {label} entries with no registrations in any report:");
    for r in rows {
        println!("    {}", r.key);
    }
    println!();
}

pub fn print_trend(trend: &[(ReportDate, u64)]) {
    println!("=== Total registrations by report date ===\n");
    for (date, total) in trend {
        println!("  {date}  {total:>10}");
    }
    println!();
}

pub fn print_growth(growth: &GrowthReport, n: usize) {
    let title = format!("{} to {}", growth.first_date, growth.last_date);

    let sections: [(&str, Vec<_>); 3] = [
        ("Largest increases", growth.top_increases(n).collect()),
        ("Smallest increases", growth.bottom_increases(n).collect()),
        ("Decreases", growth.decreases().collect()),
    ];
    for (label, rows) in sections {
        println!("=== {label}, {title} ===\n");
        if rows.is_empty() {
            println!("  (none)\n");
            continue;
        }
        for c in rows {
            println!(
                "  {:<24}  {:>8} -> {:>8}  {:>+8}",
                c.city, c.first, c.last, c.increase
            );
        }
        println!();
    }

    println!("=== Largest percent increases, {title} ===\n");
    for c in growth.top_percent_increases(n) {
        println!(
            "  {:<24}  {:>8} -> {:>8}  {:>7.1}%",
            c.city,
            c.first,
            c.last,
            c.percent_increase.unwrap_or_default()
        );
    }
    println!();
}
