use evreg_core::analysis;
use evreg_core::error::EvregError;
use evreg_core::export::{read_county_csv, read_zip_csv};
use evreg_core::model::{CountyRecord, ZipRecord};
use std::fs::File;
use std::path::Path;

use crate::output::table;

fn county_key(r: &CountyRecord) -> &str {
    &r.county_name
}

fn zip_key(r: &ZipRecord) -> &str {
    &r.zip_code
}

fn city_key(r: &ZipRecord) -> &str {
    &r.city_name
}

pub fn run(
    county_csv: &Path,
    zip_csv: &Path,
    top: usize,
    min_baseline: u64,
) -> Result<(), EvregError> {
    let county = read_county_csv(File::open(county_csv)?)?;
    let zip = read_zip_csv(File::open(zip_csv)?)?;
    tracing::debug!(county = county.len(), zip = zip.len(), "datasets loaded");

    let overview = analysis::overview(&county, &zip);
    println!(
        "{} counties, {} zip codes, {} cities\n",
        overview.counties, overview.zip_codes, overview.cities
    );

    for (year, tb) in analysis::yearly_top_bottom(&county, county_key, top) {
        table::print_top_bottom(&format!("County averages, {year}"), &tb);
    }
    for (year, tb) in analysis::yearly_top_bottom(&zip, zip_key, top) {
        table::print_top_bottom(&format!("ZIP code averages, {year}"), &tb);
    }

    let sections: [(&str, Vec<analysis::KeyAverage>); 3] = [
        ("County", analysis::average_by(&county, county_key)),
        ("ZIP code", analysis::average_by(&zip, zip_key)),
        ("City", analysis::average_by(&zip, city_key)),
    ];
    for (label, averages) in &sections {
        table::print_top_bottom(
            &format!("{label} averages, all reports"),
            &analysis::top_bottom(averages, top),
        );
        table::print_zero(label, &analysis::zero_average(averages));
    }

    table::print_trend(&analysis::total_trend(&zip));

    match analysis::city_growth(&zip, min_baseline) {
        Some(growth) => table::print_growth(&growth, 10),
        None => println!("No dated zip records; skipping growth tables."),
    }

    Ok(())
}
