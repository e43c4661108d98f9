use std::path::{Path, PathBuf};

use anyhow::Context;

use business::domain::import::inspect::inspect as inspect_sheet;
use business::domain::import::model::{
    CatalogReport, Cell, ColumnMap, DistributorSelection, ImportReport, InspectReport,
};
use business::domain::import::use_cases::import_catalog::ImportCatalogParams;
use business::domain::import::use_cases::import_prices::ImportPriceListParams;
use spreadsheet::read_rows;

use crate::setup::Services;

async fn load(file: &Path) -> anyhow::Result<Vec<Vec<Cell>>> {
    let path: PathBuf = file.to_path_buf();
    let rows = tokio::task::spawn_blocking(move || read_rows(&path))
        .await?
        .with_context(|| format!("could not read {}", file.display()))?;
    tracing::debug!("Read {} rows from {}", rows.len(), file.display());
    Ok(rows)
}

pub async fn import_prices(
    services: &Services,
    file: &Path,
    distributor: String,
) -> anyhow::Result<()> {
    let rows = load(file).await?;
    let report = services
        .import_prices
        .execute(ImportPriceListParams {
            rows,
            distributor: DistributorSelection::Name(distributor),
        })
        .await
        .with_context(|| format!("import of {} failed", file.display()))?;

    println!("{}", price_summary(&report));
    Ok(())
}

pub async fn import_catalog(services: &Services, file: &Path) -> anyhow::Result<()> {
    let rows = load(file).await?;
    let report = services
        .import_catalog
        .execute(ImportCatalogParams { rows })
        .await
        .with_context(|| format!("import of {} failed", file.display()))?;

    println!("{}", catalog_summary(&report));
    Ok(())
}

pub async fn inspect(file: &Path) -> anyhow::Result<()> {
    let rows = load(file).await?;
    let report = inspect_sheet(&rows).with_context(|| format!("{} has no rows", file.display()))?;

    println!("{}", inspect_summary(&report));
    Ok(())
}

fn column(index: Option<usize>) -> String {
    index.map_or_else(|| "-".to_string(), |i| (i + 1).to_string())
}

fn columns_line(columns: &ColumnMap) -> String {
    format!(
        "columns: name={} price={} ean={} manufacturer={} distributor={}",
        columns.name + 1,
        columns.price + 1,
        column(columns.ean),
        column(columns.manufacturer),
        column(columns.distributor),
    )
}

pub fn price_summary(report: &ImportReport) -> String {
    [
        format!("rows read:            {}", report.total_rows),
        format!("prices imported:      {}", report.imported_prices),
        format!("rows rejected:        {}", report.rejected_rows),
        format!("failed inserts:       {}", report.failed_inserts),
        format!("products created:     {}", report.products_created),
        format!("products reused:      {}", report.products_reused),
        format!("distributors created: {}", report.distributors_created),
        format!("EANs backfilled:      {}", report.eans_backfilled),
        columns_line(&report.columns),
    ]
    .join("\n")
}

pub fn catalog_summary(report: &CatalogReport) -> String {
    [
        format!("rows read:  {}", report.total_rows),
        format!("inserted:   {}", report.inserted),
        format!("skipped:    {}", report.skipped),
        format!("invalid:    {}", report.invalid),
        format!("failed:     {}", report.failed),
        columns_line(&report.columns),
    ]
    .join("\n")
}

pub fn inspect_summary(report: &InspectReport) -> String {
    let mut lines = vec![
        format!("data rows: {}", report.total_rows),
        format!("header:    {}", report.header.join(" | ")),
        columns_line(&report.columns),
    ];
    for row in &report.rows {
        let price = row
            .price
            .map_or_else(|| "rejected".to_string(), |p| format!("{p:.2}"));
        lines.push(format!(
            "line {:>4}: {} | {} -> {}",
            row.line, row.name, row.raw_price, price
        ));
    }
    lines.join("\n")
}
