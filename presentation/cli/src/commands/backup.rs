use std::path::{Path, PathBuf};

use anyhow::{Context, bail};

use business::domain::backup::model::{Snapshot, TableCounts};
use business::domain::backup::use_cases::restore::RestoreDataParams;
use spreadsheet::{snapshot_from_json, snapshot_to_json, snapshot_to_xlsx};

use crate::args::ExportFormat;
use crate::setup::Services;

fn default_output(snapshot: &Snapshot, format: ExportFormat) -> PathBuf {
    PathBuf::from(format!(
        "pharmacompare-backup-{}.{}",
        snapshot.exported_at.format("%Y-%m-%d"),
        format.extension()
    ))
}

pub async fn export(
    services: &Services,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let snapshot = services.export.execute().await?;
    let bytes = match format {
        ExportFormat::Json => snapshot_to_json(&snapshot)?,
        ExportFormat::Xlsx => snapshot_to_xlsx(&snapshot)?,
    };
    let output = output.unwrap_or_else(|| default_output(&snapshot, format));

    tokio::fs::write(&output, bytes)
        .await
        .with_context(|| format!("could not write {}", output.display()))?;

    println!("backup written to {}", output.display());
    println!(
        "{}",
        counts_summary(&TableCounts {
            distributors: snapshot.distributors.len() as u64,
            products: snapshot.products.len() as u64,
            prices: snapshot.prices.len() as u64,
            shopping_list: snapshot.shopping_list.len() as u64,
        })
    );
    Ok(())
}

pub async fn restore(services: &Services, file: &Path) -> anyhow::Result<()> {
    let bytes = tokio::fs::read(file)
        .await
        .with_context(|| format!("could not read {}", file.display()))?;
    let snapshot = snapshot_from_json(&bytes)
        .with_context(|| format!("{} is not a backup file", file.display()))?;

    let counts = services
        .restore
        .execute(RestoreDataParams { snapshot })
        .await
        .context("restore failed")?;

    println!("restored from {}", file.display());
    println!("{}", counts_summary(&counts));
    Ok(())
}

pub async fn clear(services: &Services, yes: bool) -> anyhow::Result<()> {
    if !yes {
        bail!("refusing to delete all data without --yes");
    }

    let counts = services.clear_all.execute().await?;

    println!("all data removed");
    println!("{}", counts_summary(&counts));
    Ok(())
}

pub fn counts_summary(counts: &TableCounts) -> String {
    format!(
        "distributors:  {}\nproducts:      {}\nprices:        {}\nshopping list: {}",
        counts.distributors, counts.products, counts.prices, counts.shopping_list
    )
}
