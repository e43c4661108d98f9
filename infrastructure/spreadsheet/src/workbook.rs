//! Full-backup documents: a JSON snapshot and a workbook with one sheet per table.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use uuid::Uuid;

use business::domain::backup::model::Snapshot;

use crate::error::SpreadsheetError;

pub fn snapshot_to_json(snapshot: &Snapshot) -> Result<Vec<u8>, SpreadsheetError> {
    Ok(serde_json::to_vec_pretty(snapshot)?)
}

pub fn snapshot_from_json(bytes: &[u8]) -> Result<Snapshot, SpreadsheetError> {
    Ok(serde_json::from_slice(bytes)?)
}

pub fn snapshot_to_xlsx(snapshot: &Snapshot) -> Result<Vec<u8>, SpreadsheetError> {
    let header = Format::new().set_bold();
    let mut workbook = Workbook::new();

    let product_names: HashMap<Uuid, &str> = snapshot
        .products
        .iter()
        .map(|p| (p.id, p.name.as_str()))
        .collect();
    let distributor_names: HashMap<Uuid, &str> = snapshot
        .distributors
        .iter()
        .map(|d| (d.id, d.name.as_str()))
        .collect();

    let sheet = new_sheet(
        &mut workbook,
        "Distribuidoras",
        &["id", "nome", "cnpj", "contato", "observacoes", "criado_em"],
        &header,
    )?;
    for (index, distributor) in snapshot.distributors.iter().enumerate() {
        let row = data_row(index);
        sheet.write_string(row, 0, distributor.id.to_string())?;
        sheet.write_string(row, 1, &distributor.name)?;
        write_optional(sheet, row, 2, distributor.cnpj.as_deref())?;
        write_optional(sheet, row, 3, distributor.contact.as_deref())?;
        write_optional(sheet, row, 4, distributor.notes.as_deref())?;
        sheet.write_string(row, 5, timestamp(distributor.created_at))?;
    }

    let sheet = new_sheet(
        &mut workbook,
        "Produtos",
        &["id", "nome", "ean", "fabricante", "categoria", "unidade", "criado_em"],
        &header,
    )?;
    for (index, product) in snapshot.products.iter().enumerate() {
        let row = data_row(index);
        sheet.write_string(row, 0, product.id.to_string())?;
        sheet.write_string(row, 1, &product.name)?;
        write_optional(sheet, row, 2, product.ean.as_deref())?;
        write_optional(sheet, row, 3, product.manufacturer.as_deref())?;
        sheet.write_string(row, 4, product.category.to_string())?;
        sheet.write_string(row, 5, product.unit.to_string())?;
        sheet.write_string(row, 6, timestamp(product.created_at))?;
    }

    let sheet = new_sheet(
        &mut workbook,
        "Precos",
        &[
            "id",
            "produto_id",
            "produto",
            "distribuidora_id",
            "distribuidora",
            "preco",
            "qtd_minima",
            "validade",
            "registrado_em",
        ],
        &header,
    )?;
    for (index, price) in snapshot.prices.iter().enumerate() {
        let row = data_row(index);
        sheet.write_string(row, 0, price.id.to_string())?;
        sheet.write_string(row, 1, price.product_id.to_string())?;
        write_optional(sheet, row, 2, product_names.get(&price.product_id).copied())?;
        sheet.write_string(row, 3, price.distributor_id.to_string())?;
        write_optional(sheet, row, 4, distributor_names.get(&price.distributor_id).copied())?;
        sheet.write_number(row, 5, price.price)?;
        sheet.write_number(row, 6, f64::from(price.min_quantity))?;
        write_optional(
            sheet,
            row,
            7,
            price.validity.map(|d| d.to_string()).as_deref(),
        )?;
        sheet.write_string(row, 8, timestamp(price.recorded_at))?;
    }

    let sheet = new_sheet(
        &mut workbook,
        "Lista de Compras",
        &[
            "id",
            "produto_id",
            "produto",
            "ean",
            "distribuidora_id",
            "distribuidora",
            "preco",
            "quantidade",
            "subtotal",
            "ultimo_preco",
            "ultima_distribuidora",
            "criado_em",
            "atualizado_em",
        ],
        &header,
    )?;
    for (index, item) in snapshot.shopping_list.iter().enumerate() {
        let row = data_row(index);
        sheet.write_string(row, 0, item.id.to_string())?;
        sheet.write_string(row, 1, item.product_id.to_string())?;
        sheet.write_string(row, 2, &item.product_name)?;
        write_optional(sheet, row, 3, item.product_ean.as_deref())?;
        write_optional(
            sheet,
            row,
            4,
            item.distributor_id.map(|id| id.to_string()).as_deref(),
        )?;
        write_optional(sheet, row, 5, item.distributor_name.as_deref())?;
        sheet.write_number(row, 6, item.price)?;
        sheet.write_number(row, 7, f64::from(item.quantity))?;
        sheet.write_number(row, 8, item.subtotal())?;
        if let Some(last_price) = item.last_price {
            sheet.write_number(row, 9, last_price)?;
        }
        write_optional(sheet, row, 10, item.last_distributor.as_deref())?;
        sheet.write_string(row, 11, timestamp(item.created_at))?;
        sheet.write_string(row, 12, timestamp(item.updated_at))?;
    }

    let sheet = new_sheet(&mut workbook, "Info", &["versao", "exportado_em"], &header)?;
    sheet.write_string(1, 0, &snapshot.version)?;
    sheet.write_string(1, 1, timestamp(snapshot.exported_at))?;

    Ok(workbook.save_to_buffer()?)
}

fn new_sheet<'a>(
    workbook: &'a mut Workbook,
    name: &str,
    columns: &[&str],
    header: &Format,
) -> Result<&'a mut Worksheet, SpreadsheetError> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(name)?;
    for (col, title) in columns.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, header)?;
    }
    Ok(sheet)
}

fn data_row(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}

fn write_optional(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: Option<&str>,
) -> Result<(), SpreadsheetError> {
    if let Some(value) = value {
        sheet.write_string(row, col, value)?;
    }
    Ok(())
}

fn timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339()
}
