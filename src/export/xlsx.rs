// src/export/xlsx.rs

use crate::core::LedgerSummary;
use crate::errors::{AppError, AppResult};
use crate::export::excel_date::parse_to_excel_date;
use crate::export::model::{day_to_row, get_headers};
use crate::export::{DayExport, notify_export_success};
use crate::ui::messages::info;
use crate::utils::formatting::round2;
use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet,
};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// XLSX with a styled "Days" sheet and a "Summary" sheet.
pub(crate) fn export_xlsx(
    days: &[DayExport],
    summary: &LedgerSummary,
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();

    let days_sheet = workbook.add_worksheet();
    days_sheet.set_name("Days").map_err(to_app_error)?;
    write_days(days_sheet, days)?;

    let summary_sheet = workbook.add_worksheet();
    summary_sheet.set_name("Summary").map_err(to_app_error)?;
    write_summary(summary_sheet, summary)?;

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn write_days(worksheet: &mut Worksheet, days: &[DayExport]) -> AppResult<()> {
    let headers = get_headers();
    let header_format = header_format();

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_app_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, day) in days.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in day_to_row(day).iter().enumerate() {
            let v = value.as_str();
            write_xlsx_cell(worksheet, row, col as u16, v, band_color)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(v));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    Ok(())
}

fn write_summary(worksheet: &mut Worksheet, s: &LedgerSummary) -> AppResult<()> {
    let header_format = header_format();
    worksheet
        .write_with_format(0, 0, "metric", &header_format)
        .map_err(to_app_error)?;
    worksheet
        .write_with_format(0, 1, "value", &header_format)
        .map_err(to_app_error)?;

    let rows: Vec<(&str, f64)> = vec![
        ("days", s.days as f64),
        ("deficit_days", s.deficit_days as f64),
        ("total_office", round2(s.total_office)),
        ("total_remote", round2(s.total_remote)),
        ("total_worked", round2(s.total_worked)),
        ("total_target", round2(s.total_target)),
        ("raw_balance", round2(s.raw_balance)),
        ("balance", round2(s.balance)),
        ("extra_office", round2(s.extra_office)),
        ("extra_remote", round2(s.extra_remote)),
        ("average_worked", round2(s.average_worked)),
    ];

    for (i, (name, value)) in rows.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write(row, 0, *name).map_err(to_app_error)?;
        worksheet.write(row, 1, *value).map_err(to_app_error)?;
    }

    worksheet.set_column_width(0, 18.0).map_err(to_app_error)?;
    worksheet.set_column_width(1, 12.0).map_err(to_app_error)?;
    Ok(())
}

/// Write one cell, typing dates, times and numbers when the text allows it.
fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    s: &str,
    bg: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if let Some((num_format, serial)) = parse_to_excel_date(s) {
        let fmt = base.set_num_format(num_format);
        worksheet
            .write_with_format(row, col, serial, &fmt)
            .map_err(to_app_error)?;
        return Ok(());
    }

    if let Ok(num) = s.parse::<f64>() {
        let fmt = base.set_align(FormatAlign::Right);
        worksheet
            .write_with_format(row, col, num, &fmt)
            .map_err(to_app_error)?;
        return Ok(());
    }

    worksheet
        .write_with_format(row, col, s, &base)
        .map_err(to_app_error)?;

    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
