//! PDF rendering of the expense report.
//!
//! A4 portrait layout: branding header, filter line, expense table with page
//! breaks, totals block, footer text from settings.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use crate::errors::{Error, Result};

use super::{
    creditor_name, filter_expenses, format_brl, format_date_br, status_label, summarize,
    type_label, ExportOptions,
};

const PAGE_WIDTH: f64 = 210.0;
const PAGE_HEIGHT: f64 = 297.0;
const MARGIN_LEFT: f64 = 15.0;
const MARGIN_BOTTOM: f64 = 25.0;
const TOP_Y: f64 = 282.0;
const ROW_STEP: f64 = 5.5;

// Table column x positions (mm).
const COL_DESCRIPTION: f64 = 15.0;
const COL_AMOUNT: f64 = 85.0;
const COL_TYPE: f64 = 112.0;
const COL_CREDITOR: f64 = 128.0;
const COL_DUE: f64 = 168.0;
const COL_STATUS: f64 = 188.0;

fn mm(value: f64) -> Mm {
    Mm(value as _)
}

pub fn render_expenses_pdf(options: &ExportOptions) -> Result<Vec<u8>> {
    let expenses = filter_expenses(options);
    let summary = summarize(&expenses);

    let (doc, first_page, first_layer) =
        PdfDocument::new("Relatório de Despesas", mm(PAGE_WIDTH), mm(PAGE_HEIGHT), "content");
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(pdf_err)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(pdf_err)?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut y = TOP_Y;

    // Branding header.
    if let Some(entity) = options.entity {
        layer.use_text(entity.name.clone(), 14.0, mm(MARGIN_LEFT), mm(y), &bold);
        y -= 6.0;
        layer.use_text(entity.full_name.clone(), 10.0, mm(MARGIN_LEFT), mm(y), &regular);
        y -= 6.0;
    }
    if !options.settings.header_text.is_empty() {
        layer.use_text(
            options.settings.header_text.clone(),
            9.0,
            mm(MARGIN_LEFT),
            mm(y),
            &regular,
        );
        y -= 6.0;
    }

    y -= 4.0;
    layer.use_text("Relatório de Despesas", 12.0, mm(MARGIN_LEFT), mm(y), &bold);
    y -= 6.0;
    layer.use_text(period_line(options), 9.0, mm(MARGIN_LEFT), mm(y), &regular);
    y -= 5.0;
    let mut generated = format!(
        "Gerado em {}",
        format_date_br(options.generated_at.date_naive())
    );
    if let Some(author) = options.generated_by {
        generated.push_str(&format!(" por {author}"));
    }
    layer.use_text(generated, 9.0, mm(MARGIN_LEFT), mm(y), &regular);
    y -= 8.0;

    write_table_header(&layer, &bold, y);
    y -= ROW_STEP;

    for expense in &expenses {
        if y < MARGIN_BOTTOM {
            let (page, page_layer) = doc.add_page(mm(PAGE_WIDTH), mm(PAGE_HEIGHT), "content");
            layer = doc.get_page(page).get_layer(page_layer);
            y = TOP_Y;
            write_table_header(&layer, &bold, y);
            y -= ROW_STEP;
        }
        layer.use_text(
            truncate(&expense.description, 38),
            8.0,
            mm(COL_DESCRIPTION),
            mm(y),
            &regular,
        );
        layer.use_text(format_brl(expense.amount), 8.0, mm(COL_AMOUNT), mm(y), &regular);
        layer.use_text(
            type_label(expense.expense_type),
            8.0,
            mm(COL_TYPE),
            mm(y),
            &regular,
        );
        layer.use_text(
            truncate(
                creditor_name(options.creditors, expense.creditor_id.as_deref()),
                22,
            ),
            8.0,
            mm(COL_CREDITOR),
            mm(y),
            &regular,
        );
        layer.use_text(
            format_date_br(expense.due_date),
            8.0,
            mm(COL_DUE),
            mm(y),
            &regular,
        );
        layer.use_text(status_label(expense.status), 8.0, mm(COL_STATUS), mm(y), &regular);
        y -= ROW_STEP;
    }

    // Totals block.
    if y < MARGIN_BOTTOM + 4.0 * ROW_STEP {
        let (page, page_layer) = doc.add_page(mm(PAGE_WIDTH), mm(PAGE_HEIGHT), "content");
        layer = doc.get_page(page).get_layer(page_layer);
        y = TOP_Y;
    }
    y -= 4.0;
    layer.use_text("Resumo", 10.0, mm(MARGIN_LEFT), mm(y), &bold);
    y -= ROW_STEP;
    for (label, value) in [
        ("Total Pago", format_brl(summary.total_paid)),
        ("Total Pendente", format_brl(summary.total_pending)),
        ("Total Geral", format_brl(summary.grand_total())),
        ("Quantidade de Despesas", summary.count.to_string()),
    ] {
        layer.use_text(label, 9.0, mm(MARGIN_LEFT), mm(y), &regular);
        layer.use_text(value, 9.0, mm(COL_AMOUNT), mm(y), &regular);
        y -= ROW_STEP;
    }

    if !options.settings.footer_text.is_empty() {
        layer.use_text(
            options.settings.footer_text.clone(),
            8.0,
            mm(MARGIN_LEFT),
            mm(12.0),
            &regular,
        );
    }

    doc.save_to_bytes().map_err(pdf_err)
}

fn write_table_header(layer: &PdfLayerReference, bold: &IndirectFontRef, y: f64) {
    for (x, title) in [
        (COL_DESCRIPTION, "Descrição"),
        (COL_AMOUNT, "Valor"),
        (COL_TYPE, "Tipo"),
        (COL_CREDITOR, "Credor"),
        (COL_DUE, "Vencimento"),
        (COL_STATUS, "Status"),
    ] {
        layer.use_text(title, 8.5, mm(x), mm(y), bold);
    }
}

fn period_line(options: &ExportOptions) -> String {
    match (options.start_date, options.end_date) {
        (Some(start), Some(end)) => format!(
            "Período: {} a {}",
            format_date_br(start),
            format_date_br(end)
        ),
        (Some(start), None) => format!("Período: a partir de {}", format_date_br(start)),
        (None, Some(end)) => format!("Período: até {}", format_date_br(end)),
        (None, None) => "Período: todas as despesas".to_string(),
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let mut out: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}

fn pdf_err(err: printpdf::Error) -> Error {
    Error::Export(err.to_string())
}
