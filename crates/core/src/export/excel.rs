//! Spreadsheet rendering of the expense list.

use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Color, Format, Workbook};

use crate::errors::{Error, Result};

use super::{
    creditor_document, creditor_name, filter_expenses, format_brl, format_date_br, status_label,
    summarize, type_label, ExportOptions,
};

const HEADERS: [&str; 10] = [
    "ID",
    "Descrição",
    "Valor",
    "Tipo",
    "Credor",
    "CNPJ/CPF",
    "Vencimento",
    "Status",
    "Data Pagamento",
    "Data Criação",
];

const COLUMN_WIDTHS: [f64; 10] = [20.0, 30.0, 14.0, 10.0, 25.0, 18.0, 12.0, 10.0, 14.0, 14.0];

/// Render the filtered expenses to an xlsx workbook: one "Despesas" sheet
/// with a row per expense and one "Resumo" sheet with the totals block.
pub fn render_expenses_xlsx(options: &ExportOptions) -> Result<Vec<u8>> {
    let expenses = filter_expenses(options);
    let summary = summarize(&expenses);

    let mut workbook = Workbook::new();

    let header = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(0x1A2433));
    let money = Format::new().set_num_format("[$R$] #,##0.00");

    let sheet = workbook.add_worksheet();
    sheet.set_name("Despesas").map_err(xlsx_err)?;
    for (col, title) in HEADERS.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *title, &header)
            .map_err(xlsx_err)?;
    }
    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        sheet.set_column_width(col as u16, *width).map_err(xlsx_err)?;
    }

    for (index, expense) in expenses.iter().enumerate() {
        let row = (index + 1) as u32;
        sheet.write_string(row, 0, &expense.id).map_err(xlsx_err)?;
        sheet
            .write_string(row, 1, &expense.description)
            .map_err(xlsx_err)?;
        sheet
            .write_number_with_format(row, 2, expense.amount.to_f64().unwrap_or(0.0), &money)
            .map_err(xlsx_err)?;
        sheet
            .write_string(row, 3, type_label(expense.expense_type))
            .map_err(xlsx_err)?;
        sheet
            .write_string(
                row,
                4,
                creditor_name(options.creditors, expense.creditor_id.as_deref()),
            )
            .map_err(xlsx_err)?;
        sheet
            .write_string(
                row,
                5,
                creditor_document(options.creditors, expense.creditor_id.as_deref()),
            )
            .map_err(xlsx_err)?;
        sheet
            .write_string(row, 6, &format_date_br(expense.due_date))
            .map_err(xlsx_err)?;
        sheet
            .write_string(row, 7, status_label(expense.status))
            .map_err(xlsx_err)?;
        sheet
            .write_string(
                row,
                8,
                &expense
                    .paid_at
                    .map(|d| format_date_br(d.date_naive()))
                    .unwrap_or_else(|| "N/A".to_string()),
            )
            .map_err(xlsx_err)?;
        sheet
            .write_string(row, 9, &format_date_br(expense.created_at.date_naive()))
            .map_err(xlsx_err)?;
    }

    let label = Format::new().set_bold();
    let summary_sheet = workbook.add_worksheet();
    summary_sheet.set_name("Resumo").map_err(xlsx_err)?;
    let rows = [
        ("Total Pago", format_brl(summary.total_paid)),
        ("Total Pendente", format_brl(summary.total_pending)),
        ("Total Geral", format_brl(summary.grand_total())),
        ("Quantidade de Despesas", summary.count.to_string()),
    ];
    for (index, (label_text, value)) in rows.iter().enumerate() {
        let row = index as u32;
        summary_sheet
            .write_string_with_format(row, 0, *label_text, &label)
            .map_err(xlsx_err)?;
        summary_sheet
            .write_string(row, 1, value)
            .map_err(xlsx_err)?;
    }
    summary_sheet.set_column_width(0, 28).map_err(xlsx_err)?;
    summary_sheet.set_column_width(1, 18).map_err(xlsx_err)?;

    workbook.save_to_buffer().map_err(xlsx_err)
}

fn xlsx_err(err: rust_xlsxwriter::XlsxError) -> Error {
    Error::Export(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expenses::{Expense, ExpenseStatus, ExpenseType};
    use crate::settings::Settings;
    use chrono::{NaiveDate, TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn expense(id: &str, due: NaiveDate) -> Expense {
        Expense {
            id: id.to_string(),
            description: "office paper".to_string(),
            amount: dec!(120.40),
            expense_type: ExpenseType::Variable,
            due_date: due,
            month: "2026-08".to_string(),
            status: ExpenseStatus::Pending,
            creditor_id: None,
            category_id: None,
            contract_id: None,
            created_at: Utc.with_ymd_and_hms(2026, 8, 1, 10, 0, 0).unwrap(),
            paid_at: None,
        }
    }

    #[test]
    fn renders_a_zip_container_with_date_filter_applied() {
        let settings = Settings::default();
        let expenses = vec![
            expense("in-range", NaiveDate::from_ymd_opt(2026, 8, 10).unwrap()),
            expense("out-of-range", NaiveDate::from_ymd_opt(2026, 9, 10).unwrap()),
        ];
        let options = ExportOptions {
            expenses: &expenses,
            creditors: &[],
            start_date: Some(NaiveDate::from_ymd_opt(2026, 8, 1).unwrap()),
            end_date: Some(NaiveDate::from_ymd_opt(2026, 8, 31).unwrap()),
            entity: None,
            settings: &settings,
            generated_by: None,
            generated_at: Utc.with_ymd_and_hms(2026, 8, 15, 12, 0, 0).unwrap(),
        };
        let bytes = render_expenses_xlsx(&options).unwrap();
        // xlsx files are zip containers.
        assert_eq!(&bytes[..2], b"PK");
    }
}
