use colored::Colorize;

use crate::expenses::db_types::{Expense, ExpenseSummary};

/// Format a table with columns and rows
pub fn format_table(headers: Vec<&str>, rows: Vec<Vec<String>>) -> String {
    let col_widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let mut width = header.len();
            for row in &rows {
                if i < row.len() {
                    width = width.max(row[i].chars().count());
                }
            }
            width
        })
        .collect();

    let header_line = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:width$}", h, width = col_widths[i]))
        .collect::<Vec<_>>()
        .join(" | ");

    let mut out = vec![header_line.bold().to_string(), "-".repeat(header_line.len())];

    for row in rows {
        let row_line = row
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:width$}", cell, width = col_widths.get(i).copied().unwrap_or(20)))
            .collect::<Vec<_>>()
            .join(" | ");
        out.push(row_line);
    }

    out.join("\n")
}

pub fn format_amount(amount: f64) -> String {
    format!("${:.2}", amount)
}

pub fn format_expense_table(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses recorded yet.".dimmed().to_string();
    }

    let rows = expenses
        .iter()
        .map(|e| {
            vec![
                e.id.to_string(),
                e.date.clone(),
                format_amount(e.amount),
                e.category.clone(),
                e.note.clone(),
            ]
        })
        .collect();

    format_table(vec!["ID", "Date", "Amount", "Category", "Note"], rows)
}

pub fn format_summary(summary: &ExpenseSummary) -> String {
    let rows = summary
        .by_category
        .iter()
        .map(|(category, total)| vec![category.clone(), format_amount(*total)])
        .collect();

    format!(
        "{}\n\n{}: {}",
        format_table(vec!["Category", "Total"], rows),
        "Total".bright_cyan(),
        format_amount(summary.total)
    )
}

/// Format a header
pub fn print_header(text: &str) {
    println!();
    println!("{}", text.bold().bright_cyan());
    println!("{}", "=".repeat(text.len()));
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(3.0), "$3.00");
        assert_eq!(format_amount(12.346), "$12.35");
    }

    #[test]
    fn test_expense_table_contains_rows() {
        colored::control::set_override(false);
        let table = format_expense_table(&[Expense {
            id: 3,
            amount: 4.5,
            date: "2024-06-01".to_string(),
            note: "Bread".to_string(),
            category: "Food".to_string(),
        }]);

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[2].contains("$4.50"));
        assert!(lines[2].contains("Bread"));
    }
}
