//! Display formatting for terminal output
//!
//! Formats service results for the menu. Keeps all layout decisions out of
//! the service layer.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::services::{BalanceReport, SearchHit};

/// Format the "remaining balance" report block
pub fn format_balance_report(report: &BalanceReport) -> String {
    let mut output = String::new();
    output.push_str("=== Remaining Balance Report ===\n");
    output.push_str(&format!("Initial balance       : {}\n", report.initial));
    output.push_str(&format!("Total expenses to date: {}\n", report.spent));
    output.push_str(&format!("Available balance     : {}\n", report.current));
    output
}

#[derive(Tabled)]
struct SearchRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Time")]
    timestamp: String,
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Empty-result line for the item search
pub const NO_ITEM_MATCHES: &str = "No matching expenses found.";

/// Empty-result line for the amount search
pub const NO_AMOUNT_MATCHES: &str = "No expenses found matching that amount.";

/// Format search results as a table, or the given line when empty
pub fn format_search_results(hits: &[SearchHit], empty_message: &str) -> String {
    if hits.is_empty() {
        return format!("{}\n", empty_message);
    }

    let rows: Vec<SearchRow> = hits
        .iter()
        .map(|hit| SearchRow {
            file: hit.file.clone(),
            id: hit.entry.id,
            date: hit.entry.date.clone(),
            timestamp: hit.entry.timestamp.clone(),
            item: hit.entry.item.clone(),
            amount: hit.entry.amount.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Entry, Money};

    #[test]
    fn test_balance_report_layout() {
        let report = BalanceReport {
            initial: Money::from_cents(10000),
            spent: Money::from_cents(450),
            current: Money::from_cents(9550),
        };

        let text = format_balance_report(&report);
        assert!(text.contains("Initial balance       : 100.00"));
        assert!(text.contains("Total expenses to date: 4.50"));
        assert!(text.contains("Available balance     : 95.50"));
    }

    #[test]
    fn test_empty_search_results_use_the_given_wording() {
        assert_eq!(
            format_search_results(&[], NO_ITEM_MATCHES),
            "No matching expenses found.\n"
        );
        assert_eq!(
            format_search_results(&[], NO_AMOUNT_MATCHES),
            "No expenses found matching that amount.\n"
        );
    }

    #[test]
    fn test_search_results_table_has_all_fields() {
        let hits = vec![SearchHit {
            file: "expenses_2024-01-01.txt".to_string(),
            entry: Entry::new(
                1,
                "2024-01-01",
                "2024-01-01 10:00:00",
                "Coffee",
                Money::from_cents(450),
            ),
        }];

        let text = format_search_results(&hits, NO_ITEM_MATCHES);
        assert!(text.contains("expenses_2024-01-01.txt"));
        assert!(text.contains("Coffee"));
        assert!(text.contains("4.50"));
    }
}
