//! Interactive menu loop
//!
//! Presentation glue over the service layer: prompts, confirmation dialogs
//! and the main loop. Storage errors are printed and the loop resumes;
//! nothing that happens here takes the process down.

use std::io::{self, Write};

use crate::display;
use crate::error::LedgerError;
use crate::models::Money;
use crate::services::{LedgerService, Outcome};

/// Run the main menu until the user exits (or stdin closes)
pub fn run(service: &LedgerService) -> io::Result<()> {
    loop {
        println!();
        println!("=================================================");
        println!("             Personal Expense Tracker");
        println!("=================================================");
        println!();
        println!("1. Check Remaining Balance");
        println!("2. View Expenses");
        println!("3. Add New Expense");
        println!("4. Exit");
        println!();

        let Some(choice) = prompt("Choose an option (1-4): ")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => check_balance(service)?,
            "2" => view_expenses(service)?,
            "3" => add_expense(service)?,
            "4" => {
                println!("Goodbye!");
                return Ok(());
            }
            _ => {
                println!("Invalid selection. Please choose between 1 and 4.");
                pause()?;
            }
        }
    }
}

/// Show the balance report, then offer a top-up
fn check_balance(service: &LedgerService) -> io::Result<()> {
    println!();
    print!("{}", display::format_balance_report(&service.balance_report()));

    let Some(choice) = prompt("\nDo you want to add money to your balance? (y/n): ")? else {
        return Ok(());
    };
    if choice.to_lowercase() != "y" {
        return pause();
    }

    let Some(raw) = prompt("Enter amount to add: ")? else {
        return Ok(());
    };
    match Money::parse(&raw) {
        Ok(amount) => match service.top_up(amount) {
            Ok(Outcome::Accepted { new_current }) => {
                println!("Balance updated. New balance: {}", new_current);
            }
            Ok(Outcome::Rejected(reason)) => println!("{}", reason),
            Err(err) => report_storage_error(&err),
        },
        Err(_) => println!("That does not look like a valid number."),
    }

    pause()
}

/// Submenu for searching recorded expenses
fn view_expenses(service: &LedgerService) -> io::Result<()> {
    loop {
        println!();
        println!("=== View Expenses ===");
        println!("1. Search by item name");
        println!("2. Search by amount");
        println!("3. Back to main menu");

        let Some(choice) = prompt("Choose an option (1-3): ")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => search_by_item(service)?,
            "2" => search_by_amount(service)?,
            "3" => return Ok(()),
            _ => {
                println!("Invalid choice. Please pick 1, 2 or 3.");
                pause()?;
            }
        }
    }
}

fn search_by_item(service: &LedgerService) -> io::Result<()> {
    let Some(keyword) = prompt("Enter item name or part of it to search: ")? else {
        return Ok(());
    };
    if keyword.is_empty() {
        println!("Search text cannot be empty.");
        return pause();
    }

    println!("\n=== Search Results for '{}' ===\n", keyword);
    print!(
        "{}",
        display::format_search_results(&service.search_by_item(&keyword), display::NO_ITEM_MATCHES)
    );
    pause()
}

fn search_by_amount(service: &LedgerService) -> io::Result<()> {
    let Some(raw) = prompt("Enter amount to search for: ")? else {
        return Ok(());
    };
    let Ok(target) = Money::parse(&raw) else {
        println!("That does not look like a valid number.");
        return pause();
    };

    println!("\n=== Search Results for amount '{}' ===\n", target);
    print!(
        "{}",
        display::format_search_results(
            &service.search_by_amount(target),
            display::NO_AMOUNT_MATCHES
        )
    );
    pause()
}

/// Prompt for a new expense, confirm, then record it
fn add_expense(service: &LedgerService) -> io::Result<()> {
    println!("\nCurrent available balance: {}", service.balance().current);

    let Some(date) = prompt("Enter date (YYYY-MM-DD): ")? else {
        return Ok(());
    };
    let Some(item) = prompt("Enter item name (what did you spend on?): ")? else {
        return Ok(());
    };
    let Some(raw_amount) = prompt("Enter amount spent: ")? else {
        return Ok(());
    };
    let Ok(amount) = Money::parse(&raw_amount) else {
        println!("That does not look like a valid number.");
        return pause();
    };

    println!("\nPlease review your expense:");
    println!("Date  : {}", date);
    println!("Item  : {}", item);
    println!("Amount: {}", amount);

    let Some(confirm) = prompt("Save this expense? (y/n): ")? else {
        return Ok(());
    };
    if confirm.to_lowercase() != "y" {
        println!("Expense was not saved.");
        return pause();
    }

    match service.add_expense(&date, &item, amount) {
        Ok(Outcome::Accepted { new_current }) => {
            println!("Expense saved successfully. Remaining balance: {}", new_current);
        }
        Ok(Outcome::Rejected(reason)) => println!("{}", reason),
        Err(err) => report_storage_error(&err),
    }

    pause()
}

fn report_storage_error(err: &LedgerError) {
    println!("Could not complete the operation due to a file error: {}", err);
}

/// Print a prompt and read one trimmed line; `None` means stdin closed
fn prompt(text: &str) -> io::Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

/// Small helper to avoid the menu jumping too fast
fn pause() -> io::Result<()> {
    prompt("\nPress Enter to continue...").map(|_| ())
}
