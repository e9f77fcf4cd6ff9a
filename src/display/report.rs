//! Report formatting utilities for terminal output

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::{Currency, Money, UserIdentity};
use crate::reports::CategoryBreakdown;
use crate::services::Notice;

/// Format a money amount with color hints for terminal display
pub fn format_money_colored(amount: Money) -> String {
    if amount.is_negative() {
        format!("\x1b[31m{}\x1b[0m", amount) // Red for negative
    } else if amount.is_positive() {
        format!("\x1b[32m{}\x1b[0m", amount) // Green for positive
    } else {
        amount.to_string()
    }
}

/// Forecast line shown by `report forecast`
pub fn format_forecast(forecast: Money, base: Currency, window_months: usize) -> String {
    format!(
        "Forecast next month (avg net of last {} month(s)): {} {}\n",
        window_months,
        format_money_colored(forecast),
        base
    )
}

/// Create a simple bar chart representation
pub fn format_bar(value: Money, max_value: Money, width: usize) -> String {
    if !max_value.is_positive() || !value.is_positive() {
        return " ".repeat(width);
    }

    let ratio = value.value() / max_value.value();
    let filled = (ratio * Decimal::from(width))
        .round()
        .to_usize()
        .unwrap_or(width)
        .min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Category breakdown with a bar per category
pub fn format_category_bars(breakdown: &CategoryBreakdown, width: usize) -> String {
    let max = breakdown
        .categories
        .values()
        .map(|total| total.amount)
        .max()
        .unwrap_or_default();

    let mut output = String::new();
    for (category, total) in &breakdown.categories {
        output.push_str(&format!(
            "{:<20} {} {:>12}\n",
            category,
            format_bar(total.amount, max, width),
            total.amount
        ));
    }
    output
}

/// Format a one-shot action notice
pub fn format_notice(notice: &Notice) -> String {
    if notice.is_success() {
        format!("\x1b[32m{}\x1b[0m", notice)
    } else {
        format!("\x1b[31m{}\x1b[0m", notice)
    }
}

/// Banner shown after a successful login
pub fn format_welcome(user: &UserIdentity) -> String {
    format!("Welcome, {}! ({})", user.username, user.id)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fx::IdentityConverter;
    use crate::models::{Transaction, UserId};

    #[test]
    fn test_money_colors() {
        assert!(format_money_colored(Money::from_cents(-100)).starts_with("\x1b[31m"));
        assert!(format_money_colored(Money::from_cents(100)).starts_with("\x1b[32m"));
        assert_eq!(format_money_colored(Money::zero()), "0.00");
    }

    #[test]
    fn test_bar() {
        let bar = format_bar(Money::from_cents(500), Money::from_cents(1000), 10);
        assert_eq!(bar, "█████░░░░░");
        assert_eq!(format_bar(Money::zero(), Money::from_cents(1000), 4), "    ");
    }

    #[test]
    fn test_category_bars() {
        let txns = vec![
            Transaction::create("Expense", "10", "USD", "Food", "2025-01-01").unwrap(),
            Transaction::create("Expense", "5", "USD", "Fun", "2025-01-01").unwrap(),
        ];
        let breakdown = CategoryBreakdown::generate(&txns, &IdentityConverter).unwrap();
        let output = format_category_bars(&breakdown, 4);
        assert!(output.contains("████"));
        assert!(output.contains("██░░"));
    }

    #[test]
    fn test_welcome() {
        let user = UserIdentity {
            id: UserId::new(3),
            username: "alice".into(),
        };
        assert_eq!(format_welcome(&user), "Welcome, alice! (usr-3)");
    }

    #[test]
    fn test_separator() {
        assert_eq!(separator(3).chars().count(), 3);
    }
}
