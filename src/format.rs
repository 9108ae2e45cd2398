use serde::Deserialize;

/// Digit grouping for currency amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    /// 12,34,567 (lakh / crore)
    #[default]
    Indian,
    /// 1,234,567
    Western,
}

/// Currency presentation shared by the inputs and the result card.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub grouping: Grouping,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "₹".to_string(),
            grouping: Grouping::Indian,
        }
    }
}

impl CurrencyFormat {
    pub fn amount(&self, value: f64, decimals: usize) -> String {
        format_currency(value, decimals, self.grouping, &self.symbol)
    }

    /// A typed principal, shown the way the original field echo shows it:
    /// empty or unparseable text reads as zero.
    pub fn typed_amount(&self, text: &str) -> String {
        let value = text.trim().parse::<f64>().unwrap_or(0.0);
        let value = if value.is_finite() { value } else { 0.0 };
        let decimals = if value.fract() == 0.0 { 0 } else { 2 };
        self.amount(value, decimals)
    }
}

fn group_digits(digits: &str, grouping: Grouping) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(len - 3);
    let mut groups: Vec<&str> = Vec::new();
    let lead = match grouping {
        Grouping::Indian => 2,
        Grouping::Western => 3,
    };

    let mut end = head.len();
    while end > lead {
        groups.push(&head[end - lead..end]);
        end -= lead;
    }
    groups.push(&head[..end]);
    groups.reverse();

    let mut out = groups.join(",");
    out.push(',');
    out.push_str(tail);
    out
}

pub fn format_currency(value: f64, decimals: usize, grouping: Grouping, symbol: &str) -> String {
    let printed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match printed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (printed.as_str(), None),
    };

    let mut out = String::new();
    if value < 0.0 && printed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    out.push_str(symbol);
    out.push_str(&group_digits(int_part, grouping));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn or_zero(text: &str) -> &str {
    if text.is_empty() {
        "0"
    } else {
        text
    }
}

pub fn format_rate(text: &str) -> String {
    format!("{}%", or_zero(text))
}

pub fn format_term(text: &str) -> String {
    format!("{} Months", or_zero(text))
}

/// Short label drawn on the term slider.
pub fn format_term_short(value: f64) -> String {
    format!("{} mo", value.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_currency(100_000.0, 0, Grouping::Indian, "₹"), "₹1,00,000");
        assert_eq!(format_currency(12_345_678.5, 2, Grouping::Indian, "₹"), "₹1,23,45,678.50");
        assert_eq!(format_currency(999.0, 0, Grouping::Indian, "₹"), "₹999");
        assert_eq!(format_currency(4_707.347, 2, Grouping::Indian, "₹"), "₹4,707.35");
    }

    #[test]
    fn test_western_grouping() {
        assert_eq!(format_currency(500_000.0, 0, Grouping::Western, "$"), "$500,000");
        assert_eq!(format_currency(1_234_567.891, 2, Grouping::Western, "$"), "$1,234,567.89");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_currency(-1_500.0, 2, Grouping::Western, "$"), "-$1,500.00");
        assert_eq!(format_currency(-0.001, 2, Grouping::Western, "$"), "$0.00");
    }

    #[test]
    fn test_typed_amount() {
        let currency = CurrencyFormat::default();
        assert_eq!(currency.typed_amount("250000"), "₹2,50,000");
        assert_eq!(currency.typed_amount(""), "₹0");
        assert_eq!(currency.typed_amount("abc"), "₹0");
        assert_eq!(currency.typed_amount("1500.5"), "₹1,500.50");
    }

    #[test]
    fn test_rate_and_term() {
        assert_eq!(format_rate("12.5"), "12.5%");
        assert_eq!(format_rate(""), "0%");
        assert_eq!(format_term("24"), "24 Months");
        assert_eq!(format_term_short(360.0), "360 mo");
    }
}
