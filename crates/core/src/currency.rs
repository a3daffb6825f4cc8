//! Rupee formatting
//!
//! Amounts are grouped the Indian way: the last three digits, then pairs
//! (lakh, crore). `150000` renders as `₹1,50,000`.

/// Format a whole-rupee amount with Indian digit grouping.
pub fn format_inr(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{}", digits);
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("₹{},{}", groups.join(","), tail)
}
