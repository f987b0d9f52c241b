//! Discount arithmetic and price formatting.

/// Price after applying `discount_percentage`.
///
/// A zero or negative percentage leaves the price unchanged.
pub fn calculate_discounted_price(price: f64, discount_percentage: f64) -> f64 {
    if discount_percentage > 0.0 {
        price * (1.0 - discount_percentage / 100.0)
    } else {
        price
    }
}

/// Amount saved by the discount.
pub fn savings(price: f64, discount_percentage: f64) -> f64 {
    price - calculate_discounted_price(price, discount_percentage)
}

/// `$1234.50` style, two decimals.
pub fn format_price(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Badge text such as `-12%`, rounded to a whole percent.
pub fn discount_badge(discount_percentage: f64) -> String {
    format!("-{}%", discount_percentage.round() as i64)
}
