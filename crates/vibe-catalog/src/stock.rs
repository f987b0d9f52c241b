//! Stock status tiers.

use serde::Serialize;

/// Three-tier stock classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StockStatus {
    /// More than 10 units.
    InStock,
    /// 1 to 10 units.
    LowStock,
    /// None left.
    OutOfStock,
}

impl StockStatus {
    /// Classify a stock count. Missing counts are treated as zero.
    pub fn from_stock(stock: Option<i64>) -> Self {
        match stock.unwrap_or(0) {
            s if s > 10 => Self::InStock,
            s if s > 0 => Self::LowStock,
            _ => Self::OutOfStock,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::LowStock => "Low Stock",
            Self::OutOfStock => "Out of Stock",
        }
    }

    /// CSS modifier class for the stock badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::InStock => "stock-in",
            Self::LowStock => "stock-low",
            Self::OutOfStock => "stock-out",
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self, Self::OutOfStock)
    }
}
