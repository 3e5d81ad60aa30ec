// ── Display severity thresholds ──
//
// The console renders safety stock and max capacity with a two-state
// indicator. The thresholds come from the back-office conventions:
// a safety stock above 10 units and a location capacity above 50 units
// count as healthy; anything at or below is flagged.

/// Two-state severity indicator for numeric master-data fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityLevel {
    /// Above the threshold.
    Ok,
    /// At or below the threshold.
    Low,
}

impl SeverityLevel {
    /// Indicator for a product's safety stock (`> 10` is ok).
    pub fn for_safety_stock(value: i64) -> Self {
        if value > 10 { Self::Ok } else { Self::Low }
    }

    /// Indicator for a storage location's max capacity (`> 50` is ok).
    pub fn for_max_capacity(value: i64) -> Self {
        if value > 50 { Self::Ok } else { Self::Low }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safety_stock_threshold_is_exclusive() {
        assert_eq!(SeverityLevel::for_safety_stock(5), SeverityLevel::Low);
        assert_eq!(SeverityLevel::for_safety_stock(10), SeverityLevel::Low);
        assert_eq!(SeverityLevel::for_safety_stock(11), SeverityLevel::Ok);
        assert_eq!(SeverityLevel::for_safety_stock(15), SeverityLevel::Ok);
    }

    #[test]
    fn max_capacity_threshold_is_exclusive() {
        assert_eq!(SeverityLevel::for_max_capacity(50), SeverityLevel::Low);
        assert_eq!(SeverityLevel::for_max_capacity(51), SeverityLevel::Ok);
        assert_eq!(SeverityLevel::for_max_capacity(0), SeverityLevel::Low);
    }
}
