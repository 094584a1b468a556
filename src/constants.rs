//! Default thresholds for pixel filtering and reporting
//!
//! The background exclusion values approximate a dark navy background
//! (#00245d) with a coarse bounding box in RGB space. The thresholds are
//! intentionally loose; they are a heuristic background cut, not an exact
//! color match, and must not be tightened without revisiting the images
//! they were tuned against.

/// Pixel exclusion thresholds
pub mod filter {
    /// Minimum alpha for a pixel to count as visible
    pub const MIN_VISIBLE_ALPHA: u8 = 50;

    /// Background bounding box: pixels with all three channels strictly
    /// below these values are treated as navy background and skipped.
    pub const NAVY_MAX_RED: u8 = 50;
    pub const NAVY_MAX_GREEN: u8 = 100;
    pub const NAVY_MAX_BLUE: u8 = 150;
}

/// Reporting defaults
pub mod report {
    /// Number of ranked colors reported by default
    pub const DEFAULT_TOP_COLORS: usize = 5;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navy_reference_inside_bounding_box() {
        // The box exists to catch #00245d (0, 36, 93)
        assert!(0 < filter::NAVY_MAX_RED);
        assert!(36 < filter::NAVY_MAX_GREEN);
        assert!(93 < filter::NAVY_MAX_BLUE);
    }

    #[test]
    fn test_threshold_ranges() {
        assert!(filter::MIN_VISIBLE_ALPHA > 0);
        assert!(report::DEFAULT_TOP_COLORS > 0);
    }
}
