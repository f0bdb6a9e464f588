//! Conversions between engine-native page coordinates and page numbers
//!
//! An epage is the engine's possibly fractional page coordinate; a page
//! number is the 1-based value shown to the reader.

/// Convert an epage coordinate to a 1-based page number
///
/// Zero is a valid coordinate and converts to page 1; only an absent input
/// yields an absent result. Fractional coordinates are rounded before the
/// offset is applied.
pub fn epage_to_page_number(epage: Option<f64>) -> Option<f64> {
    epage.map(|epage| epage.round() + 1.0)
}

/// Convert a 1-based page number back to an epage coordinate
///
/// Zero is a valid page number and converts to epage -1; only an absent
/// input yields an absent result.
pub fn epage_from_page_number(page_number: Option<f64>) -> Option<f64> {
    page_number.map(|page_number| page_number - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_integer_epages() {
        for epage in 0..=50 {
            let epage = f64::from(epage);
            let page_number = epage_to_page_number(Some(epage));
            assert_eq!(epage_from_page_number(page_number), Some(epage));
        }
    }

    #[test]
    fn zero_is_a_value_not_an_absence() {
        assert_eq!(epage_to_page_number(Some(0.0)), Some(1.0));
        assert_eq!(epage_from_page_number(Some(0.0)), Some(-1.0));
    }

    #[test]
    fn absent_input_stays_absent() {
        assert_eq!(epage_to_page_number(None), None);
        assert_eq!(epage_from_page_number(None), None);
    }

    #[test]
    fn fractional_epages_round_before_the_offset() {
        assert_eq!(epage_to_page_number(Some(2.4)), Some(3.0));
        assert_eq!(epage_to_page_number(Some(2.5)), Some(4.0));
        assert_eq!(epage_to_page_number(Some(0.25)), Some(1.0));
    }
}
