//! US state table used by profile documents.

/// `(abbreviation, full name)` pairs.
pub const STATES: [(&str, &str); 50] = [
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AZ", "Arizona"),
    ("AR", "Arkansas"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DE", "Delaware"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("HI", "Hawaii"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("IA", "Iowa"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("ME", "Maine"),
    ("MD", "Maryland"),
    ("MA", "Massachusetts"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MS", "Mississippi"),
    ("MO", "Missouri"),
    ("MT", "Montana"),
    ("NE", "Nebraska"),
    ("NV", "Nevada"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NY", "New York"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VT", "Vermont"),
    ("VA", "Virginia"),
    ("WA", "Washington"),
    ("WV", "West Virginia"),
    ("WI", "Wisconsin"),
    ("WY", "Wyoming"),
];

/// Index used when the marker digit does not occur in the alphabet.
/// It lies past the end of the table and is wrapped like any other position.
pub const MISSING_MARKER_INDEX: usize = 56;

/// Table row for a marker position (or its absence).
pub fn lookup(position: Option<usize>) -> (&'static str, &'static str) {
    let index = position.unwrap_or(MISSING_MARKER_INDEX) % STATES.len();
    STATES[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_wraps_positions() {
        assert_eq!(lookup(Some(0)), ("AL", "Alabama"));
        assert_eq!(lookup(Some(54)), ("CA", "California"));
    }

    #[test]
    fn test_missing_marker_uses_fallback() {
        assert_eq!(lookup(None), STATES[MISSING_MARKER_INDEX % STATES.len()]);
        assert_eq!(lookup(None), ("CT", "Connecticut"));
    }
}
