//! Fixed column widths shared by report headers and record rows

/// Name column (left-aligned)
pub const NAME_WIDTH: usize = 20;
/// SSN column (left-aligned)
pub const SSN_WIDTH: usize = 10;
/// Year / kind-label column (left-aligned)
pub const LABEL_WIDTH: usize = 10;
/// Credits column (left-aligned)
pub const CREDITS_WIDTH: usize = 10;
/// Tuition column (right-aligned, `$` prefixed)
pub const TUITION_WIDTH: usize = 10;
/// GPA column (right-aligned)
pub const GPA_WIDTH: usize = 10;

/// Width of the separator rule under the header
pub const RULE_WIDTH: usize = 70;

/// Format a currency amount as `$` followed by two decimals
#[must_use]
pub fn currency(amount: f32) -> String {
    format!("${amount:.2}")
}

/// The 70-character `-` rule
#[must_use]
pub fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// The column header line (no trailing newline)
#[must_use]
pub fn header() -> String {
    format!(
        "{:<NAME_WIDTH$}{:<SSN_WIDTH$}{:<LABEL_WIDTH$}{:<CREDITS_WIDTH$}{:>TUITION_WIDTH$}{:>GPA_WIDTH$}",
        "Name", "SSN", "Year", "Credits", "Tuition", "GPA"
    )
}
