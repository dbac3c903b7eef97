//! Report naming conventions.

const FORBIDDEN: [char; 10] = [' ', '/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Download filename for a screening report, e.g.
/// `Screening Report - Jane Doe - 05 March 2025.pdf`.
///
/// Path-hostile characters in the patient name become spaces.
pub fn report_filename(patient_name: &str, screened_on: jiff::civil::Date) -> String {
    let safe_name: String = patient_name
        .chars()
        .map(|c| if FORBIDDEN.contains(&c) { ' ' } else { c })
        .collect();
    let date = screened_on.strftime("%d %B %Y");
    format!("Screening Report - {safe_name} - {date}.pdf")
}
