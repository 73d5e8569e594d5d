use eframe::egui;

use super::overview::text_table;
use crate::constants::columns;

/// Shown until the first successful upload
pub fn render_welcome(ui: &mut egui::Ui) {
    ui.heading("Machine Learning Jobs Analysis Dashboard");
    ui.label("This dashboard analyzes trends in ML job postings across the US.");
    ui.add_space(8.0);
    ui.label("Open a CSV file or drag and drop one onto the window to get started.");

    ui.add_space(12.0);
    ui.heading("Expected Data Format");
    ui.label("Your CSV file should have the following columns:");
    for (name, description) in [
        (columns::JOB_TITLE, "Title of the job posting"),
        (columns::COMPANY_NAME, "Name of the hiring company"),
        (
            columns::JOB_POSTED_DATE,
            "Date when the job was posted (required)",
        ),
        (columns::COMPANY_LOCALITY, "City or locality of the job"),
    ] {
        ui.label(format!("• {}: {}", name, description));
    }

    ui.add_space(4.0);
    ui.label("Optional columns:");
    ui.label(format!(
        "• {}: Level of seniority for the position",
        columns::SENIORITY_LEVEL
    ));
    ui.label(format!(
        "• {}: State or region of the job",
        columns::COMPANY_REGION
    ));

    ui.add_space(12.0);
    let headers: Vec<String> = [
        columns::JOB_TITLE,
        columns::COMPANY_NAME,
        columns::JOB_POSTED_DATE,
        columns::COMPANY_LOCALITY,
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    let rows: Vec<Vec<String>> = [
        ["Data Scientist", "Tech Co", "2023-01-15", "San Francisco"],
        ["ML Engineer", "AI Solutions", "2023-02-20", "New York"],
        ["AI Researcher", "Research Labs", "2023-03-10", "Boston"],
    ]
    .iter()
    .map(|row| row.iter().map(|s| s.to_string()).collect())
    .collect();
    text_table(ui, "expected_format", &headers, &rows);
}
