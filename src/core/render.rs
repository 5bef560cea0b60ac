use crate::core::{Result, VetView};
use crate::domain::model::Vets;
use crate::utils::error::VetError;
use std::fmt::Write as _;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Json,
    Csv,
    #[default]
    Table,
}

impl FromStr for OutputFormat {
    type Err = VetError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "table" => Ok(OutputFormat::Table),
            other => Err(VetError::InvalidConfigValue {
                field: "output.format".to_string(),
                value: other.to_string(),
                reason: "Valid formats: json, csv, table".to_string(),
            }),
        }
    }
}

pub fn render(views: &[VetView], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => render_json(views),
        OutputFormat::Csv => render_csv(views),
        OutputFormat::Table => Ok(render_table(views)),
    }
}

pub fn render_json(views: &[VetView]) -> Result<String> {
    let envelope = Vets::new(views.to_vec());
    Ok(serde_json::to_string_pretty(&envelope)?)
}

/// `;` separates specialties inside the CSV column; a literal `;` or `\`
/// in a name is written as `\;` or `\\`.
fn escape_specialty(name: &str) -> String {
    name.replace('\\', "\\\\").replace(';', "\\;")
}

pub fn render_csv(views: &[VetView]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["id", "first_name", "last_name", "specialties"])?;

    for view in views {
        let id = view.id.map(|id| id.to_string()).unwrap_or_default();
        let specialties = view
            .specialties
            .iter()
            .map(|s| escape_specialty(&s.name))
            .collect::<Vec<_>>()
            .join(";");
        writer.write_record([
            id.as_str(),
            view.first_name.as_str(),
            view.last_name.as_str(),
            specialties.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| VetError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| VetError::Output {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

pub fn render_table(views: &[VetView]) -> String {
    let width = views
        .iter()
        .map(|v| v.full_name().chars().count())
        .max()
        .unwrap_or(0)
        .max("Name".len());

    let mut out = String::new();
    let _ = writeln!(out, "{:<width$}  Specialties", "Name", width = width);
    for view in views {
        let mut names: Vec<&str> = view.specialties.iter().map(|s| s.name.as_str()).collect();
        names.sort_unstable();
        let specialties = if names.is_empty() {
            "none".to_string()
        } else {
            names.join(" ")
        };
        let _ = writeln!(
            out,
            "{:<width$}  {}",
            view.full_name(),
            specialties,
            width = width
        );
    }
    out
}
