use pathfind_core::config::Representation;
use pathfind_core::error::PathfindError;
use pathfind_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse graph representation from string
pub fn parse_representation(s: &str) -> std::result::Result<Representation, String> {
    s.parse::<Representation>().map_err(|e| e.to_string())
}

/// Parse a `WEIGHT:VALUE` item spec.
///
/// Signs are kept so that negative numbers are reported by the solver as
/// invalid values.
pub fn parse_item(s: &str) -> std::result::Result<(i64, i64), String> {
    let invalid = || PathfindError::invalid_value("item", format!("{s} (expected WEIGHT:VALUE)"));
    let (weight, value) = s.split_once(':').ok_or_else(|| invalid().to_string())?;
    let weight = weight.trim().parse::<i64>().map_err(|_| invalid().to_string())?;
    let value = value.trim().parse::<i64>().map_err(|_| invalid().to_string())?;
    Ok((weight, value))
}
