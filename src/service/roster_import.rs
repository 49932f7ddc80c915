use crate::db::models::NewShareholder;
use crate::error::QnaError;
use crate::service::csv_codec::parse_records;

/// Columns a roster file must carry, in any order, and nothing else.
pub const ROSTER_COLUMNS: [&str; 4] = ["shareholder_number", "name", "postal_code", "shares"];

/// Parse an uploaded roster file into rows ready for insertion.
pub fn parse_roster(data: &[u8]) -> Result<Vec<NewShareholder>, QnaError> {
    let text = std::str::from_utf8(data)
        .map_err(|e| QnaError::ImportFormat(format!("file is not valid UTF-8: {e}")))?;
    let mut records = parse_records(text)
        .map_err(QnaError::ImportFormat)?
        .into_iter();

    let header = records
        .next()
        .ok_or_else(|| QnaError::ImportFormat("file is empty".to_string()))?;
    let positions = column_positions(&header)?;

    records
        .enumerate()
        .map(|(i, record)| {
            // Header is row 1.
            let row_no = i + 2;
            if record.len() != header.len() {
                return Err(QnaError::ImportFormat(format!(
                    "row {row_no} has {} fields, expected {}",
                    record.len(),
                    header.len()
                )));
            }
            let [number, name, postal, shares] = positions.map(|p| record[p].as_str());
            let shares = shares.trim().parse::<i64>().map_err(|_| {
                QnaError::ImportFormat(format!("row {row_no}: shares `{shares}` is not an integer"))
            })?;
            Ok(NewShareholder {
                shareholder_number: number.to_string(),
                name: name.to_string(),
                postal_code: postal.to_string(),
                shares,
            })
        })
        .collect()
}

/// Index of each of [`ROSTER_COLUMNS`] in the header.
fn column_positions(header: &[String]) -> Result<[usize; 4], QnaError> {
    if let Some(extra) = header
        .iter()
        .find(|h| !ROSTER_COLUMNS.contains(&h.as_str()))
    {
        return Err(QnaError::ImportFormat(format!("unexpected column `{extra}`")));
    }

    let mut positions = [0usize; 4];
    for (slot, col) in positions.iter_mut().zip(ROSTER_COLUMNS) {
        let mut found = header.iter().enumerate().filter(|(_, h)| *h == col);
        *slot = match (found.next(), found.next()) {
            (Some((idx, _)), None) => idx,
            (None, _) => return Err(QnaError::ImportFormat(format!("missing column `{col}`"))),
            (Some(_), Some(_)) => {
                return Err(QnaError::ImportFormat(format!("duplicate column `{col}`")));
            }
        };
    }
    Ok(positions)
}
