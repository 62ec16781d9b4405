use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Columns recognized in raw match exports, in output order.
pub const CANONICAL_COLUMNS: [&str; 16] = [
    "team",
    "player_name",
    "player_role",
    "skill",
    "skill_type",
    "evaluation",
    "evaluation_code",
    "start_zone",
    "end_zone",
    "end_subzone",
    "skill_subtype",
    "num_players",
    "num_players_numeric",
    "home_setter_position",
    "visiting_setter_position",
    "set_number",
];

pub const SKILL_COLUMN: &str = "skill";
pub const EVALUATION_CODE_COLUMN: &str = "evaluation_code";

/// The canonical columns present in one input file, in canonical order.
/// Columns the input lacks are omitted rather than inserted empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnLayout {
    columns: Vec<String>,
    source_indices: Vec<usize>,
    skill_idx: usize,
    evaluation_code_idx: usize,
}

impl ColumnLayout {
    /// Build a layout from the input header row. Input columns outside the
    /// canonical list are dropped; `skill` and `evaluation_code` must be
    /// present for rows to be classifiable at all.
    pub fn from_headers<I, S>(headers: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw: Vec<String> = headers
            .into_iter()
            .map(|h| h.as_ref().to_string())
            .collect();

        let mut columns = Vec::new();
        let mut source_indices = Vec::new();
        for name in CANONICAL_COLUMNS {
            if let Some(idx) = raw.iter().position(|h| h == name) {
                columns.push(name.to_string());
                source_indices.push(idx);
            }
        }

        let skill_idx = columns
            .iter()
            .position(|c| c == SKILL_COLUMN)
            .ok_or_else(|| Error::MissingColumn(SKILL_COLUMN.to_string()))?;
        let evaluation_code_idx = columns
            .iter()
            .position(|c| c == EVALUATION_CODE_COLUMN)
            .ok_or_else(|| Error::MissingColumn(EVALUATION_CODE_COLUMN.to_string()))?;

        Ok(Self {
            columns,
            source_indices,
            skill_idx,
            evaluation_code_idx,
        })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Project one raw record onto this layout. `evaluation_code` is trimmed
    /// of surrounding whitespace; every other field passes through untouched.
    pub fn project(&self, fields: &[&str]) -> EventRow {
        let values = self
            .source_indices
            .iter()
            .enumerate()
            .map(|(col, &src)| {
                let value = fields.get(src).copied().unwrap_or("");
                if col == self.evaluation_code_idx {
                    value.trim().to_string()
                } else {
                    value.to_string()
                }
            })
            .collect();

        EventRow { values }
    }

    pub fn skill<'a>(&self, row: &'a EventRow) -> &'a str {
        &row.values[self.skill_idx]
    }

    pub fn evaluation_code<'a>(&self, row: &'a EventRow) -> &'a str {
        &row.values[self.evaluation_code_idx]
    }
}

/// One recorded action, field values aligned to a `ColumnLayout`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRow {
    values: Vec<String>,
}

impl EventRow {
    pub fn values(&self) -> &[String] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_keeps_canonical_order() {
        let layout =
            ColumnLayout::from_headers(["evaluation_code", "video_time", "skill", "team"]).unwrap();

        assert_eq!(layout.columns(), &["team", "skill", "evaluation_code"]);
    }

    #[test]
    fn test_missing_skill_column() {
        let result = ColumnLayout::from_headers(["team", "evaluation_code"]);
        assert!(matches!(result, Err(Error::MissingColumn(ref c)) if c == "skill"));
    }

    #[test]
    fn test_missing_evaluation_code_column() {
        let result = ColumnLayout::from_headers(["team", "skill"]);
        assert!(matches!(result, Err(Error::MissingColumn(ref c)) if c == "evaluation_code"));
    }

    #[test]
    fn test_project_trims_only_evaluation_code() {
        let layout = ColumnLayout::from_headers(["player_name", "skill", "evaluation_code"]).unwrap();
        let row = layout.project(&[" Ana ", "Serve", " # "]);

        assert_eq!(row.values(), &[" Ana ", "Serve", "#"]);
        assert_eq!(layout.skill(&row), "Serve");
        assert_eq!(layout.evaluation_code(&row), "#");
    }

    #[test]
    fn test_project_reorders_fields() {
        let layout =
            ColumnLayout::from_headers(["evaluation_code", "video_time", "skill", "team"]).unwrap();
        let row = layout.project(&["#", "00:12:03", "Attack", "Home"]);

        assert_eq!(row.values(), &["Home", "Attack", "#"]);
    }
}
