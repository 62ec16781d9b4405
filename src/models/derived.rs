use serde::{Deserialize, Serialize};

use crate::models::event::{ColumnLayout, EventRow};

/// Derived column names, appended to the output in this order.
pub const DERIVED_COLUMNS: [&str; 3] = ["pass_eff_value", "serve_eff_value", "attack_eff_value"];

/// Signed unit scores for one action, one per rated skill category.
/// Non-zero only in the column matching the row's skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Efficiency {
    pub pass: i8,
    pub serve: i8,
    pub attack: i8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedRow {
    pub event: EventRow,
    pub efficiency: Efficiency,
}

impl DerivedRow {
    /// Full output record: pass-through values followed by the derived values.
    pub fn to_record(&self) -> Vec<String> {
        let mut record: Vec<String> = self.event.values().to_vec();
        record.push(self.efficiency.pass.to_string());
        record.push(self.efficiency.serve.to_string());
        record.push(self.efficiency.attack.to_string());
        record
    }
}

/// The derived rows in input order, plus the layout they were projected onto.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DerivedTable {
    layout: ColumnLayout,
    rows: Vec<DerivedRow>,
}

impl DerivedTable {
    pub fn new(layout: ColumnLayout, rows: Vec<DerivedRow>) -> Self {
        Self { layout, rows }
    }

    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    pub fn rows(&self) -> &[DerivedRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Output header: layout columns followed by the derived columns.
    pub fn header(&self) -> Vec<&str> {
        self.layout
            .columns()
            .iter()
            .map(String::as_str)
            .chain(DERIVED_COLUMNS)
            .collect()
    }
}
