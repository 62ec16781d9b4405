use indicatif::{ProgressBar, ProgressStyle};

use crate::analysis::efficiency::EfficiencyEngine;
use crate::config::PipelineConfig;
use crate::models::{ColumnLayout, DerivedRow, DerivedTable, EventRow, Skill};

pub struct DerivePipeline {
    engine: EfficiencyEngine,
    config: PipelineConfig,
}

impl DerivePipeline {
    pub fn new(engine: EfficiencyEngine, config: PipelineConfig) -> Self {
        Self { engine, config }
    }

    /// Derive efficiency values for every event row, preserving input order.
    pub fn run(&self, layout: ColumnLayout, events: Vec<EventRow>) -> DerivedTable {
        tracing::info!("Deriving efficiency values for {} rows", events.len());
        if events.is_empty() {
            tracing::warn!("Input contains no event rows");
        }

        let pb = if self.config.show_progress {
            let pb = ProgressBar::new(events.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} rows")
                    .unwrap()
                    .progress_chars("#>-"),
            );
            pb
        } else {
            ProgressBar::hidden()
        };

        let rows: Vec<DerivedRow> = events
            .into_iter()
            .map(|event| {
                let skill = Skill::from_label(layout.skill(&event));
                let efficiency = self.engine.evaluate(&skill, layout.evaluation_code(&event));
                pb.inc(1);
                DerivedRow { event, efficiency }
            })
            .collect();

        pb.finish_and_clear();
        tracing::info!("Derived {} rows", rows.len());

        DerivedTable::new(layout, rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::{CsvIntake, IntakeOptions};

    const SAMPLE: &str = "\
team,player_name,skill,evaluation_code
Home,Ana,Serve, #
Away,Bea,Reception,-
Home,Cruz,Attack,/
Away,Dee,Block,#
";

    fn run_pipeline(content: &str) -> DerivedTable {
        let intake = CsvIntake::new(IntakeOptions::default());
        let (layout, events) = intake.load_str(content).unwrap();
        let pipeline = DerivePipeline::new(
            EfficiencyEngine::new(),
            PipelineConfig {
                show_progress: false,
            },
        );
        pipeline.run(layout, events)
    }

    #[test]
    fn test_derives_in_input_order() {
        let table = run_pipeline(SAMPLE);

        assert_eq!(table.len(), 4);
        let values: Vec<(i8, i8, i8)> = table
            .rows()
            .iter()
            .map(|r| (r.efficiency.pass, r.efficiency.serve, r.efficiency.attack))
            .collect();
        // Serve " # " trims to "#"; Reception "-" is neutral; Attack "/" is
        // a deflection; Block is unrated.
        assert_eq!(values, vec![(0, 1, 0), (0, 0, 0), (0, 0, -1), (0, 0, 0)]);

        let players: Vec<&str> = table
            .rows()
            .iter()
            .map(|r| r.event.values()[1].as_str())
            .collect();
        assert_eq!(players, vec!["Ana", "Bea", "Cruz", "Dee"]);
    }

    #[test]
    fn test_rederiving_passthrough_is_idempotent() {
        let table = run_pipeline(SAMPLE);
        let engine = EfficiencyEngine::new();

        for row in table.rows() {
            let fields: Vec<&str> = row.event.values().iter().map(String::as_str).collect();
            let reprojected = table.layout().project(&fields);
            let skill = Skill::from_label(table.layout().skill(&reprojected));
            let efficiency =
                engine.evaluate(&skill, table.layout().evaluation_code(&reprojected));
            assert_eq!(efficiency, row.efficiency);
        }
    }

    #[test]
    fn test_empty_input_yields_empty_table() {
        let table = run_pipeline("team,skill,evaluation_code\n");

        assert!(table.is_empty());
        assert_eq!(
            table.header(),
            vec![
                "team",
                "skill",
                "evaluation_code",
                "pass_eff_value",
                "serve_eff_value",
                "attack_eff_value"
            ]
        );
    }
}
