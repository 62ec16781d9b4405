use crate::models::{Efficiency, Skill};

/// Evaluation codes scoring +1 and -1 for each rated skill.
///
/// The defaults are the scouting convention used in match exports. Note the
/// "/" code: an ace on serve, but a blocked or deflected ball on attack and
/// an overpass on reception.
#[derive(Debug, Clone)]
pub struct EfficiencyRules {
    pub pass_positive: Vec<String>,
    pub pass_negative: Vec<String>,
    pub serve_positive: Vec<String>,
    pub serve_negative: Vec<String>,
    pub attack_positive: Vec<String>,
    pub attack_negative: Vec<String>,
}

impl Default for EfficiencyRules {
    fn default() -> Self {
        Self {
            pass_positive: codes(&["+", "#"]),
            pass_negative: codes(&["=", "/"]),
            serve_positive: codes(&["#", "+", "/"]),
            serve_negative: codes(&["=", "-"]),
            attack_positive: codes(&["#"]),
            attack_negative: codes(&["=", "/"]),
        }
    }
}

fn codes(list: &[&str]) -> Vec<String> {
    list.iter().map(|c| c.to_string()).collect()
}

pub struct EfficiencyEngine {
    rules: EfficiencyRules,
}

impl EfficiencyEngine {
    pub fn new() -> Self {
        Self {
            rules: EfficiencyRules::default(),
        }
    }

    pub fn with_rules(rules: EfficiencyRules) -> Self {
        Self { rules }
    }

    /// Score one action. The code is expected to be pre-trimmed. Unrated
    /// skills and unrecognized codes score zero everywhere; neither is an
    /// error.
    pub fn evaluate(&self, skill: &Skill, code: &str) -> Efficiency {
        let mut efficiency = Efficiency::default();

        match skill {
            Skill::Reception => {
                efficiency.pass = score(code, &self.rules.pass_positive, &self.rules.pass_negative);
            }
            Skill::Serve => {
                efficiency.serve =
                    score(code, &self.rules.serve_positive, &self.rules.serve_negative);
            }
            Skill::Attack => {
                efficiency.attack =
                    score(code, &self.rules.attack_positive, &self.rules.attack_negative);
            }
            Skill::Other(_) => {}
        }

        efficiency
    }
}

impl Default for EfficiencyEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn score(code: &str, positive: &[String], negative: &[String]) -> i8 {
    if positive.iter().any(|c| c == code) {
        1
    } else if negative.iter().any(|c| c == code) {
        -1
    } else {
        0
    }
}
