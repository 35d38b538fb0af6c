//! Simulation report generation.

use serde::Serialize;
use std::collections::BTreeMap;

/// Statistics for a single simulated character.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunStats {
    pub final_level: u32,
    pub final_zone: String,
    pub total_ticks: u64,
    pub total_kills: u64,
    pub total_deaths: u64,
    pub total_exp: u64,
    pub total_gold: u64,
    pub highest_damage: u32,
    pub loot_items: u64,
    pub reached_target: bool,
    /// Tick at which each level after the first was reached.
    pub level_up_ticks: Vec<u64>,
    pub zone_kills: BTreeMap<String, u64>,
    pub zone_deaths: BTreeMap<String, u64>,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_completed: u32,
    pub runs_timed_out: u32,

    // Aggregated stats
    pub avg_final_level: f64,
    pub avg_total_kills: f64,
    pub avg_total_deaths: f64,
    pub avg_ticks_to_complete: f64,
    pub avg_gold: f64,
    pub avg_loot_items: f64,
    pub avg_highest_damage: f64,

    // Distribution data
    pub level_distribution: BTreeMap<u32, u32>,
    pub zone_distribution: BTreeMap<String, u32>,
    pub death_distribution: Vec<u64>,

    // Per-zone analysis
    pub avg_kills_per_zone: BTreeMap<String, f64>,
    pub avg_deaths_per_zone: BTreeMap<String, f64>,

    /// Average tick at which level N+2 was reached, over runs that got there.
    pub avg_level_up_ticks: Vec<f64>,

    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

fn average<I: Iterator<Item = f64>>(values: I, count: u32) -> f64 {
    if count == 0 {
        return 0.0;
    }
    values.sum::<f64>() / count as f64
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, max_ticks: u64) -> Self {
        let num_runs = runs.len() as u32;
        let runs_completed = runs.iter().filter(|r| r.reached_target).count() as u32;
        let runs_timed_out = runs
            .iter()
            .filter(|r| !r.reached_target && r.total_ticks >= max_ticks)
            .count() as u32;

        let avg_final_level = average(runs.iter().map(|r| r.final_level as f64), num_runs);
        let avg_total_kills = average(runs.iter().map(|r| r.total_kills as f64), num_runs);
        let avg_total_deaths = average(runs.iter().map(|r| r.total_deaths as f64), num_runs);
        let avg_ticks_to_complete = average(
            runs.iter()
                .filter(|r| r.reached_target)
                .map(|r| r.total_ticks as f64),
            runs_completed,
        );
        let avg_gold = average(runs.iter().map(|r| r.total_gold as f64), num_runs);
        let avg_loot_items = average(runs.iter().map(|r| r.loot_items as f64), num_runs);
        let avg_highest_damage = average(runs.iter().map(|r| r.highest_damage as f64), num_runs);

        let mut level_distribution = BTreeMap::new();
        let mut zone_distribution = BTreeMap::new();
        let mut kills_per_zone: BTreeMap<String, u64> = BTreeMap::new();
        let mut deaths_per_zone: BTreeMap<String, u64> = BTreeMap::new();
        for run in &runs {
            *level_distribution.entry(run.final_level).or_insert(0) += 1;
            *zone_distribution.entry(run.final_zone.clone()).or_insert(0) += 1;
            for (zone, kills) in &run.zone_kills {
                *kills_per_zone.entry(zone.clone()).or_insert(0) += kills;
            }
            for (zone, deaths) in &run.zone_deaths {
                *deaths_per_zone.entry(zone.clone()).or_insert(0) += deaths;
            }
        }
        let per_run = |totals: BTreeMap<String, u64>| -> BTreeMap<String, f64> {
            totals
                .into_iter()
                .map(|(zone, total)| (zone, average(std::iter::once(total as f64), num_runs)))
                .collect()
        };

        let death_distribution: Vec<u64> = runs.iter().map(|r| r.total_deaths).collect();

        let max_levels = runs.iter().map(|r| r.level_up_ticks.len()).max().unwrap_or(0);
        let avg_level_up_ticks = (0..max_levels)
            .map(|i| {
                let reached: Vec<u64> = runs
                    .iter()
                    .filter_map(|r| r.level_up_ticks.get(i).copied())
                    .collect();
                average(reached.iter().map(|t| *t as f64), reached.len() as u32)
            })
            .collect();

        Self {
            num_runs,
            runs_completed,
            runs_timed_out,
            avg_final_level,
            avg_total_kills,
            avg_total_deaths,
            avg_ticks_to_complete,
            avg_gold,
            avg_loot_items,
            avg_highest_damage,
            level_distribution,
            zone_distribution,
            death_distribution,
            avg_kills_per_zone: per_run(kills_per_zone),
            avg_deaths_per_zone: per_run(deaths_per_zone),
            avg_level_up_ticks,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} completed, {} timed out\n\n",
            self.num_runs, self.runs_completed, self.runs_timed_out
        ));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Final Level:     {:.1}\n", self.avg_final_level));
        report.push_str(&format!("  Avg Total Kills:     {:.0}\n", self.avg_total_kills));
        report.push_str(&format!("  Avg Total Deaths:    {:.1}\n", self.avg_total_deaths));
        report.push_str(&format!(
            "  Avg Ticks to Target: {:.0} ({:.1} min at 1x)\n\n",
            self.avg_ticks_to_complete,
            self.avg_ticks_to_complete * 1.5 / 60.0
        ));

        report.push_str("── INCOME ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Gold:            {:.0}\n", self.avg_gold));
        report.push_str(&format!("  Avg Loot Items:      {:.0}\n", self.avg_loot_items));
        report.push_str(&format!("  Avg Highest Hit:     {:.0}\n\n", self.avg_highest_damage));

        report.push_str("── FINAL ZONE ───────────────────────────────────────────────────\n");
        for (zone, count) in &self.zone_distribution {
            let pct = average(std::iter::once(*count as f64 * 100.0), self.num_runs);
            let bar = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  {:<16} {:>5.1}% {}\n", zone, pct, bar));
        }
        report.push('\n');

        report.push_str("── PER-ZONE BREAKDOWN ───────────────────────────────────────────\n");
        report.push_str("  Zone              Kills    Deaths   Deaths/Kill\n");
        for (zone, kills) in &self.avg_kills_per_zone {
            let deaths = self.avg_deaths_per_zone.get(zone).copied().unwrap_or(0.0);
            let deaths_per_kill = if *kills > 0.0 { deaths / kills } else { 0.0 };
            report.push_str(&format!(
                "  {:<16} {:6.0}   {:6.1}   {:.3}\n",
                zone, kills, deaths, deaths_per_kill
            ));
        }
        report.push('\n');

        report.push_str("── DEATH ANALYSIS ───────────────────────────────────────────────\n");
        let mut sorted = self.death_distribution.clone();
        sorted.sort_unstable();
        let min_deaths = sorted.first().copied().unwrap_or(0);
        let max_deaths = sorted.last().copied().unwrap_or(0);
        let median_deaths = sorted.get(sorted.len() / 2).copied().unwrap_or(0);
        report.push_str(&format!("  Min Deaths:    {}\n", min_deaths));
        report.push_str(&format!("  Median Deaths: {}\n", median_deaths));
        report.push_str(&format!("  Max Deaths:    {}\n\n", max_deaths));

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        let completion_rate = average(
            std::iter::once(self.runs_completed as f64 * 100.0),
            self.num_runs,
        );
        let death_rating = if self.avg_total_deaths < 1.0 {
            "TOO EASY - Characters rarely die"
        } else if self.avg_total_deaths < 5.0 {
            "GOOD - Challenging but fair"
        } else if self.avg_total_deaths < 20.0 {
            "HARD - Many deaths but completable"
        } else {
            "TOO HARD - Excessive deaths"
        };
        report.push_str(&format!("  Completion Rate: {:.1}%\n", completion_rate));
        report.push_str(&format!("  Death Rating:    {}\n", death_rating));

        for (zone, kills) in &self.avg_kills_per_zone {
            let deaths = self.avg_deaths_per_zone.get(zone).copied().unwrap_or(0.0);
            if *kills > 0.0 && deaths / kills > 0.1 {
                report.push_str(&format!(
                    "  ⚠️  {} has a high death rate ({:.1}% per fight)\n",
                    zone,
                    deaths / kills * 100.0
                ));
            }
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");
        report
    }

    /// Average tick at which each level was reached.
    pub fn level_curve_text(&self) -> String {
        let mut report = String::new();
        report.push_str("── LEVEL CURVE ──────────────────────────────────────────────────\n");
        report.push_str("  Level    Avg Tick    Ticks Since Previous\n");
        let mut previous = 0.0;
        for (i, tick) in self.avg_level_up_ticks.iter().enumerate() {
            report.push_str(&format!(
                "  {:5}    {:8.0}    {:8.0}\n",
                i + 2,
                tick,
                tick - previous
            ));
            previous = *tick;
        }
        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(final_level: u32, deaths: u64, reached_target: bool, level_up_ticks: Vec<u64>) -> RunStats {
        RunStats {
            final_level,
            final_zone: "elwynn_forest".to_string(),
            total_ticks: 1_000,
            total_kills: 40,
            total_deaths: deaths,
            total_exp: 1_200,
            total_gold: 200,
            highest_damage: 60,
            loot_items: 30,
            reached_target,
            level_up_ticks,
            zone_kills: BTreeMap::from([("elwynn_forest".to_string(), 40)]),
            zone_deaths: BTreeMap::from([("elwynn_forest".to_string(), deaths)]),
        }
    }

    #[test]
    fn test_report_generation() {
        let runs = vec![
            run(5, 2, true, vec![100, 250, 500, 900]),
            run(4, 4, false, vec![120, 300, 640]),
        ];
        let report = SimReport::from_runs(runs, 1_000);

        assert_eq!(report.num_runs, 2);
        assert_eq!(report.runs_completed, 1);
        assert_eq!(report.runs_timed_out, 1);
        assert!((report.avg_final_level - 4.5).abs() < 1e-9);
        assert!((report.avg_total_deaths - 3.0).abs() < 1e-9);
        assert_eq!(report.avg_level_up_ticks, vec![110.0, 275.0, 570.0, 900.0]);
        assert_eq!(report.avg_kills_per_zone["elwynn_forest"], 40.0);
    }

    #[test]
    fn test_text_and_json_render() {
        let report = SimReport::from_runs(vec![run(3, 0, true, vec![10, 30])], 1_000);
        let text = report.to_text();
        assert!(text.contains("SIMULATION REPORT"));
        assert!(text.contains("elwynn_forest"));
        assert!(report.level_curve_text().contains("Level"));
        let json = report.to_json().unwrap();
        assert!(json.contains("\"avg_final_level\""));
        assert!(!json.contains("run_stats"));
    }

    #[test]
    fn test_empty_report() {
        let report = SimReport::from_runs(vec![], 1_000);
        assert_eq!(report.avg_final_level, 0.0);
        assert!(report.to_text().contains("Runs: 0 total"));
    }
}
