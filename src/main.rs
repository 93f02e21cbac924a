use cell_rules::{Rule, Seed, SimConfig, Simulation};
use std::process::ExitCode;

fn run_rule(config: &SimConfig) -> Result<(), cell_rules::GridError> {
    let mut sim = Simulation::new(config)?;
    let before = sim.current().total();
    sim.run(config.generations);

    let grid = sim.current();
    if sim.rule().is_life() {
        log::info!(
            "{} after {} generations: {} live cells",
            sim.rule(),
            sim.generation(),
            sim.live_cell_count()
        );
    } else {
        let cells = (grid.width() as i64) * (grid.height() as i64);
        log::info!(
            "{} after {} generations: mean intensity {} -> {}",
            sim.rule(),
            sim.generation(),
            before / cells,
            grid.total() / cells
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match SimConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("Invalid configuration: {}", err);
            return ExitCode::FAILURE;
        }
    };

    // An explicit CELL_RULE runs just that rule; otherwise show all of them.
    let rules: Vec<Rule> = match config.requested_rule {
        Some(rule) => vec![rule],
        None => Rule::ALL.to_vec(),
    };

    for rule in rules {
        let rule_config = SimConfig {
            rule,
            seed: if rule == config.rule { config.seed } else { Seed::for_rule(rule) },
            ..config
        };
        if let Err(err) = run_rule(&rule_config) {
            log::error!("Failed to run {}: {}", rule, err);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
