// Demonstration: play 2v2 soccer sessions and evaluate a baseline policy.
//
// Run from the repo root:
//   cargo run --example soccer_demo -- --policy chase --sessions 5 --ticks 5000

use std::env;

use soccer_rl::{
    ChaseBallPolicy, EvaluationMetrics, Policy, Position, RandomPolicy, SoccerConfig,
    SoccerEnvironment, Team, Vec3,
};

fn main() {
    let args: Vec<String> = env::args().collect();
    let policy_name = arg_value(&args, "--policy").unwrap_or("chase");
    let sessions: usize = arg_value(&args, "--sessions")
        .and_then(|s| s.parse().ok())
        .unwrap_or(5);
    let ticks: u32 = arg_value(&args, "--ticks")
        .and_then(|s| s.parse().ok())
        .unwrap_or(5000);
    let seed: u64 = arg_value(&args, "--seed")
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    let config = SoccerConfig {
        max_environment_steps: 2000,
        ..SoccerConfig::default()
    };
    let mut env = match SoccerEnvironment::new(config, seed) {
        Ok(env) => env,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(2);
        }
    };
    env.add_agent(Team::Blue, Position::Striker, Vec3::new(-4.0, 0.5, 2.0));
    env.add_agent(Team::Blue, Position::Goalie, Vec3::new(-14.0, 0.5, 0.0));
    env.add_agent(Team::Purple, Position::Striker, Vec3::new(4.0, 0.5, -2.0));
    env.add_agent(Team::Purple, Position::Defender, Vec3::new(10.0, 0.5, 0.0));

    let mut policy: Box<dyn Policy> = match policy_name {
        "random" => Box::new(RandomPolicy::with_seed(seed)),
        "chase" => Box::new(ChaseBallPolicy::default()),
        other => {
            eprintln!("Unknown --policy '{}'; expected 'chase' or 'random'.", other);
            std::process::exit(2);
        }
    };

    match EvaluationMetrics::evaluate(&mut env, policy.as_mut(), sessions, ticks) {
        Ok(metrics) => {
            println!("Policy: {}", policy.name());
            println!("{}", metrics);
            println!("Last session: {}", env.context().scoreboard);
            println!("Locomotion blends: {:?}", env.locomotion_blends());
        }
        Err(e) => {
            eprintln!("Evaluation failed: {}", e);
            std::process::exit(1);
        }
    }
}

fn arg_value<'a>(args: &'a [String], key: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}
