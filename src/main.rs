use anyhow::Context;
use clap::{Parser, Subcommand};
use std::collections::HashMap;

use rulekit_rs::loader::RuleSetLoader;
use rulekit_rs::rule::{combine_rules, create_rule, evaluate_rule, print_ast, RuleValue};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a rule and evaluate it against a JSON record
    Eval {
        /// The rule string to parse
        #[arg(short, long)]
        rule: String,

        /// JSON object mapping field names to values
        #[arg(short, long, default_value = "{}")]
        data: String,
    },
    /// Parse a rule and print its AST
    Ast {
        /// The rule string to parse
        #[arg(short, long)]
        rule: String,
    },
    /// Evaluate a YAML rule-set file against its records
    Check {
        /// Path to the rule-set file
        #[arg(short, long)]
        file: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Eval { rule, data } => {
            let record: HashMap<String, RuleValue> = serde_json::from_str(&data)
                .context("data must be a JSON object of name -> int/string/bool")?;

            let tree = create_rule(&rule)?;
            let result = evaluate_rule(&tree, &record)?;
            println!("{}", result);
        }
        Commands::Ast { rule } => {
            let tree = create_rule(&rule)?;
            print_ast(&tree);
        }
        Commands::Check { file } => {
            let loader = RuleSetLoader::new();
            let set = loader
                .load_rule_set(&file)
                .with_context(|| format!("failed to load rule set from {}", file))?;

            log::info!(
                "loaded rule set '{}' with {} rules",
                set.name,
                set.rules.len()
            );

            let mut trees = Vec::new();
            for rule in &set.rules {
                trees.push(
                    create_rule(rule).with_context(|| format!("failed to parse rule: {}", rule))?,
                );
            }

            let combined = combine_rules(trees).context("rule set contains no rules")?;

            println!("AST for combined rule:");
            print_ast(&combined);

            for (idx, record) in set.records.iter().enumerate() {
                let result = evaluate_rule(&combined, record)?;
                println!("record {}: {}", idx + 1, result);
            }
        }
    }

    Ok(())
}
