//! Cfg command: prints the resolved configuration as JSON, each value next
//! to the layer that set it.
//!
//! ```json
//! {
//!   "starting_stack": { "value": 1000, "source": "default" },
//!   "tie_rule": { "value": "split", "source": "env" },
//!   ...
//! }
//! ```

use std::io::Write;

use crate::config::ConfigResolved;
use crate::error::CliError;

pub fn handle_cfg_command(resolved: &ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "starting_stack": {
            "value": config.starting_stack,
            "source": sources.starting_stack,
        },
        "min_bet": {
            "value": config.min_bet,
            "source": sources.min_bet,
        },
        "tie_rule": {
            "value": config.tie_rule.as_str(),
            "source": sources.tie_rule,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "player_name": {
            "value": config.player_name,
            "source": sources.player_name,
        },
        "ai": {
            "value": config.ai,
            "source": sources.ai,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::resolve;

    #[test]
    fn test_reports_value_and_source() {
        let resolved = resolve(&|key: &str| match key {
            "HEADSUP_TIE_RULE" => Some("random".to_string()),
            _ => None,
        })
        .unwrap();
        let mut out = Vec::new();
        handle_cfg_command(&resolved, &mut out).unwrap();

        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v["starting_stack"]["value"], 1000);
        assert_eq!(v["starting_stack"]["source"], "default");
        assert_eq!(v["tie_rule"]["value"], "random_awardee");
        assert_eq!(v["tie_rule"]["source"], "env");
        assert!(v["seed"]["value"].is_null());
    }
}
