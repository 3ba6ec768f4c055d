//! Configuration validation module
//!
//! Rules:
//! - max_sinks >= 1
//! - sink count within max_sinks
//! - sink names non-empty
//! - file sinks carry a non-empty `path` param

use contracts::{ContractError, LogBlueprint, SinkType};

/// Validate a LogBlueprint
///
/// Returns the first error encountered, or Ok(()).
pub fn validate(blueprint: &LogBlueprint) -> Result<(), ContractError> {
    validate_capacity(blueprint)?;
    validate_sinks(blueprint)?;
    Ok(())
}

/// Validate the registry bound
fn validate_capacity(blueprint: &LogBlueprint) -> Result<(), ContractError> {
    if blueprint.max_sinks == 0 {
        return Err(ContractError::config_validation(
            "max_sinks",
            "must be at least 1",
        ));
    }
    if blueprint.sinks.len() > blueprint.max_sinks {
        return Err(ContractError::config_validation(
            "sinks",
            format!(
                "{} sinks configured, max_sinks is {}",
                blueprint.sinks.len(),
                blueprint.max_sinks
            ),
        ));
    }
    Ok(())
}

/// Validate sink entries
fn validate_sinks(blueprint: &LogBlueprint) -> Result<(), ContractError> {
    for (idx, sink) in blueprint.sinks.iter().enumerate() {
        if sink.name.is_empty() {
            return Err(ContractError::config_validation(
                format!("sinks[{idx}].name"),
                "sink name cannot be empty",
            ));
        }
        if sink.sink_type == SinkType::File
            && sink.params.get("path").is_none_or(|p| p.is_empty())
        {
            return Err(ContractError::config_validation(
                format!("sinks[{idx}].params.path"),
                "file sinks require a non-empty `path` param",
            ));
        }
    }
    Ok(())
}
