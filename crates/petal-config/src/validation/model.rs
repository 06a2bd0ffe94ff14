//! Model section validation (name, temperature, max_output_tokens).

use crate::schema::PetalConfig;

use super::helpers::{validate_range, validate_range_f64};

/// Validate all model-related constraints.
pub(crate) fn validate_model(errors: &mut Vec<String>, config: &PetalConfig) {
    let name = config.model.name.trim();
    if name.is_empty() {
        errors.push("model.name must not be empty".into());
    } else if name.contains(char::is_whitespace) || name.contains('/') {
        errors.push(format!(
            "model.name = {name:?} must be a bare model id without spaces or slashes"
        ));
    }

    if let Some(temperature) = config.model.temperature {
        validate_range_f64(errors, "model.temperature", temperature, 0.0, 2.0);
    }
    if let Some(max) = config.model.max_output_tokens {
        validate_range(errors, "model.max_output_tokens", max, 1, 65_536);
    }
}
