//! Display section validation.

use crate::colors::validate_color;
use crate::schema::PetalConfig;

pub(crate) fn validate_display(errors: &mut Vec<String>, config: &PetalConfig) {
    let display = &config.display;
    let colors = [
        ("display.user_color", &display.user_color),
        ("display.assistant_color", &display.assistant_color),
        ("display.title_color", &display.title_color),
        ("display.error_color", &display.error_color),
    ];
    for (name, value) in colors {
        if !validate_color(value) {
            errors.push(format!("{name} = {value:?} is not a valid color"));
        }
    }
}
