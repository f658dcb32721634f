use crate::config::ConfigWarning;
use crate::ui::primitives::icon::Icon;

pub fn format_config_warnings(
    warnings: &[ConfigWarning],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let icon = Icon::Warning.colored(supports_color, supports_unicode);
    let mut out = String::new();
    for w in warnings {
        match w.line {
            Some(line) => out.push_str(&format!(
                "{} Unknown config key '{}' in {}:{}\n",
                icon,
                w.key,
                w.file.display(),
                line
            )),
            None => out.push_str(&format!(
                "{} Unknown config key '{}' in {}\n",
                icon,
                w.key,
                w.file.display()
            )),
        }

        if let Some(suggestion) = &w.suggestion {
            out.push_str(&format!("   Did you mean '{}'?\n", suggestion));
        }
    }
    out
}

/// Config warnings go to stderr; under `--json` they are left to the log.
pub fn print_config_warnings(warnings: &[ConfigWarning], json: bool, color: bool, unicode: bool) {
    if json {
        for w in warnings {
            tracing::warn!(key = %w.key, file = %w.file.display(), "unknown config key");
        }
        return;
    }
    eprint!("{}", format_config_warnings(warnings, color, unicode));
}
