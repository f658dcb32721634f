use crate::error::FluxtreeError;
use crate::ui::json::events::ErrorEvent;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Suggested next step for an error, if there is an obvious one.
pub fn fix_hint(err: &FluxtreeError) -> Option<String> {
    match err {
        FluxtreeError::InputUnavailable { source_name, .. } if source_name == "stdin" => {
            Some("Pipe a captured snapshot into `fluxtree tree --input -`.".to_string())
        }
        FluxtreeError::InputUnavailable { source_name, .. } if source_name.contains(" get ") => {
            Some(
                "Check that kubectl is installed and the cluster is reachable, \
                 or set FLUXTREE_KUBECTL / `[source] kubectl` to its path."
                    .to_string(),
            )
        }
        FluxtreeError::InputUnavailable { .. } => {
            Some("Check that the snapshot file exists and is readable.".to_string())
        }
        FluxtreeError::MalformedInput { .. } => Some(
            "Capture the snapshot with `kubectl get kustomizations -o json` \
             or provide a list of {name, ready, message, dependencies} records."
                .to_string(),
        ),
        FluxtreeError::DuplicateNode { .. } => {
            Some("Use --all-namespaces so names are qualified by namespace.".to_string())
        }
        FluxtreeError::CycleInDependencies { .. } => {
            Some("Remove one of the dependsOn entries that close the loop.".to_string())
        }
        FluxtreeError::InvalidConfig { .. } => {
            Some("Fix the config file or pass --config with a valid file.".to_string())
        }
        _ => None,
    }
}

pub fn format_error(err: &anyhow::Error) -> String {
    let caps = crate::ui::terminal::detect_capabilities();
    format_error_with(err, caps.supports_color, caps.supports_unicode)
}

fn format_error_with(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let icon = Icon::Failed.colored(supports_color, supports_unicode);
    let label = ColoredText::error("ERROR").bold().render(supports_color);
    let mut out = format!("{} {} {}\n", icon, label, err);

    if let Some(hint) = err.downcast_ref::<FluxtreeError>().and_then(fix_hint) {
        out.push_str(&format!(
            "  {} {}\n",
            ColoredText::dim("FIX:").render(supports_color),
            hint
        ));
    }
    out
}

/// True when the error comes from stdout being closed by the reader,
/// as in `fluxtree tree | head -1`.
pub fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        let io = cause.downcast_ref::<std::io::Error>().or_else(|| {
            match cause.downcast_ref::<FluxtreeError>() {
                Some(FluxtreeError::Io(io)) => Some(io),
                _ => None,
            }
        });
        io.is_some_and(|io| io.kind() == std::io::ErrorKind::BrokenPipe)
    })
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let fluxtree = err.downcast_ref::<FluxtreeError>();
        let code = fluxtree.map(FluxtreeError::code).unwrap_or("error");
        let event = ErrorEvent::new("fluxtree", code, err.to_string())
            .with_help(fluxtree.and_then(fix_hint));
        let _ = crate::ui::json::emit_event(&event);
        return;
    }

    eprint!("{}", format_error(err));
}
