//! Version command handler

use anyhow::Result;

use fluxtree::config::load_layered;
use fluxtree::infrastructure::KubectlStatusSource;
use fluxtree::ui::json::emit_event;
use fluxtree::ui::views::version::render_version;

pub fn cmd_version(config_path: Option<&std::path::Path>, json: bool) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    let project_root = std::env::current_dir()?;
    let config = load_layered(config_path, Some(&project_root))?.config;

    let kubectl = KubectlStatusSource::new().with_binary(config.source.kubectl.clone());
    let available = kubectl.check_available();

    if json {
        emit_event(&serde_json::json!({
            "event": "data",
            "command": "version",
            "version": version,
            "kubectl": config.source.kubectl,
            "kubectl_available": available,
        }))?;
        return Ok(());
    }

    let binary = available.then_some(config.source.kubectl.as_str());
    print!("{}", render_version(version, binary));
    Ok(())
}
