//! Tree command handler

use std::io::Write;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use fluxtree::config::load_layered;
use fluxtree::presentation::factory::create_tree_use_case;
use fluxtree::presentation::{ColorWhen, TreeArgs};
use fluxtree::ui::context::UiContext;
use fluxtree::ui::json::events::{CompleteEvent, StartEvent};
use fluxtree::ui::json::write_typed_event;
use fluxtree::ui::output::print_config_warnings;
use fluxtree::ui::primitives::text::ColoredText;
use fluxtree::ui::views::tree::{TreeOptions, TreeView};
use fluxtree::StatusSource;

pub fn cmd_tree(
    args: &TreeArgs,
    config_path: Option<&Path>,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let started = Instant::now();
    let project_root = std::env::current_dir()?;
    let loaded = load_layered(config_path, Some(&project_root))?;
    let config = loaded.config;
    let ui = UiContext::new(json, verbose, color, &config);
    print_config_warnings(&loaded.warnings, json, ui.color, ui.unicode);

    let use_case = create_tree_use_case(args, &config);
    let source_name = use_case.source().describe();
    let forest = use_case.execute()?;

    let view = TreeView::new(&forest).with_options(TreeOptions {
        supports_color: ui.color,
        supports_unicode: ui.unicode,
        show_messages: args.messages || config.tree.show_messages,
        show_detached: !args.no_detached && config.tree.show_detached,
        width: usize::from(ui.caps.width),
    });

    let mut out = std::io::stdout().lock();
    if json {
        write_typed_event(&mut out, &StartEvent::new("tree").with_source(source_name))?;
        let stats = view.write_json(&mut out)?;
        write_typed_event(
            &mut out,
            &CompleteEvent::success("tree")
                .with_duration(started.elapsed().as_millis() as u64)
                .with_summary(stats),
        )?;
        out.flush()?;
        return Ok(());
    }

    let stats = view.write_text(&mut out)?;
    out.flush()?;

    if stats.nodes == 0 {
        let message = if forest.is_empty() {
            format!("No resources found in {}", source_name)
        } else {
            format!("No root resources found in {}", source_name)
        };
        eprintln!("{}", ColoredText::warning(message).render(ui.color));
    }
    Ok(())
}
