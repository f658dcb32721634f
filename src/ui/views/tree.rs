//! Dependency tree view
//!
//! Walks the forest depth-first from each root, in snapshot order, and writes
//! one line per visited node:
//!
//! ```text
//! ● A
//! ├── ● B
//! │   └── ✗ D
//! └── ◌ C
//! ```
//!
//! Lines are written as the walk proceeds; nothing is buffered beyond what the
//! writer itself does.

use std::io::{self, Write};

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::domain::entities::Node;
use crate::domain::services::DependencyForest;
use crate::domain::value_objects::StatusClass;
use crate::ui::json::events::NodeEvent;
use crate::ui::json::write_typed_event;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{truncate_end, ColoredText};
use crate::ui::theme;

const MIN_MESSAGE_WIDTH: usize = 24;

/// Where a node sits among its siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Root,
    Middle,
    Last,
}

#[derive(Debug, Clone, Copy)]
struct Connectors {
    branch: &'static str,
    last: &'static str,
    pipe: &'static str,
    gap: &'static str,
}

impl Connectors {
    fn new(supports_unicode: bool) -> Self {
        if supports_unicode {
            Self {
                branch: theme::tree::BRANCH,
                last: theme::tree::LAST,
                pipe: theme::tree::PIPE,
                gap: theme::tree::GAP,
            }
        } else {
            Self {
                branch: theme::tree_ascii::BRANCH,
                last: theme::tree_ascii::LAST,
                pipe: theme::tree_ascii::PIPE,
                gap: theme::tree_ascii::GAP,
            }
        }
    }

    fn connector(&self, position: Position) -> &'static str {
        match position {
            Position::Root => "",
            Position::Middle => self.branch,
            Position::Last => self.last,
        }
    }

    /// Segment appended to the prefix handed down to a node's children.
    fn continuation(&self, position: Position) -> &'static str {
        match position {
            Position::Root => "",
            Position::Middle => self.pipe,
            Position::Last => self.gap,
        }
    }
}

/// One step of the walk.
#[derive(Debug, Clone, Copy)]
pub struct Visit<'a> {
    pub node: &'a Node,
    pub parent: Option<&'a Node>,
    pub depth: usize,
    pub position: Position,
    pub prefix: &'a str,
    pub detached: bool,
}

/// Counts of rendered lines per status class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    pub nodes: usize,
    pub healthy: usize,
    pub blocked: usize,
    pub failed: usize,
    pub detached: usize,
}

impl TreeStats {
    fn record(&mut self, visit: &Visit<'_>) {
        self.nodes += 1;
        match visit.node.status() {
            StatusClass::Healthy => self.healthy += 1,
            StatusClass::Blocked => self.blocked += 1,
            StatusClass::Failed => self.failed += 1,
        }
        if visit.detached {
            self.detached += 1;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeOptions {
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub show_messages: bool,
    pub show_detached: bool,
    /// Terminal width used to truncate messages
    pub width: usize,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            supports_color: false,
            supports_unicode: true,
            show_messages: false,
            show_detached: true,
            width: 80,
        }
    }
}

pub struct TreeView<'f> {
    forest: &'f DependencyForest,
    options: TreeOptions,
}

impl<'f> TreeView<'f> {
    pub fn new(forest: &'f DependencyForest) -> Self {
        Self {
            forest,
            options: TreeOptions::default(),
        }
    }

    pub fn with_options(mut self, options: TreeOptions) -> Self {
        self.options = options;
        self
    }

    /// Walk every root, then every detached root when enabled.
    ///
    /// `on_detached` runs once before the first detached root.
    pub fn walk(
        &self,
        visit: &mut dyn FnMut(&Visit<'_>) -> io::Result<()>,
        on_detached: &mut dyn FnMut() -> io::Result<()>,
    ) -> io::Result<()> {
        let connectors = Connectors::new(self.options.supports_unicode);
        let mut prefix = String::new();
        let mut path: Vec<&str> = Vec::new();

        for root in self.forest.roots() {
            self.walk_node(
                root,
                None,
                Position::Root,
                false,
                &connectors,
                &mut prefix,
                &mut path,
                visit,
            )?;
        }

        if !self.options.show_detached {
            return Ok(());
        }

        let detached = self.forest.detached_roots();
        if !detached.is_empty() {
            on_detached()?;
        }
        for root in detached {
            self.walk_node(
                root,
                None,
                Position::Root,
                true,
                &connectors,
                &mut prefix,
                &mut path,
                visit,
            )?;
        }
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn walk_node<'p>(
        &self,
        node: &'f Node,
        parent: Option<&'f Node>,
        position: Position,
        detached: bool,
        connectors: &Connectors,
        prefix: &mut String,
        path: &mut Vec<&'p str>,
        visit: &mut dyn FnMut(&Visit<'_>) -> io::Result<()>,
    ) -> io::Result<()>
    where
        'f: 'p,
    {
        visit(&Visit {
            node,
            parent,
            depth: path.len(),
            position,
            prefix: prefix.as_str(),
            detached,
        })?;

        // Never descend into a node that is already one of its own ancestors.
        if path.contains(&node.name()) {
            tracing::warn!(node = node.name(), "dependency cycle, not descending");
            return Ok(());
        }

        let restore = prefix.len();
        prefix.push_str(connectors.continuation(position));
        path.push(node.name());

        let children = self.forest.children_of(node.name());
        let count = children.len();
        for (i, child) in children.into_iter().enumerate() {
            let child_position = if i + 1 == count {
                Position::Last
            } else {
                Position::Middle
            };
            self.walk_node(
                child,
                Some(node),
                child_position,
                detached,
                connectors,
                prefix,
                path,
                visit,
            )?;
        }

        path.pop();
        prefix.truncate(restore);
        Ok(())
    }

    /// Write the annotated text tree.
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<TreeStats> {
        let opts = self.options;
        let connectors = Connectors::new(opts.supports_unicode);
        let mut stats = TreeStats::default();
        let out = std::cell::RefCell::new(out);

        self.walk(
            &mut |v: &Visit<'_>| {
                stats.record(v);
                let line = self.format_line(v, &connectors);
                writeln!(out.borrow_mut(), "{}", line)
            },
            &mut || {
                let header = format!(
                    "{} {}",
                    Icon::Warning.colored(opts.supports_color, opts.supports_unicode),
                    ColoredText::warning("Detached (dependencies not found):")
                        .render(opts.supports_color)
                );
                let mut out = out.borrow_mut();
                writeln!(out)?;
                writeln!(out, "{}", header)
            },
        )?;

        Ok(stats)
    }

    /// Write one NDJSON `node` event per tree line.
    pub fn write_json<W: Write>(&self, out: &mut W) -> io::Result<TreeStats> {
        let mut stats = TreeStats::default();
        self.walk(
            &mut |v: &Visit<'_>| {
                stats.record(v);
                write_typed_event(&mut *out, &NodeEvent::new(v.node, v.parent, v.depth, v.detached))
            },
            &mut || Ok(()),
        )?;
        Ok(stats)
    }

    /// Render the text tree into a string.
    pub fn render(&self) -> io::Result<String> {
        let mut buf = Vec::new();
        self.write_text(&mut buf)?;
        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn format_line(&self, v: &Visit<'_>, connectors: &Connectors) -> String {
        let opts = self.options;
        let node = v.node;
        let connector = connectors.connector(v.position);
        let icon = Icon::from(node.status());

        let mut line = format!(
            "{}{}{} {}",
            v.prefix,
            connector,
            icon.colored(opts.supports_color, opts.supports_unicode),
            node.name()
        );

        let mut suffix = Vec::new();
        if v.detached && v.depth == 0 {
            suffix.push(format!("(missing: {})", node.dependencies().join(", ")));
        }
        if opts.show_messages && node.status() != StatusClass::Healthy && !node.message().is_empty() {
            let used = v.prefix.width()
                + connector.width()
                + icon.render(opts.supports_unicode).width()
                + 1
                + node.name().width()
                + suffix.iter().map(|s| s.width() + 2).sum::<usize>()
                + 2;
            let available = opts.width.saturating_sub(used).max(MIN_MESSAGE_WIDTH);
            let message = node.message().replace(['\n', '\r'], " ");
            suffix.push(truncate_end(message.trim(), available));
        }

        for part in suffix {
            line.push_str("  ");
            line.push_str(&ColoredText::dim(part).render(opts.supports_color));
        }
        line
    }
}
