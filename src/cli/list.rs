//! `list` command: print the component tree.

use std::io::{self, Write};

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::component::{Entry, Namespace};
use crate::config::SiteConfig;
use crate::loader::load_components;
use crate::log;

/// Load the configured components and print them as a tree.
pub fn list_components(config: &SiteConfig) -> Result<()> {
    let tree = load_components(&config.components.dir)?;
    let mut out = io::stdout().lock();
    for line in tree_lines(&tree) {
        writeln!(out, "{line}").context("Failed to write component list")?;
    }
    log!("list"; "{} component(s)", tree.component_count());
    Ok(())
}

/// One line per entry, indented by depth. Namespaces end with `/`.
pub fn tree_lines(tree: &Namespace) -> Vec<String> {
    let mut lines = Vec::new();
    push_lines(tree, 0, &mut lines);
    lines
}

fn push_lines(namespace: &Namespace, depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    for (name, entry) in namespace.sorted_entries() {
        match entry {
            Entry::Namespace(child) => {
                lines.push(format!("{indent}{}/", name.bold()));
                push_lines(child, depth + 1, lines);
            }
            Entry::Component(component) => {
                let mut line = format!("{indent}{name}");
                if component.css().is_some() {
                    line.push_str(&format!(" {}", "[css]".dimmed()));
                }
                if component.js().is_some() {
                    line.push_str(&format!(" {}", "[js]".dimmed()));
                }
                lines.push(line);
            }
        }
    }
}
