//! Load a namespace tree from a components directory.
//!
//! # Layout
//!
//! ```text
//! _components/
//! ├── button.html      # component `button`
//! ├── button.css       # its style snippet
//! └── layout/          # namespace `layout`
//!     ├── header.html  # component `layout.header`
//!     └── header.js    # its script snippet
//! ```
//!
//! Templates substitute `{{ key }}` placeholders from the merged data.
//! Strings are inserted verbatim, other values as JSON, missing keys as
//! nothing. Names are lowercased on insertion. Two entries of one directory
//! that lowercase to the same name (a `layout/` directory next to
//! `layout.html`, or `Nav/` next to `nav/`) are a load error.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result, anyhow, bail};
use regex::{Captures, Regex};
use rustc_hash::FxHashMap;
use serde_json::Value;

use crate::component::{Component, Data, Namespace, normalize};
use crate::debug;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{[ \t]*([A-Za-z_][A-Za-z0-9_\-]*)[ \t]*\}\}").unwrap()
});

/// A component backed by a placeholder template.
#[derive(Debug, Clone)]
pub struct TemplateComponent {
    source: String,
}

impl TemplateComponent {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn render(&self, data: &Data) -> String {
        PLACEHOLDER
            .replace_all(&self.source, |caps: &Captures<'_>| {
                match data.get(&caps[1]) {
                    Some(Value::String(s)) => s.clone(),
                    Some(Value::Null) | None => String::new(),
                    Some(other) => other.to_string(),
                }
            })
            .into_owned()
    }
}

/// Load every component under `dir` into a namespace tree.
pub fn load_components(dir: &Path) -> Result<Namespace> {
    if !dir.is_dir() {
        bail!("components directory not found: {}", dir.display());
    }
    load_dir(dir)
}

/// Companion files collected for one component stem.
#[derive(Default)]
struct Parts {
    template: Option<(PathBuf, String)>,
    css: Option<String>,
    js: Option<String>,
}

/// Hidden (`.name`) and private (`_name`) entries are not components.
fn is_ignored(name: &str) -> bool {
    name.starts_with('.') || name.starts_with('_')
}

fn collision(first: &Path, second: &Path) -> anyhow::Error {
    anyhow!(
        "`{}` and `{}` resolve to the same component name",
        first.display(),
        second.display()
    )
}

fn load_dir(dir: &Path) -> Result<Namespace> {
    let mut namespace = Namespace::new();
    let mut namespaces: FxHashMap<String, PathBuf> = FxHashMap::default();
    let mut parts: FxHashMap<String, Parts> = FxHashMap::default();
    // (normalized stem, extension) -> file
    let mut sources: FxHashMap<(String, String), PathBuf> = FxHashMap::default();

    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory '{}'", dir.display()))?;

    for entry in entries.flatten() {
        let path = entry.path();

        if path.is_dir() {
            let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
                continue;
            };
            if is_ignored(name) {
                continue;
            }
            let child = load_dir(&path)?;
            if child.is_empty() {
                continue;
            }
            if let Some(previous) = namespaces.insert(normalize(name), path.clone()) {
                return Err(collision(&previous, &path));
            }
            namespace.insert_namespace(name, child);
            continue;
        }

        let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        if is_ignored(name) || !matches!(ext.as_str(), "html" | "htm" | "css" | "js") {
            continue;
        }

        let key = normalize(name);
        if let Some(previous) = sources.insert((key.clone(), ext.clone()), path.clone()) {
            return Err(collision(&previous, &path));
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read '{}'", path.display()))?;
        let part = parts.entry(key).or_default();
        match ext.as_str() {
            "html" => part.template = Some((path, content)),
            // `.html` wins over `.htm`
            "htm" => {
                part.template.get_or_insert((path, content));
            }
            "css" => part.css = Some(content),
            _ => part.js = Some(content),
        }
    }

    for (name, part) in parts {
        let Some((template_path, template)) = part.template else {
            debug!("loader"; "skip `{}` in {}: no template", name, dir.display());
            continue;
        };
        if let Some(namespace_path) = namespaces.get(&name) {
            return Err(collision(namespace_path, &template_path));
        }

        let template = TemplateComponent::new(template);
        let mut component = Component::new(move |data: &Data| template.render(data));
        if let Some(css) = part.css {
            component = component.with_css(css);
        }
        if let Some(js) = part.js {
            component = component.with_js(js);
        }
        namespace.insert_component(&name, component);
    }

    Ok(namespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::AssetCollector;
    use crate::component::{Entry, Resolver};
    use serde_json::json;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_template_substitution() {
        let template = TemplateComponent::new("<a href=\"{{ url }}\">{{label}}</a>{{ n }}{{ none }}");
        let data = json!({"url": "/about/", "label": "About", "n": 3, "none": null});
        let html = template.render(data.as_object().unwrap());
        assert_eq!(html, "<a href=\"/about/\">About</a>3");
    }

    #[test]
    fn test_missing_placeholder_renders_empty() {
        let template = TemplateComponent::new("[{{ missing }}]");
        assert_eq!(template.render(&Data::new()), "[]");
    }

    #[test]
    fn test_load_nested_tree() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "Button.html", "<button>{{ label }}</button>");
        write(tmp.path(), "Button.css", ".btn{}");
        write(tmp.path(), "layout/header.html", "<header></header>");
        write(tmp.path(), "layout/header.js", "header()");

        let tree = load_components(tmp.path()).unwrap();
        assert_eq!(tree.component_count(), 2);
        assert!(matches!(tree.get("button"), Some(Entry::Component(_))));
        assert!(matches!(tree.get("layout"), Some(Entry::Namespace(_))));

        let global = Data::new();
        let collector = AssetCollector::new();
        let resolver = Resolver::new(&tree, &global, &collector);
        let html = resolver
            .resolve_path("button")
            .unwrap()
            .into_callable()
            .unwrap()
            .call(json!({"label": "Go"}).as_object().unwrap());
        assert_eq!(html, "<button>Go</button>");
        assert_eq!(collector.styles().get("button"), Some(".btn{}"));
    }

    #[test]
    fn test_assets_without_template_are_skipped() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "orphan.css", ".orphan{}");
        write(tmp.path(), "empty/only.js", "x()");

        let tree = load_components(tmp.path()).unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_hidden_and_private_entries_are_skipped() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), ".draft.html", "draft");
        write(tmp.path(), "_partial.html", "partial");
        write(tmp.path(), "card.html", "card");

        let tree = load_components(tmp.path()).unwrap();
        assert_eq!(tree.len(), 1);
        assert!(tree.get("card").is_some());
    }

    #[test]
    fn test_missing_dir_is_error() {
        let tmp = TempDir::new().unwrap();
        let err = load_components(&tmp.path().join("nope")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_template_next_to_namespace_is_error() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "layout/header.html", "<header></header>");
        write(tmp.path(), "layout.html", "<main></main>");

        let err = load_components(tmp.path()).unwrap_err().to_string();
        assert!(err.contains("layout.html"), "{err}");
        assert!(err.contains("same component name"), "{err}");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_namespaces_differing_in_case_are_error() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "Nav/menu.html", "menu");
        write(tmp.path(), "nav/link.html", "link");

        let err = load_components(tmp.path()).unwrap_err().to_string();
        assert!(err.contains("Nav") && err.contains("nav"), "{err}");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_templates_differing_in_case_are_error() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "Button.html", "<b>one</b>");
        write(tmp.path(), "button.html", "<b>two</b>");

        let err = load_components(tmp.path()).unwrap_err().to_string();
        assert!(err.contains("Button.html") && err.contains("button.html"), "{err}");
    }

    #[test]
    fn test_companions_and_htm_fallback_share_a_name() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "Card.html", "<div>html</div>");
        write(tmp.path(), "card.htm", "<div>htm</div>");
        write(tmp.path(), "card.css", ".card{}");
        write(tmp.path(), "empty/.keep.html", "");
        write(tmp.path(), "empty.html", "<p></p>");

        let tree = load_components(tmp.path()).unwrap();
        assert_eq!(tree.component_count(), 2);

        let global = Data::new();
        let collector = AssetCollector::new();
        let html = Resolver::new(&tree, &global, &collector)
            .resolve("card")
            .unwrap()
            .into_callable()
            .unwrap()
            .call(&Data::new());
        assert_eq!(html, "<div>html</div>");
        assert_eq!(collector.styles().get("card"), Some(".card{}"));
    }
}
