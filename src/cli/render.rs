//! `render` command: one render pass over the requested components.

use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::cli::RenderArgs;
use crate::component::Data;
use crate::config::SiteConfig;
use crate::loader::load_components;
use crate::pass::RenderPass;
use crate::writer::write_artifacts;
use crate::{debug, log};

/// Render every path in order, print the output, then write the bundles.
pub fn render_components(args: &RenderArgs, config: &SiteConfig) -> Result<()> {
    let mut out = io::stdout().lock();
    render_into(args, config, &mut out)
}

/// Same as [`render_components`], writing the HTML to `out`.
pub fn render_into(args: &RenderArgs, config: &SiteConfig, out: &mut impl Write) -> Result<()> {
    let tree = load_components(&config.components.dir)?;
    debug!("render"; "loaded {} component(s)", tree.component_count());

    let props = parse_props(args.props.as_deref())?;
    let pass = RenderPass::new(&tree, config.data.clone());

    for path in &args.paths {
        let html = pass
            .render(path, &props)
            .with_context(|| format!("Failed to render `{path}`"))?;
        writeln!(out, "{html}").context("Failed to write rendered output")?;
    }
    out.flush().context("Failed to write rendered output")?;

    let artifacts = pass.finish(&config.components.bundle());
    if args.no_bundle {
        debug!("render"; "skipping {} bundle(s)", artifacts.len());
        return Ok(());
    }
    if artifacts.is_empty() {
        log!("bundle"; "no component assets used");
        return Ok(());
    }

    write_artifacts(&artifacts, &config.build.output)?;
    Ok(())
}

/// Parse `--props`, which must be a JSON object.
fn parse_props(raw: Option<&str>) -> Result<Data> {
    let Some(raw) = raw else {
        return Ok(Data::new());
    };
    match serde_json::from_str::<Value>(raw).context("Invalid --props JSON")? {
        Value::Object(map) => Ok(map),
        other => bail!("--props must be a JSON object, got `{other}`"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn site() -> (TempDir, SiteConfig) {
        let tmp = TempDir::new().unwrap();
        let components = tmp.path().join("_components");
        fs::create_dir_all(components.join("nav")).unwrap();
        fs::write(components.join("button.html"), "<b>{{ label }}</b>").unwrap();
        fs::write(components.join("button.css"), ".btn{}").unwrap();
        fs::write(components.join("nav/menu.html"), "<nav>{{ site }}</nav>").unwrap();
        fs::write(components.join("nav/menu.js"), "menu()").unwrap();

        let mut config = SiteConfig::default();
        config.components.dir = components;
        config.build.output = tmp.path().join("public");
        (tmp, config)
    }

    fn args(paths: &[&str], props: Option<&str>) -> RenderArgs {
        RenderArgs {
            paths: paths.iter().map(|p| p.to_string()).collect(),
            props: props.map(str::to_string),
            no_bundle: false,
        }
    }

    #[test]
    fn test_parse_props() {
        assert!(parse_props(None).unwrap().is_empty());
        assert_eq!(parse_props(Some(r#"{"a":1}"#)).unwrap()["a"], 1);
        assert!(parse_props(Some("[1,2]")).is_err());
        assert!(parse_props(Some("{oops")).is_err());
    }

    #[test]
    fn test_render_writes_used_bundles_only() {
        let (tmp, config) = site();
        render_components(&args(&["Button"], Some(r#"{"label":"Hi"}"#)), &config).unwrap();

        let out = tmp.path().join("public");
        assert_eq!(fs::read_to_string(out.join("components.css")).unwrap(), ".btn{}");
        assert!(!out.join("components.js").exists());
    }

    #[test]
    fn test_render_both_bundles() {
        let (tmp, mut config) = site();
        config
            .data
            .insert("site".into(), Value::String("blog".into()));
        render_components(&args(&["nav.menu", "button", "NAV.MENU"], None), &config).unwrap();

        let out = tmp.path().join("public");
        assert_eq!(fs::read_to_string(out.join("components.css")).unwrap(), ".btn{}");
        assert_eq!(fs::read_to_string(out.join("components.js")).unwrap(), "menu()");
    }

    #[test]
    fn test_render_missing_component_fails() {
        let (tmp, config) = site();
        let err = render_components(&args(&["nav.Missing"], None), &config).unwrap_err();
        assert!(format!("{err:#}").contains("component not found: Missing"));
        assert!(!tmp.path().join("public").exists());
    }

    #[test]
    fn test_no_bundle_skips_writing() {
        let (tmp, config) = site();
        let mut render_args = args(&["button"], None);
        render_args.no_bundle = true;
        render_components(&render_args, &config).unwrap();
        assert!(!tmp.path().join("public").exists());
    }

    #[test]
    fn test_output_holds_only_html() {
        let (tmp, config) = site();
        let mut out = Vec::new();
        render_into(&args(&["button", "nav.menu"], Some(r#"{"label":"Hi"}"#)), &config, &mut out)
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "<b>Hi</b>\n<nav></nav>\n");
        assert!(tmp.path().join("public/components.css").exists());
    }
}
