use crate::display::row::Row;
use crate::error::RenderError;
use minijinja::{Environment, UndefinedBehavior, Value};
use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

pub const DEFAULT_TEMPLATE_PATH: &str = "template.html";

// Registered name; the .html suffix turns on HTML auto-escaping
const TEMPLATE_NAME: &str = "page.html";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub rows: Vec<Row>,
}

impl Page {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    fn to_context(&self) -> Value {
        let rows: Vec<Value> = self.rows.iter().map(Row::to_value).collect();
        let mut ctx = BTreeMap::new();
        ctx.insert("Rows".to_string(), Value::from(rows));
        Value::from(ctx)
    }
}

/// Compiled landing page template.
pub struct PageRenderer {
    env: Environment<'static>,
}

impl std::fmt::Debug for PageRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageRenderer").finish_non_exhaustive()
    }
}

impl PageRenderer {
    pub fn from_file(path: &Path) -> Result<Self, RenderError> {
        let source = fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => RenderError::TemplateNotFound {
                path: path.to_string_lossy().to_string(),
            },
            _ => RenderError::TemplateIo {
                path: path.to_string_lossy().to_string(),
                source,
            },
        })?;

        log::debug!("Loaded template from {}", path.display());
        Self::from_source(source)
    }

    /// Compile a template from memory. Syntax errors surface here.
    pub fn from_source(source: String) -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.add_template_owned(TEMPLATE_NAME.to_string(), source)?;
        Ok(Self { env })
    }

    pub fn render_to_string(&self, page: &Page) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(TEMPLATE_NAME)?;
        Ok(tmpl.render(page.to_context())?)
    }

    pub fn render<W: Write>(&self, page: &Page, out: &mut W) -> Result<(), RenderError> {
        let html = self.render_to_string(page)?;
        out.write_all(html.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::row::TrustedHtml;
    use tempfile::tempdir;

    const TEMPLATE: &str = "{% for row in Rows %}<h2>{{ row.Name }}</h2><img src=\"{{ row.ImageURL }}\">{{ row.Description }}\n{% endfor %}";

    fn row(name: &str, description: &str) -> Row {
        Row {
            name: name.to_string(),
            description: TrustedHtml::new(description),
            image_url: format!("https://guide.app/{}.jpg?w=240&h=160", name),
        }
    }

    #[test]
    fn test_render_rows_in_order() {
        let renderer = PageRenderer::from_source(TEMPLATE.to_string()).unwrap();
        let page = Page::new(vec![row("a", "<p>A</p>"), row("b", "<p>B</p>")]);

        let html = renderer.render_to_string(&page).unwrap();
        let a = html.find("<h2>a</h2>").unwrap();
        let b = html.find("<h2>b</h2>").unwrap();
        assert!(a < b);
        assert_eq!(html.matches("<h2>").count(), 2);
    }

    #[test]
    fn test_description_is_not_escaped() {
        let renderer = PageRenderer::from_source(TEMPLATE.to_string()).unwrap();
        let page = Page::new(vec![row("a", "<p>Fish &amp; <b>chips</b></p>")]);

        let html = renderer.render_to_string(&page).unwrap();
        assert!(html.contains("<p>Fish &amp; <b>chips</b></p>"));
    }

    #[test]
    fn test_name_is_escaped() {
        let renderer = PageRenderer::from_source(TEMPLATE.to_string()).unwrap();
        let page = Page::new(vec![row("<script>", "")]);

        let html = renderer.render_to_string(&page).unwrap();
        assert!(html.contains("<h2>&lt;script&gt;</h2>"));
        assert!(!html.contains("<h2><script>"));
    }

    #[test]
    fn test_render_writes_output() {
        let renderer = PageRenderer::from_source(TEMPLATE.to_string()).unwrap();
        let page = Page::new(vec![row("a", "")]);
        let mut out = Vec::new();

        renderer.render(&page, &mut out).unwrap();
        let html = String::from_utf8(out).unwrap();
        assert!(html.starts_with("<h2>a</h2>"));
    }

    #[test]
    fn test_malformed_template() {
        let result = PageRenderer::from_source("{% for row in Rows %}".to_string());
        assert!(matches!(result, Err(RenderError::Template(_))));
    }

    #[test]
    fn test_unknown_field_is_an_error() {
        let renderer = PageRenderer::from_source("{{ Missing.field }}".to_string()).unwrap();
        let result = renderer.render_to_string(&Page::default());
        assert!(matches!(result, Err(RenderError::Template(_))));
    }

    #[test]
    fn test_template_file_not_found() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let result = PageRenderer::from_file(&temp_dir.path().join("missing.html"));
        assert!(matches!(result, Err(RenderError::TemplateNotFound { .. })));
    }

    #[test]
    fn test_template_from_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("template.html");
        fs::write(&path, TEMPLATE).expect("Failed to write template");

        let renderer = PageRenderer::from_file(&path).unwrap();
        let html = renderer
            .render_to_string(&Page::new(vec![row("x", "")]))
            .unwrap();
        assert!(html.contains("<h2>x</h2>"));
    }

    #[test]
    fn test_bundled_template_compiles() {
        let source = include_str!("../../template.html");
        let renderer = PageRenderer::from_source(source.to_string()).unwrap();
        let html = renderer
            .render_to_string(&Page::new(vec![row("bundled", "<em>hi</em>")]))
            .unwrap();
        assert!(html.contains("bundled"));
        assert!(html.contains("<em>hi</em>"));
    }
}
