use crate::surface::{escape_html, HtmlSurface, Tab};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

pub fn render_index(deployment: &str, active: Tab, surface: &HtmlSurface) -> String {
    let mut content = surface.render_region(active);
    if content.is_empty() {
        content = "<p class=\"empty\">Nothing to do.</p>".to_string();
    }

    fill_template(
        INDEX_HTML,
        &[
            ("DEPLOYMENT", escape_html(deployment)),
            ("TABS", render_tabs(deployment, active)),
            ("CONTENT", content),
        ],
    )
}

/// Substitutes `{{KEY}}` placeholders in one pass. Substituted text is never
/// scanned again, and unknown placeholders are left as they are.
fn fill_template(template: &str, values: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let key = &after[..end];
        match values.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + end + 4]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

fn render_tabs(deployment: &str, active: Tab) -> String {
    let query_value = utf8_percent_encode(deployment, NON_ALPHANUMERIC).to_string();
    Tab::ALL
        .iter()
        .map(|tab| {
            let class = if *tab == active { "tab active" } else { "tab" };
            let label = match tab {
                Tab::Newest => "Newest",
                Tab::Oldest => "Oldest",
                Tab::Tags => "By tag",
            };
            format!(
                "<a class=\"{class}\" href=\"/?deployment={}&amp;tab={}\">{label}</a>",
                query_value,
                tab.as_str()
            )
        })
        .collect()
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>To-Do List</title>
  <style>
    :root {
      --bg: #f4f1ea;
      --ink: #2b2a28;
      --accent: #2f4858;
      --card: #ffffff;
      --muted: #8b857d;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(760px, 100%);
      background: var(--card);
      border-radius: 20px;
      box-shadow: 0 18px 40px rgba(47, 72, 88, 0.14);
      padding: 28px;
      display: grid;
      gap: 20px;
    }

    h1 {
      margin: 0;
      font-size: 2rem;
    }

    .subtitle {
      margin: 4px 0 0;
      color: var(--muted);
    }

    .tabs {
      display: flex;
      gap: 6px;
    }

    .tab {
      padding: 8px 14px;
      border-radius: 999px;
      color: var(--muted);
      text-decoration: none;
      font-weight: 600;
    }

    .tab.active {
      background: var(--accent);
      color: white;
    }

    .list-group {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 8px;
    }

    .list-group-item {
      display: flex;
      align-items: center;
      gap: 10px;
      padding: 12px 14px;
      border: 1px solid rgba(47, 72, 88, 0.1);
      border-radius: 12px;
    }

    .list-item-desc {
      flex: 1;
    }

    .list-item-deadline {
      color: var(--muted);
      font-size: 0.9rem;
    }

    .badge {
      background: rgba(47, 72, 88, 0.12);
      border-radius: 999px;
      padding: 2px 10px;
      font-size: 0.8rem;
    }

    .tag-group h2 {
      margin: 12px 0 8px;
      font-size: 1rem;
    }

    .empty {
      color: var(--muted);
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>To-Do List</h1>
      <p class="subtitle">Deployment {{DEPLOYMENT}}</p>
    </header>
    <nav class="tabs">{{TABS}}</nav>
    <section class="content">{{CONTENT}}</section>
  </main>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ToDoItem;
    use crate::views::{ChronologicalView, RenderInput, TagsView, View};

    #[test]
    fn index_marks_active_tab_and_lists_groups() {
        let items = vec![ToDoItem::new("buy milk").with_id(1).with_tags(["home"])];
        let mut surface = HtmlSurface::new();
        TagsView.render(RenderInput::Items(&items), &mut surface);

        let html = render_index("demo", Tab::Tags, &surface);
        assert!(html.contains("Deployment demo"));
        assert!(html.contains("class=\"tab active\" href=\"/?deployment=demo&amp;tab=tags\""));
        assert!(html.contains("<span class=\"badge\">home</span>"));
        assert!(html.contains("buy milk"));
    }

    #[test]
    fn deployment_placeholders_are_not_expanded() {
        let items = vec![ToDoItem::new("secret entry").with_id(1)];
        let mut surface = HtmlSurface::new();
        ChronologicalView::newest().render(RenderInput::Items(&items), &mut surface);

        let html = render_index("{{CONTENT}}", Tab::Newest, &surface);
        assert_eq!(html.matches("secret entry").count(), 1);
        assert!(html.contains("Deployment {{CONTENT}}"));
        assert!(html.contains("href=\"/?deployment=%7B%7BCONTENT%7D%7D&amp;tab=newest\""));
    }

    #[test]
    fn deployment_is_percent_encoded_in_links() {
        let html = render_index("a b&c", Tab::Oldest, &HtmlSurface::new());
        assert!(html.contains("href=\"/?deployment=a%20b%26c&amp;tab=oldest\""));
        assert!(html.contains("Deployment a b&amp;c"));
    }

    #[test]
    fn template_keeps_unknown_and_unclosed_placeholders() {
        let values = [("A", "x".to_string())];
        assert_eq!(fill_template("{{A}}-{{B}}-{{A", &values), "x-{{B}}-{{A");
    }

    #[test]
    fn empty_region_shows_placeholder() {
        let html = render_index("demo", Tab::Newest, &HtmlSurface::new());
        assert!(html.contains("Nothing to do."));
    }
}
