use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// The three list regions, one per tab.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Newest,
    Oldest,
    Tags,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Newest, Tab::Oldest, Tab::Tags];

    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Newest => "newest",
            Tab::Oldest => "oldest",
            Tab::Tags => "tags",
        }
    }
}

/// Display data for one list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryNode {
    pub id: Option<u64>,
    pub description: String,
    pub badges: Vec<String>,
    pub deadline_label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeStyle {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub style: NoticeStyle,
    pub message: String,
}

impl Notice {
    pub fn new(style: NoticeStyle, message: impl Into<String>) -> Self {
        Self {
            style,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Modal {
    Add,
    Edit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Control {
    AddButton,
    RemoveButton,
    EditButton,
    AddForm,
    EditForm,
}

/// Raw values of the add/edit form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub description: String,
    pub tags: String,
    pub deadline: String,
}

/// Rendering port the views draw on.
pub trait Surface {
    fn clear(&mut self, tab: Tab);

    fn append_group(&mut self, tab: Tab, label: &str);

    /// Appends to the named group, or to the region itself when `group` is
    /// `None`.
    fn append_entry(&mut self, tab: Tab, group: Option<&str>, entry: EntryNode);

    fn show_toast(&mut self, notice: &Notice);

    fn show_modal(&mut self, modal: Modal, prefill: Option<&FormFields>);

    fn hide_modal(&mut self, modal: Modal);

    fn set_enabled(&mut self, control: Control, enabled: bool);

    fn checked_ids(&self, tab: Tab) -> Vec<u64>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    pub entries: Vec<EntryNode>,
    pub groups: Vec<(String, Vec<EntryNode>)>,
}

/// In-memory surface that keeps what was drawn and renders it as HTML.
#[derive(Debug, Clone, Default)]
pub struct HtmlSurface {
    regions: BTreeMap<Tab, Region>,
    checked: BTreeMap<Tab, Vec<u64>>,
    toasts: Vec<Notice>,
    open_modals: BTreeMap<Modal, Option<FormFields>>,
    disabled: BTreeSet<Control>,
}

impl HtmlSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(&self, tab: Tab) -> Option<&Region> {
        self.regions.get(&tab)
    }

    pub fn entries(&self, tab: Tab) -> &[EntryNode] {
        self.regions
            .get(&tab)
            .map(|region| region.entries.as_slice())
            .unwrap_or_default()
    }

    pub fn group(&self, tab: Tab, label: &str) -> Option<&[EntryNode]> {
        self.regions.get(&tab)?.groups.iter().find_map(|(name, entries)| {
            (name == label).then_some(entries.as_slice())
        })
    }

    /// Marks entries as checked, as a user ticking their boxes would.
    pub fn set_checked(&mut self, tab: Tab, ids: impl IntoIterator<Item = u64>) {
        self.checked.insert(tab, ids.into_iter().collect());
    }

    pub fn toasts(&self) -> &[Notice] {
        &self.toasts
    }

    pub fn last_toast(&self) -> Option<&Notice> {
        self.toasts.last()
    }

    pub fn is_modal_open(&self, modal: Modal) -> bool {
        self.open_modals.contains_key(&modal)
    }

    pub fn modal_fields(&self, modal: Modal) -> Option<&FormFields> {
        self.open_modals.get(&modal)?.as_ref()
    }

    pub fn is_enabled(&self, control: Control) -> bool {
        !self.disabled.contains(&control)
    }

    pub fn render_region(&self, tab: Tab) -> String {
        let Some(region) = self.regions.get(&tab) else {
            return String::new();
        };

        let mut html = String::new();
        if !region.entries.is_empty() {
            html.push_str("<ul class=\"list-group\">");
            for entry in &region.entries {
                html.push_str(&render_entry(entry, true));
            }
            html.push_str("</ul>");
        }
        for (label, entries) in &region.groups {
            html.push_str(&format!(
                "<section class=\"tag-group\"><h2><span class=\"badge\">{}</span></h2>\
                 <ul class=\"list-group\">",
                escape_html(label)
            ));
            for entry in entries {
                html.push_str(&render_entry(entry, false));
            }
            html.push_str("</ul></section>");
        }
        html
    }
}

impl Surface for HtmlSurface {
    /// Redrawing a region replaces its checkboxes, so the selection goes too.
    fn clear(&mut self, tab: Tab) {
        self.regions.insert(tab, Region::default());
        self.checked.remove(&tab);
    }

    fn append_group(&mut self, tab: Tab, label: &str) {
        self.regions
            .entry(tab)
            .or_default()
            .groups
            .push((label.to_string(), Vec::new()));
    }

    fn append_entry(&mut self, tab: Tab, group: Option<&str>, entry: EntryNode) {
        let region = self.regions.entry(tab).or_default();
        match group {
            None => region.entries.push(entry),
            Some(label) => {
                if let Some((_, entries)) =
                    region.groups.iter_mut().find(|(name, _)| name == label)
                {
                    entries.push(entry);
                }
            }
        }
    }

    fn show_toast(&mut self, notice: &Notice) {
        self.toasts.push(notice.clone());
    }

    fn show_modal(&mut self, modal: Modal, prefill: Option<&FormFields>) {
        self.open_modals.insert(modal, prefill.cloned());
    }

    fn hide_modal(&mut self, modal: Modal) {
        self.open_modals.remove(&modal);
    }

    fn set_enabled(&mut self, control: Control, enabled: bool) {
        if enabled {
            self.disabled.remove(&control);
        } else {
            self.disabled.insert(control);
        }
    }

    fn checked_ids(&self, tab: Tab) -> Vec<u64> {
        self.checked.get(&tab).cloned().unwrap_or_default()
    }
}

fn render_entry(entry: &EntryNode, with_badges: bool) -> String {
    let id = entry.id.map(|id| id.to_string()).unwrap_or_default();
    let badges = if with_badges {
        entry
            .badges
            .iter()
            .map(|badge| format!("<span class=\"badge\">{}</span>", escape_html(badge)))
            .collect::<String>()
    } else {
        String::new()
    };

    format!(
        "<li class=\"list-group-item\">\
         <input class=\"form-check-input\" type=\"checkbox\" data-id=\"{id}\" />\
         <span class=\"list-item-desc\">{}</span>{badges}\
         <span class=\"list-item-deadline\">{}</span></li>",
        escape_html(&entry.description),
        escape_html(&entry.deadline_label),
    )
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
