use crate::deadline::{deadline_input_value, deadline_label};
use crate::models::ToDoItem;
use crate::ordering::{sorted, SortOrder};
use crate::surface::{Control, EntryNode, FormFields, Modal, Notice, NoticeStyle, Surface, Tab};
use crate::tags::group_by_tag;

/// What a view is asked to draw.
#[derive(Debug, Clone, Copy)]
pub enum RenderInput<'a> {
    Items(&'a [ToDoItem]),
    Notice(&'a Notice),
    /// Show a form, optionally pre-filled from an existing item.
    Form(Option<&'a ToDoItem>),
    Nothing,
}

pub trait View {
    /// Draws `input` on `surface`. Inputs the view has no use for are ignored.
    fn render(&self, input: RenderInput<'_>, surface: &mut dyn Surface);
}

/// Ids of the checked entries of a tab. Id 0 is never a stored item.
pub fn checked_ids(tab: Tab, surface: &dyn Surface) -> Vec<u64> {
    surface
        .checked_ids(tab)
        .into_iter()
        .filter(|id| *id != 0)
        .collect()
}

fn entry_node(item: &ToDoItem) -> EntryNode {
    EntryNode {
        id: item.id,
        description: item.description.clone(),
        badges: item.tags.clone(),
        deadline_label: deadline_label(item.deadline.as_deref()),
    }
}

/// A flat list sorted by deadline.
#[derive(Debug, Clone, Copy)]
pub struct ChronologicalView {
    pub tab: Tab,
    pub order: SortOrder,
}

impl ChronologicalView {
    pub fn newest() -> Self {
        Self {
            tab: Tab::Newest,
            order: SortOrder::Newest,
        }
    }

    pub fn oldest() -> Self {
        Self {
            tab: Tab::Oldest,
            order: SortOrder::Oldest,
        }
    }
}

impl View for ChronologicalView {
    fn render(&self, input: RenderInput<'_>, surface: &mut dyn Surface) {
        let RenderInput::Items(items) = input else {
            return;
        };
        surface.clear(self.tab);
        for item in sorted(items, self.order) {
            surface.append_entry(self.tab, None, entry_node(&item));
        }
    }
}

/// Items grouped under their tag labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct TagsView;

impl View for TagsView {
    fn render(&self, input: RenderInput<'_>, surface: &mut dyn Surface) {
        let RenderInput::Items(items) = input else {
            return;
        };
        let grouped = group_by_tag(items);

        surface.clear(Tab::Tags);
        for label in &grouped.labels {
            surface.append_group(Tab::Tags, label);
        }
        for label in &grouped.labels {
            for item in grouped.group(label) {
                surface.append_entry(Tab::Tags, Some(label), entry_node(item));
            }
        }
    }
}

/// The add or edit form shown in a modal.
#[derive(Debug, Clone, Copy)]
pub struct FormView {
    pub modal: Modal,
    pub control: Control,
}

impl FormView {
    pub fn add() -> Self {
        Self {
            modal: Modal::Add,
            control: Control::AddForm,
        }
    }

    pub fn edit() -> Self {
        Self {
            modal: Modal::Edit,
            control: Control::EditForm,
        }
    }

    /// Builds an item from the submitted fields. Tags are comma separated.
    pub fn parse(&self, fields: &FormFields, id: Option<u64>) -> ToDoItem {
        let deadline = fields.deadline.trim();
        ToDoItem {
            id,
            description: fields.description.clone(),
            tags: fields
                .tags
                .split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(ToString::to_string)
                .collect(),
            deadline: (!deadline.is_empty()).then(|| deadline.to_string()),
        }
    }

    pub fn fill(&self, item: &ToDoItem) -> FormFields {
        FormFields {
            description: item.description.clone(),
            tags: item.tags.join(","),
            deadline: deadline_input_value(item.deadline.as_deref()),
        }
    }

    pub fn dismiss(&self, surface: &mut dyn Surface) {
        surface.hide_modal(self.modal);
    }

    pub fn enable(&self, surface: &mut dyn Surface) {
        surface.set_enabled(self.control, true);
    }

    pub fn disable(&self, surface: &mut dyn Surface) {
        surface.set_enabled(self.control, false);
    }
}

impl View for FormView {
    fn render(&self, input: RenderInput<'_>, surface: &mut dyn Surface) {
        match input {
            RenderInput::Form(Some(item)) => {
                let fields = self.fill(item);
                surface.show_modal(self.modal, Some(&fields));
            }
            RenderInput::Form(None) | RenderInput::Nothing => surface.show_modal(self.modal, None),
            RenderInput::Items(_) | RenderInput::Notice(_) => {}
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ButtonView {
    pub control: Control,
}

impl ButtonView {
    pub fn new(control: Control) -> Self {
        Self { control }
    }

    pub fn enable(&self, surface: &mut dyn Surface) {
        surface.set_enabled(self.control, true);
    }

    pub fn disable(&self, surface: &mut dyn Surface) {
        surface.set_enabled(self.control, false);
    }
}

impl View for ButtonView {
    fn render(&self, _input: RenderInput<'_>, _surface: &mut dyn Surface) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NotificationView;

impl NotificationView {
    pub fn success(&self, surface: &mut dyn Surface, message: &str) {
        self.notify(surface, NoticeStyle::Success, message);
    }

    pub fn error(&self, surface: &mut dyn Surface, message: &str) {
        self.notify(surface, NoticeStyle::Error, message);
    }

    pub fn info(&self, surface: &mut dyn Surface, message: &str) {
        self.notify(surface, NoticeStyle::Info, message);
    }

    fn notify(&self, surface: &mut dyn Surface, style: NoticeStyle, message: &str) {
        let notice = Notice::new(style, message);
        self.render(RenderInput::Notice(&notice), surface);
    }
}

impl View for NotificationView {
    fn render(&self, input: RenderInput<'_>, surface: &mut dyn Surface) {
        if let RenderInput::Notice(notice) = input {
            surface.show_toast(notice);
        }
    }
}
