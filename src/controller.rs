use crate::dao::{DaoError, ToDoRepository};
use crate::surface::{Control, FormFields, Surface, Tab};
use crate::views::{
    checked_ids, ButtonView, ChronologicalView, FormView, NotificationView, RenderInput, TagsView,
    View,
};
use tracing::{error, info};

/// Wires user actions to repository calls and view refreshes.
pub struct Controller<R, S> {
    repository: R,
    surface: S,
    active: Tab,
    newest: ChronologicalView,
    oldest: ChronologicalView,
    tags: TagsView,
    add_form: FormView,
    edit_form: FormView,
    remove_button: ButtonView,
    edit_button: ButtonView,
    notification: NotificationView,
}

impl<R: ToDoRepository, S: Surface> Controller<R, S> {
    pub fn new(repository: R, surface: S) -> Self {
        Self {
            repository,
            surface,
            active: Tab::default(),
            newest: ChronologicalView::newest(),
            oldest: ChronologicalView::oldest(),
            tags: TagsView,
            add_form: FormView::add(),
            edit_form: FormView::edit(),
            remove_button: ButtonView::new(Control::RemoveButton),
            edit_button: ButtonView::new(Control::EditButton),
            notification: NotificationView,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    fn checked(&self) -> Vec<u64> {
        checked_ids(self.active, &self.surface)
    }

    /// Re-fetches every item and redraws the active tab.
    pub async fn refresh_active_view(&mut self) {
        match self.repository.list_all().await {
            Ok(items) => {
                let input = RenderInput::Items(&items);
                match self.active {
                    Tab::Newest => self.newest.render(input, &mut self.surface),
                    Tab::Oldest => self.oldest.render(input, &mut self.surface),
                    Tab::Tags => self.tags.render(input, &mut self.surface),
                }
            }
            Err(err) => {
                error!(error = %err, "failed to refresh items");
                self.notification
                    .error(&mut self.surface, "Failed to load data from the server");
            }
        }
    }

    pub async fn switch_tab(&mut self, tab: Tab) {
        self.active = tab;
        self.refresh_active_view().await;
    }

    pub fn open_add_form(&mut self) {
        self.add_form.render(RenderInput::Form(None), &mut self.surface);
    }

    pub async fn submit_add(&mut self, fields: &FormFields) {
        self.add_form.disable(&mut self.surface);
        self.handle_insert(fields).await;
        self.add_form.enable(&mut self.surface);
    }

    async fn handle_insert(&mut self, fields: &FormFields) {
        let item = self.add_form.parse(fields, None);
        match self.repository.insert(&item).await {
            Ok(_) => {
                info!(description = %item.description, "item added");
                self.refresh_active_view().await;
                self.notification
                    .success(&mut self.surface, "Element added successfully");
            }
            Err(err) => {
                error!(error = %err, "failed to process insert operation");
                self.notification.error(&mut self.surface, "Failed to add element");
            }
        }
        self.add_form.dismiss(&mut self.surface);
    }

    /// Removes the checked items one at a time, stopping at the first
    /// transport failure.
    pub async fn remove_checked(&mut self) {
        self.remove_button.disable(&mut self.surface);
        self.handle_removal().await;
        self.remove_button.enable(&mut self.surface);
    }

    async fn handle_removal(&mut self) {
        let ids = self.checked();
        let mut statuses = Vec::with_capacity(ids.len());

        for id in ids {
            match self.repository.remove_by_id(id).await {
                Ok(removed) => statuses.push(removed),
                Err(err) => {
                    error!(id, error = %err, "failed to perform removal operation");
                    statuses.push(false);
                    break;
                }
            }
        }

        if statuses.is_empty() {
            self.notification
                .info(&mut self.surface, "Please, select an element to remove");
        } else if statuses.iter().all(|removed| *removed) {
            info!(count = statuses.len(), "items removed");
            self.notification
                .success(&mut self.surface, "ToDo item(s) removed successfully");
        } else {
            self.notification
                .error(&mut self.surface, "Failed to remove ToDo item(s)");
        }
        self.refresh_active_view().await;
    }

    /// Shows the edit form filled from the first checked item.
    pub async fn open_edit_form(&mut self) {
        let Some(id) = self.checked().first().copied() else {
            self.notification
                .info(&mut self.surface, "Please select an element.");
            return;
        };

        self.edit_button.disable(&mut self.surface);
        match self.repository.get_item(id).await {
            Ok(item) => self
                .edit_form
                .render(RenderInput::Form(Some(&item)), &mut self.surface),
            Err(err) => {
                error!(id, error = %err, "failed to load item for editing");
                self.notification
                    .error(&mut self.surface, "Failed to edit ToDo item.");
            }
        }
        self.edit_button.enable(&mut self.surface);
    }

    pub async fn submit_edit(&mut self, fields: &FormFields) {
        self.edit_form.disable(&mut self.surface);
        self.handle_edit(fields).await;
        self.edit_form.enable(&mut self.surface);
    }

    async fn handle_edit(&mut self, fields: &FormFields) {
        let Some(id) = self.checked().first().copied() else {
            self.notification
                .info(&mut self.surface, "Please select an element.");
            return;
        };

        match self.apply_edit(id, fields).await {
            Ok(()) => {
                info!(id, "item edited");
                self.refresh_active_view().await;
                self.notification
                    .success(&mut self.surface, "ToDo item edited successfully");
                self.edit_form.dismiss(&mut self.surface);
            }
            Err(err) => {
                error!(id, error = %err, "failed to perform edit operation");
                self.notification
                    .error(&mut self.surface, "Failed to edit ToDo item.");
            }
        }
    }

    async fn apply_edit(&self, id: u64, fields: &FormFields) -> Result<(), DaoError> {
        let current = self.repository.get_item(id).await?;
        let updated = self.edit_form.parse(fields, current.id);
        self.repository.update(&updated).await?;
        Ok(())
    }
}
