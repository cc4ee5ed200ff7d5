//! Board State
//!
//! Containers, their task lists, per-container drafts and the color picker
//! flag. Every mutation of containers or tasks is written through to the
//! `KeyValueStore` before the call returns.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::rc::Rc;

use leptos_dragdrop::{reorder_by_key, DropTarget};
use serde::de::DeserializeOwned;

use crate::config::BoardConfig;
use crate::models::{Container, ContainerColor, ContainerId, TaskId, TodoItem};
use crate::storage::{load_json, save_json, KeyValueStore};

/// Rejected board operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("Please write something")]
    EmptyTaskText,
    #[error("Please check the item first")]
    UncheckedDeletion,
    #[error("reorder is not a permutation of the current containers")]
    NotAPermutation,
}

impl BoardError {
    /// Whether the user should see this error (as opposed to just logging it)
    pub fn is_user_facing(&self) -> bool {
        matches!(self, BoardError::EmptyTaskText | BoardError::UncheckedDeletion)
    }
}

pub type TaskMap = BTreeMap<ContainerId, Vec<TodoItem>>;

pub struct Board {
    config: BoardConfig,
    store: Rc<dyn KeyValueStore>,
    containers: Vec<Container>,
    todos: TaskMap,
    drafts: HashMap<ContainerId, String>,
    picker_open: bool,
    /// Highest container id handed out or restored this session
    highest_id: ContainerId,
    next_task_key: u64,
}

impl Board {
    /// Restore containers and tasks from `store`.
    ///
    /// Missing records start empty. Unreadable records are logged and also
    /// start empty so a bad entry never takes the page down.
    pub fn load(store: Rc<dyn KeyValueStore>, config: BoardConfig) -> Self {
        let containers: Vec<Container> = restore(store.as_ref(), &config.containers_key);
        let todos: TaskMap = restore(store.as_ref(), &config.todos_key);

        // Orphaned task lists from older data still reserve their ids
        let highest_id = containers
            .iter()
            .map(|c| c.id)
            .chain(todos.keys().copied())
            .max()
            .unwrap_or(0);

        let mut board = Self {
            config,
            store,
            containers,
            todos,
            drafts: HashMap::new(),
            picker_open: false,
            highest_id,
            next_task_key: 0,
        };
        let mut todos = std::mem::take(&mut board.todos);
        for item in todos.values_mut().flatten() {
            item.key = board.next_key();
        }
        board.todos = todos;

        // Older data can repeat an id after a reorder; later copies get fresh ids
        let mut seen = HashSet::new();
        let mut repaired = false;
        for container in board.containers.iter_mut() {
            if !seen.insert(container.id) {
                board.highest_id += 1;
                log::warn!("[BOARD] Duplicate container id {} renumbered to {}", container.id, board.highest_id);
                container.id = board.highest_id;
                seen.insert(container.id);
                repaired = true;
            }
        }
        if repaired {
            board.persist_containers();
        }

        log::info!(
            "[BOARD] Loaded {} containers, {} task lists",
            board.containers.len(),
            board.todos.len()
        );
        board
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    /// Tasks of a container (empty for unknown ids)
    pub fn tasks(&self, container: ContainerId) -> &[TodoItem] {
        self.todos.get(&container).map(Vec::as_slice).unwrap_or(&[])
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn task_map(&self) -> &TaskMap {
        &self.todos
    }

    pub fn draft(&self, container: ContainerId) -> &str {
        self.drafts.get(&container).map(String::as_str).unwrap_or("")
    }

    pub fn is_picker_open(&self) -> bool {
        self.picker_open
    }

    // ========================
    // Container List
    // ========================

    /// Append a new container and return its id
    pub fn add_container(&mut self, color: ContainerColor) -> ContainerId {
        let last = self.containers.last().map_or(0, |c| c.id);
        let id = last.max(self.highest_id) + 1;
        self.highest_id = id;
        self.containers.push(Container { id, color });
        log::debug!("[BOARD] Added container {} ({})", id, color.label());
        self.persist_containers();
        id
    }

    /// Replace the order with a permutation of the current containers
    pub fn reorder(&mut self, new_sequence: Vec<Container>) -> Result<(), BoardError> {
        if !is_permutation(&self.containers, &new_sequence) {
            return Err(BoardError::NotAPermutation);
        }
        self.containers = new_sequence;
        self.persist_containers();
        Ok(())
    }

    /// Apply a drag drop of `id` onto `target`
    pub fn move_container(&mut self, id: ContainerId, target: DropTarget) -> Result<(), BoardError> {
        let order = reorder_by_key(&self.containers, |c| c.id, id, target).ok_or(BoardError::NotAPermutation)?;
        self.reorder(order)
    }

    /// Remove a container together with its tasks and draft. Absent ids are ignored.
    pub fn delete_container(&mut self, id: ContainerId) {
        let before = self.containers.len();
        self.containers.retain(|c| c.id != id);
        if self.containers.len() == before {
            log::debug!("[BOARD] Delete of unknown container {} ignored", id);
            return;
        }
        self.persist_containers();

        self.drafts.remove(&id);
        if self.todos.remove(&id).is_some() {
            self.persist_todos();
        }
        log::debug!("[BOARD] Deleted container {}", id);
    }

    // ========================
    // Task Store
    // ========================

    /// Append a task; blank text is rejected and leaves the draft alone
    pub fn add_task(&mut self, container: ContainerId, text: &str) -> Result<(), BoardError> {
        if text.trim().is_empty() {
            return Err(BoardError::EmptyTaskText);
        }
        let item = TodoItem::new(self.next_key(), text.to_string());
        self.todos.entry(container).or_default().push(item);
        self.persist_todos();
        self.drafts.insert(container, String::new());
        Ok(())
    }

    /// Submit the container's current draft (Add button or Enter key)
    pub fn submit_draft(&mut self, container: ContainerId) -> Result<(), BoardError> {
        let text = self.draft(container).to_string();
        self.add_task(container, &text)
    }

    pub fn toggle_check(&mut self, container: ContainerId, index: usize) {
        let Some(item) = self.todos.get_mut(&container).and_then(|list| list.get_mut(index)) else {
            log::debug!("[BOARD] Toggle of missing task {}#{} ignored", container, index);
            return;
        };
        item.checked = !item.checked;
        self.persist_todos();
    }

    /// Remove a task; only checked tasks can be removed
    pub fn remove_task(&mut self, container: ContainerId, index: usize) -> Result<(), BoardError> {
        let Some(list) = self.todos.get_mut(&container) else {
            return Ok(());
        };
        match list.get(index) {
            None => return Ok(()),
            Some(item) if !item.checked => return Err(BoardError::UncheckedDeletion),
            Some(_) => {}
        }
        list.remove(index);
        self.persist_todos();
        Ok(())
    }

    // ========================
    // Draft Input Store
    // ========================

    pub fn set_draft(&mut self, container: ContainerId, text: String) {
        self.drafts.insert(container, text);
    }

    // ========================
    // Color Picker
    // ========================

    pub fn toggle_picker(&mut self) {
        self.picker_open = !self.picker_open;
    }

    /// Spawn a container from the palette
    pub fn pick_color(&mut self, color: ContainerColor) -> ContainerId {
        let id = self.add_container(color);
        if self.config.close_picker_on_select {
            self.picker_open = false;
        }
        id
    }

    // ========================
    // Persistence
    // ========================

    fn persist_containers(&self) {
        if let Err(e) = save_json(self.store.as_ref(), &self.config.containers_key, &self.containers) {
            log::warn!("[STORE] Failed to write {}: {}", self.config.containers_key, e);
        }
    }

    fn persist_todos(&self) {
        if let Err(e) = save_json(self.store.as_ref(), &self.config.todos_key, &self.todos) {
            log::warn!("[STORE] Failed to write {}: {}", self.config.todos_key, e);
        }
    }

    fn next_key(&mut self) -> TaskId {
        self.next_task_key += 1;
        TaskId(self.next_task_key)
    }
}

fn restore<T: DeserializeOwned + Default>(store: &dyn KeyValueStore, key: &str) -> T {
    match load_json(store, key) {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(e) => {
            log::warn!("[STORE] Ignoring unreadable {}: {}", key, e);
            T::default()
        }
    }
}

fn is_permutation(current: &[Container], candidate: &[Container]) -> bool {
    if current.len() != candidate.len() {
        return false;
    }
    let mut a = current.to_vec();
    let mut b = candidate.to_vec();
    a.sort_by_key(|c| c.id);
    b.sort_by_key(|c| c.id);
    a == b
}
