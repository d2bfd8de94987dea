//! The todo store: an in-memory collection backed by a single JSON file.

use crate::error::{Result, TodoError};
use crate::types::{normalize_text, Todo, TodoId};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Owns the todo collection and the file it is persisted to.
///
/// Every mutating operation rewrites the whole file before returning. If the
/// write fails the in-memory change is undone, so callers never observe a
/// mutation that did not reach disk.
pub struct TodoStore {
    /// Backing file.
    path: PathBuf,

    /// Todos in insertion order.
    todos: Vec<Todo>,

    /// Id for the next created todo. Only ever grows while the store is open.
    next_id: TodoId,
}

impl TodoStore {
    /// Open the store at `path`, loading existing todos.
    ///
    /// A missing or zero-length file is an empty collection. Nothing is
    /// written until the first mutation.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let todos = if path.exists() {
            Self::load_from_file(&path)?
        } else {
            Vec::new()
        };

        let next_id = match todos.iter().map(|t| t.id).max() {
            None => TodoId::FIRST,
            Some(max) => max.next().ok_or_else(|| {
                TodoError::Corruption(format!(
                    "{}: id {} leaves no room for new todos",
                    path.display(),
                    max
                ))
            })?,
        };

        info!(path = %path.display(), count = todos.len(), "Opened todo store");

        Ok(Self {
            path,
            todos,
            next_id,
        })
    }

    fn load_from_file(path: &Path) -> Result<Vec<Todo>> {
        let bytes = fs::read(path)?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        serde_json::from_slice(&bytes)
            .map_err(|e| TodoError::Corruption(format!("{}: {}", path.display(), e)))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    // --- Queries ---

    /// All todos in insertion order.
    pub fn list(&self) -> &[Todo] {
        &self.todos
    }

    /// Look up a single todo.
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Number of todos marked as completed.
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }

    // --- Mutations ---

    /// Create a todo from `text` (trimmed) and persist it.
    pub fn create(&mut self, text: &str) -> Result<Todo> {
        let text = normalize_text(text)?;

        let id = self.next_id;
        let following = id.next().ok_or(TodoError::IdsExhausted(id))?;
        let todo = Todo::new(id, text);
        self.todos.push(todo.clone());

        self.persist_or_undo(|todos| {
            todos.pop();
        })?;
        self.next_id = following;

        debug!(%id, "Created todo");
        Ok(todo)
    }

    /// Flip the completion flag of a todo.
    pub fn toggle(&mut self, id: TodoId) -> Result<Todo> {
        let index = self.position(id)?;

        let todo = &mut self.todos[index];
        todo.completed = !todo.completed;

        self.persist_or_undo(move |todos| {
            todos[index].completed = !todos[index].completed;
        })?;

        let todo = &self.todos[index];
        debug!(%id, completed = todo.completed, "Toggled todo");
        Ok(todo.clone())
    }

    /// Replace the text of a todo.
    ///
    /// The new text is validated before the lookup, so empty text is reported
    /// even for unknown ids.
    pub fn edit(&mut self, id: TodoId, text: &str) -> Result<Todo> {
        let text = normalize_text(text)?;
        let index = self.position(id)?;

        let previous = std::mem::replace(&mut self.todos[index].text, text);

        self.persist_or_undo(move |todos| {
            todos[index].text = previous;
        })?;

        debug!(%id, "Edited todo");
        Ok(self.todos[index].clone())
    }

    /// Remove a todo, returning it.
    pub fn delete(&mut self, id: TodoId) -> Result<Todo> {
        let index = self.position(id)?;

        let removed = self.todos.remove(index);
        let restore = removed.clone();

        self.persist_or_undo(move |todos| {
            todos.insert(index, restore);
        })?;

        debug!(%id, "Deleted todo");
        Ok(removed)
    }

    // --- Internals ---

    fn position(&self, id: TodoId) -> Result<usize> {
        self.todos
            .iter()
            .position(|t| t.id == id)
            .ok_or(TodoError::NotFound(id))
    }

    /// Persist the collection; on failure apply `undo` to the in-memory list.
    fn persist_or_undo(&mut self, undo: impl FnOnce(&mut Vec<Todo>)) -> Result<()> {
        match self.save() {
            Ok(()) => Ok(()),
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "Failed to persist todos");
                undo(&mut self.todos);
                Err(e)
            }
        }
    }

    /// Overwrite the backing file with the full collection.
    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let encoded = serde_json::to_vec_pretty(&self.todos)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;
        file.write_all(&encoded)?;
        file.sync_all()?;

        Ok(())
    }
}
