//! Attachment resolver: insert newly created entities and wire them into
//! their parent's children list.

use tracing::warn;

use taskdeck_models::{
    ChildRef, ChildType, EntityId, FolderEntity, ListEntity, ParentType, SpaceEntity, TaskEntity,
};

use crate::store::WorkspaceStore;

impl WorkspaceStore {
    /// Appends a newly created space. Spaces are top-level; no parent to
    /// resolve.
    pub fn attach_space(&mut self, space: SpaceEntity) {
        self.spaces.push(space);
    }

    /// Appends a newly created folder and adds a FOLDER reference to its
    /// declared parent's children.
    pub fn attach_folder(&mut self, folder: FolderEntity) {
        let parent = folder.parent.clone();
        let child = ChildRef::new(ChildType::Folder, folder.id.clone());
        self.folders.push(folder);
        self.attach_child(parent.parent_type, &parent.parent_id, child);
    }

    /// Appends a newly created list and adds a LIST reference to its
    /// declared parent's children.
    pub fn attach_list(&mut self, list: ListEntity) {
        let parent = list.parent.clone();
        let child = ChildRef::new(ChildType::List, list.id.clone());
        self.lists.push(list);
        self.attach_child(parent.parent_type, &parent.parent_id, child);
    }

    /// Appends a newly created task and adds a TASK reference to the owning
    /// list's children. Tasks always live in a list, whatever parent type
    /// the record declares.
    pub fn attach_task(&mut self, task: TaskEntity) {
        let parent_id = task.parent.parent_id.clone();
        let child = ChildRef::new(ChildType::Task, task.id.clone());
        self.tasks.push(task);

        match self.lists.iter_mut().find(|l| l.id == parent_id) {
            Some(list) => list.children.push(child),
            None => warn!(parent = %parent_id, "parent list not loaded; task left unattached"),
        }
    }

    /// Scans the collection matching `parent_type` for the first entity
    /// with `parent_id` and pushes the reference onto its children.
    ///
    /// A missing parent is tolerated: the child stays in its collection
    /// unreferenced until the parent is loaded by a later fetch.
    fn attach_child(&mut self, parent_type: ParentType, parent_id: &EntityId, child: ChildRef) {
        let children = match parent_type {
            ParentType::Space => self
                .spaces
                .iter_mut()
                .find(|s| &s.id == parent_id)
                .map(|s| &mut s.children),
            ParentType::Folder => self
                .folders
                .iter_mut()
                .find(|f| &f.id == parent_id)
                .map(|f| &mut f.children),
            ParentType::List => self
                .lists
                .iter_mut()
                .find(|l| &l.id == parent_id)
                .map(|l| &mut l.children),
        };

        match children {
            Some(children) => children.push(child),
            None => {
                warn!(parent = %parent_id, ?parent_type, "parent not loaded; child left unattached");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskdeck_models::{ParentRef, SpaceBatch, TaskParentRef};

    fn space(id: &str) -> SpaceEntity {
        SpaceEntity {
            id: EntityId::from(id),
            name: format!("space {id}"),
            meta: serde_json::Value::Null,
            children: vec![],
            created_at: None,
            updated_at: None,
        }
    }

    fn folder(id: &str, parent_type: ParentType, parent: &str) -> FolderEntity {
        FolderEntity {
            id: EntityId::from(id),
            name: format!("folder {id}"),
            parent: ParentRef {
                parent_id: EntityId::from(parent),
                parent_type,
            },
            children: vec![],
            created_at: None,
            updated_at: None,
        }
    }

    fn list(id: &str, parent_type: ParentType, parent: &str) -> ListEntity {
        ListEntity {
            id: EntityId::from(id),
            name: format!("list {id}"),
            parent: ParentRef {
                parent_id: EntityId::from(parent),
                parent_type,
            },
            children: vec![],
            created_at: None,
            updated_at: None,
        }
    }

    fn task(id: &str, parent: &str) -> TaskEntity {
        TaskEntity {
            id: EntityId::from(id),
            name: format!("task {id}"),
            priority: None,
            status: None,
            parent: TaskParentRef {
                parent_id: EntityId::from(parent),
                parent_type: None,
            },
            created_at: None,
            updated_at: None,
        }
    }

    fn store_with_space() -> WorkspaceStore {
        let mut store = WorkspaceStore::new();
        store.merge_fetched(vec![SpaceBatch {
            spaces: vec![space("s1")],
            ..Default::default()
        }]);
        store
    }

    #[test]
    fn test_attach_space_appends_only() {
        let mut store = WorkspaceStore::new();
        store.attach_space(space("s1"));

        assert_eq!(store.spaces.len(), 1);
        assert!(store.folders.is_empty());
        assert!(store.lists.is_empty());
        assert!(store.tasks.is_empty());
    }

    #[test]
    fn test_attach_folder_references_parent_space() {
        let mut store = store_with_space();
        store.attach_folder(folder("f1", ParentType::Space, "s1"));

        assert_eq!(store.folders.len(), 1);
        let children = &store.spaces[0].children;
        assert_eq!(children.len(), 1);
        assert_eq!(children[0], ChildRef::new(ChildType::Folder, EntityId::from("f1")));
    }

    #[test]
    fn test_attach_list_under_folder() {
        let mut store = store_with_space();
        store.attach_folder(folder("f1", ParentType::Space, "s1"));
        store.attach_list(list("l1", ParentType::Folder, "f1"));

        assert_eq!(store.lists.len(), 1);
        let children = &store.folders[0].children;
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].child_type, ChildType::List);
        assert_eq!(children[0].id.as_str(), "l1");
    }

    #[test]
    fn test_attach_with_unknown_parent_is_tolerated() {
        let mut store = store_with_space();
        store.attach_list(list("l1", ParentType::Space, "missing"));

        // The list landed, nothing references it, nothing panicked.
        assert_eq!(store.lists.len(), 1);
        assert!(store.spaces[0].children.is_empty());
        assert!(store.last_error.is_none());
    }

    #[test]
    fn test_attach_resolves_first_id_match() {
        let mut store = store_with_space();
        store.attach_space(space("s2"));
        store.attach_folder(folder("f1", ParentType::Space, "s2"));

        assert!(store.spaces[0].children.is_empty());
        assert_eq!(store.spaces[1].children.len(), 1);
    }

    #[test]
    fn test_attach_task_targets_list_collection() {
        let mut store = store_with_space();
        store.attach_list(list("l1", ParentType::Space, "s1"));
        store.attach_task(task("t1", "l1"));

        assert_eq!(store.tasks.len(), 1);
        let children = &store.lists[0].children;
        assert_eq!(children.len(), 1);
        assert_eq!(children[0], ChildRef::new(ChildType::Task, EntityId::from("t1")));
    }

    #[test]
    fn test_attach_task_ignores_declared_parent_type() {
        let mut store = store_with_space();
        store.attach_list(list("l1", ParentType::Space, "s1"));

        // Declared parent type says SPACE; resolution still goes to lists.
        let mut t = task("t1", "l1");
        t.parent.parent_type = Some(ParentType::Space);
        store.attach_task(t);

        assert_eq!(store.lists[0].children.len(), 1);
        assert!(store.spaces[0].children.is_empty());
    }

    #[test]
    fn test_attach_task_with_missing_list_is_tolerated() {
        let mut store = store_with_space();
        store.attach_task(task("t1", "never-loaded"));

        assert_eq!(store.tasks.len(), 1);
        assert!(store.last_error.is_none());
    }

    #[test]
    fn test_two_creates_on_same_parent_both_land() {
        let mut store = store_with_space();
        store.attach_folder(folder("f1", ParentType::Space, "s1"));
        store.attach_folder(folder("f2", ParentType::Space, "s1"));

        let ids: Vec<&str> = store.spaces[0]
            .children
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["f1", "f2"]);
    }
}
