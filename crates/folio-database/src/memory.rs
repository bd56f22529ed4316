//! In-memory store using a Tokio mutex, for tests and local experiments.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use folio_core::error::AppError;
use folio_core::result::AppResult;
use folio_entity::{
    Category, CreateCategory, CreateCvFile, CreateFolder, CreateUser, CvFile, DocumentFolder,
    User,
};

use crate::store::{CategoryStore, CvStore, FolderStore, StoreHealth, UserStore};

#[derive(Debug, Default)]
struct InnerState {
    users: Vec<User>,
    categories: Vec<Category>,
    folders: Vec<DocumentFolder>,
    cv_files: Vec<CvFile>,
    next_id: i32,
}

impl InnerState {
    fn allocate_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

/// Implements every store contract over process memory.
///
/// Identifiers are allocated from a single counter starting at 1, so the
/// first user created in a fresh store has id 1.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<InnerState>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StoreHealth for MemoryStore {
    async fn ping(&self) -> AppResult<bool> {
        Ok(true)
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let state = self.state.lock().await;
        Ok(state.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let state = self.state.lock().await;
        Ok(state.users.iter().find(|u| u.username == username).cloned())
    }

    async fn create(&self, user: CreateUser) -> AppResult<User> {
        let mut state = self.state.lock().await;
        if state.users.iter().any(|u| u.username == user.username) {
            return Err(AppError::conflict("Username already exists"));
        }
        let created = User {
            id: state.allocate_id(),
            username: user.username,
            password_hash: user.password_hash,
            created_at: Utc::now(),
        };
        state.users.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl CategoryStore for MemoryStore {
    async fn list(&self) -> AppResult<Vec<Category>> {
        let state = self.state.lock().await;
        let mut categories = state.categories.clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn create(&self, category: CreateCategory) -> AppResult<Category> {
        let mut state = self.state.lock().await;
        if state.categories.iter().any(|c| c.name == category.name) {
            return Err(AppError::conflict("Category already exists"));
        }
        let created = Category {
            id: state.allocate_id(),
            name: category.name,
            description: category.description,
            created_at: Utc::now(),
        };
        state.categories.push(created.clone());
        Ok(created)
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let mut state = self.state.lock().await;
        let before = state.categories.len();
        state.categories.retain(|c| c.id != id);
        let removed = state.categories.len() != before;
        if removed {
            // Mirrors ON DELETE SET NULL on document_folders.category_id.
            for folder in state.folders.iter_mut().filter(|f| f.category_id == Some(id)) {
                folder.category_id = None;
            }
        }
        Ok(removed)
    }
}

#[async_trait]
impl FolderStore for MemoryStore {
    async fn list(&self, category_id: Option<i32>) -> AppResult<Vec<DocumentFolder>> {
        let state = self.state.lock().await;
        let mut folders: Vec<DocumentFolder> = state
            .folders
            .iter()
            .filter(|f| category_id.is_none() || f.category_id == category_id)
            .cloned()
            .collect();
        folders.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(folders)
    }

    async fn create(&self, folder: CreateFolder) -> AppResult<DocumentFolder> {
        let mut state = self.state.lock().await;
        if let Some(category_id) = folder.category_id {
            if !state.categories.iter().any(|c| c.id == category_id) {
                return Err(AppError::not_found("Category not found"));
            }
        }
        let created = DocumentFolder {
            id: state.allocate_id(),
            name: folder.name,
            category_id: folder.category_id,
            created_at: Utc::now(),
        };
        state.folders.push(created.clone());
        Ok(created)
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let mut state = self.state.lock().await;
        let before = state.folders.len();
        state.folders.retain(|f| f.id != id);
        Ok(state.folders.len() != before)
    }
}

#[async_trait]
impl CvStore for MemoryStore {
    async fn list(&self) -> AppResult<Vec<CvFile>> {
        let state = self.state.lock().await;
        Ok(state.cv_files.iter().rev().cloned().collect())
    }

    async fn latest(&self) -> AppResult<Option<CvFile>> {
        let state = self.state.lock().await;
        Ok(state.cv_files.last().cloned())
    }

    async fn create(&self, cv: CreateCvFile) -> AppResult<CvFile> {
        let mut state = self.state.lock().await;
        let created = CvFile {
            id: state.allocate_id(),
            original_name: cv.original_name,
            stored_path: cv.stored_path,
            content_type: cv.content_type,
            size_bytes: cv.size_bytes,
            uploaded_at: Utc::now(),
        };
        state.cv_files.push(created.clone());
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::error::ErrorKind;

    #[tokio::test]
    async fn test_first_user_gets_id_one() {
        let store = MemoryStore::new();
        let user = UserStore::create(
            &store,
            CreateUser {
                username: "admin".to_string(),
                password_hash: "hash".to_string(),
            },
        )
        .await
        .expect("create");
        assert_eq!(user.id, 1);
        assert!(store.find_by_username("admin").await.unwrap().is_some());
        assert!(store.find_by_username("Admin").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_conflicts() {
        let store = MemoryStore::new();
        let new_user = || CreateUser {
            username: "admin".to_string(),
            password_hash: "hash".to_string(),
        };
        UserStore::create(&store, new_user()).await.expect("first");
        let err = UserStore::create(&store, new_user()).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn test_folder_requires_existing_category() {
        let store = MemoryStore::new();
        let err = FolderStore::create(
            &store,
            CreateFolder {
                name: "Certificates".to_string(),
                category_id: Some(42),
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_deleting_category_detaches_folders() {
        let store = MemoryStore::new();
        let category = CategoryStore::create(
            &store,
            CreateCategory {
                name: "Design".to_string(),
                description: None,
            },
        )
        .await
        .expect("category");
        FolderStore::create(
            &store,
            CreateFolder {
                name: "Mockups".to_string(),
                category_id: Some(category.id),
            },
        )
        .await
        .expect("folder");

        assert!(CategoryStore::delete(&store, category.id).await.unwrap());
        let folders = FolderStore::list(&store, None).await.unwrap();
        assert_eq!(folders.len(), 1);
        assert_eq!(folders[0].category_id, None);
        assert!(FolderStore::list(&store, Some(category.id)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_memory_store_is_always_reachable() {
        assert!(MemoryStore::new().ping().await.unwrap());
    }

    #[tokio::test]
    async fn test_latest_cv_is_most_recent() {
        let store = MemoryStore::new();
        for name in ["old.pdf", "new.pdf"] {
            CvStore::create(
                &store,
                CreateCvFile {
                    original_name: name.to_string(),
                    stored_path: format!("cv/{name}"),
                    content_type: "application/pdf".to_string(),
                    size_bytes: 3,
                },
            )
            .await
            .expect("cv");
        }
        let latest = store.latest().await.unwrap().expect("latest");
        assert_eq!(latest.original_name, "new.pdf");
        let listed = CvStore::list(&store).await.unwrap();
        assert_eq!(listed[0].original_name, "new.pdf");
    }
}
