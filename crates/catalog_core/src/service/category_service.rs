//! Category use-case service.
//!
//! # Responsibility
//! - Provide create/get/list/update/activate/deactivate/delete APIs over
//!   any searchable category store.
//! - Map entities into `CategoryOutput` read models at the boundary.
//!
//! # Invariants
//! - Every mutation validates before the store is touched; a failed
//!   validation leaves the store unchanged.
//! - List output metadata mirrors the underlying search result.

use crate::model::category::{Category, CategoryInput};
use crate::model::entity::Entity;
use crate::model::validation::EntityValidationError;
use crate::repo::memory::RepoError;
use crate::repo::searchable::SearchableRepository;
use crate::search::params::{SearchParams, SearchRequest};
use crate::search::result::SearchResult;
use log::{error, info};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for category use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryServiceError {
    /// Field validation rejected the input.
    Validation(EntityValidationError),
    /// Target category does not exist.
    CategoryNotFound(String),
}

impl Display for CategoryServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::CategoryNotFound(id) => write!(f, "category not found: `{id}`"),
        }
    }
}

impl Error for CategoryServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::CategoryNotFound(_) => None,
        }
    }
}

impl From<EntityValidationError> for CategoryServiceError {
    fn from(value: EntityValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for CategoryServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::CategoryNotFound(id),
        }
    }
}

/// Read model returned by category use-cases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOutput {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl From<&Category> for CategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id().to_string(),
            name: category.name().to_string(),
            description: category.description().map(str::to_string),
            is_active: category.is_active(),
            created_at: category.created_at(),
        }
    }
}

/// List result envelope used by service callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryPage {
    pub items: Vec<CategoryOutput>,
    pub count: usize,
    pub current_page: u32,
    pub items_per_page: u32,
    pub last_page: usize,
}

impl From<&SearchResult<Category>> for CategoryPage {
    fn from(result: &SearchResult<Category>) -> Self {
        Self {
            items: result.data().iter().map(CategoryOutput::from).collect(),
            count: result.count(),
            current_page: result.current_page(),
            items_per_page: result.items_per_page(),
            last_page: result.last_page(),
        }
    }
}

/// Category service facade over searchable stores.
pub struct CategoryService<R: SearchableRepository<Category>> {
    repo: R,
}

impl<R: SearchableRepository<Category>> CategoryService<R> {
    /// Creates a service using the provided store.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one category from caller input.
    pub fn create_category(
        &mut self,
        input: CategoryInput,
    ) -> Result<CategoryOutput, CategoryServiceError> {
        let category = match Category::new(input) {
            Ok(category) => category,
            Err(err) => {
                error!(
                    "event=category_create module=category_service status=error reason=validation fields={}",
                    err.errors().len()
                );
                return Err(err.into());
            }
        };
        let output = CategoryOutput::from(&category);
        self.repo.insert(category);
        info!(
            "event=category_create module=category_service status=ok id={}",
            output.id
        );
        Ok(output)
    }

    /// Gets one category by identity string.
    pub fn get_category(&self, id: &str) -> Result<CategoryOutput, CategoryServiceError> {
        let category = self.repo.find_by_id(id)?;
        Ok(CategoryOutput::from(&category))
    }

    /// Lists categories using filter/order/pagination input.
    pub fn list_categories(&self, request: SearchRequest) -> CategoryPage {
        let params = SearchParams::from_request(request);
        let result = self.repo.search(&params);
        info!(
            "event=category_list module=category_service status=ok count={} page={}",
            result.count(),
            result.current_page()
        );
        CategoryPage::from(&result)
    }

    /// Replaces name and description of an existing category.
    pub fn update_category(
        &mut self,
        id: &str,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Result<CategoryOutput, CategoryServiceError> {
        match self.apply_update(id, name, description) {
            Ok(updated) => {
                info!("event=category_update module=category_service status=ok id={id}");
                Ok(CategoryOutput::from(&updated))
            }
            Err(err) => {
                error!(
                    "event=category_update module=category_service status=error id={id} error={err}"
                );
                Err(err)
            }
        }
    }

    /// Marks a category active.
    pub fn activate_category(
        &mut self,
        id: &str,
    ) -> Result<CategoryOutput, CategoryServiceError> {
        self.set_active(id, true)
    }

    /// Marks a category inactive.
    pub fn deactivate_category(
        &mut self,
        id: &str,
    ) -> Result<CategoryOutput, CategoryServiceError> {
        self.set_active(id, false)
    }

    /// Deletes one category by identity string.
    pub fn delete_category(&mut self, id: &str) -> Result<(), CategoryServiceError> {
        match self.repo.delete(id) {
            Ok(()) => {
                info!("event=category_delete module=category_service status=ok id={id}");
                Ok(())
            }
            Err(err) => {
                let err = CategoryServiceError::from(err);
                error!(
                    "event=category_delete module=category_service status=error id={id} error={err}"
                );
                Err(err)
            }
        }
    }

    fn set_active(
        &mut self,
        id: &str,
        active: bool,
    ) -> Result<CategoryOutput, CategoryServiceError> {
        match self.apply_active(id, active) {
            Ok(changed) => {
                info!(
                    "event=category_set_active module=category_service status=ok id={id} active={active}"
                );
                Ok(CategoryOutput::from(&changed))
            }
            Err(err) => {
                error!(
                    "event=category_set_active module=category_service status=error id={id} active={active} error={err}"
                );
                Err(err)
            }
        }
    }

    fn apply_update(
        &mut self,
        id: &str,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Result<Category, CategoryServiceError> {
        let current = self.repo.find_by_id(id)?;
        let updated = current.update(name, description)?;
        self.repo.update(updated.clone())?;
        Ok(updated)
    }

    fn apply_active(&mut self, id: &str, active: bool) -> Result<Category, CategoryServiceError> {
        let current = self.repo.find_by_id(id)?;
        let changed = if active {
            current.activate()
        } else {
            current.deactivate()
        };
        self.repo.update(changed.clone())?;
        Ok(changed)
    }
}
