//! Immutable catalog snapshot.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::CatalogError;
use crate::models::{normalize_code, CourseRef};

/// Courses frozen for one planning call.
///
/// Keeps catalog order and an ID → position lookup table. Cloning is cheap
/// and clones share storage, so one snapshot can back parallel calls.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    courses: Arc<[CourseRef]>,
    index: Arc<HashMap<String, usize>>,
}

impl CatalogSnapshot {
    /// Builds a snapshot, rejecting duplicate course IDs.
    pub fn new(courses: Vec<CourseRef>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(courses.len());
        for (i, course) in courses.iter().enumerate() {
            if index.insert(course.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateCourse(course.id.clone()));
            }
        }
        Ok(Self {
            courses: courses.into(),
            index: Arc::new(index),
        })
    }

    /// All courses in catalog order.
    #[inline]
    pub fn courses(&self) -> &[CourseRef] {
        &self.courses
    }

    /// Catalog position of a course.
    #[inline]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Looks up a course by ID.
    pub fn get(&self, id: &str) -> Option<&CourseRef> {
        self.index_of(id).map(|i| &self.courses[i])
    }

    /// Whether the course exists in the snapshot.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Number of courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the snapshot holds no courses.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// IDs of courses whose code matches one of `codes`, in catalog order.
    pub fn ids_for_codes(&self, codes: &[String]) -> Vec<String> {
        let wanted: Vec<String> = codes.iter().map(|c| normalize_code(c)).collect();
        self.courses
            .iter()
            .filter(|c| !c.code.is_empty() && wanted.contains(&c.normalized_code()))
            .map(|c| c.id.clone())
            .collect()
    }
}

impl Default for CatalogSnapshot {
    fn default() -> Self {
        Self {
            courses: Arc::from(Vec::new()),
            index: Arc::default(),
        }
    }
}
