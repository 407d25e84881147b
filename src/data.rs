use serde::Deserialize;
use std::collections::HashSet;
use std::ops::Deref;
use std::rc::Rc;
use thiserror::Error;

const EMBEDDED_WORKS: &str = include_str!("../assets/works.json");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkItem {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub year: String,
    pub client: String,
    pub role: String,
    pub description: String,
    pub cover_image: String,
}

/// Fixed, ordered list of works shown by the magazine. Cloning shares the
/// underlying slice; the list never changes after it is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkCatalog {
    works: Rc<[WorkItem]>,
}

impl WorkCatalog {
    pub fn new(works: Vec<WorkItem>) -> Result<Self, DataError> {
        if works.is_empty() {
            return Err(DataError::Empty);
        }

        let mut seen = HashSet::new();
        for (index, work) in works.iter().enumerate() {
            if work.title.trim().is_empty() {
                return Err(DataError::Parse(format!("Work {} has an empty title", index)));
            }
            if !seen.insert(work.id) {
                return Err(DataError::DuplicateId(work.id));
            }
        }

        Ok(Self {
            works: works.into(),
        })
    }
}

impl Deref for WorkCatalog {
    type Target = [WorkItem];

    fn deref(&self) -> &Self::Target {
        &self.works
    }
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("malformed work catalog: {0}")]
    Parse(String),
    #[error("work catalog does not contain any works")]
    Empty,
    #[error("work id {0} appears more than once")]
    DuplicateId(u32),
}

impl DataError {
    fn parse<E: std::fmt::Display>(err: E) -> Self {
        Self::Parse(err.to_string())
    }
}

pub fn load_catalog() -> Result<WorkCatalog, DataError> {
    parse_catalog(EMBEDDED_WORKS)
}

pub fn parse_catalog(text: &str) -> Result<WorkCatalog, DataError> {
    let works: Vec<WorkItem> = serde_json::from_str(text).map_err(DataError::parse)?;
    WorkCatalog::new(works)
}

/// Two-digit page label, as printed on the magazine pages and thumbnails.
pub fn page_label(index: usize) -> String {
    format!("{:02}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn work(id: u32, title: &str) -> WorkItem {
        WorkItem {
            id,
            title: title.to_string(),
            category: "Branding".to_string(),
            year: "2024".to_string(),
            client: "Client".to_string(),
            role: "Designer".to_string(),
            description: "Description".to_string(),
            cover_image: "images/cover.jpg".to_string(),
        }
    }

    #[test]
    fn embedded_catalog_loads_in_order() {
        let catalog = load_catalog().expect("embedded catalog should be valid");
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog[0].title, "Brand Identity Design");
        assert_eq!(catalog[4].title, "SaaS Dashboard");
        assert_eq!(catalog.get(2).map(|w| w.client.as_str()), Some("FinFlow"));
        assert!(catalog.get(5).is_none());
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert!(matches!(parse_catalog("[]"), Err(DataError::Empty)));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = WorkCatalog::new(vec![work(1, "A"), work(2, "B"), work(1, "C")]);
        assert!(matches!(result, Err(DataError::DuplicateId(1))));
    }

    #[test]
    fn blank_title_is_rejected() {
        let result = WorkCatalog::new(vec![work(1, "A"), work(2, "   ")]);
        match result {
            Err(DataError::Parse(message)) => assert!(message.contains("Work 1")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(parse_catalog("{\"id\": 1}"), Err(DataError::Parse(_))));
        assert!(matches!(parse_catalog("not json"), Err(DataError::Parse(_))));
    }

    #[test]
    fn clones_share_the_same_works() {
        let catalog = WorkCatalog::new(vec![work(1, "A")]).unwrap();
        let shared = catalog.clone();
        assert!(Rc::ptr_eq(&catalog.works, &shared.works));
    }

    #[test]
    fn page_label_is_two_digits() {
        assert_eq!(page_label(0), "01");
        assert_eq!(page_label(9), "10");
    }
}
