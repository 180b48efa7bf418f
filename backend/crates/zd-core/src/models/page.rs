use crate::models::null_as_default;

use serde::{Deserialize, Serialize};

/// Page selection for list endpoints using offset pagination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageOptions {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl PageOptions {
    pub fn new(page: Option<u32>, per_page: Option<u32>) -> Self {
        Self { page, per_page }
    }

    /// Render as a query string including the leading `?`, or an empty
    /// string when nothing is selected.
    pub fn query_string(&self) -> String {
        let mut params = vec![];
        if let Some(page) = self.page {
            params.push(format!("page={}", page));
        }
        if let Some(per_page) = self.per_page {
            params.push(format!("per_page={}", per_page));
        }

        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

/// Page descriptor returned alongside list payloads. The links are opaque
/// URLs; following them is left to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
    pub previous_page: Option<String>,
    pub next_page: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub count: i64,
}

impl Page {
    pub fn has_next(&self) -> bool {
        self.next_page.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.previous_page.is_some()
    }
}
