use serde::{Deserialize, Serialize};

use crate::model::TopicId;

/// A subject-matter unit extracted from uploaded material.
///
/// The weight is backend-assigned and opaque to the client: no range or
/// sum-to-one checks happen here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TopicId>,
    pub name: String,
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allocated_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_index: Option<u32>,
}

impl Topic {
    /// Builds a topic with only the fields the extraction endpoint returns.
    #[must_use]
    pub fn extracted(name: impl Into<String>, weight: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            weight,
            allocated_hours: None,
            order_index: None,
        }
    }
}
