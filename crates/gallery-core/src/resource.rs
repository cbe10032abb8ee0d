//! Resource model
//!
//! A [`Resource`] is one uploaded file, link or document as returned by the
//! backend's `/api/files` endpoint. The client never validates these values;
//! whatever the backend sends is trusted.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Backend-assigned identifier for a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(pub i64);

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ResourceId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().trim_start_matches('#').parse().map(ResourceId)
    }
}

/// What a resource is, which decides how it is rendered.
///
/// The backend stores `img`, `pdf`, `link` or `doc`. Anything it sends that
/// is not recognized falls back to [`ResourceKind::Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResourceKind {
    Image,
    Pdf,
    Link,
    #[default]
    Document,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Image,
        ResourceKind::Pdf,
        ResourceKind::Link,
        ResourceKind::Document,
    ];

    /// Parse the backend's `type` value. Never fails.
    pub fn from_wire(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "img" | "image" => ResourceKind::Image,
            "pdf" => ResourceKind::Pdf,
            "link" => ResourceKind::Link,
            _ => ResourceKind::Document,
        }
    }

    /// Value stored by the backend for this kind
    pub fn wire_name(&self) -> &'static str {
        match self {
            ResourceKind::Image => "img",
            ResourceKind::Pdf => "pdf",
            ResourceKind::Link => "link",
            ResourceKind::Document => "doc",
        }
    }

    /// Short category label shown on cards
    pub fn tag(&self) -> &'static str {
        match self {
            ResourceKind::Image => "IMG",
            ResourceKind::Pdf => "PDF",
            ResourceKind::Link => "URL",
            ResourceKind::Document => "DOC",
        }
    }

    /// Human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Image => "Image",
            ResourceKind::Pdf => "PDF",
            ResourceKind::Link => "Link",
            ResourceKind::Document => "Document",
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, ResourceKind::Link)
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ResourceKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire_name())
    }
}

impl<'de> Deserialize<'de> for ResourceKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map(|s| ResourceKind::from_wire(&s)).unwrap_or_default())
    }
}

/// One gallery entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(rename = "type", default)]
    pub kind: ResourceKind,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
    /// Creation date as formatted by the backend
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date: String,
}

impl Resource {
    pub fn new(
        id: i64,
        title: impl Into<String>,
        kind: ResourceKind,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: ResourceId(id),
            title: title.into(),
            description: String::new(),
            kind,
            content: content.into(),
            date: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_wire() {
        assert_eq!(ResourceKind::from_wire("img"), ResourceKind::Image);
        assert_eq!(ResourceKind::from_wire("image"), ResourceKind::Image);
        assert_eq!(ResourceKind::from_wire("PDF"), ResourceKind::Pdf);
        assert_eq!(ResourceKind::from_wire("link"), ResourceKind::Link);
        assert_eq!(ResourceKind::from_wire("doc"), ResourceKind::Document);
        assert_eq!(ResourceKind::from_wire("spreadsheet"), ResourceKind::Document);
        assert_eq!(ResourceKind::from_wire(""), ResourceKind::Document);
    }

    #[test]
    fn test_tags() {
        let tags: Vec<_> = ResourceKind::ALL.iter().map(|k| k.tag()).collect();
        assert_eq!(tags, vec!["IMG", "PDF", "URL", "DOC"]);
    }

    #[test]
    fn test_deserialize_backend_row() {
        let json = r#"{
            "id": 3,
            "title": "Cat.png",
            "description": null,
            "type": "img",
            "content": "/static/uploads/1700000000_cat.png",
            "filename": "cat.png",
            "date": "05/01/2025"
        }"#;
        let resource: Resource = serde_json::from_str(json).unwrap();
        assert_eq!(resource.id, ResourceId(3));
        assert_eq!(resource.kind, ResourceKind::Image);
        assert_eq!(resource.description, "");
        assert_eq!(resource.date, "05/01/2025");
    }

    #[test]
    fn test_missing_or_null_type_is_document() {
        let resource: Resource =
            serde_json::from_str(r#"{"id": 1, "title": "x", "type": null}"#).unwrap();
        assert_eq!(resource.kind, ResourceKind::Document);

        let resource: Resource = serde_json::from_str(r#"{"id": 2, "title": "y"}"#).unwrap();
        assert_eq!(resource.kind, ResourceKind::Document);
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let resource = Resource::new(9, "Notes", ResourceKind::Document, "/static/uploads/n.txt");
        let value = serde_json::to_value(&resource).unwrap();
        assert_eq!(value["type"], "doc");
        assert_eq!(value["id"], 9);
    }

    #[test]
    fn test_parse_id() {
        assert_eq!("42".parse::<ResourceId>().unwrap(), ResourceId(42));
        assert_eq!("#42".parse::<ResourceId>().unwrap(), ResourceId(42));
        assert!("abc".parse::<ResourceId>().is_err());
    }
}
