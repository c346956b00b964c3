use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One unit of scripted boot content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentSection {
    Ascii { text: String },
    Command { command: String, payload: Payload },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Payload {
    Lines(Vec<String>),
    Records(Vec<Record>),
    Categories(Vec<Category>),
    Preformatted(String),
}

/// A list item; papers carry a `title`, projects a `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Paper(Paper),
    Project(Project),
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = Map::<String, Value>::deserialize(deserializer)?;
        let (kind, parsed) = if fields.contains_key("title") {
            let paper = serde_json::from_value::<Paper>(Value::Object(fields));
            ("paper", paper.map(Record::Paper))
        } else if fields.contains_key("name") {
            let project = serde_json::from_value::<Project>(Value::Object(fields));
            ("project", project.map(Record::Project))
        } else {
            return Err(de::Error::custom(
                "record needs a `title` (paper) or a `name` (project)",
            ));
        };
        parsed.map_err(|err| de::Error::custom(format!("invalid {kind} record: {err}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    pub title: String,
    pub authors: String,
    pub venue: String,
    pub description: String,
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    pub tags: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub tech: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub category: String,
    pub items: Vec<String>,
}

/// The typed `whoami` exchange shown before the sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub command: String,
    pub response: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootScript {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub greeting: Option<Greeting>,
    pub sections: Vec<ContentSection>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotId(pub u64);

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "input-{}", self.0)
    }
}
