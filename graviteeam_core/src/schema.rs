//! Declarative attribute schemas.
//!
//! A schema describes the shape of a provider, data source or resource to
//! the host: which attributes exist, their types, and whether the user
//! must, may, or cannot set them.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::diagnostics::{Diagnostic, Diagnostics};

/// Nested attributes keyed by name, in declaration order.
pub type Attributes = IndexMap<String, Attribute>;

/// Top level schema of a provider, data source or resource.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Schema {
    /// Markdown description used by documentation generators.
    pub description: String,
    /// Attributes by name.
    pub attributes: Attributes,
}

impl Schema {
    /// Empty schema with a description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            attributes: IndexMap::new(),
        }
    }

    /// Add an attribute.
    pub fn attribute(mut self, name: &str, attribute: Attribute) -> Self {
        self.attributes.insert(name.to_owned(), attribute);
        self
    }

    /// Check user supplied configuration against the schema.
    ///
    /// Required attributes must be present and non-null, and every key
    /// must be declared. Computed-only attributes may be present since
    /// prior state is fed back through the same path.
    pub fn validate_config(&self, config: &Value) -> Diagnostics {
        let mut diags = Diagnostics::new();
        match config {
            Value::Object(map) => validate_object(&self.attributes, map, "", &mut diags),
            other => diags.add_error(
                "Invalid configuration",
                format!("expected an object, got: {other}"),
            ),
        }
        diags
    }
}

fn validate_object(
    attributes: &Attributes,
    map: &serde_json::Map<String, Value>,
    prefix: &str,
    diags: &mut Diagnostics,
) {
    for (name, attr) in attributes {
        let path = format!("{prefix}{name}");
        match map.get(name) {
            None | Some(Value::Null) if attr.required => diags.push(
                Diagnostic::error(
                    "Missing required argument",
                    format!("The argument \"{name}\" is required, but no definition was found."),
                )
                .at(path),
            ),
            Some(Value::Object(inner)) => {
                if let AttributeType::SingleNested { attributes } = &attr.kind {
                    validate_object(attributes, inner, &format!("{path}."), diags)
                }
            }
            _ => (),
        }
    }

    for key in map.keys() {
        if !attributes.contains_key(key) {
            diags.push(
                Diagnostic::error(
                    "Unsupported argument",
                    format!("An argument named \"{key}\" is not expected here."),
                )
                .at(format!("{prefix}{key}")),
            );
        }
    }
}

/// Element type of primitive collections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    /// String elements.
    String,
    /// Boolean elements.
    Bool,
    /// Numeric elements.
    Number,
}

/// The value type of an attribute.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AttributeType {
    /// A string.
    String,
    /// A boolean.
    Bool,
    /// A number.
    Number,
    /// An ordered list of primitives.
    List {
        /// Type of the list elements.
        element_type: ElementType,
    },
    /// A single nested object.
    SingleNested {
        /// Attributes of the nested object.
        attributes: Attributes,
    },
    /// An ordered list of nested objects.
    ListNested {
        /// Attributes of each nested object.
        attributes: Attributes,
    },
    /// A map from string keys to nested objects.
    MapNested {
        /// Attributes of each nested object.
        attributes: Attributes,
    },
}

/// A single attribute declaration.
#[derive(Clone, Debug, Serialize)]
pub struct Attribute {
    /// Value type.
    #[serde(flatten)]
    pub kind: AttributeType,
    /// Markdown description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The user must set this attribute.
    pub required: bool,
    /// The user may set this attribute.
    pub optional: bool,
    /// The provider sets this attribute.
    pub computed: bool,
    /// The value should be hidden from output.
    pub sensitive: bool,
}

impl Attribute {
    fn of(kind: AttributeType) -> Self {
        Self {
            kind,
            description: None,
            required: false,
            optional: false,
            computed: false,
            sensitive: false,
        }
    }

    /// String attribute.
    pub fn string() -> Self {
        Self::of(AttributeType::String)
    }

    /// Boolean attribute.
    pub fn bool() -> Self {
        Self::of(AttributeType::Bool)
    }

    /// Numeric attribute.
    pub fn number() -> Self {
        Self::of(AttributeType::Number)
    }

    /// List of strings.
    pub fn string_list() -> Self {
        Self::of(AttributeType::List {
            element_type: ElementType::String,
        })
    }

    /// Single nested object.
    pub fn single_nested(attributes: Attributes) -> Self {
        Self::of(AttributeType::SingleNested { attributes })
    }

    /// List of nested objects.
    pub fn list_nested(attributes: Attributes) -> Self {
        Self::of(AttributeType::ListNested { attributes })
    }

    /// Map of nested objects.
    pub fn map_nested(attributes: Attributes) -> Self {
        Self::of(AttributeType::MapNested { attributes })
    }

    /// Mark as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark as optional.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Mark as computed.
    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    /// Mark as sensitive.
    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    /// Set the markdown description.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Build an ordered attribute map from `(name, attribute)` pairs.
pub fn attributes<const N: usize>(pairs: [(&str, Attribute); N]) -> Attributes {
    pairs
        .into_iter()
        .map(|(name, attr)| (name.to_owned(), attr))
        .collect()
}
