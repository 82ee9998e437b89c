// src/presentation/openapi/schema.rs
//! JSON schemas derived from documented field paths and parameters.
use crate::application::dto::SimpleType;
use crate::domain::{AttributeKey, Attributes, Descriptor, FieldDescriptor, JsonFieldType};
use serde_json::Value;
use utoipa::openapi::{
    RefOr,
    schema::{
        ArrayBuilder, KnownFormat, ObjectBuilder, OneOfBuilder, Schema, SchemaFormat, SchemaType,
        Type,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Key(String),
    Item,
}

/// Split `data.items[].name` into `data`, `items`, `[]`, `name`.
fn segments(path: &str) -> Vec<Segment> {
    let mut out = Vec::new();
    for part in path.split('.') {
        let mut key = part;
        let mut items = 0;
        while let Some(stripped) = key.strip_suffix("[]") {
            key = stripped;
            items += 1;
        }
        if !key.is_empty() {
            out.push(Segment::Key(key.to_string()));
        }
        out.extend(std::iter::repeat_n(Segment::Item, items));
    }
    out
}

/// Tree of the declared paths; a node without a descriptor was only
/// implied by a longer path.
#[derive(Debug, Default)]
struct Node<'a> {
    descriptor: Option<&'a FieldDescriptor>,
    properties: Vec<(String, Node<'a>)>,
    items: Option<Box<Node<'a>>>,
}

impl<'a> Node<'a> {
    fn child(&mut self, segment: &Segment) -> &mut Node<'a> {
        match segment {
            Segment::Item => self.items.get_or_insert_with(Box::default).as_mut(),
            Segment::Key(key) => {
                let index = match self.properties.iter().position(|(name, _)| name == key) {
                    Some(index) => index,
                    None => {
                        self.properties.push((key.clone(), Node::default()));
                        self.properties.len() - 1
                    }
                };
                &mut self.properties[index].1
            }
        }
    }

    /// `tags[]` typed as an array describes `tags` itself rather than an
    /// array nested in its items.
    fn insert(&mut self, descriptor: &'a FieldDescriptor) {
        let mut path = segments(descriptor.path());
        if descriptor.field_type() == JsonFieldType::Array && path.last() == Some(&Segment::Item) {
            path.pop();
        }
        let mut node = self;
        for segment in &path {
            node = node.child(segment);
        }
        node.descriptor = Some(descriptor);
    }

    fn is_required(&self) -> bool {
        self.descriptor.is_some_and(|d| !d.is_optional())
    }

    /// A node with both item and property children becomes `oneOf` the
    /// array and the object shape.
    fn to_schema(&self) -> Schema {
        let array = self.items.as_ref().map(|items| self.array_schema(items));
        let object = (!self.properties.is_empty()).then(|| self.object_schema());
        match (array, object) {
            (Some(array), Some(object)) => Schema::OneOf(
                OneOfBuilder::new()
                    .item(RefOr::T(array))
                    .item(RefOr::T(object))
                    .build(),
            ),
            (Some(schema), None) | (None, Some(schema)) => schema,
            (None, None) => match self.descriptor {
                Some(descriptor) => field_schema(descriptor),
                None => Schema::Object(ObjectBuilder::new().schema_type(Type::Object).build()),
            },
        }
    }

    fn array_schema(&self, items: &Node<'a>) -> Schema {
        let mut builder = ArrayBuilder::new().items(RefOr::T(items.to_schema()));
        if let Some(description) = self.description() {
            builder = builder.description(Some(description));
        }
        Schema::Array(builder.build())
    }

    fn object_schema(&self) -> Schema {
        let mut builder = ObjectBuilder::new().schema_type(Type::Object);
        for (name, child) in &self.properties {
            builder = builder.property(name, RefOr::T(child.to_schema()));
            if child.is_required() {
                builder = builder.required(name);
            }
        }
        if let Some(descriptor) = self.descriptor {
            builder = decorate(builder, descriptor);
        }
        Schema::Object(builder.build())
    }

    fn description(&self) -> Option<&'a str> {
        self.descriptor
            .map(|d| d.description())
            .filter(|text| !text.is_empty())
    }
}

fn json_schema_type(field_type: JsonFieldType) -> SchemaType {
    match field_type {
        JsonFieldType::Array => SchemaType::new(Type::Array),
        JsonFieldType::Boolean => SchemaType::new(Type::Boolean),
        JsonFieldType::Object => SchemaType::new(Type::Object),
        JsonFieldType::Number => SchemaType::new(Type::Number),
        JsonFieldType::Null => SchemaType::new(Type::Null),
        JsonFieldType::String => SchemaType::new(Type::String),
        JsonFieldType::Varies => SchemaType::AnyValue,
    }
}

fn decorate(mut builder: ObjectBuilder, descriptor: &impl Descriptor) -> ObjectBuilder {
    let description = descriptor.description();
    if !description.is_empty() {
        builder = builder.description(Some(description));
    }
    let format = descriptor.attribute(AttributeKey::Format);
    if !format.is_empty() {
        builder = builder.format(Some(SchemaFormat::Custom(format.to_string())));
    }
    let default = descriptor.attribute(AttributeKey::DefaultValue);
    if !default.is_empty() {
        builder = builder.default(Some(Value::String(default.to_string())));
    }
    let sample = descriptor.attribute(AttributeKey::Sample);
    if !sample.is_empty() {
        builder = builder.examples([Value::String(sample.to_string())]);
    }
    builder
}

/// Schema of a single documented field, ignoring any children.
pub fn field_schema(descriptor: &FieldDescriptor) -> Schema {
    if descriptor.field_type() == JsonFieldType::Array {
        let items = ObjectBuilder::new().schema_type(SchemaType::AnyValue).build();
        let mut builder = ArrayBuilder::new().items(RefOr::T(Schema::Object(items)));
        if !descriptor.description().is_empty() {
            builder = builder.description(Some(descriptor.description()));
        }
        return Schema::Array(builder.build());
    }
    let builder = ObjectBuilder::new().schema_type(json_schema_type(descriptor.field_type()));
    Schema::Object(decorate(builder, descriptor).build())
}

/// Nested body schema for a list of field descriptors. Ignored fields are
/// left out; paths starting with `[]` describe a top-level array.
pub fn fields_schema(fields: &[FieldDescriptor]) -> Schema {
    let mut root = Node::default();
    for descriptor in fields.iter().filter(|d| !d.is_ignored()) {
        root.insert(descriptor);
    }
    root.to_schema()
}

fn attribute(attributes: &Attributes, key: AttributeKey) -> &str {
    attributes.get(key.as_str()).map(String::as_str).unwrap_or("")
}

/// Schema for a header or parameter of the given primitive type.
pub fn simple_schema(simple_type: SimpleType, attributes: &Attributes) -> Schema {
    let mut builder = match simple_type {
        SimpleType::String => ObjectBuilder::new().schema_type(Type::String),
        SimpleType::Integer => ObjectBuilder::new().schema_type(Type::Integer),
        SimpleType::Number => ObjectBuilder::new().schema_type(Type::Number),
        SimpleType::Boolean => ObjectBuilder::new().schema_type(Type::Boolean),
        SimpleType::File => ObjectBuilder::new()
            .schema_type(Type::String)
            .format(Some(SchemaFormat::KnownFormat(KnownFormat::Binary))),
    };
    builder = match attribute(attributes, AttributeKey::ParamType) {
        "long" => builder.format(Some(SchemaFormat::KnownFormat(KnownFormat::Int64))),
        "double" => builder.format(Some(SchemaFormat::KnownFormat(KnownFormat::Double))),
        _ => builder,
    };

    let format = attribute(attributes, AttributeKey::Format);
    if !format.is_empty() {
        builder = builder.format(Some(SchemaFormat::Custom(format.to_string())));
    }
    let default = attribute(attributes, AttributeKey::DefaultValue);
    if !default.is_empty() {
        builder = builder.default(Some(Value::String(default.to_string())));
    }
    let sample = attribute(attributes, AttributeKey::Sample);
    if !sample.is_empty() {
        builder = builder.examples([Value::String(sample.to_string())]);
    }
    Schema::Object(builder.build())
}
