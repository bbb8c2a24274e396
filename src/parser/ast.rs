/// Abstract Syntax Tree for IDL files

/// A parsed IDL file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub items: Vec<Item>,
}

impl Document {
    /// Function declarations in declaration order
    pub fn functions(&self) -> impl Iterator<Item = &Function> {
        self.items.iter().filter_map(|item| match item {
            Item::Function(function) => Some(function),
            Item::Constant(_) => None,
        })
    }

    /// Constant declarations in declaration order
    pub fn constants(&self) -> impl Iterator<Item = &Constant> {
        self.items.iter().filter_map(|item| match item {
            Item::Constant(constant) => Some(constant),
            Item::Function(_) => None,
        })
    }

    /// Functions tagged with the `callback` attribute
    pub fn callbacks(&self) -> impl Iterator<Item = &Function> {
        self.functions().filter(|f| f.attributes.has("callback"))
    }
}

/// Top-level declaration
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Constant(Constant),
    Function(Function),
}

/// Constant declaration: const type NAME = value;
#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    pub type_name: String,
    pub name: String,
    pub value: Value,
}

/// Function declaration: [attrs] type Name(params);
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub attributes: Attributes,
    pub return_type: String,
    pub name: String,
    pub params: Vec<Parameter>,
}

/// Function parameter: [attrs] type name [= default]
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub attributes: Attributes,
    pub type_name: String,
    pub name: String,
    pub default: Option<Value>,
}

/// Attribute: name [= value]
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: Option<Value>,
}

/// Ordered attribute list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes(pub Vec<Attribute>);

impl Attributes {
    /// Whether an attribute with this name is present, with or without a value
    pub fn has(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Value of the named attribute, if present and valued
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.find(name).and_then(|attr| attr.value.as_ref())
    }

    pub fn find(&self, name: &str) -> Option<&Attribute> {
        self.0.iter().find(|attr| attr.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Literal or constant reference
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// Reference to a named constant
    Ident(String),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}
