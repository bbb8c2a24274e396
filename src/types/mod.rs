/// IDL primitive types and their C spellings

/// Primitive types a callback parameter may be declared with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Int,
    Float,
    Bool,
    String,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 4] = [
        PrimitiveType::Int,
        PrimitiveType::Float,
        PrimitiveType::Bool,
        PrimitiveType::String,
    ];

    /// Look up an IDL type name
    pub fn from_name(name: &str) -> Option<PrimitiveType> {
        match name {
            "int" => Some(PrimitiveType::Int),
            "float" => Some(PrimitiveType::Float),
            "bool" => Some(PrimitiveType::Bool),
            "string" => Some(PrimitiveType::String),
            _ => None,
        }
    }

    /// Name as written in IDL
    pub fn idl_name(&self) -> &'static str {
        match self {
            PrimitiveType::Int => "int",
            PrimitiveType::Float => "float",
            PrimitiveType::Bool => "bool",
            PrimitiveType::String => "string",
        }
    }

    /// Type as written in the generated C source
    pub fn c_type(&self) -> &'static str {
        match self {
            PrimitiveType::Int => "int",
            PrimitiveType::Float => "float",
            PrimitiveType::Bool => "bool",
            PrimitiveType::String => "const char *",
        }
    }
}
