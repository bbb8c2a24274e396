//! Blank plugin source generation
//!
//! Emits the fixed plugin lifecycle boilerplate followed by one stub per
//! `callback` function of the IDL document.

use std::io::Write;

use super::CodegenError;
use crate::parser::ast::{Document, Function, Value};
use crate::types::PrimitiveType;

const INCLUDES: [&str; 6] = [
    "sampgdk/a_objects.h",
    "sampgdk/a_players.h",
    "sampgdk/a_samp.h",
    "sampgdk/a_vehicles.h",
    "sampgdk/core.h",
    "sampgdk/sdk.h",
];

/// Write the complete blank plugin source for `document` to `out`
pub fn generate<W: Write>(out: &mut W, document: &Document) -> Result<(), CodegenError> {
    generate_preamble(out)?;
    generate_lifecycle(out)?;

    for callback in document.callbacks() {
        generate_callback_stub(out, callback)?;
    }

    Ok(())
}

/// Generate into an in-memory buffer
pub fn generate_to_string(document: &Document) -> Result<String, CodegenError> {
    let mut buffer = Vec::new();
    generate(&mut buffer, document)?;
    String::from_utf8(buffer)
        .map_err(|e| CodegenError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

fn generate_preamble<W: Write>(out: &mut W) -> Result<(), CodegenError> {
    for header in INCLUDES {
        writeln!(out, "#include <{}>", header)?;
    }
    writeln!(out)?;

    writeln!(out, "extern void *pAMXFunctions;")?;
    writeln!(out)?;

    Ok(())
}

fn generate_lifecycle<W: Write>(out: &mut W) -> Result<(), CodegenError> {
    writeln!(out, "PLUGIN_EXPORT unsigned int PLUGIN_CALL Supports() {{")?;
    writeln!(
        out,
        "  return sampgdk::Supports() | SUPPORTS_AMX_NATIVES | SUPPORTS_PROCESS_TICK;"
    )?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "PLUGIN_EXPORT bool PLUGIN_CALL Load(void **ppData) {{")?;
    writeln!(out, "  pAMXFunctions = ppData[PLUGIN_DATA_AMX_EXPORTS];")?;
    writeln!(out, "  return sampgdk::Load(ppData);")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "PLUGIN_EXPORT void PLUGIN_CALL Unload() {{")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    for name in ["AmxLoad", "AmxUnload"] {
        writeln!(out, "PLUGIN_EXPORT int PLUGIN_CALL {}(AMX *amx) {{", name)?;
        writeln!(out, "  return AMX_ERR_NONE;")?;
        writeln!(out, "}}")?;
        writeln!(out)?;
    }

    Ok(())
}

fn generate_callback_stub<W: Write>(out: &mut W, callback: &Function) -> Result<(), CodegenError> {
    let params = parameter_list(callback)?;
    let badret = bad_return(callback)?;

    writeln!(
        out,
        "PLUGIN_EXPORT bool PLUGIN_CALL {}({}) {{",
        callback.name, params
    )?;
    // A bad-return callback reports failure with false
    writeln!(out, "  return {};", !badret)?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    Ok(())
}

/// "type name" pairs joined with ", "
fn parameter_list(function: &Function) -> Result<String, CodegenError> {
    let params = function
        .params
        .iter()
        .map(|param| {
            PrimitiveType::from_name(&param.type_name)
                .map(|ty| format!("{} {}", ty.c_type(), param.name))
                .ok_or_else(|| CodegenError::UnmappedType {
                    function: function.name.clone(),
                    parameter: param.name.clone(),
                    type_name: param.type_name.clone(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(params.join(", "))
}

/// Truth value of the `badret` attribute, `false` when absent
fn bad_return(function: &Function) -> Result<bool, CodegenError> {
    let attr = match function.attributes.find("badret") {
        Some(attr) => attr,
        None => return Ok(false),
    };

    match &attr.value {
        Some(Value::Bool(b)) => Ok(*b),
        Some(Value::Int(n)) => Ok(*n != 0),
        _ => Err(CodegenError::InvalidAttribute {
            function: function.name.clone(),
            attribute: attr.name.clone(),
            expected: "a boolean or integer value".to_string(),
        }),
    }
}

/// Check that `document` can be generated without writing anything
pub fn validate(document: &Document) -> Result<(), CodegenError> {
    for callback in document.callbacks() {
        parameter_list(callback)?;
        bad_return(callback)?;
    }
    Ok(())
}
