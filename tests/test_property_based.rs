//! Property-based tests for blankgen
//!
//! These tests use proptest to generate random valid IDL documents and
//! check the generator's output against what each document declares.


use blankgen::codegen::generate_to_string;
use blankgen::*;
use proptest::prelude::*;
use proptest_strategies::*;

// ════════════════════════════════════════════════════════════
// Lexer Property Tests
// ════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Lexer should never fail on valid identifiers
    #[test]
    fn lexer_handles_identifiers(ident in identifier()) {
        let mut lexer = SimpleLexer::new(ident);
        let result = lexer.tokenize();
        assert!(result.is_ok(), "Lexer failed on valid identifier");
    }

    /// Lexer should skip comments with arbitrary printable content
    #[test]
    fn lexer_strips_comments(content in "[a-zA-Z0-9_ ;,\\[\\]()=*]{0,100}") {
        let input = format!("// {}\n/* {} */", content, content.replace("*/", ""));
        let mut lexer = SimpleLexer::new(input);
        let tokens = lexer.tokenize().expect("Lexer failed");
        assert!(tokens.is_empty());
    }
}

// ════════════════════════════════════════════════════════════
// Parser Property Tests
// ════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// Parser should accept every generated document
    #[test]
    fn parser_handles_valid_documents((content, functions) in document()) {
        let document = parse_idl(&content);
        assert!(document.is_ok(), "Parser failed on:\n{}", content);
        assert_eq!(document.unwrap().functions().count(), functions.len());
    }

    /// Parser keeps names, parameter order and attributes
    #[test]
    fn parser_extracts_functions(decl in function()) {
        let document = parse_idl(&decl.to_idl()).expect("Parser failed");
        let parsed = document.functions().next().expect("no function");

        assert_eq!(&parsed.name, &decl.name);
        assert_eq!(parsed.attributes.has("callback"), decl.callback);
        assert_eq!(
            parsed.attributes.get("badret").and_then(Value::as_bool),
            decl.badret
        );

        let params: Vec<(&str, &str)> = parsed
            .params
            .iter()
            .map(|p| (p.type_name.as_str(), p.name.as_str()))
            .collect();
        let expected: Vec<(&str, &str)> = decl
            .params
            .iter()
            .map(|(ty, name)| (*ty, name.as_str()))
            .collect();
        assert_eq!(params, expected);
    }
}

// ════════════════════════════════════════════════════════════
// Code Generation Property Tests
// ════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// One stub per callback, in declaration order, returning !badret
    #[test]
    fn codegen_emits_callback_stubs((content, functions) in document()) {
        let document = parse_idl(&content).expect("Parser failed");
        let output = generate_to_string(&document).expect("Codegen failed");

        let stubs: Vec<&str> = output
            .split("\n\n")
            .filter(|block| block.starts_with("PLUGIN_EXPORT bool PLUGIN_CALL "))
            .skip(1) // Load
            .collect();
        let callbacks: Vec<_> = functions.iter().filter(|f| f.callback).collect();

        assert_eq!(stubs.len(), callbacks.len());

        for (stub, decl) in stubs.iter().zip(&callbacks) {
            let params: Vec<String> = decl
                .params
                .iter()
                .map(|(ty, name)| {
                    let c_type = PrimitiveType::from_name(ty).unwrap().c_type();
                    format!("{} {}", c_type, name)
                })
                .collect();
            let expected = format!(
                "PLUGIN_EXPORT bool PLUGIN_CALL {}({}) {{\n  return {};\n}}",
                decl.name,
                params.join(", "),
                !decl.badret.unwrap_or(false)
            );
            assert_eq!(*stub, expected);
        }
    }

    /// Output always starts with the fixed preamble and ends with a blank line
    #[test]
    fn codegen_output_framing((content, _functions) in document()) {
        let document = parse_idl(&content).expect("Parser failed");
        let output = generate_to_string(&document).expect("Codegen failed");

        assert!(output.starts_with("#include <sampgdk/a_objects.h>\n"));
        assert!(output.ends_with("}\n\n"));
        assert_eq!(output.matches("extern void *pAMXFunctions;").count(), 1);
    }
}
