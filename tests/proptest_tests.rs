// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests check precedence, naming and coercion over arbitrary inputs.

use bindargs::domain::naming::{env_name, long_name_from_ident};
use bindargs::prelude::*;
use proptest::prelude::*;

fn order_strategy() -> impl Strategy<Value = Vec<SourceKind>> {
    Just(vec![SourceKind::File, SourceKind::Env, SourceKind::Args]).prop_shuffle()
}

// The last source in the order that supplies a value decides value and origin
proptest! {
    #[test]
    fn test_last_matching_source_wins(
        order in order_strategy(),
        env_value in "[a-z]{1,12}",
        arg_value in "[a-z]{1,12}",
    ) {
        let mut service = ArgService::builder()
            .with_env_prefix("P_")
            .with_source_order(order.clone())
            .with_arg(ArgDescriptor::string("host"))
            .build()
            .unwrap();

        let env_entry = format!("P_HOST={}", env_value);
        service
            .resolve(["--host", arg_value.as_str()], [env_entry.as_str()])
            .unwrap();

        let env_pos = order.iter().position(|k| *k == SourceKind::Env).unwrap();
        let args_pos = order.iter().position(|k| *k == SourceKind::Args).unwrap();
        let host = service.get("host").unwrap();

        if args_pos > env_pos {
            prop_assert_eq!(host.as_str().unwrap(), arg_value.as_str());
            prop_assert_eq!(host.origin(), Origin::FromArgs);
        } else {
            prop_assert_eq!(host.as_str().unwrap(), env_value.as_str());
            prop_assert_eq!(host.origin(), Origin::FromEnv);
        }
    }
}

// Any i64 written on the command line comes back unchanged
proptest! {
    #[test]
    fn test_integer_tokens_parse(n in prop::num::i64::ANY) {
        let mut service = ArgService::builder()
            .with_arg(ArgDescriptor::integer("port"))
            .build()
            .unwrap();
        service.resolve(["--port".to_string(), n.to_string()], Vec::<String>::new()).unwrap();
        prop_assert_eq!(service.get("port").unwrap().as_int().unwrap(), n);
    }
}

// Tokens with a letter in them never parse as integers
proptest! {
    #[test]
    fn test_non_numeric_tokens_abort(s in "[0-9]{0,4}[a-zA-Z][a-zA-Z0-9]{0,8}") {
        let mut service = ArgService::builder()
            .with_arg(ArgDescriptor::integer("port"))
            .build()
            .unwrap();
        let result = service.resolve(["--port".to_string(), s], Vec::<String>::new());
        let is_conversion_error = matches!(result, Err(ArgError::TypeConversion { .. }));
        prop_assert!(is_conversion_error);
    }
}

// Derived long names are lowercase and never contain underscores
proptest! {
    #[test]
    fn test_long_names_are_kebab_case(ident in "[A-Za-z][A-Za-z0-9_]{0,20}") {
        let long = long_name_from_ident(&ident);
        prop_assert_eq!(long.to_lowercase(), long.clone());
        prop_assert!(!long.contains('_'));
    }
}

// Environment names always start with the prefix and have no lowercase letters
proptest! {
    #[test]
    fn test_env_names_are_prefixed_uppercase(
        prefix in "[A-Z]{0,6}_?",
        long in "[a-z][a-z0-9-]{0,15}",
    ) {
        let name = env_name(&prefix, &long);
        prop_assert!(name.starts_with(&prefix));
        prop_assert!(!name.chars().any(|c| c.is_ascii_lowercase()));
        prop_assert_eq!(name.len(), prefix.len() + long.len());
    }
}

// Serialization only ever reads values, so repeated calls agree
proptest! {
    #[test]
    fn test_serialization_is_stable(host in "[a-z]{0,10}", debug in any::<bool>()) {
        let mut service = ArgService::builder()
            .with_arg(ArgDescriptor::string("host"))
            .with_arg(ArgDescriptor::bool("debug"))
            .build()
            .unwrap();
        service.set("host", host.clone()).unwrap();
        service.set("debug", debug).unwrap();

        let first = service.to_command_line();
        prop_assert_eq!(&first, &service.to_command_line());
        prop_assert_eq!(first.contains("--host"), !host.is_empty());
        prop_assert_eq!(first.contains("--debug"), debug);
    }
}
