// ABOUTME: Integration tests for validated names, prefixes, regions and env pairs.
// ABOUTME: Tests parsing, validation, and properties of the qualified name.

use lambda_deploy::types::*;
use proptest::prelude::*;

mod function_name_tests {
    use super::*;

    #[test]
    fn accepts_default_prompt_value() {
        let name = FunctionName::new("myFunFunction").unwrap();
        assert_eq!(name.as_str(), "myFunFunction");
        assert_eq!(name.package_name(), "myfunfunction");
    }

    #[test]
    fn rejects_path_separators() {
        assert_eq!(
            FunctionName::new("../escape"),
            Err(FunctionNameError::InvalidChar('.'))
        );
        assert_eq!(
            FunctionName::new("a/b"),
            Err(FunctionNameError::InvalidChar('/'))
        );
    }

    #[test]
    fn rejects_blank_and_oversized_names() {
        assert_eq!(FunctionName::new("  "), Err(FunctionNameError::Empty));
        let long = "a".repeat(MAX_FUNCTION_NAME_LEN + 1);
        assert_eq!(FunctionName::new(&long), Err(FunctionNameError::TooLong));
    }
}

mod qualified_name_tests {
    use super::*;

    fn name(value: &str) -> FunctionName {
        FunctionName::new(value).unwrap()
    }

    #[test]
    fn prefix_is_joined_with_dash() {
        let prefix = FunctionPrefix::parse_optional("acme").unwrap();
        let qualified = QualifiedName::new(&name("orders"), prefix.as_ref()).unwrap();
        assert_eq!(qualified.as_str(), "acme-orders");
    }

    #[test]
    fn no_prefix_keeps_plain_name() {
        for raw in ["", "null", "  null  "] {
            let prefix = FunctionPrefix::parse_optional(raw).unwrap();
            assert!(prefix.is_none(), "{raw:?} should mean no prefix");
            let qualified = QualifiedName::new(&name("orders"), prefix.as_ref()).unwrap();
            assert_eq!(qualified.as_str(), "orders");
        }
    }

    #[test]
    fn combined_length_is_limited() {
        let prefix = FunctionPrefix::parse_optional(&"p".repeat(20)).unwrap();
        let err = QualifiedName::new(&name(&"f".repeat(60)), prefix.as_ref()).unwrap_err();
        assert!(matches!(err, PrefixError::TooLong(_)));
    }

    proptest! {
        #[test]
        fn qualified_name_ends_with_function_name(
            prefix in "[a-zA-Z0-9_]{1,20}",
            function in "[a-zA-Z0-9_-]{1,40}",
        ) {
            let prefix = FunctionPrefix::parse_optional(&prefix).unwrap();
            let function = name(&function);
            let qualified = QualifiedName::new(&function, prefix.as_ref()).unwrap();
            prop_assert!(qualified.as_str().ends_with(function.as_str()));
            prop_assert!(qualified.as_str().len() <= MAX_FUNCTION_NAME_LEN);
        }
    }
}

mod region_tests {
    use super::*;

    #[test]
    fn every_listed_region_parses() {
        for raw in REGIONS {
            let region: Region = raw.parse().unwrap();
            assert_eq!(region.as_str(), *raw);
            assert_eq!(REGIONS[region.index()], *raw);
        }
    }

    #[test]
    fn unknown_region_is_rejected() {
        assert_eq!(
            Region::new("mars-north-1"),
            Err(RegionError("mars-north-1".to_string()))
        );
    }
}

mod env_var_tests {
    use super::*;

    #[test]
    fn splits_on_first_equals() {
        let var: EnvVar = "DSN=postgres://u:p@h/db?sslmode=require".parse().unwrap();
        assert_eq!(var.key(), "DSN");
        assert_eq!(var.value(), "postgres://u:p@h/db?sslmode=require");
    }

    #[test]
    fn empty_value_is_allowed() {
        let var = EnvVar::parse("FLAG=").unwrap();
        assert_eq!(var.into_pair(), ("FLAG".to_string(), String::new()));
    }

    #[test]
    fn malformed_pairs_are_rejected() {
        assert!(matches!(
            EnvVar::parse("NOVALUE"),
            Err(EnvVarError::MissingSeparator(_))
        ));
        assert_eq!(EnvVar::parse("=x"), Err(EnvVarError::EmptyKey));
        assert!(matches!(
            EnvVar::parse("1ST=x"),
            Err(EnvVarError::InvalidStart(_))
        ));
        assert_eq!(EnvVar::parse("A-B=x"), Err(EnvVarError::InvalidChar('-')));
    }
}
