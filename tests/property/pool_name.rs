// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Pool Name Validation

use cim_resource_pool::domain::{PoolName, PoolNameError};
use proptest::prelude::*;

/// Names made only of allowed characters, within the length limit
fn legal_name() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,64}"
}

/// A character outside the allowed set
fn illegal_char() -> impl Strategy<Value = char> {
    any::<char>().prop_filter("must be disallowed", |ch| {
        !(ch.is_ascii_alphanumeric() || *ch == '-' || *ch == '_')
    })
}

proptest! {
    #[test]
    fn prop_legal_names_validate(name in legal_name()) {
        prop_assert_eq!(PoolName::new_unchecked(name).validate(), Ok(()));
    }

    #[test]
    fn prop_illegal_character_rejected(
        prefix in "[a-z]{0,16}",
        ch in illegal_char(),
        suffix in "[a-z]{0,16}",
    ) {
        let name = format!("{}{}{}", prefix, ch, suffix);
        prop_assume!(name.len() <= PoolName::MAX_LENGTH);
        prop_assert_eq!(
            PoolName::new_unchecked(name).validate(),
            Err(PoolNameError::Characters)
        );
    }

    #[test]
    fn prop_over_long_names_rejected_whatever_the_characters(
        extra in 1usize..64,
        ch in any::<char>(),
    ) {
        let name: String = std::iter::repeat(ch)
            .take(PoolName::MAX_LENGTH + extra)
            .collect();
        prop_assert_eq!(
            PoolName::new_unchecked(name).validate(),
            Err(PoolNameError::Length)
        );
    }

    #[test]
    fn prop_validated_construction_agrees_with_validate(name in ".{0,32}") {
        let checked = PoolName::new(name.clone());
        let unchecked = PoolName::new_unchecked(name).validate();
        prop_assert_eq!(checked.map(|_| ()), unchecked);
    }
}
