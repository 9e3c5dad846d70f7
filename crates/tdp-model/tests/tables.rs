//! Property tests for the category tables and the encoder.

use std::collections::HashSet;

use proptest::prelude::*;
use proptest::sample::Index;

use tdp_model::category::ALL_TABLES;
use tdp_model::{ClientProfile, Feature, FeatureValue, FieldMut, ModelError, encode};

fn categorical_features() -> Vec<Feature> {
    Feature::ALL
        .into_iter()
        .filter(|feature| feature.table().is_some())
        .collect()
}

fn set_choice(profile: &mut ClientProfile, feature: Feature, value: &str) {
    if let FieldMut::Choice(slot) = profile.field_mut(feature) {
        *slot = value.to_string();
    }
}

fn arb_profile() -> impl Strategy<Value = ClientProfile> {
    (
        (any::<i64>(), any::<i64>(), any::<i64>(), any::<i64>()),
        (
            -5.0f64..5.0,
            90.0f64..100.0,
            -60.0f64..0.0,
            0.0f64..6.0,
            4900.0f64..5300.0,
        ),
        prop::collection::vec(any::<Index>(), 10),
    )
        .prop_map(|(ints, floats, picks)| {
            let mut profile = ClientProfile {
                age: ints.0,
                campaign: ints.1,
                pdays: ints.2,
                previous: ints.3,
                emp_var_rate: floats.0,
                cons_price_idx: floats.1,
                cons_conf_idx: floats.2,
                euribor3m: floats.3,
                nr_employed: floats.4,
                ..ClientProfile::default()
            };
            for (feature, pick) in categorical_features().into_iter().zip(picks) {
                let table = feature.table().unwrap();
                set_choice(&mut profile, feature, *pick.get(table.choices()));
            }
            profile
        })
}

#[test]
fn every_table_is_a_dense_bijection() {
    for table in ALL_TABLES {
        let unique: HashSet<_> = table.choices().iter().collect();
        assert_eq!(unique.len(), table.len(), "duplicate key in {}", table.name());

        for (position, choice) in table.choices().iter().enumerate() {
            let code = table.code(choice).unwrap();
            assert_eq!(usize::from(code), position, "{}: {choice}", table.name());
            assert_eq!(table.value_of(code), Some(*choice));
        }
        assert_eq!(table.value_of(u8::try_from(table.len()).unwrap()), None);
    }
}

proptest! {
    #[test]
    fn encoded_code_matches_direct_lookup(
        feature in prop::sample::select(categorical_features()),
        pick in any::<Index>(),
    ) {
        let table = feature.table().unwrap();
        let value = *pick.get(table.choices());
        let mut profile = ClientProfile::default();
        set_choice(&mut profile, feature, value);

        let vector = encode(&profile).unwrap();

        prop_assert_eq!(
            vector.get(feature),
            FeatureValue::Int(i64::from(table.code(value).unwrap()))
        );
    }

    #[test]
    fn encoding_is_deterministic(profile in arb_profile()) {
        let first = encode(&profile).unwrap();
        let second = encode(&profile.clone()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn numeric_fields_are_copied(profile in arb_profile()) {
        let vector = encode(&profile).unwrap();
        prop_assert_eq!(vector.get(Feature::Age), FeatureValue::Int(profile.age));
        prop_assert_eq!(vector.get(Feature::Pdays), FeatureValue::Int(profile.pdays));
        prop_assert_eq!(
            vector.get(Feature::Euribor3m),
            FeatureValue::Float(profile.euribor3m)
        );
    }

    #[test]
    fn values_outside_a_table_are_rejected(
        feature in prop::sample::select(categorical_features()),
        value in "[a-z.-]{1,12}",
    ) {
        let table = feature.table().unwrap();
        prop_assume!(!table.contains(&value));
        let mut profile = ClientProfile::default();
        set_choice(&mut profile, feature, &value);

        let err = encode(&profile).unwrap_err();

        let is_field_error = matches!(
            err,
            ModelError::InvalidSelection { field, .. } if field == feature.name()
        );
        prop_assert!(is_field_error);
    }
}
