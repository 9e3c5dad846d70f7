//! Encoding scenarios for known profiles.

use tdp_model::{
    ClientProfile, FEATURE_COUNT, Feature, FeatureValue, ModelError, encode,
};

fn scenario_profile() -> ClientProfile {
    ClientProfile {
        age: 30,
        job: "admin.".to_string(),
        marital: "married".to_string(),
        education: "university.degree".to_string(),
        default: "no".to_string(),
        housing: "yes".to_string(),
        loan: "no".to_string(),
        contact: "cellular".to_string(),
        month: "may".to_string(),
        day_of_week: "mon".to_string(),
        campaign: 1,
        pdays: 999,
        previous: 0,
        poutcome: "nonexistent".to_string(),
        emp_var_rate: 1.1,
        cons_price_idx: 93.994,
        cons_conf_idx: -36.4,
        euribor3m: 4.857,
        nr_employed: 5191.0,
    }
}

#[test]
fn scenario_profile_encodes_to_trained_layout() {
    let vector = encode(&scenario_profile()).unwrap();

    assert_eq!(
        vector.to_string(),
        "[30, 0, 0, 4, 0, 1, 0, 0, 4, 0, 1, 999, 0, 1, 1.1, 93.994, -36.4, 4.857, 5191.0]"
    );
    assert_eq!(
        serde_json::to_string(&vector).unwrap(),
        "[30,0,0,4,0,1,0,0,4,0,1,999,0,1,1.1,93.994,-36.4,4.857,5191.0]"
    );
}

#[test]
fn integers_stay_integers_and_floats_stay_floats() {
    let vector = encode(&scenario_profile()).unwrap();

    for (feature, value) in vector.iter() {
        let is_float = matches!(value, FeatureValue::Float(_));
        let expect_float = matches!(
            feature,
            Feature::EmpVarRate
                | Feature::ConsPriceIdx
                | Feature::ConsConfIdx
                | Feature::Euribor3m
                | Feature::NrEmployed
        );
        assert_eq!(is_float, expect_float, "{feature}");
    }
}

#[test]
fn poutcome_codes_follow_table_order() {
    for (value, code) in [("failure", 0), ("nonexistent", 1), ("success", 2)] {
        let profile = ClientProfile {
            poutcome: value.to_string(),
            ..scenario_profile()
        };
        let vector = encode(&profile).unwrap();
        assert_eq!(vector.get(Feature::Poutcome), FeatureValue::Int(code), "{value}");
    }
}

#[test]
fn yes_no_fields_encode_identically() {
    let profile = ClientProfile {
        default: "unknown".to_string(),
        housing: "unknown".to_string(),
        loan: "unknown".to_string(),
        ..scenario_profile()
    };
    let vector = encode(&profile).unwrap();

    assert_eq!(vector.get(Feature::Default), FeatureValue::Int(2));
    assert_eq!(vector.get(Feature::Housing), FeatureValue::Int(2));
    assert_eq!(vector.get(Feature::Loan), FeatureValue::Int(2));
}

#[test]
fn unknown_category_fails_fast() {
    let profile = ClientProfile {
        day_of_week: "sat".to_string(),
        ..scenario_profile()
    };

    let err = encode(&profile).unwrap_err();

    assert_eq!(
        err,
        ModelError::InvalidSelection {
            field: "day_of_week",
            value: "sat".to_string(),
            allowed: &["mon", "tue", "wed", "thu", "fri"],
        }
    );
}

#[test]
fn out_of_range_numbers_pass_through() {
    let profile = ClientProfile {
        age: 140,
        previous: -3,
        nr_employed: 0.0,
        ..scenario_profile()
    };
    let vector = encode(&profile).unwrap();

    assert_eq!(vector.get(Feature::Age), FeatureValue::Int(140));
    assert_eq!(vector.get(Feature::Previous), FeatureValue::Int(-3));
    assert_eq!(vector.get(Feature::NrEmployed), FeatureValue::Float(0.0));
}

#[test]
fn profile_json_round_trip_rejects_unknown_fields() {
    let json = serde_json::to_string(&scenario_profile()).unwrap();
    let parsed: ClientProfile = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, scenario_profile());

    let with_extra = json.replacen('{', r#"{"duration":120,"#, 1);
    assert!(serde_json::from_str::<ClientProfile>(&with_extra).is_err());
}

#[test]
fn vector_has_one_value_per_feature() {
    let vector = encode(&scenario_profile()).unwrap();
    assert_eq!(vector.values().len(), FEATURE_COUNT);
    assert_eq!(vector.to_f64_row()[11], 999.0);
}
