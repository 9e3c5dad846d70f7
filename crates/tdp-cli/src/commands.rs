use std::io::{self, IsTerminal};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use tdp_classifier::{LoadedModel, Predictor, load_model};
use tdp_cli::profile::{check_profile, encode_profile, read_profile};
use tdp_cli::render::{PredictOutput, model_table, print_prediction, schema_table, vector_table};
use tdp_model::ClientProfile;

use crate::cli::{EncodeArgs, ModelArgs, PredictArgs, ProfileArgs};

pub fn run_predict(args: &PredictArgs) -> Result<()> {
    let _span = info_span!("predict").entered();
    let model = load(&args.model.model)?;
    let predictor = Predictor::new(model.classifier().clone());

    let profile = resolve_profile(&args.profile)?;
    let features = encode_profile(&profile)?;
    let result = predictor.predict_features(&features);
    info!(label = result.label.class(), "prediction complete");

    if args.json {
        let output = PredictOutput::new(&result, &features);
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("serialize result")?
        );
    } else {
        print_prediction(&result, !io::stdout().is_terminal());
    }
    Ok(())
}

pub fn run_encode(args: &EncodeArgs) -> Result<()> {
    let profile = resolve_profile(&args.profile)?;
    let features = encode_profile(&profile)?;
    if args.json {
        println!(
            "{}",
            serde_json::to_string(&features).context("serialize features")?
        );
    } else {
        println!("{features}");
        println!("{}", vector_table(&features));
    }
    Ok(())
}

pub fn run_schema() -> Result<()> {
    println!("{}", schema_table());
    Ok(())
}

pub fn run_model(args: &ModelArgs) -> Result<()> {
    let model = load(&args.model.model)?;
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(model.summary()).context("serialize summary")?
        );
    } else {
        println!("{}", model_table(model.summary()));
    }
    Ok(())
}

fn load(path: &Path) -> Result<LoadedModel> {
    load_model(path).with_context(|| format!("load model {}", path.display()))
}

/// Profile from `--profile FILE` or from the field flags, validated against
/// the category tables.
fn resolve_profile(args: &ProfileArgs) -> Result<ClientProfile> {
    let profile = match &args.profile_file {
        Some(path) => read_profile(path)?,
        None => args.to_profile(),
    };
    check_profile(profile)
}
