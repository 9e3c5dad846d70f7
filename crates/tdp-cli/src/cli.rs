//! CLI argument definitions for the term deposit predictor.

use std::path::PathBuf;

use clap::builder::PossibleValuesParser;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use tdp_classifier::DEFAULT_MODEL_FILE;
use tdp_model::{ClientProfile, Feature};

#[derive(Parser)]
#[command(
    name = "tdp",
    version,
    about = "Bank Term Deposit Subscription Predictor",
    long_about = "Predict whether a client will subscribe based on their profile.\n\n\
                  Encodes a bank-marketing client profile into the classifier's\n\
                  19-column feature vector and scores it with an XGBoost JSON model."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include client profile values in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Score one client profile and show the result with the model insights.
    Predict(PredictArgs),

    /// Print the feature vector for a profile without loading a model.
    Encode(EncodeArgs),

    /// List the feature schema: order, kinds, bounds and category codes.
    Schema,

    /// Load a model artifact and describe it.
    Model(ModelArgs),
}

#[derive(Args)]
pub struct ModelPathArgs {
    /// Path to the XGBoost JSON model artifact.
    #[arg(long = "model", value_name = "PATH", default_value = DEFAULT_MODEL_FILE)]
    pub model: PathBuf,
}

#[derive(Args)]
pub struct PredictArgs {
    #[command(flatten)]
    pub model: ModelPathArgs,

    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Print the result as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct EncodeArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Print the vector as a JSON array.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct ModelArgs {
    #[command(flatten)]
    pub model: ModelPathArgs,

    /// Print the summary as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

/// Argument ids of the field flags; they cannot be mixed with `--profile`.
const PROFILE_FIELD_ARGS: [&str; 19] = [
    "age",
    "job",
    "marital",
    "education",
    "default",
    "housing",
    "loan",
    "contact",
    "month",
    "day_of_week",
    "campaign",
    "pdays",
    "previous",
    "poutcome",
    "emp_var_rate",
    "cons_price_idx",
    "cons_conf_idx",
    "euribor3m",
    "nr_employed",
];

/// Client profile given field by field. Defaults match the form's initial state.
#[derive(Args)]
#[command(next_help_heading = "Profile")]
pub struct ProfileArgs {
    /// Read the whole profile from a JSON file instead of the field flags.
    #[arg(
        long = "profile",
        value_name = "FILE",
        conflicts_with_all = PROFILE_FIELD_ARGS
    )]
    pub profile_file: Option<PathBuf>,

    #[arg(long, default_value_t = 30, allow_negative_numbers = true)]
    pub age: i64,
    #[arg(long, default_value = "admin.", value_parser = choices(Feature::Job))]
    pub job: String,
    #[arg(long, default_value = "married", value_parser = choices(Feature::Marital))]
    pub marital: String,
    #[arg(long, default_value = "basic.4y", value_parser = choices(Feature::Education))]
    pub education: String,
    #[arg(long, default_value = "no", value_parser = choices(Feature::Default))]
    pub default: String,
    #[arg(long, default_value = "no", value_parser = choices(Feature::Housing))]
    pub housing: String,
    #[arg(long, default_value = "no", value_parser = choices(Feature::Loan))]
    pub loan: String,
    #[arg(long, default_value = "cellular", value_parser = choices(Feature::Contact))]
    pub contact: String,
    #[arg(long, default_value = "jan", value_parser = choices(Feature::Month))]
    pub month: String,
    #[arg(long = "day-of-week", default_value = "mon", value_parser = choices(Feature::DayOfWeek))]
    pub day_of_week: String,
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub campaign: i64,
    #[arg(long, default_value_t = 999, allow_negative_numbers = true)]
    pub pdays: i64,
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub previous: i64,
    #[arg(long, default_value = "failure", value_parser = choices(Feature::Poutcome))]
    pub poutcome: String,
    #[arg(long = "emp-var-rate", default_value_t = 1.1, allow_negative_numbers = true)]
    pub emp_var_rate: f64,
    #[arg(long = "cons-price-idx", default_value_t = 93.994, allow_negative_numbers = true)]
    pub cons_price_idx: f64,
    #[arg(long = "cons-conf-idx", default_value_t = -36.4, allow_negative_numbers = true)]
    pub cons_conf_idx: f64,
    #[arg(long, default_value_t = 4.857, allow_negative_numbers = true)]
    pub euribor3m: f64,
    #[arg(long = "nr-employed", default_value_t = 5191.0, allow_negative_numbers = true)]
    pub nr_employed: f64,
}

impl ProfileArgs {
    /// Profile built from the field flags.
    pub fn to_profile(&self) -> ClientProfile {
        ClientProfile {
            age: self.age,
            job: self.job.clone(),
            marital: self.marital.clone(),
            education: self.education.clone(),
            default: self.default.clone(),
            housing: self.housing.clone(),
            loan: self.loan.clone(),
            contact: self.contact.clone(),
            month: self.month.clone(),
            day_of_week: self.day_of_week.clone(),
            campaign: self.campaign,
            pdays: self.pdays,
            previous: self.previous,
            poutcome: self.poutcome.clone(),
            emp_var_rate: self.emp_var_rate,
            cons_price_idx: self.cons_price_idx,
            cons_conf_idx: self.cons_conf_idx,
            euribor3m: self.euribor3m,
            nr_employed: self.nr_employed,
        }
    }
}

/// Restrict a flag to the keys of the feature's category table.
fn choices(feature: Feature) -> PossibleValuesParser {
    let values = feature.table().map(|table| table.choices()).unwrap_or_default();
    PossibleValuesParser::new(values.iter().copied())
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
