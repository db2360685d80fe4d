use anyhow::Context;
use clap::Parser;
use log::info;
use std::fs::File;
use std::path::PathBuf;

use readmit::{
    default_model_path, encode, form, AgeBand, DiagnosisGroup, PatientRecord, Predictor, Urgency,
};

/// Predict 30-day hospital readmission risk for one patient.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the trained ONNX classifier (defaults to READMIT_MODEL or the
    /// platform data directory)
    #[arg(short, long)]
    model: Option<PathBuf>,

    /// Read the patient record from a JSON file instead of the field flags
    #[arg(long)]
    input: Option<PathBuf>,

    /// Print the encoded feature row before predicting
    #[arg(long)]
    show_features: bool,

    /// Time in hospital, days (0-30)
    #[arg(long, default_value_t = 5)]
    time_in_hospital: u8,

    /// Number of lab procedures (0-150)
    #[arg(long, default_value_t = 40)]
    num_lab_procedures: u8,

    /// Number of procedures (0-10)
    #[arg(long, default_value_t = 1)]
    num_procedures: u8,

    /// Number of medications (0-100)
    #[arg(long, default_value_t = 20)]
    num_medications: u8,

    /// Number of diagnoses (0-20)
    #[arg(long, default_value_t = 5)]
    number_diagnoses: u8,

    /// Age range, e.g. "60-70"
    #[arg(long, default_value = "60-70")]
    age_range: String,

    /// Discharge disposition code (see --list-dispositions)
    #[arg(long, default_value_t = 2)]
    discharge_disposition: u8,

    /// Whether the patient is on diabetes medication
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    diabetes_medication: bool,

    /// Primary diagnosis group code (1-8)
    #[arg(long, default_value_t = 4)]
    diag1: u8,

    /// Secondary diagnosis group code (1-8)
    #[arg(long, default_value_t = 4)]
    diag2: u8,

    /// Tertiary diagnosis group code (1-8)
    #[arg(long, default_value_t = 4)]
    diag3: u8,

    /// List the discharge disposition codes the form accepts and exit
    #[arg(long)]
    list_dispositions: bool,
}

fn record_from_args(args: &Args) -> Result<PatientRecord, readmit::FormError> {
    let age_band = AgeBand::from_label(&args.age_range)
        .ok_or_else(|| readmit::FormError::UnknownAgeRange(args.age_range.clone()))?;
    let diag = |code: u8| {
        DiagnosisGroup::from_code(code).ok_or(readmit::FormError::UnknownDiagnosis(code))
    };

    Ok(PatientRecord {
        time_in_hospital: args.time_in_hospital,
        num_lab_procedures: args.num_lab_procedures,
        num_procedures: args.num_procedures,
        num_medications: args.num_medications,
        number_diagnoses: args.number_diagnoses,
        age_band,
        discharge_disposition: args.discharge_disposition,
        diabetes_medication: args.diabetes_medication,
        diag1: diag(args.diag1)?,
        diag2: diag(args.diag2)?,
        diag3: diag(args.diag3)?,
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.list_dispositions {
        for (code, label) in readmit::DISCHARGE_DISPOSITIONS {
            println!("{:>2}: {}", code, label);
        }
        return Ok(());
    }

    let record = match &args.input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            serde_json::from_reader(file).with_context(|| format!("parsing {}", path.display()))?
        }
        None => record_from_args(&args)?,
    };
    form::validate(&record)?;

    let model_path = args.model.unwrap_or_else(default_model_path);
    info!("Loading classifier from {:?}", model_path);
    let predictor = Predictor::builder().with_model_file(&model_path)?.build()?;

    let features = encode(&record);
    if args.show_features {
        for (name, value) in features.iter() {
            println!("{:<28} {}", name, value);
        }
    }

    let verdict = predictor.predict(&features)?;
    match verdict.urgency() {
        Urgency::Elevated => println!("\x1b[31m⚠ {}\x1b[0m", verdict.message()),
        Urgency::Low => println!("\x1b[32m✓ {}\x1b[0m", verdict.message()),
    }

    Ok(())
}
