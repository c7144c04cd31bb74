mod config;

use std::error::Error;
use std::path::PathBuf;

use shellexpand::tilde;
use structopt::StructOpt;

use vqa_dataprep::provider::EasyVqaDirectory;
use vqa_dataprep::DatasetPreparer;

use crate::config::PrepareWorkflowConfig;

#[derive(StructOpt, Debug, Clone)]
#[structopt(about = "Prepare the easy-vqa dataset for training")]
pub struct Opts {
    /// JSON config file
    #[structopt(short, long, parse(from_os_str))]
    pub config: Option<PathBuf>,

    /// Dataset directory, overrides `dataset_path` from the config
    #[structopt(short, long)]
    pub dataset: Option<String>,

    /// Also print the fitted word index
    #[structopt(long)]
    pub show_vocab: bool,
}

// cargo run --bin prepare -- -c [CONFIG_PATH] (or -d [DATASET_DIR])
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let opt = Opts::from_args();

    if let Err(err) = run(opt) {
        eprintln!("error: {}", err);
        let mut source = err.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }
        std::process::exit(1);
    }
}

fn run(opt: Opts) -> Result<(), Box<dyn Error>> {
    let config = match &opt.config {
        Some(path) => PrepareWorkflowConfig::from_path(path)?,
        None => PrepareWorkflowConfig::default(),
    };
    let dataset_path = opt
        .dataset
        .or(config.dataset_path)
        .ok_or("no dataset directory given, pass --dataset or set dataset_path in the config")?;
    let dataset_path = PathBuf::from(tilde(&dataset_path).into_owned());
    log::info!("Preparing dataset from {}", dataset_path.display());

    let preparer = DatasetPreparer::new(EasyVqaDirectory::new(dataset_path), config.prepare);
    let bundle = preparer.prepare()?;

    println!("{}", serde_json::to_string_pretty(&bundle.summary())?);
    if opt.show_vocab {
        let word_index: Vec<_> = bundle.vocabulary.iter().collect();
        println!("{}", serde_json::to_string_pretty(&word_index)?);
    }
    Ok(())
}
