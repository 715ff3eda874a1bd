use anyhow::Context;
use clap::Parser;
use gini_tree::data::params::LoadParams;
use gini_tree::data::reader::read_path;
use gini_tree::metrics::confusion::classes;
use gini_tree::metrics::evaluation::{confusion_matrix, evaluate};
use gini_tree::trees::classifier::DecisionTreeClassifier;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "gini-tree")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Train and evaluate a Gini decision tree on a delimited file", long_about = None)]
struct Cli {
    /// Input file: a header row, then data rows whose last column is the label
    data: PathBuf,

    /// Field delimiter
    #[arg(short, long, default_value_t = ';')]
    delimiter: char,

    /// Share of rows used for training, the rest is held out
    #[arg(short = 'r', long, default_value_t = 0.7)]
    train_ratio: f64,

    /// Seed for the train/test shuffle
    #[arg(short, long)]
    seed: Option<u64>,

    /// Treat every feature as categorical, even if it looks like a number
    #[arg(long)]
    no_infer_numeric: bool,

    /// Print the trained tree
    #[arg(short = 't', long)]
    print_tree: bool,

    /// Print every test row with its predicted label distribution
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gini_tree=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut params = LoadParams::new();
    params.set_delimiter(cli.delimiter)?;
    params.set_train_ratio(cli.train_ratio)?;
    params.set_infer_numeric(!cli.no_infer_numeric);
    params.set_seed(cli.seed);

    let dataset = read_path(&cli.data, &params)
        .with_context(|| format!("failed to load {}", cli.data.display()))?;
    let (train_dataset, test_dataset) =
        dataset.train_test_split(params.train_ratio(), params.seed())?;
    info!(
        train = train_dataset.nrows(),
        test = test_dataset.nrows(),
        "Split dataset"
    );

    let mut tree = DecisionTreeClassifier::new();
    tree.fit(&train_dataset).context("failed to train the tree")?;
    if cli.print_tree {
        print!("{}", tree);
    }

    let evaluation = evaluate(&tree, &test_dataset).context("failed to evaluate the tree")?;
    if cli.verbose {
        for prediction in &evaluation.predictions {
            println!("{}", prediction);
        }
        let actual = evaluation.actual_labels();
        let predicted = evaluation.predicted_labels();
        println!("Classes: {:?}", classes(&actual, &predicted));
        println!("Confusion matrix:{}", confusion_matrix(&tree, &evaluation)?);
    }

    println!(
        "Correct guesses: ({}/{})",
        evaluation.correct, evaluation.total
    );
    println!("Accuracy: {:.2}", evaluation.accuracy_percent());
    Ok(())
}
