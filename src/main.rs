use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use ngram_analyzer::analyzer::{report, snapshot::StatsSnapshot, vocab};
use ngram_analyzer::{AnalyzeResult, DocAnalyzer};

#[derive(Parser, Debug)]
#[command(author, version, about = "Corpus lexical statistics: n-gram TF/DF and controlled vocabularies", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ingest a review corpus and print frequency and vocabulary reports
    Analyze(AnalyzeArgs),
    /// Show the token pipeline stage by stage for one line of text
    Demo(DemoArgs),
}

#[derive(clap::Args, Debug)]
struct AnalyzeArgs {
    /// Root directory of the review corpus
    #[arg(long)]
    corpus: PathBuf,

    /// Only files whose name ends with this suffix are parsed
    #[arg(long, default_value = ".json")]
    suffix: String,

    /// Newline-delimited stopword file (missing file: warn, empty set)
    #[arg(long)]
    stopwords: Option<PathBuf>,

    /// How many entries the top-K listings print
    #[arg(long, default_value_t = 50)]
    top: usize,

    /// Minimum DF for a term to survive the vocabulary merge
    #[arg(long, default_value_t = 50)]
    min_df: u64,

    /// How many top merged entries to drop as corpus-specific stopword
    /// candidates
    #[arg(long, default_value_t = 100)]
    new_stopwords: usize,

    /// Where to write the TTF dump for Zipf's-law validation
    #[arg(long, default_value = "zipf-ttf.txt")]
    zipf: PathBuf,

    /// Directory for CBOR statistics snapshots (one per order), if wanted
    #[arg(long)]
    export_stats: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
struct DemoArgs {
    /// Text to push through the pipeline
    text: String,

    /// N-gram order for the demonstration
    #[arg(long, default_value_t = 2)]
    order: usize,

    /// Optional stopword file applied during the demonstration
    #[arg(long)]
    stopwords: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Analyze(args) => run_analyze(args),
        Commands::Demo(args) => run_demo(args),
    };
    if let Err(err) = result {
        error!("{err}");
        process::exit(1);
    }
}

fn build_analyzer(order: usize, args: &AnalyzeArgs) -> AnalyzeResult<DocAnalyzer> {
    let mut analyzer = DocAnalyzer::new(order)?;
    if let Some(path) = &args.stopwords {
        analyzer.load_stopwords(path);
    }
    let summary = analyzer.load_directory(&args.corpus, &args.suffix);
    info!(
        "order {}: {} files, {} reviews ({} skipped), {} failures",
        order, summary.files, summary.reviews, summary.skipped_reviews, summary.failures
    );
    Ok(analyzer)
}

fn run_analyze(args: AnalyzeArgs) -> AnalyzeResult<()> {
    // unigram session, for Zipf's-law validation
    let unigram = build_analyzer(1, &args)?;
    let total_docs = unigram.doc_count();
    println!("Total words: {}", unigram.stats().vocab_size());

    let ttf1 = vocab::rank(unigram.stats().ttf());
    println!("Top {} TTF:", args.top);
    println!("{}", report::format_top(&ttf1, args.top));

    let df1 = vocab::rank(unigram.stats().df());
    println!("Top {} DF:", args.top);
    println!("{}", report::format_top(&df1, args.top));

    // the ingestion result stands whether or not the dump can be written
    if let Err(err) = report::write_zipf(unigram.stats().ttf(), &args.zipf) {
        error!("failed to write {}: {err}", args.zipf.display());
    }

    // bigram session over the same corpus
    let bigram = build_analyzer(2, &args)?;
    println!("Total bigrams: {}", bigram.stats().vocab_size());

    let ttf2 = vocab::rank(bigram.stats().ttf());
    println!("Top {} TTF (bigrams):", args.top);
    println!("{}", report::format_top(&ttf2, args.top));

    let df2 = vocab::rank(bigram.stats().df());
    println!("Top {} DF (bigrams):", args.top);
    println!("{}", report::format_top(&df2, args.top));

    // merge both orders into one vocabulary, thresholded by DF
    let merged = vocab::merge_vocabularies(
        &[unigram.stats().df(), bigram.stats().df()],
        args.min_df,
    );
    println!("Vocabulary size after merging: {}", merged.len());

    println!("Top {} merged DF (new stopword candidates):", args.new_stopwords);
    println!("{}", report::format_top(&merged, args.new_stopwords));

    let controlled = vocab::controlled_vocabulary(merged, args.new_stopwords);
    println!("Controlled vocabulary size: {}", controlled.len());

    let entries = vocab::annotate_idf(&controlled, total_docs);
    let head = entries.len().min(args.top);
    println!("Top {} controlled vocabulary:", args.top);
    print!("{}", report::format_vocab_entries(&entries[..head]));
    if entries.len() > head {
        let tail_len = (entries.len() - head).min(args.top);
        println!("Bottom {} controlled vocabulary:", tail_len);
        print!("{}", report::format_vocab_entries(&entries[entries.len() - tail_len..]));
    }

    if let Some(dir) = &args.export_stats {
        std::fs::create_dir_all(dir)?;
        for analyzer in [unigram, bigram] {
            let order = analyzer.order();
            let path = dir.join(format!("stats-{order}.cbor"));
            let snapshot = StatsSnapshot::new(order, analyzer.into_stats());
            snapshot.write_cbor(&path)?;
            info!("wrote {}", path.display());
        }
    }

    Ok(())
}

fn run_demo(args: DemoArgs) -> AnalyzeResult<()> {
    let mut analyzer = DocAnalyzer::new(args.order)?;
    if let Some(path) = &args.stopwords {
        analyzer.load_stopwords(path);
    }
    println!("Token\tNormalized\tStem\tN-gram");
    for row in analyzer.trace_pipeline(&args.text) {
        println!(
            "{}\t{}\t{}\t{}",
            row.surface,
            row.normalized,
            if row.stem.is_empty() { "-" } else { row.stem.as_str() },
            row.ngram.as_deref().unwrap_or("-"),
        );
    }
    Ok(())
}
