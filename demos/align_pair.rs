use std::env;

use bioshell_seq::aligner::Aligner;
use bioshell_seq::scoring::Scoring;
use clap::Parser;
use log::info;

/// Aligns two nucleotide sequences given on the command line and prints the CIGAR plus
/// alignment statistics.
#[derive(Parser, Debug)]
#[clap(name = "align_pair")]
#[clap(about = "Linear-space global alignment of two nucleotide sequences", long_about = None)]
struct Args {
    /// query sequence (sequence A)
    query: String,
    /// target sequence (sequence B)
    target: String,
    /// match score
    #[clap(long, default_value = "2")]
    match_score: i64,
    /// mismatch score
    #[clap(long, default_value = "-4")]
    mismatch_score: i64,
    /// gap open cost, applied uniformly to all six left/interior/right x query/target classes
    #[clap(long, default_value = "4")]
    gap_open: i64,
    /// gap extension cost, applied uniformly to all six classes
    #[clap(long, default_value = "2")]
    gap_extend: i64,
    /// score alignments of 'N' against anything as a mismatch rather than an ambiguous match
    #[clap(long)]
    n_as_mismatch: bool,
}

pub fn main() {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();
    let args = Args::parse();

    let scoring = Scoring::new(
        args.match_score,
        args.mismatch_score,
        args.gap_open,
        args.gap_open,
        args.gap_open,
        args.gap_open,
        args.gap_open,
        args.gap_open,
        args.gap_extend,
        args.gap_extend,
        args.gap_extend,
        args.gap_extend,
        args.gap_extend,
        args.gap_extend,
    )
    .expect("gap costs must be non-negative");

    let mut aligner = Aligner::new(scoring, args.n_as_mismatch);
    let a = args.query.as_bytes();
    let b = args.target.as_bytes();
    let cigar = aligner.align(a, b).expect("alignment failed").to_string();
    let stats = aligner.alignstats(&cigar, a, b).expect("cigar reparse failed");

    info!("aligned {} bp query against {} bp target", a.len(), b.len());
    println!("CIGAR: {cigar}");
    println!(
        "score={} length={} matches={} mismatches={} gaps={}",
        stats.score, stats.length, stats.matches, stats.mismatches, stats.gaps
    );
}
