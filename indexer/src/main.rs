use anyhow::Result;
use index_core::posting::{Posting, TokenPostings};
use index_core::{IndexBuilder, IndexPaths};
use tracing_subscriber::{fmt, EnvFilter};

/// Nominal document counts, one build per value. The corpus below is fixed,
/// so the count only appears in the status output; it never selects or
/// scales the indexed data (kept as-is from the source system).
const DOCUMENT_COUNTS: [u32; 5] = [10, 20, 30, 40, 50];

fn fixed_corpus() -> TokenPostings {
    TokenPostings::from([
        (
            "perro".to_string(),
            vec![
                Posting::new("108.html", 2),
                Posting::new("005.html", 2),
                Posting::new("444.html", 4),
                Posting::new("321.html", 8),
            ],
        ),
        (
            "gato".to_string(),
            vec![Posting::new("049.html", 1), Posting::new("102.html", 1)],
        ),
        (
            "pato".to_string(),
            vec![
                Posting::new("108.html", 3),
                Posting::new("444.html", 2),
                Posting::new("321.html", 6),
            ],
        ),
    ])
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let paths = IndexPaths::new(".");
    let corpus = fixed_corpus();

    for count in DOCUMENT_COUNTS {
        println!("Procesando {count} documentos...");
        let report = IndexBuilder::new(&paths).build(&corpus);
        println!("Hash table generada exitosamente para {count} documentos.");
        println!("Número de colisiones: {}", report.collisions);
    }
    Ok(())
}
