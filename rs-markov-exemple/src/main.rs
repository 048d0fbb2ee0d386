use rs_markov_core::model::generation_input::{GenerationInput, StartSeed};
use rs_markov_core::model::generator::TextGenerator;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Build-path logging goes through the log facade (RUST_LOG=debug)
    env_logger::init();

    // Corpus to learn from: first argument, or the bundled sample
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "./data/corpus.txt".to_owned());
    let corpus = std::fs::read_to_string(&path)?;

    // Build the adjacency index on all cores and drive generation with an
    // OS-seeded random source
    let mut generator = TextGenerator::from_text_parallel(&corpus, rand::rng());
    println!(
        "Learned {} tokens from {}",
        generator.index().token_count(),
        path
    );

    // Shape of the generated text; every range is inclusive on both ends
    let mut input = GenerationInput::default();

    // 5 to 20 words walked per sentence
    input.set_sentence_words(5, 20)?;

    // 2 to 10 sentences per paragraph
    input.set_paragraph_sentences(2, 10)?;

    // 3 to 5 paragraphs per document
    input.set_document_paragraphs(3, 5)?;

    // Start seed can be set to
    // 'Random' to open each sentence with a random indexed token
    // 'Custom' to open every sentence with a chosen word
    input.start_seed = StartSeed::Random;

    // Attempting to set a zero or reversed range
    match input.set_sentence_words(0, 10) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("0..=10 is invalid, counts start at 1"),
    }
    match input.set_document_paragraphs(5, 3) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("5..=3 is invalid, min must not exceed max"),
    }

    // Generate one full document using the input settings
    println!("\n{}\n", generator.generate_document(&input)?);

    // A custom seed opens every generated sentence with the same word
    input.start_seed = StartSeed::Custom("the".to_owned());
    for i in 0..3 {
        println!("Seeded sentence {}: {}", i + 1, generator.generate_sentence(&input)?);
    }

    Ok(())
}
