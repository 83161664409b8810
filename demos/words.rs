use alphatrie::error::TrieError;
use alphatrie::trie::TrieString;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), TrieError> {
    // RUST_LOG=alphatrie=trace shows every insert and prune
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut trie = TrieString::default();
    for word in ["bat", "bath", "batman"] {
        trie.insert(word.chars())?;
    }
    println!("words: {}", trie);
    println!("contains(bat): {}", trie.contains("bat".chars())?);
    println!("contains(ba): {}", trie.contains("ba".chars())?);
    println!("is_prefix(ba): {}", trie.is_prefix("ba".chars())?);

    for word in ["bat", "bath", "batman"] {
        trie.delete(word.chars())?;
        println!(
            "deleted {}: words: [{}], nodes: {}",
            word,
            trie,
            trie.node_count()
        );
    }
    println!("is_prefix(b): {}", trie.is_prefix("b".chars())?);

    // Malformed keys are errors, missing keys are NotFound
    match trie.contains("xyz123".chars()) {
        Err(e) => println!("contains(xyz123): {}", e),
        Ok(found) => println!("contains(xyz123): {}", found),
    }
    if let Err(e) = trie.delete("bat".chars()) {
        println!("delete(bat): {}", e);
    }
    Ok(())
}
