use alphatrie::trie::Trie;
use tracing_subscriber::EnvFilter;
use unicode_segmentation::UnicodeSegmentation;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Our alphabet is the set of grapheme clusters in s
    let s = "a̐éö̲\r\n";
    let mut trie = Trie::new(s.graphemes(true)).expect("unique graphemes");

    let input = s.graphemes(true);
    assert!(trie.insert(input.clone()).expect("valid key"));
    assert!(trie.contains(input.clone()).expect("valid key"));
    assert!(trie.is_prefix(input.clone().take(2)).expect("valid key"));
    assert!(trie.contains("x".graphemes(true)).is_err());

    for key in trie.iter() {
        println!("key: {:?}", key.concat());
    }
}
