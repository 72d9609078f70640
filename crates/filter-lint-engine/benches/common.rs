// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_filter(blocks: usize) -> String {
    let block = concat!(
        "Show # $tier\n",
        "    Class \"Currency\" \"Maps\"\n",
        "    Rarity >= Rare\n",
        "    ItemLevel >= 75\n",
        "    SetTextColor 255 0 0 200\n",
        "    SetFontSize 40\n",
        "    PlayAlertSound ShExalted 250\n",
        "\n",
    );
    block.repeat(blocks)
}

#[allow(dead_code)]
pub fn rows(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}
