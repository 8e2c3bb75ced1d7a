// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_linked_text(links: usize) -> String {
    let base = "Read the [release notes](https://example.com/notes) or [ask us]( mailto:help@example.com ). ";
    base.repeat(links)
}

/// Lots of `[` that never close, followed by one real link.
#[allow(dead_code)]
pub fn generate_broken_brackets(size: usize) -> String {
    let mut content = "[ (".repeat(size);
    content.push_str("[end](here)");
    content
}
