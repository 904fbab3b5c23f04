//! Basic usage example of the pagediff library

use pagediff_core::{compare_documents, CompareConfig, DiffStats};

const LINE: &str = "----------------------------------------";

fn main() {
    println!("=== PageDiff Examples ===\n");

    // Example 1: Simple comparison with default configuration
    example_simple_compare();

    // Example 2: Small pages to show pagination
    example_pagination();

    // Example 3: Opcode-level view of the same comparison
    example_opcodes();
}

fn example_simple_compare() {
    println!("Example 1: Simple Comparison");
    println!("{}", LINE);

    let original = "the quick brown fox";
    let modified = "the slow brown fox jumps";

    let pages = compare_documents(original, modified, None).unwrap();

    println!("Original: {}", original);
    println!("Modified: {}", modified);
    println!();
    for page in &pages {
        print!("{}", page.format());
    }
    println!();
}

fn example_pagination() {
    println!("Example 2: Pagination");
    println!("{}", LINE);

    let original = "one two three four five six seven eight";
    let modified = "one two three four five six seven eight";

    let config = CompareConfig::new().with_lines_per_page(3);
    let pages = compare_documents(original, modified, Some(config)).unwrap();

    println!("{} pages at 3 lines per page:\n", pages.len());
    for (i, page) in pages.iter().enumerate() {
        println!("--- page {} ---", i + 1);
        print!("{}", page.format());
    }
    println!();
}

fn example_opcodes() {
    println!("Example 3: Opcode View");
    println!("{}", LINE);

    let original = pagediff_core::tokenizers::tokenize("the quick brown fox");
    let modified = pagediff_core::tokenizers::tokenize("the slow brown fox jumps");

    let ops = pagediff_core::algorithm::align(&original, &modified);

    for op in &ops {
        println!("  {}", op);
    }

    let stats = DiffStats::from_ops(&ops);
    println!("\n{}", stats.summary());
}
