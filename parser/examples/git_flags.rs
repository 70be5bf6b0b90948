//! Hierarchical flag parsing example.
//!
//! Builds a git-like flag vocabulary where `--git` opens a context with its
//! own child flags, parses a sample argument list, prints the resulting
//! occurrence tree, and binds values into typed variables.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p warg-parser --example git_flags
//! ```

use warg_core::{FlagDef, FlagSet};
use warg_parser::bind::{Binder, Slot};
use warg_parser::{FlagValue, parse_args};

fn main() {
    let set = FlagSet::new(vec![
        FlagDef::switch(&["-v", "--verbose"]).with_description("Verbose output"),
        FlagDef::switch(&["-G", "--git"])
            .with_description("Git operations")
            .with_child(FlagDef::switch(&["-c", "--commit"]).with_description("Commit changes"))
            .with_child(FlagDef::value(&["-m", "--message"]).with_description("Commit message"))
            .with_child(FlagDef::switch(&["-p", "--push"]).with_description("Push after commit")),
    ])
    .unwrap();

    // -G opens the git context; -c, -m and -p resolve inside it even with
    // the root-level -v in between.
    let args = ["-G", "-c", "-v", "-m", "fix parser bug", "-p"];
    println!("Parsing: {args:?}");
    println!();

    let result = parse_args(&set, &args).unwrap();

    println!("Occurrence tree:");
    for flag in &result.flags {
        print_tree(flag, 1);
    }
    println!();

    // Any declared spelling finds a node, at any depth.
    let message = result.find("--message").unwrap();
    println!("Commit message: {:?}", message.value.as_deref().unwrap());

    let mut occurrences = 0;
    result.walk(&mut |_| occurrences += 1);
    println!("Flags parsed:   {occurrences}");
    println!();

    // Copy parsed values into typed variables.
    let mut verbose = false;
    let mut commit = false;
    let mut push = false;
    let mut message = String::new();
    Binder::new()
        .bind(&["-v", "--verbose"], Slot::Bool(&mut verbose))
        .bind(&["--commit"], Slot::Bool(&mut commit))
        .bind(&["--push"], Slot::Bool(&mut push))
        .bind(&["--message"], Slot::String(&mut message))
        .apply(&result)
        .unwrap();

    println!("Bound values:");
    println!("  verbose = {verbose}");
    println!("  commit  = {commit}");
    println!("  push    = {push}");
    println!("  message = {message:?}");
    println!();

    // The tree serializes field-for-field for downstream tools.
    println!("As JSON:");
    println!("{}", serde_json::to_string_pretty(&result).unwrap());
}

fn print_tree(flag: &FlagValue<'_>, depth: usize) {
    let indent = "  ".repeat(depth);
    match flag.value.as_deref() {
        Some(value) => println!("{indent}{} = {value:?}", flag.def.canonical_name()),
        None => println!("{indent}{}", flag.def.canonical_name()),
    }
    for child in &flag.children {
        print_tree(child, depth + 1);
    }
}
