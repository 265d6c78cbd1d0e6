// Copyright (c) 2025 Word Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the word trie and dictionary loading.

use std::fs;

use word_trie_lib::config::dictionary::DictionaryConfig;
use word_trie_lib::data_structures::{DictionaryLoader, TrieNode, WordTrie};
use word_trie_lib::error::dictionary::DictionaryError;

#[test]
fn test_autocomplete_scenario() {
    let mut trie = WordTrie::new();
    for word in ["cat", "car", "cart", "dog"] {
        trie.add(word);
    }

    assert_eq!(trie.find_completions("ca"), vec!["cat", "car", "cart"]);
    assert_eq!(trie.find_completions("car"), vec!["car", "cart"]);
    assert_eq!(trie.find_completions("do"), vec!["dog"]);
    assert!(trie.find_completions("x").is_empty());
    assert!(trie.find_node_by_prefix("x").is_none());
    assert_eq!(trie.find_completions(""), vec!["cat", "car", "cart", "dog"]);
}

#[test]
fn test_generic_node_with_tokens() {
    let mut root = TrieNode::new("<root>".to_string());
    root.add_unique_child("hello".to_string())
        .add_unique_child("world".to_string());
    root.add_unique_child("hello".to_string())
        .add_unique_child("there".to_string());

    assert_eq!(root.children().len(), 1);
    let hello = root.find_child_by(&"hello".to_string()).unwrap();
    let next: Vec<&str> = hello.children().iter().map(|c| c.value().as_str()).collect();
    assert_eq!(next, vec!["world", "there"]);
}

#[test]
fn test_load_word_lists_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let animals = dir.path().join("animals.txt");
    let vehicles = dir.path().join("vehicles.txt");
    fs::write(&animals, "; animals\nCat\ndog\n\n").unwrap();
    fs::write(&vehicles, "car\ncart\n; done\n").unwrap();

    let config = DictionaryConfig {
        paths: vec![animals.clone(), vehicles.clone()],
        comment_prefix: ";".to_string(),
    };

    let mut trie = WordTrie::new();
    let loaded = DictionaryLoader::with_config(&config)
        .load_files(&mut trie, &config.paths)
        .unwrap();

    assert_eq!(loaded, 4);
    assert_eq!(trie.find_completions("Ca"), vec!["Cat", "Car", "Cart"]);
    assert_eq!(trie.node_count(), 8);
}

#[test]
fn test_missing_word_list_stops_loading() {
    let dir = tempfile::tempdir().unwrap();
    let present = dir.path().join("present.txt");
    let missing = dir.path().join("missing.txt");
    fs::write(&present, "alpha\n").unwrap();

    let mut trie = WordTrie::new();
    let result = DictionaryLoader::new().load_files(&mut trie, [&present, &missing]);

    match result {
        Err(DictionaryError::FileNotFound(path)) => assert_eq!(path, missing),
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(trie.contains_prefix("alp"));
}
