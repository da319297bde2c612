//! Keyword matching utilities for the address book.
//!
//! This module provides the case-insensitive substring matcher behind the
//! `find` command.

pub mod keyword_matcher;

pub use keyword_matcher::{KeywordMatcher, KeywordSet, Searchable};
