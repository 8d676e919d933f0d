/// List helpers shared by the table views (sort indicators, search highlighting)
use contracts::shared::record_list::SortState;
use leptos::prelude::*;
use std::ops::Range;

/// Byte ranges of case-insensitive occurrences of `needle` in `text`
///
/// Lowercasing may change a character's byte length, so matches are found in
/// the lowercased copy and mapped back to whole characters of `text`.
pub fn match_ranges(text: &str, needle: &str) -> Vec<Range<usize>> {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    // Source character span behind every byte of the lowercased copy
    let mut haystack = String::with_capacity(text.len());
    let mut origin: Vec<Range<usize>> = Vec::with_capacity(text.len());
    for (start, ch) in text.char_indices() {
        let span = start..start + ch.len_utf8();
        for lower in ch.to_lowercase() {
            haystack.push(lower);
            origin.extend(std::iter::repeat(span.clone()).take(lower.len_utf8()));
        }
    }

    let mut ranges: Vec<Range<usize>> = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = haystack[last_pos..].find(&needle) {
        let start = last_pos + pos;
        let end = start + needle.len();
        let span = origin[start].start..origin[end - 1].end;
        match ranges.last_mut() {
            Some(prev) if span.start < prev.end => prev.end = prev.end.max(span.end),
            _ => ranges.push(span),
        }
        last_pos = end;
    }
    ranges
}

/// Highlight search matches in a cell value
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    for range in ranges {
        if range.start > last_pos {
            parts.push(view! { <span>{text[last_pos..range.start].to_string()}</span> }.into_any());
        }
        parts.push(view! {
            <span class="search-highlight">{text[range.clone()].to_string()}</span>
        }.into_any());
        last_pos = range.end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Sort indicator for a column header
pub fn get_sort_indicator(sort: &SortState, field: &str) -> &'static str {
    if sort.is_sorted_by(field) {
        if sort.sort_ascending { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

/// CSS class for the sort indicator
pub fn get_sort_class(sort: &SortState, field: &str) -> &'static str {
    if sort.is_sorted_by(field) {
        "sort-icon active"
    } else {
        "sort-icon"
    }
}
