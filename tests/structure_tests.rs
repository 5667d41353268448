#![cfg(feature = "structure")]
//! Unit tests for the structural algorithms.
//!
//! Tests cover:
//! - flatten over Value and Nested trees
//! - stable sort_by and sort_by_accessor
//! - zip padding
//! - intersection and difference
//! - shuffle_with on a scripted random source
//! - invoke by name and by function

use combinars::collection::Accessor;
use combinars::structure::{
    Method, Nested, RandomSource, difference, flatten, intersection, invoke, shuffle_with,
    sort_by, sort_by_accessor, zip,
};
use combinars::value::{FieldAccess, Mapping, Value};
use combinars::{list, record};
use rstest::rstest;

fn values<T: Into<Value>>(items: Vec<T>) -> Vec<Value> {
    items.into_iter().map(Into::into).collect()
}

// =============================================================================
// flatten
// =============================================================================

#[rstest]
fn flatten_value_tree() {
    let nested = [Value::from(1), list![2, list![3, list![4]], 5]];
    assert_eq!(flatten(&nested), values(vec![1, 2, 3, 4, 5]));
}

#[rstest]
fn flatten_keeps_records_as_leaves() {
    let nested = [list![record! { "a" => 1 }], Value::from("x")];
    assert_eq!(flatten(&nested), vec![record! { "a" => 1 }, Value::from("x")]);
}

#[rstest]
fn flatten_nested_enum() {
    let tree = vec![
        Nested::List(vec![Nested::Leaf('a'), Nested::List(vec![Nested::Leaf('b')])]),
        Nested::Leaf('c'),
    ];
    assert_eq!(Nested::into_leaves(flatten(&tree)), vec!['a', 'b', 'c']);
}

#[rstest]
fn flatten_empty_is_empty() {
    let empty: [Value; 0] = [];
    assert!(flatten(&empty).is_empty());
}

// =============================================================================
// sort_by
// =============================================================================

#[rstest]
fn sort_by_is_stable() {
    let pairs = [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
    assert_eq!(
        sort_by(&pairs, |(rank, _)| *rank),
        vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]
    );
}

#[rstest]
fn sort_by_calls_key_once_per_element() {
    let mut calls = 0;
    let sorted = sort_by(&[3, 1, 2], |item| {
        calls += 1;
        *item
    });
    assert_eq!(sorted, vec![1, 2, 3]);
    assert_eq!(calls, 3);
}

#[rstest]
fn sort_by_sorts_mapping_values() {
    let scores = Mapping::from([("x".to_owned(), 9), ("y".to_owned(), 4)]);
    assert_eq!(sort_by(&scores, |score| *score), vec![4, 9]);
}

#[rstest]
fn sort_by_accessor_field_puts_missing_last() {
    let rows = vec![
        record! { "id" => 1 },
        record! { "id" => 2, "age" => 50 },
        record! { "id" => 3, "age" => 30 },
    ];
    let sorted = sort_by_accessor(&rows, Accessor::Field("age")).unwrap();
    let ids: Vec<Value> = sorted.iter().map(|row| row.field("id").unwrap_or_default()).collect();
    assert_eq!(ids, values(vec![3, 2, 1]));
}

#[rstest]
fn sort_by_accessor_function() {
    let words = values(vec!["ccc", "a", "bb"]);
    let by_length = Accessor::function(|word: &Value| {
        Value::from(word.as_text().map_or(0, str::len))
    });
    assert_eq!(
        sort_by_accessor(&words, by_length).unwrap(),
        values(vec!["a", "bb", "ccc"])
    );
}

#[rstest]
fn sort_by_accessor_function_borrows_local_state() {
    let ranking = record! { "gold" => 1, "silver" => 2, "bronze" => 3 };
    let medals = values(vec!["bronze", "gold", "silver"]);
    let by_rank = Accessor::function(|medal: &Value| {
        medal
            .as_text()
            .and_then(|name| ranking.field(name))
            .unwrap_or(Value::Missing)
    });
    assert_eq!(
        sort_by_accessor(&medals, by_rank).unwrap(),
        values(vec!["gold", "silver", "bronze"])
    );
}

#[rstest]
fn sort_by_accessor_rejects_non_records() {
    let rows = vec![record! { "age" => 1 }, Value::from(7)];
    let error = sort_by_accessor(&rows, "age".into()).unwrap_err();
    assert_eq!(error.operation, "sort_by");
}

// =============================================================================
// zip
// =============================================================================

#[rstest]
fn zip_pads_shorter_sequences_with_none() {
    let letters = values(vec!["a", "b", "c", "d"]);
    let numbers = values(vec![1, 2, 3]);
    let rows = zip(&[letters, numbers]);

    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0], vec![Some(Value::from("a")), Some(Value::from(1))]);
    assert_eq!(rows[3], vec![Some(Value::from("d")), None]);
}

#[rstest]
fn zip_of_equal_lengths_has_no_padding() {
    let rows = zip(&[[1, 2], [3, 4]]);
    assert_eq!(rows, vec![vec![Some(1), Some(3)], vec![Some(2), Some(4)]]);
}

#[rstest]
fn zip_of_empty_sequences_is_empty() {
    let rows = zip(&[Vec::<i32>::new(), Vec::new()]);
    assert!(rows.is_empty());
}

// =============================================================================
// intersection / difference
// =============================================================================

#[rstest]
#[case(vec![vec![1, 2, 3], vec![101, 2, 1, 10], vec![2, 1]], vec![1, 2])]
#[case(vec![vec![1, 1, 2], vec![1, 2]], vec![1, 2])]
#[case(vec![vec![1, 2], vec![]], vec![])]
#[case(vec![vec![3, 2, 3]], vec![3, 2])]
#[case(vec![], vec![])]
fn intersection_keeps_first_order_once(
    #[case] sequences: Vec<Vec<i32>>,
    #[case] expected: Vec<i32>,
) {
    assert_eq!(intersection(&sequences), expected);
}

#[rstest]
#[case(vec![1, 2, 3, 4, 5], vec![vec![5, 2, 10]], vec![1, 3, 4])]
#[case(vec![1, 1, 2], vec![vec![2], vec![3]], vec![1, 1])]
#[case(vec![1, 2], vec![], vec![1, 2])]
#[case(vec![], vec![vec![1]], vec![])]
fn difference_removes_members_of_others(
    #[case] items: Vec<i32>,
    #[case] others: Vec<Vec<i32>>,
    #[case] expected: Vec<i32>,
) {
    assert_eq!(difference(&items, &others), expected);
}

// =============================================================================
// shuffle
// =============================================================================

struct Scripted(Vec<f64>);

impl RandomSource for Scripted {
    fn next_unit(&mut self) -> f64 {
        self.0.pop().unwrap_or(0.0)
    }
}

#[rstest]
fn shuffle_with_follows_random_source() {
    // draws are popped from the end: 0.0 for index 3, then 0.5, then 0.9
    let mut random = Scripted(vec![0.9, 0.5, 0.0]);
    let shuffled = shuffle_with(&['a', 'b', 'c', 'd'], &mut random);
    assert_eq!(shuffled, vec!['d', 'c', 'b', 'a']);
}

#[rstest]
fn shuffle_with_leaves_input_untouched() {
    let items = vec![1, 2, 3];
    let mut random = Scripted(vec![0.0, 0.0]);
    let shuffled = shuffle_with(&items, &mut random);
    assert_eq!(items, vec![1, 2, 3]);
    assert_eq!(shuffled.len(), 3);
}

#[cfg(feature = "random")]
#[rstest]
fn shuffle_fixed_points() {
    use combinars::structure::shuffle;

    let empty: [u8; 0] = [];
    assert!(shuffle(&empty).is_empty());
    assert_eq!(shuffle(&["only"]), vec!["only"]);
}

// =============================================================================
// invoke
// =============================================================================

#[rstest]
fn invoke_named_method_with_arguments() {
    let lists = [list!["a", "b"], list![1, 2, 3]];
    assert_eq!(
        invoke(&lists, "join".into(), &[Value::from("-")]).unwrap(),
        values(vec!["a-b", "1-2-3"])
    );
}

#[rstest]
fn invoke_sort_on_nested_lists() {
    let lists = [list![5, 1, 7], list![3, 2, 1]];
    assert_eq!(
        invoke(&lists, Method::Named("sort"), &[]).unwrap(),
        vec![list![1, 5, 7], list![1, 2, 3]]
    );
}

#[rstest]
fn invoke_function_receives_element_as_receiver() {
    let numbers = values(vec![1, 2]);
    let add = Method::function(|receiver: &Value, arguments: &[Value]| {
        let base = receiver.as_number().unwrap_or_default();
        let offset = arguments.first().and_then(Value::as_number).unwrap_or_default();
        Value::from(base + offset)
    });
    assert_eq!(
        invoke(&numbers, add, &[Value::from(10)]).unwrap(),
        values(vec![11, 12])
    );
}

#[rstest]
fn invoke_function_borrows_local_state() {
    let suffix = String::from("!");
    let words = values(vec!["hi", "yo"]);
    let shout = Method::function(|word: &Value, _: &[Value]| {
        Value::from(format!("{}{suffix}", word.as_text().unwrap_or_default()))
    });
    assert_eq!(
        invoke(&words, shout, &[]).unwrap(),
        values(vec!["hi!", "yo!"])
    );
}

#[rstest]
fn invoke_unknown_method_fails() {
    let texts = values(vec!["a"]);
    let error = invoke(&texts, "explode".into(), &[]).unwrap_err();
    assert!(error.to_string().contains("explode"));
}
