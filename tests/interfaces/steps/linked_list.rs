//! LinkedList interface step definitions.

use chainlist::{LinkedList, ListError};
use cucumber::{given, then, when, World};

/// Test context for LinkedList scenarios.
#[derive(Debug, Default, World)]
pub struct LinkedListWorld {
    list: LinkedList<String>,
    last_value: Option<String>,
    last_error: Option<ListError>,
}

impl LinkedListWorld {
    fn record(&mut self, result: Result<String, ListError>) {
        match result {
            Ok(value) => {
                self.last_value = Some(value);
                self.last_error = None;
            }
            Err(e) => {
                self.last_value = None;
                self.last_error = Some(e);
            }
        }
    }
}

/// Split a comma-separated scenario argument. An empty string is an empty list.
fn parse_values(values: &str) -> Vec<String> {
    if values.is_empty() {
        return Vec::new();
    }
    values.split(", ").map(str::to_string).collect()
}

fn error_kind(error: &ListError) -> &'static str {
    match error {
        ListError::InvalidArgument(_) => "InvalidArgument",
        ListError::IndexOutOfBounds { .. } => "IndexOutOfBounds",
        ListError::NoSuchElement(_) => "NoSuchElement",
    }
}

// --- Given steps ---

#[given("an empty list")]
fn given_empty_list(world: &mut LinkedListWorld) {
    world.list = LinkedList::new();
}

#[given(expr = "a list containing {string}")]
fn given_list_containing(world: &mut LinkedListWorld, values: String) {
    world.list = parse_values(&values).into_iter().collect();
}

// --- When steps ---

#[when(expr = "I add {string}")]
fn when_add(world: &mut LinkedListWorld, value: String) {
    world.list.add(value);
}

#[when(expr = "I insert {string} at index {int}")]
fn when_insert(world: &mut LinkedListWorld, value: String, index: usize) {
    let result = world.list.insert(index, value.clone()).map(|()| value);
    world.record(result);
}

#[when("I remove the first element")]
fn when_remove_first(world: &mut LinkedListWorld) {
    let result = world.list.remove_first();
    world.record(result);
}

#[when(expr = "I remove the element at index {int}")]
fn when_remove_at(world: &mut LinkedListWorld, index: usize) {
    let result = world.list.remove_at(index);
    world.record(result);
}

#[when(expr = "I remove the value {string}")]
fn when_remove_value(world: &mut LinkedListWorld, value: String) {
    let result = world.list.remove_value(&value);
    world.record(result);
}

#[when(expr = "I set index {int} to {string}")]
fn when_set(world: &mut LinkedListWorld, index: usize, value: String) {
    let result = world.list.set(index, value);
    world.record(result);
}

#[when("I clear the list")]
fn when_clear(world: &mut LinkedListWorld) {
    world.list.clear();
}

#[when(expr = "I build a list from {string}")]
fn when_build_from_options(world: &mut LinkedListWorld, values: String) {
    let options = parse_values(&values)
        .into_iter()
        .map(|value| (value != "<none>").then_some(value));
    match LinkedList::try_from_options(options) {
        Ok(list) => world.list = list,
        Err(e) => world.last_error = Some(e),
    }
}

// --- Then steps ---

#[then(expr = "the list should contain {string}")]
fn then_list_contains(world: &mut LinkedListWorld, values: String) {
    let actual: Vec<String> = world.list.iter().cloned().collect();
    assert_eq!(actual, parse_values(&values));
    assert_eq!(world.list.len(), actual.len());
}

#[then("the list should be empty")]
fn then_list_empty(world: &mut LinkedListWorld) {
    assert!(world.list.is_empty());
    assert!(world.list.head().is_none());
}

#[then(expr = "the size should be {int}")]
fn then_size(world: &mut LinkedListWorld, size: usize) {
    assert_eq!(world.list.len(), size);
    assert_eq!(world.list.is_empty(), size == 0);
}

#[then(expr = "the element at index {int} should be {string}")]
fn then_element_at(world: &mut LinkedListWorld, index: usize, value: String) {
    assert_eq!(world.list.get(index), Ok(&value));
}

#[then(expr = "the returned value should be {string}")]
fn then_returned_value(world: &mut LinkedListWorld, value: String) {
    assert!(world.last_error.is_none(), "unexpected error: {:?}", world.last_error);
    assert_eq!(world.last_value.as_deref(), Some(value.as_str()));
}

#[then(expr = "the operation should fail with {string}")]
fn then_operation_fails(world: &mut LinkedListWorld, kind: String) {
    let error = world
        .last_error
        .as_ref()
        .expect("expected the operation to fail");
    assert_eq!(error_kind(error), kind);
}

#[then(expr = "reading index {int} should fail with {string}")]
fn then_read_fails(world: &mut LinkedListWorld, index: usize, kind: String) {
    let error = world.list.get(index).expect_err("expected the read to fail");
    assert_eq!(error_kind(&error), kind);
}

#[then(expr = "the list should contain the value {string}")]
fn then_contains_value(world: &mut LinkedListWorld, value: String) {
    assert!(world.list.contains(&value));
}

#[then(expr = "the list should not contain the value {string}")]
fn then_not_contains_value(world: &mut LinkedListWorld, value: String) {
    assert!(!world.list.contains(&value));
}

#[then(expr = "converting to an array should yield {string}")]
fn then_to_array(world: &mut LinkedListWorld, values: String) {
    assert_eq!(world.list.to_array().to_vec(), parse_values(&values));
}

#[then(expr = "iterating should yield {string} and then be exhausted")]
fn then_iteration(world: &mut LinkedListWorld, values: String) {
    let mut iter = world.list.iter();
    for expected in parse_values(&values) {
        assert!(iter.has_next());
        assert_eq!(iter.try_next(), Ok(&expected));
    }
    assert!(!iter.has_next());
    assert!(matches!(iter.try_next(), Err(ListError::NoSuchElement(_))));
}
