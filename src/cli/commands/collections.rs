//! Collection walkthrough command
//!
//! Exercises the standard collection types the way the walkthrough does:
//! a Vec used as a stack, a VecDeque as a queue, an ordered set, and a
//! doubly-linked list with front/back insertion.

use crate::cli::Output;
use crate::config::MedleyConfig;
use crate::people::{self, Person};
use anyhow::Result;
use std::collections::{BTreeSet, LinkedList, VecDeque};

/// Execute the collections command
pub async fn execute(config: &MedleyConfig, output: &Output) -> Result<()> {
    output.header("Collection walkthroughs");

    output.step("Stack (LIFO)");
    let mut stack: Vec<String> = (0..10).map(|i| format!("StackItem{i}")).collect();
    while let Some(item) = stack.pop() {
        output.info(&format!("Popped from stack: {item}"));
    }

    output.step("Queue (FIFO)");
    let mut queue: VecDeque<String> = (0..10).map(|i| format!("QueueItem{i}")).collect();
    while let Some(item) = queue.pop_front() {
        output.info(&format!("Polled from queue: {item}"));
    }

    output.step("Set membership");
    let multiples: BTreeSet<u64> = (0..50).step_by(3).collect();
    let rendered: Vec<String> = multiples.iter().map(u64::to_string).collect();
    output.info(&format!(
        "Multiples of three under fifty: {}",
        rendered.join(" ")
    ));

    output.step("Linked list");
    let mut linked: LinkedList<Person> = people::roster(config.demo.people_count)
        .into_iter()
        .collect();
    linked.push_front(Person::new("NewPersonFirst", 30));
    linked.push_back(Person::new("NewPersonLast", 25));
    if let Some(first) = linked.front() {
        output.info(&format!("LinkedList first: {}", first.name));
    }
    if let Some(last) = linked.back() {
        output.info(&format!("LinkedList last: {}", last.name));
    }

    Ok(())
}
